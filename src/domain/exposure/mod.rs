//! Exposure Module - Sensitive-data exposure scanning.
//!
//! Patterns are matched with the same substring-then-regex rule the
//! compliance engine uses.

mod catalog;
mod detector;

pub use catalog::{
    SensitiveDataCatalog, SensitiveDataDocument, SensitiveDataEntry, SensitiveDataType,
};
pub use detector::{Exposure, ExposureReport, ExposureRisk, SensitiveDataDetector};
