//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - Filesystem and in-memory catalog sources
//! - `reasoning` - Offline and scripted reasoning collaborators

pub mod catalog;
pub mod reasoning;

pub use catalog::{FileCatalogSource, InMemoryCatalogSource};
pub use reasoning::{MockReasoning, OfflineReasoning};
