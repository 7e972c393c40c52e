//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, error types and small text helpers
//! that form the vocabulary of the analysis engines.

mod errors;
mod score;
mod severity;
mod text;

pub use errors::ValidationError;
pub use score::{UnitScore, Valence};
pub use severity::Severity;
pub use text::{contains_term, count_occurrences, fold_case, truncate_chars};
