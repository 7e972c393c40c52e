//! Insight Module - Outputs normally supplied by the reasoning collaborator.
//!
//! Each type carries the deterministic value used when the collaborator
//! is unavailable.

mod intent;
mod language;
mod summary;

pub use intent::{Intent, IntentAnalysis, IntentClassifier, UrgencyLevel};
pub use language::LanguageAnalysis;
pub use summary::{ConversationSummary, FALLBACK_SUMMARY};
