//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod analyze_conversation;

pub use analyze_conversation::{AnalyzeConversationCommand, AnalyzeConversationHandler};
