//! Conversation summary.

use serde::{Deserialize, Serialize};

use crate::domain::risk::ResolutionStatus;

/// Summary used when no summary could be produced.
pub const FALLBACK_SUMMARY: &str = "Conversation analyzed";

/// Short narrative of the conversation and whether it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_summary: String,
    #[serde(default)]
    pub resolution_status: ResolutionStatus,
}

impl ConversationSummary {
    pub fn fallback() -> Self {
        Self {
            conversation_summary: FALLBACK_SUMMARY.to_string(),
            resolution_status: ResolutionStatus::Unknown,
        }
    }
}

impl Default for ConversationSummary {
    fn default() -> Self {
        Self::fallback()
    }
}
