//! Reasoning Collaborator Port - External reasoning steps.
//!
//! Summarization, risk synthesis, intent classification and language
//! detection are delegated to an external reasoning service. Every call
//! may fail; callers convert the outcome into a `CollaboratorResult` and
//! fall back to deterministic values on `Unavailable`.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl ReasoningCollaborator for Offline {
//!     async fn summarize(&self, _: &str) -> Result<ConversationSummary, ReasoningError> {
//!         Err(ReasoningError::NotConfigured)
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;

use crate::domain::insight::{ConversationSummary, IntentAnalysis, LanguageAnalysis};
use crate::domain::risk::{RiskAssessment, RiskSignals};

/// Port for the external reasoning service.
#[async_trait]
pub trait ReasoningCollaborator: Send + Sync {
    /// Summarizes the conversation and judges whether it was resolved.
    async fn summarize(&self, conversation: &str) -> Result<ConversationSummary, ReasoningError>;

    /// Produces the primary risk verdict from engine signals.
    async fn synthesize_risk(
        &self,
        signals: &RiskSignals,
        summary: &ConversationSummary,
    ) -> Result<RiskAssessment, ReasoningError>;

    /// Classifies the customer's intent.
    async fn classify_intent(&self, conversation: &str) -> Result<IntentAnalysis, ReasoningError>;

    /// Detects the languages spoken.
    async fn detect_language(&self, conversation: &str) -> Result<LanguageAnalysis, ReasoningError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Reasons a collaborator call produced nothing usable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReasoningError {
    /// Service unreachable or refused the call.
    #[error("reasoning service unavailable: {0}")]
    Unavailable(String),

    /// Call exceeded the configured timeout.
    #[error("reasoning call timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Response could not be used.
    #[error("malformed reasoning response: {0}")]
    Malformed(String),

    /// No reasoning service is configured.
    #[error("reasoning service not configured")]
    NotConfigured,
}

impl ReasoningError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Outcome of a collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum CollaboratorResult<T> {
    Success(T),
    Unavailable(ReasoningError),
}

impl<T> CollaboratorResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CollaboratorResult::Success(_))
    }

    /// The payload, or `fallback()` when unavailable.
    pub fn unwrap_or_else(self, fallback: impl FnOnce(ReasoningError) -> T) -> T {
        match self {
            CollaboratorResult::Success(value) => value,
            CollaboratorResult::Unavailable(reason) => fallback(reason),
        }
    }
}

impl<T> From<Result<T, ReasoningError>> for CollaboratorResult<T> {
    fn from(result: Result<T, ReasoningError>) -> Self {
        match result {
            Ok(value) => CollaboratorResult::Success(value),
            Err(reason) => CollaboratorResult::Unavailable(reason),
        }
    }
}
