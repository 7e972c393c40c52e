//! Offline reasoning: no external service, every call is unavailable.

use async_trait::async_trait;

use crate::domain::insight::{ConversationSummary, IntentAnalysis, LanguageAnalysis};
use crate::domain::risk::{RiskAssessment, RiskSignals};
use crate::ports::{ReasoningCollaborator, ReasoningError};

/// Collaborator used when no reasoning service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineReasoning;

#[async_trait]
impl ReasoningCollaborator for OfflineReasoning {
    async fn summarize(&self, _conversation: &str) -> Result<ConversationSummary, ReasoningError> {
        Err(ReasoningError::NotConfigured)
    }

    async fn synthesize_risk(
        &self,
        _signals: &RiskSignals,
        _summary: &ConversationSummary,
    ) -> Result<RiskAssessment, ReasoningError> {
        Err(ReasoningError::NotConfigured)
    }

    async fn classify_intent(&self, _conversation: &str) -> Result<IntentAnalysis, ReasoningError> {
        Err(ReasoningError::NotConfigured)
    }

    async fn detect_language(&self, _conversation: &str) -> Result<LanguageAnalysis, ReasoningError> {
        Err(ReasoningError::NotConfigured)
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_call_is_not_configured() {
        let reasoning = OfflineReasoning;
        assert_eq!(reasoning.summarize("x").await, Err(ReasoningError::NotConfigured));
        assert_eq!(
            reasoning
                .synthesize_risk(&RiskSignals::default(), &ConversationSummary::fallback())
                .await,
            Err(ReasoningError::NotConfigured)
        );
        assert_eq!(reasoning.classify_intent("x").await, Err(ReasoningError::NotConfigured));
        assert_eq!(reasoning.detect_language("x").await, Err(ReasoningError::NotConfigured));
    }
}
