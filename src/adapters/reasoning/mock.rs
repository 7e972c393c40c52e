//! Mock reasoning collaborator for testing.
//!
//! Each step returns a scripted result; unscripted steps report
//! `NotConfigured`. An optional delay simulates a slow service for
//! timeout tests.
//!
//! # Example
//!
//! ```ignore
//! let reasoning = MockReasoning::new()
//!     .with_summary(ConversationSummary { .. })
//!     .with_risk_error(ReasoningError::unavailable("503"))
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::insight::{ConversationSummary, IntentAnalysis, LanguageAnalysis};
use crate::domain::risk::{RiskAssessment, RiskSignals};
use crate::ports::{ReasoningCollaborator, ReasoningError};

type Scripted<T> = Option<Result<T, ReasoningError>>;

/// Scripted reasoning collaborator.
#[derive(Debug, Clone, Default)]
pub struct MockReasoning {
    summary: Scripted<ConversationSummary>,
    risk: Scripted<RiskAssessment>,
    intent: Scripted<IntentAnalysis>,
    language: Scripted<LanguageAnalysis>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl MockReasoning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: ConversationSummary) -> Self {
        self.summary = Some(Ok(summary));
        self
    }

    pub fn with_risk(mut self, risk: RiskAssessment) -> Self {
        self.risk = Some(Ok(risk));
        self
    }

    pub fn with_risk_error(mut self, error: ReasoningError) -> Self {
        self.risk = Some(Err(error));
        self
    }

    pub fn with_intent(mut self, intent: IntentAnalysis) -> Self {
        self.intent = Some(Ok(intent));
        self
    }

    pub fn with_language(mut self, language: LanguageAnalysis) -> Self {
        self.language = Some(Ok(language));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls made across all steps.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond<T: Clone>(&self, scripted: &Scripted<T>) -> Result<T, ReasoningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        scripted.clone().unwrap_or(Err(ReasoningError::NotConfigured))
    }
}

#[async_trait]
impl ReasoningCollaborator for MockReasoning {
    async fn summarize(&self, _conversation: &str) -> Result<ConversationSummary, ReasoningError> {
        self.respond(&self.summary).await
    }

    async fn synthesize_risk(
        &self,
        _signals: &RiskSignals,
        _summary: &ConversationSummary,
    ) -> Result<RiskAssessment, ReasoningError> {
        self.respond(&self.risk).await
    }

    async fn classify_intent(&self, _conversation: &str) -> Result<IntentAnalysis, ReasoningError> {
        self.respond(&self.intent).await
    }

    async fn detect_language(&self, _conversation: &str) -> Result<LanguageAnalysis, ReasoningError> {
        self.respond(&self.language).await
    }

    fn name(&self) -> &str {
        "mock"
    }
}
