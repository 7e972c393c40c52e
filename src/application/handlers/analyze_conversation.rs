//! AnalyzeConversationHandler - Runs the full analysis for one transcript.
//!
//! The four engines run concurrently on the blocking pool while the
//! collaborator supplies summary, intent and language. Risk synthesis waits
//! for both; every collaborator step falls back to a deterministic value.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinError;
use tracing::{debug, info, warn};

use crate::application::Catalogs;
use crate::domain::compliance::{ChunkingConfig, ComplianceReport, PolicyRetrievalEngine};
use crate::domain::conversation::{
    speaker_count, ConversationParser, DomainDetector, DomainSelection, SpeakerRoles, Utterance,
};
use crate::domain::exposure::{ExposureReport, SensitiveDataDetector};
use crate::domain::insight::{
    ConversationSummary, IntentAnalysis, IntentClassifier, LanguageAnalysis,
};
use crate::domain::report::{AgentPerformance, ConversationReport, OutcomeIndicators};
use crate::domain::risk::{RiskAggregator, RiskFlags, RiskSignals};
use crate::domain::sentiment::{SentimentEngine, SentimentReport};
use crate::domain::tone::{ToneEngine, ToneReport};
use crate::ports::{CollaboratorResult, ReasoningCollaborator, ReasoningError};

/// Command to analyze one transcript.
#[derive(Debug, Clone)]
pub struct AnalyzeConversationCommand {
    pub transcript: String,
    pub domain: DomainSelection,
}

impl AnalyzeConversationCommand {
    pub fn new(transcript: impl Into<String>, domain: DomainSelection) -> Self {
        Self {
            transcript: transcript.into(),
            domain,
        }
    }
}

/// Outputs of the four independent engines.
#[derive(Debug, Clone, Default)]
struct EngineOutputs {
    sentiment: SentimentReport,
    tone: ToneReport,
    compliance: ComplianceReport,
    exposure: ExposureReport,
}

/// Collaborator outputs available before risk synthesis.
#[derive(Debug, Clone)]
struct Insights {
    summary: ConversationSummary,
    intent: IntentAnalysis,
    language: LanguageAnalysis,
}

/// Handler for conversation analysis.
pub struct AnalyzeConversationHandler {
    catalogs: Catalogs,
    reasoning: Arc<dyn ReasoningCollaborator>,
    chunking: ChunkingConfig,
    reasoning_timeout: Duration,
}

impl AnalyzeConversationHandler {
    pub fn new(
        catalogs: Catalogs,
        reasoning: Arc<dyn ReasoningCollaborator>,
        chunking: ChunkingConfig,
        reasoning_timeout: Duration,
    ) -> Self {
        Self {
            catalogs,
            reasoning,
            chunking,
            reasoning_timeout,
        }
    }

    /// Analyzes the transcript. Never fails: degraded steps yield their defaults.
    pub async fn handle(&self, cmd: AnalyzeConversationCommand) -> ConversationReport {
        // 1. Parse and resolve conversation context
        let utterances = ConversationParser::parse(&cmd.transcript);
        let roles = SpeakerRoles::resolve(&utterances);
        let domain = DomainDetector::resolve(&cmd.domain, &cmd.transcript);
        debug!(
            utterances = utterances.len(),
            customer = %roles.customer,
            agent = %roles.agent,
            domain = %domain.detected_domain,
            "Conversation parsed"
        );

        let speakers_detected = speaker_count(&utterances);
        let utterance_count = utterances.len();
        let transcript: Arc<str> = Arc::from(cmd.transcript.as_str());

        // 2. Engines and collaborator insights in parallel
        let (engines, insights) = tokio::join!(
            self.run_engines(
                Arc::new(utterances),
                roles,
                Arc::clone(&transcript),
                domain.detected_domain.clone(),
            ),
            self.gather_insights(&transcript),
        );

        // 3. Risk: collaborator verdict or deterministic fallback
        let resolution = insights.summary.resolution_status;
        let signals = RiskSignals::collect(
            &engines.compliance,
            &engines.sentiment,
            &engines.tone,
            &engines.exposure,
            resolution,
        );
        let risk_result = self
            .call(
                "synthesize_risk",
                self.reasoning.synthesize_risk(&signals, &insights.summary),
            )
            .await;
        let (risk, risk_source) = RiskAggregator::resolve(risk_result, &signals);

        // 4. Derived sections
        let risk_flags = RiskFlags::derive(
            &engines.compliance,
            &engines.sentiment,
            &engines.tone,
            &engines.exposure,
            resolution,
            insights.language.language_mismatch,
        );
        let agent_performance = AgentPerformance::evaluate(
            &engines.sentiment,
            &engines.tone,
            &engines.compliance,
            resolution,
        );
        let indicators =
            OutcomeIndicators::derive(&engines.sentiment, &engines.tone, &engines.compliance);

        info!(
            domain = %domain.detected_domain,
            risk_level = risk.risk_level.as_str(),
            risk_score = risk.overall_risk_score.value(),
            risk_source = ?risk_source,
            violations = engines.compliance.total_violations,
            exposures = engines.exposure.total_exposures,
            flags_raised = risk_flags.raised(),
            "Conversation analyzed"
        );

        ConversationReport {
            domain,
            speakers_detected,
            utterance_count,
            summary: insights.summary,
            language: insights.language,
            intent: insights.intent,
            sentiment: engines.sentiment,
            tone: engines.tone,
            compliance: engines.compliance,
            data_exposure: engines.exposure,
            risk,
            risk_source,
            risk_flags,
            indicators,
            agent_performance,
        }
    }

    /// Runs the four engines as independent blocking tasks and joins them.
    async fn run_engines(
        &self,
        utterances: Arc<Vec<Utterance>>,
        roles: SpeakerRoles,
        transcript: Arc<str>,
        domain: String,
    ) -> EngineOutputs {
        let sentiment = {
            let utterances = Arc::clone(&utterances);
            let roles = roles.clone();
            tokio::task::spawn_blocking(move || SentimentEngine::analyze(&utterances, &roles))
        };
        let tone = tokio::task::spawn_blocking(move || ToneEngine::analyze(&utterances, &roles));
        let compliance = {
            let catalog = Arc::clone(&self.catalogs.policies);
            let transcript = Arc::clone(&transcript);
            let chunking = self.chunking;
            tokio::task::spawn_blocking(move || {
                PolicyRetrievalEngine::detect(&catalog, &transcript, Some(domain.as_str()), &chunking)
            })
        };
        let exposure = {
            let catalog = Arc::clone(&self.catalogs.sensitive_data);
            tokio::task::spawn_blocking(move || SensitiveDataDetector::detect(&catalog, &transcript))
        };

        let (sentiment, tone, compliance, exposure) =
            tokio::join!(sentiment, tone, compliance, exposure);

        let outputs = EngineOutputs {
            sentiment: engine_output("sentiment", sentiment),
            tone: engine_output("tone", tone),
            compliance: engine_output("compliance", compliance),
            exposure: engine_output("exposure", exposure),
        };
        debug!(
            turning_points = outputs.sentiment.emotional_turning_points.len(),
            tone_flags = outputs.tone.tone_flags.len(),
            chunks = outputs.compliance.chunks_analyzed,
            violations = outputs.compliance.total_violations,
            exposures = outputs.exposure.total_exposures,
            "Engines finished"
        );
        outputs
    }

    /// Summary, intent and language, each with its deterministic fallback.
    async fn gather_insights(&self, transcript: &str) -> Insights {
        let (summary, intent, language) = futures::future::join3(
            self.call("summarize", self.reasoning.summarize(transcript)),
            self.call("classify_intent", self.reasoning.classify_intent(transcript)),
            self.call("detect_language", self.reasoning.detect_language(transcript)),
        )
        .await;

        Insights {
            summary: summary.unwrap_or_else(|reason| {
                log_fallback("summarize", &reason);
                ConversationSummary::fallback()
            }),
            intent: intent.unwrap_or_else(|reason| {
                log_fallback("classify_intent", &reason);
                IntentClassifier::classify(transcript)
            }),
            language: language.unwrap_or_else(|reason| {
                log_fallback("detect_language", &reason);
                LanguageAnalysis::fallback()
            }),
        }
    }

    /// Bounds a collaborator call by the configured timeout.
    async fn call<T>(
        &self,
        step: &str,
        fut: impl Future<Output = Result<T, ReasoningError>>,
    ) -> CollaboratorResult<T> {
        debug!(collaborator = self.reasoning.name(), step, "Calling reasoning collaborator");
        match tokio::time::timeout(self.reasoning_timeout, fut).await {
            Ok(result) => result.into(),
            Err(_) => CollaboratorResult::Unavailable(ReasoningError::Timeout {
                timeout_secs: self.reasoning_timeout.as_secs(),
            }),
        }
    }
}

/// The task's output, or the engine's default when the task panicked.
fn engine_output<T: Default>(engine: &str, result: Result<T, JoinError>) -> T {
    result.unwrap_or_else(|e| {
        warn!(engine, error = %e, "Engine task failed, using default output");
        T::default()
    })
}

fn log_fallback(step: &str, reason: &ReasoningError) {
    match reason {
        ReasoningError::NotConfigured => debug!(step, "No reasoning service configured"),
        reason => warn!(step, reason = %reason, "Reasoning step unavailable, using fallback"),
    }
}
