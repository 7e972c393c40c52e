//! Integration tests for the conversation analysis pipeline.
//!
//! These tests run the full handler against the shipped catalogs, against
//! catalogs written to a temporary directory, and against scripted
//! reasoning collaborators.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use callscope::adapters::{FileCatalogSource, MockReasoning, OfflineReasoning};
use callscope::application::{AnalyzeConversationCommand, AnalyzeConversationHandler, Catalogs};
use callscope::domain::compliance::{ChunkingConfig, ComplianceStatus};
use callscope::domain::conversation::DomainSelection;
use callscope::domain::exposure::ExposureRisk;
use callscope::domain::foundation::UnitScore;
use callscope::domain::insight::ConversationSummary;
use callscope::domain::report::ConversationReport;
use callscope::domain::risk::{
    EscalationPriority, ResolutionStatus, RiskAssessment, RiskLevel, RiskSource,
};
use callscope::domain::sentiment::{SentimentArc, ShiftDirection};
use callscope::ports::ReasoningCollaborator;

// =============================================================================
// Test Infrastructure
// =============================================================================

const OTP_CALL: &str = "\
Agent: Good morning, thank you for calling the bank. How can I help?
Customer: My debit card was blocked this morning.
Agent: I can help with that. Now please give me your OTP.
Customer: Okay, it is 482913.";

const POSITIVE: &str = "I love this, it is wonderful and excellent";
const NEGATIVE: &str = "I hate this, it is terrible and awful";

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

async fn shipped_catalogs() -> Catalogs {
    let source = FileCatalogSource::new(
        repo_path("policy_store"),
        repo_path("critical_data_store/sensitive_patterns.json"),
    );
    Catalogs::load(&source).await
}

fn handler_with(
    catalogs: Catalogs,
    reasoning: Arc<dyn ReasoningCollaborator>,
) -> AnalyzeConversationHandler {
    AnalyzeConversationHandler::new(
        catalogs,
        reasoning,
        ChunkingConfig::default(),
        Duration::from_secs(5),
    )
}

async fn analyze_offline(transcript: &str) -> ConversationReport {
    let handler = handler_with(shipped_catalogs().await, Arc::new(OfflineReasoning));
    handler
        .handle(AnalyzeConversationCommand::new(transcript, DomainSelection::Auto))
        .await
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn shipped_catalogs_load() {
    let catalogs = shipped_catalogs().await;

    assert!(catalogs.policies.has_domain("banking"));
    assert!(catalogs.policies.has_domain("telecom"));
    assert!(catalogs.policies.policy("BANK_SEC_3.2.1").is_some());
    assert!(catalogs.policies.policy("TELECOM_SLA_2.1.1").is_some());
    assert!(!catalogs.sensitive_data.is_empty());
}

#[tokio::test]
async fn otp_request_is_flagged_across_engines() {
    let report = analyze_offline(OTP_CALL).await;

    assert_eq!(report.domain.detected_domain, "banking");
    assert!(report.data_exposure.total_exposures >= 1);
    assert_ne!(report.data_exposure.risk_level, ExposureRisk::Safe);
    assert!(report.data_exposure.exposed_data_types.contains(&"OTP".to_string()));

    let violation = report
        .compliance
        .violations
        .iter()
        .find(|v| v.policy_id == "BANK_SEC_3.2.1")
        .expect("OTP policy violated");
    assert_eq!(violation.confidence, UnitScore::new(0.98));
    assert!(violation.detected_phrase.to_lowercase().contains("otp"));
    assert_eq!(report.compliance.compliance_status, ComplianceStatus::NonCompliant);

    assert!(matches!(report.risk.risk_level, RiskLevel::High | RiskLevel::Critical));
    assert!(report.risk.escalation_required);
    assert_eq!(report.risk_source, RiskSource::Deterministic);
    assert!(report.risk_flags.security_breach);

    let indicators = report.indicators;
    assert!(indicators.compliance_score < 1.0);
    assert!((indicators.compliance_score + indicators.compliance_risk - 1.0).abs() < 1e-9);
    assert_eq!(indicators.churn_risk, report.sentiment.frustration_level);
}

#[tokio::test]
async fn empty_conversation_reports_neutral_defaults() {
    let report = analyze_offline("").await;

    assert_eq!(report.utterance_count, 0);
    assert_eq!(report.domain.detected_domain, "unknown");
    assert!(report.sentiment.timeline.is_empty());
    assert_eq!(report.sentiment.customer_sentiment.arc, SentimentArc::Neutral);
    assert!(report.tone.tone_flags.is_empty());
    assert!(report.compliance.violations.is_empty());
    assert_eq!(report.data_exposure.total_exposures, 0);
    assert_eq!(report.risk.overall_risk_score.value(), 0.0);
    assert_eq!(report.risk.risk_level, RiskLevel::Low);
    assert!(!report.risk.escalation_required);

    assert_eq!(report.indicators.satisfaction_prediction, 1.0);
    assert_eq!(report.indicators.churn_risk_from_sentiment, 0.5);
    assert_eq!(report.indicators.compliance_score, 1.0);
    assert_eq!(report.indicators.agent_performance_risk, 0.0);
    assert_eq!(report.agent_performance.communication_clarity, 0.7);
}

#[tokio::test]
async fn repeated_runs_are_byte_identical() {
    let handler = handler_with(shipped_catalogs().await, Arc::new(OfflineReasoning));
    let command = AnalyzeConversationCommand::new(OTP_CALL, DomainSelection::Auto);

    let first = handler.handle(command.clone()).await.to_json_pretty().unwrap();
    let second = handler.handle(command).await.to_json_pretty().unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn alternating_customer_sentiment_is_fluctuating() {
    let transcript = [POSITIVE, NEGATIVE, POSITIVE, NEGATIVE, POSITIVE]
        .iter()
        .map(|line| format!("Agent: Let me check that.\nCustomer: {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    let report = analyze_offline(&transcript).await;
    let sentiment = &report.sentiment;

    assert_eq!(sentiment.customer_sentiment.arc, SentimentArc::Fluctuating);
    let points = &sentiment.emotional_turning_points;
    assert!(points.len() >= 4 && points.len() <= 5);
    assert!(points.iter().all(|p| p.magnitude >= 1.0));
    assert_eq!(points[0].shift_direction, ShiftDirection::Deteriorated);
    assert_eq!(points[1].shift_direction, ShiftDirection::Improved);
}

#[tokio::test]
async fn two_sentences_over_threshold_form_one_chunk() {
    let first = "I would like to understand why the monthly maintenance fee on my savings account increased without any notice last quarter.";
    let second = "Please explain the change in detail and tell me how I can avoid paying it going forward.";
    let transcript = format!("{first} {second}");
    assert!(transcript.chars().count() > 200);

    let report = analyze_offline(&transcript).await;

    assert_eq!(report.compliance.chunks_analyzed, 1);
}

#[tokio::test]
async fn explicit_domain_skips_detection() {
    let handler = handler_with(shipped_catalogs().await, Arc::new(OfflineReasoning));
    let report = handler
        .handle(AnalyzeConversationCommand::new(
            "Agent: You get guaranteed speed, it will never go down.\nCustomer: Great.",
            DomainSelection::parse("telecom"),
        ))
        .await;

    assert_eq!(report.domain.detected_domain, "telecom");
    assert_eq!(report.domain.detection_confidence, 1.0);
    assert!(report.compliance.has_violation("TELECOM_SLA_2.1.1"));
    assert!(report.risk_flags.unauthorized_commitment);
}

// =============================================================================
// Catalogs on disk
// =============================================================================

#[tokio::test]
async fn catalogs_from_temporary_directory() {
    let temp = TempDir::new().unwrap();
    let policies = temp.path().join("policies");
    std::fs::create_dir(&policies).unwrap();
    std::fs::write(
        policies.join("ecommerce.yaml"),
        "
policies:
  - id: ECOM_REF_1.1.1
    category: refunds
    text: Refund timelines must not be promised beyond the published policy.
    keywords: [instant refund]
    violation_patterns: ['refund (today|right now)']
    severity_if_violated: medium
",
    )
    .unwrap();
    std::fs::write(policies.join("notes.txt"), "not a catalog").unwrap();
    let sensitive = temp.path().join("sensitive.yaml");
    std::fs::write(
        &sensitive,
        "
critical_data_types:
  - type: Email
    patterns: ['[a-z]+@[a-z]+\\.com']
    severity: high
    description: Email address
",
    )
    .unwrap();

    let catalogs = Catalogs::load(&FileCatalogSource::new(&policies, &sensitive)).await;
    assert!(catalogs.policies.has_domain("ecommerce"));
    assert_eq!(catalogs.sensitive_data.len(), 1);

    let handler = handler_with(catalogs, Arc::new(OfflineReasoning));
    let report = handler
        .handle(AnalyzeConversationCommand::new(
            "Agent: I will process your refund today.\nCustomer: Thanks, mail me at jo@example.com",
            DomainSelection::parse("ecommerce"),
        ))
        .await;

    assert!(report.compliance.has_violation("ECOM_REF_1.1.1"));
    assert_eq!(report.compliance.violations[0].regulatory_basis, "N/A");
    assert_eq!(report.data_exposure.total_exposures, 1);
    assert_eq!(report.data_exposure.risk_level, ExposureRisk::High);
}

#[tokio::test]
async fn missing_catalogs_degrade_to_unknown_compliance() {
    let temp = TempDir::new().unwrap();
    let source = FileCatalogSource::new(temp.path().join("absent"), temp.path().join("absent.json"));
    let catalogs = Catalogs::load(&source).await;

    let handler = handler_with(catalogs, Arc::new(OfflineReasoning));
    let report = handler
        .handle(AnalyzeConversationCommand::new(OTP_CALL, DomainSelection::Auto))
        .await;

    assert_eq!(report.compliance.compliance_status, ComplianceStatus::Unknown);
    assert_eq!(report.data_exposure.total_exposures, 0);
    assert_eq!(report.data_exposure.risk_level, ExposureRisk::Safe);
}

// =============================================================================
// Reasoning collaborator
// =============================================================================

fn collaborator_verdict(action: &str) -> RiskAssessment {
    RiskAssessment {
        overall_risk_score: UnitScore::new(0.9),
        risk_level: RiskLevel::Critical,
        escalation_required: true,
        escalation_priority: EscalationPriority::Immediate,
        recommended_action: action.to_string(),
        risk_summary: "Agent solicited an OTP".to_string(),
    }
}

#[tokio::test]
async fn collaborator_results_are_used_when_available() {
    let verdict = collaborator_verdict("Block card and notify fraud team");
    let reasoning = MockReasoning::new()
        .with_summary(ConversationSummary {
            conversation_summary: "Customer's card was blocked; agent asked for an OTP".to_string(),
            resolution_status: ResolutionStatus::Resolved,
        })
        .with_risk(verdict.clone());
    let handler = handler_with(shipped_catalogs().await, Arc::new(reasoning));

    let report = handler
        .handle(AnalyzeConversationCommand::new(OTP_CALL, DomainSelection::Auto))
        .await;

    assert_eq!(report.risk, verdict);
    assert_eq!(report.risk_source, RiskSource::Collaborator);
    assert_eq!(report.summary.resolution_status, ResolutionStatus::Resolved);
    assert_eq!(report.agent_performance.issue_resolution, 1.0);
}

#[tokio::test]
async fn malformed_collaborator_verdict_falls_back() {
    let reasoning = MockReasoning::new().with_risk(collaborator_verdict(""));
    let handler = handler_with(shipped_catalogs().await, Arc::new(reasoning));

    let report = handler
        .handle(AnalyzeConversationCommand::new(OTP_CALL, DomainSelection::Auto))
        .await;

    assert_eq!(report.risk_source, RiskSource::Deterministic);
    assert!(!report.risk.recommended_action.is_empty());
}
