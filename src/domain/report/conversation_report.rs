//! Full analysis output for one conversation.

use serde::{Deserialize, Serialize};

use super::agent_performance::AgentPerformance;
use super::indicators::OutcomeIndicators;
use crate::domain::compliance::ComplianceReport;
use crate::domain::conversation::DomainDetection;
use crate::domain::exposure::ExposureReport;
use crate::domain::insight::{ConversationSummary, IntentAnalysis, LanguageAnalysis};
use crate::domain::risk::{RiskAssessment, RiskFlags, RiskSource};
use crate::domain::sentiment::SentimentReport;
use crate::domain::tone::ToneReport;

/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationReport {
    pub domain: DomainDetection,
    pub speakers_detected: usize,
    pub utterance_count: usize,
    pub summary: ConversationSummary,
    pub language: LanguageAnalysis,
    pub intent: IntentAnalysis,
    pub sentiment: SentimentReport,
    pub tone: ToneReport,
    pub compliance: ComplianceReport,
    pub data_exposure: ExposureReport,
    pub risk: RiskAssessment,
    pub risk_source: RiskSource,
    pub risk_flags: RiskFlags,
    pub indicators: OutcomeIndicators,
    pub agent_performance: AgentPerformance,
}

impl ConversationReport {
    /// Pretty JSON for display.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
