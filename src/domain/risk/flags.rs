//! Boolean risk flags derived from engine outputs.

use serde::{Deserialize, Serialize};

use super::signals::ResolutionStatus;
use crate::domain::compliance::ComplianceReport;
use crate::domain::exposure::ExposureReport;
use crate::domain::sentiment::SentimentReport;
use crate::domain::tone::{Tone, ToneReport};

/// Policies whose breach means the agent promised something they couldn't.
pub const COMMITMENT_POLICY_IDS: &[&str] = &["BANK_LOAN_7.1.1", "TELECOM_SLA_2.1.1"];

const ANGRY_FRUSTRATION: f64 = 0.6;
const CHURN_FRUSTRATION: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskFlags {
    pub security_breach: bool,
    pub unauthorized_commitment: bool,
    pub customer_angry: bool,
    pub dismissive_agent: bool,
    pub issue_unresolved: bool,
    pub potential_churn: bool,
    pub language_mismatch: bool,
}

impl RiskFlags {
    pub fn derive(
        compliance: &ComplianceReport,
        sentiment: &SentimentReport,
        tone: &ToneReport,
        exposure: &ExposureReport,
        resolution: ResolutionStatus,
        language_mismatch: bool,
    ) -> Self {
        Self {
            security_breach: exposure.total_exposures > 0,
            unauthorized_commitment: COMMITMENT_POLICY_IDS
                .iter()
                .any(|id| compliance.has_violation(id)),
            customer_angry: sentiment.frustration_level > ANGRY_FRUSTRATION,
            dismissive_agent: tone.has_tone(Tone::Dismissive),
            issue_unresolved: resolution == ResolutionStatus::Unresolved,
            potential_churn: sentiment.frustration_level > CHURN_FRUSTRATION,
            language_mismatch,
        }
    }

    /// Number of raised flags.
    pub fn raised(&self) -> usize {
        [
            self.security_breach,
            self.unauthorized_commitment,
            self.customer_angry,
            self.dismissive_agent,
            self.issue_unresolved,
            self.potential_churn,
            self.language_mismatch,
        ]
        .iter()
        .filter(|f| **f)
        .count()
    }
}
