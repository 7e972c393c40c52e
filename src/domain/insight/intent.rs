//! Customer intent and the keyword fallback classifier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{contains_term, fold_case};
use crate::domain::risk::ResolutionStatus;

const CHURN_TERMS: &[&str] = &["cancel", "close account", "switching", "leaving", "competitor"];
const URGENCY_TERMS: &[&str] = &["urgent", "immediately", "asap", "emergency", "critical"];

/// Primary reason the customer got in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    BillingIssue,
    TechnicalSupport,
    AccountInquiry,
    Complaint,
    Cancellation,
    ProductQuestion,
    ServiceRequest,
    RefundRequest,
    GeneralInquiry,
}

/// How pressing the customer's request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Intent classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub primary_intent: Intent,
    #[serde(default)]
    pub secondary_intents: Vec<String>,
    #[serde(default)]
    pub resolution_status: ResolutionStatus,
    #[serde(default)]
    pub churn_intent_detected: bool,
    #[serde(default)]
    pub churn_statement: Option<String>,
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
}

/// Keyword rules for intent.
pub struct IntentClassifier;

impl IntentClassifier {
    /// Classifies by keyword presence; the first matching rule wins.
    ///
    /// refund / money back, then technical / not working, then cancel,
    /// then bill / charge, else general inquiry. Resolution is always
    /// `unresolved` since keywords cannot tell.
    pub fn classify(conversation: &str) -> IntentAnalysis {
        let folded = fold_case(conversation);
        let has = |terms: &[&str]| terms.iter().any(|t| contains_term(&folded, t));

        let primary_intent = if has(&["refund", "money back"]) {
            Intent::RefundRequest
        } else if has(&["technical", "not working"]) {
            Intent::TechnicalSupport
        } else if has(&["cancel"]) {
            Intent::Cancellation
        } else if has(&["bill", "charge"]) {
            Intent::BillingIssue
        } else {
            Intent::GeneralInquiry
        };

        IntentAnalysis {
            primary_intent,
            secondary_intents: Vec::new(),
            resolution_status: ResolutionStatus::Unresolved,
            churn_intent_detected: has(CHURN_TERMS),
            churn_statement: None,
            urgency_level: if has(URGENCY_TERMS) {
                UrgencyLevel::High
            } else {
                UrgencyLevel::Medium
            },
        }
    }
}
