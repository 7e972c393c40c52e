//! Risk verdict shared by the collaborator and the deterministic path.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{UnitScore, ValidationError};

/// Four-level risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// critical > 0.8, high > 0.6, medium > 0.3, else low.
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            RiskLevel::Critical
        } else if score > 0.6 {
            RiskLevel::High
        } else if score > 0.3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly an escalation should happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscalationPriority {
    #[default]
    Routine,
    Urgent,
    Immediate,
}

impl EscalationPriority {
    /// immediate > 0.8, urgent > 0.6, else routine.
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            EscalationPriority::Immediate
        } else if score > 0.6 {
            EscalationPriority::Urgent
        } else {
            EscalationPriority::Routine
        }
    }
}

/// Which path produced a risk verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSource {
    Collaborator,
    Deterministic,
}

/// Overall risk verdict.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk_score: UnitScore,
    pub risk_level: RiskLevel,
    pub escalation_required: bool,
    pub escalation_priority: EscalationPriority,
    pub recommended_action: String,
    pub risk_summary: String,
}

impl RiskAssessment {
    /// Checks a verdict received from outside the crate.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the score is outside [0, 1] or NaN
    /// - `EmptyField` if no action is recommended
    pub fn validate(&self) -> Result<(), ValidationError> {
        UnitScore::try_new("overall_risk_score", self.overall_risk_score.value())?;
        if self.recommended_action.trim().is_empty() {
            return Err(ValidationError::empty_field("recommended_action"));
        }
        Ok(())
    }
}
