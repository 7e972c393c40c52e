//! Agent performance scorecard.

use serde::{Deserialize, Serialize};

use crate::domain::compliance::ComplianceReport;
use crate::domain::risk::ResolutionStatus;
use crate::domain::sentiment::SentimentReport;
use crate::domain::tone::{Tone, ToneReport};

const MAX_COACHING_AREAS: usize = 3;
const MAX_STRENGTHS: usize = 2;
const CONSISTENT_TONE: f64 = 0.7;

/// Clarity is not measured yet and is reported at this fixed value.
pub const COMMUNICATION_CLARITY: f64 = 0.7;

/// Letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// ≥0.9 A, ≥0.8 B, ≥0.7 C, ≥0.6 D, else F.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Grade::A
        } else if score >= 0.8 {
            Grade::B
        } else if score >= 0.7 {
            Grade::C
        } else if score >= 0.6 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub professionalism: f64,
    pub empathy: f64,
    pub policy_adherence: f64,
    pub issue_resolution: f64,
    pub communication_clarity: f64,
    pub overall_score: f64,
    pub grade: Grade,
    pub coaching_areas: Vec<String>,
    pub strengths: Vec<String>,
}

impl AgentPerformance {
    /// Scores the agent from engine outputs.
    ///
    /// The grade reads only professionalism and policy adherence.
    pub fn evaluate(
        sentiment: &SentimentReport,
        tone: &ToneReport,
        compliance: &ComplianceReport,
        resolution: ResolutionStatus,
    ) -> Self {
        let professionalism = tone.tone_consistency;
        let empathy = sentiment.agent_tone.empathy_score;
        let policy_adherence = 1.0 - compliance.severity_score;
        let issue_resolution = if resolution == ResolutionStatus::Resolved {
            1.0
        } else {
            0.0
        };

        let mut coaching_areas = Vec::new();
        if tone.has_tone(Tone::Dismissive) {
            coaching_areas.push("Improve customer empathy".to_string());
        }
        if compliance.critical_count > 0 {
            coaching_areas.push("Review compliance policies".to_string());
        }
        if professionalism <= CONSISTENT_TONE {
            coaching_areas.push("Maintain consistent professional tone".to_string());
        }
        coaching_areas.truncate(MAX_COACHING_AREAS);

        let mut strengths = Vec::new();
        if compliance.violations.is_empty() {
            strengths.push("Excellent compliance adherence".to_string());
        }
        if professionalism > CONSISTENT_TONE {
            strengths.push("Consistent professional tone".to_string());
        }
        strengths.truncate(MAX_STRENGTHS);

        Self {
            professionalism,
            empathy,
            policy_adherence,
            issue_resolution,
            communication_clarity: COMMUNICATION_CLARITY,
            overall_score: (professionalism + empathy + policy_adherence + issue_resolution) / 4.0,
            grade: Grade::from_score((professionalism + policy_adherence) / 2.0),
            coaching_areas,
            strengths,
        }
    }
}
