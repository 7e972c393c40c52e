//! Signals combined into a risk verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::compliance::ComplianceReport;
use crate::domain::exposure::ExposureReport;
use crate::domain::sentiment::SentimentReport;
use crate::domain::tone::{Tone, ToneReport};

/// Whether the customer's issue was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Resolved,
    Unresolved,
    Escalated,
    Pending,
    #[default]
    Unknown,
}

impl ResolutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStatus::Resolved => "resolved",
            ResolutionStatus::Unresolved => "unresolved",
            ResolutionStatus::Escalated => "escalated",
            ResolutionStatus::Pending => "pending",
            ResolutionStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine outputs reduced to what risk synthesis reads.
///
/// `Default` is the all-quiet signal set: no violations, neutral
/// sentiment, no exposures, unknown resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSignals {
    pub critical_violations: usize,
    pub high_violations: usize,
    pub total_violations: usize,
    pub severity_score: f64,
    pub customer_overall_sentiment: f64,
    pub frustration_level: f64,
    pub dominant_tone: Tone,
    pub tone_consistency: f64,
    pub exposure_count: usize,
    pub resolution_status: ResolutionStatus,
}

impl Default for RiskSignals {
    fn default() -> Self {
        Self {
            critical_violations: 0,
            high_violations: 0,
            total_violations: 0,
            severity_score: 0.0,
            customer_overall_sentiment: 0.0,
            frustration_level: 0.0,
            dominant_tone: Tone::Neutral,
            tone_consistency: 1.0,
            exposure_count: 0,
            resolution_status: ResolutionStatus::Unknown,
        }
    }
}

impl RiskSignals {
    pub fn collect(
        compliance: &ComplianceReport,
        sentiment: &SentimentReport,
        tone: &ToneReport,
        exposure: &ExposureReport,
        resolution_status: ResolutionStatus,
    ) -> Self {
        Self {
            critical_violations: compliance.critical_count,
            high_violations: compliance.high_count,
            total_violations: compliance.total_violations,
            severity_score: compliance.severity_score,
            customer_overall_sentiment: sentiment.customer_sentiment.overall_score,
            frustration_level: sentiment.frustration_level,
            dominant_tone: tone.dominant_tone,
            tone_consistency: tone.tone_consistency,
            exposure_count: exposure.total_exposures,
            resolution_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_from_default_reports_matches_default_signals() {
        let signals = RiskSignals::collect(
            &ComplianceReport::default(),
            &SentimentReport::default(),
            &ToneReport::default(),
            &ExposureReport::default(),
            ResolutionStatus::Unknown,
        );
        assert_eq!(signals, RiskSignals::default());
    }

    #[test]
    fn resolution_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ResolutionStatus::Unresolved).unwrap(),
            "\"unresolved\""
        );
    }
}
