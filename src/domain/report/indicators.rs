//! Secondary readings derived from engine outputs.

use serde::{Deserialize, Serialize};

use crate::domain::compliance::ComplianceReport;
use crate::domain::sentiment::SentimentReport;
use crate::domain::tone::ToneReport;

/// Satisfaction, churn and risk breakdown figures.
///
/// Every field is a closed-form function of one engine output, so the
/// section is identical whichever path produced the risk verdict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeIndicators {
    /// max(0, 1 + customer overall sentiment)
    pub satisfaction_prediction: f64,
    /// clamp01(0.5 + |customer overall sentiment|)
    pub churn_risk_from_sentiment: f64,
    /// 1 − severity_score
    pub compliance_score: f64,
    /// severity_score
    pub compliance_risk: f64,
    /// clamp01(0.5 + |customer overall sentiment|)
    pub customer_satisfaction_risk: f64,
    /// Frustration level.
    pub churn_risk: f64,
    /// 1 − tone_consistency
    pub agent_performance_risk: f64,
}

impl OutcomeIndicators {
    pub fn derive(
        sentiment: &SentimentReport,
        tone: &ToneReport,
        compliance: &ComplianceReport,
    ) -> Self {
        let overall = sentiment.customer_sentiment.overall_score;
        let sentiment_risk = (0.5 + overall.abs()).clamp(0.0, 1.0);

        Self {
            satisfaction_prediction: (1.0 + overall).max(0.0),
            churn_risk_from_sentiment: sentiment_risk,
            compliance_score: 1.0 - compliance.severity_score,
            compliance_risk: compliance.severity_score,
            customer_satisfaction_risk: sentiment_risk,
            churn_risk: sentiment.frustration_level,
            agent_performance_risk: 1.0 - tone.tone_consistency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sentiment(overall: f64, frustration: f64) -> SentimentReport {
        let mut report = SentimentReport::default();
        report.customer_sentiment.overall_score = overall;
        report.frustration_level = frustration;
        report
    }

    fn derive(overall: f64) -> OutcomeIndicators {
        OutcomeIndicators::derive(
            &sentiment(overall, 0.0),
            &ToneReport::default(),
            &ComplianceReport::default(),
        )
    }

    #[test]
    fn satisfaction_follows_customer_sentiment() {
        assert!(approx(derive(0.0).satisfaction_prediction, 1.0));
        assert!(approx(derive(-0.4).satisfaction_prediction, 0.6));
        assert!(approx(derive(0.5).satisfaction_prediction, 1.5));
        assert_eq!(derive(-1.0).satisfaction_prediction, 0.0);
    }

    #[test]
    fn sentiment_churn_grows_with_magnitude_and_is_capped() {
        let neutral = derive(0.0);
        assert!(approx(neutral.churn_risk_from_sentiment, 0.5));
        assert!(approx(neutral.customer_satisfaction_risk, 0.5));

        let negative = derive(-0.3);
        assert!(approx(negative.churn_risk_from_sentiment, 0.8));
        assert!(approx(negative.customer_satisfaction_risk, 0.8));

        let extreme = derive(0.9);
        assert_eq!(extreme.churn_risk_from_sentiment, 1.0);
        assert_eq!(extreme.customer_satisfaction_risk, 1.0);
    }

    #[test]
    fn compliance_score_mirrors_severity() {
        let mut compliance = ComplianceReport::default();
        compliance.severity_score = 0.7;
        let indicators = OutcomeIndicators::derive(
            &SentimentReport::default(),
            &ToneReport::default(),
            &compliance,
        );
        assert!(approx(indicators.compliance_score, 0.3));
        assert!(approx(indicators.compliance_risk, 0.7));

        assert!(approx(derive(0.0).compliance_score, 1.0));
        assert_eq!(derive(0.0).compliance_risk, 0.0);
    }

    #[test]
    fn churn_risk_is_frustration_level() {
        let indicators = OutcomeIndicators::derive(
            &sentiment(-0.2, 0.65),
            &ToneReport::default(),
            &ComplianceReport::default(),
        );
        assert!(approx(indicators.churn_risk, 0.65));
    }

    #[test]
    fn agent_risk_is_tone_inconsistency() {
        assert_eq!(derive(0.0).agent_performance_risk, 0.0);

        let mut tone = ToneReport::default();
        tone.tone_consistency = 0.75;
        let indicators =
            OutcomeIndicators::derive(&SentimentReport::default(), &tone, &ComplianceReport::default());
        assert!(approx(indicators.agent_performance_risk, 0.25));
    }
}
