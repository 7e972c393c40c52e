//! Risk Aggregator - Deterministic risk verdict and collaborator resolution.

use tracing::{debug, warn};

use super::assessment::{EscalationPriority, RiskAssessment, RiskLevel, RiskSource};
use super::signals::RiskSignals;
use crate::domain::foundation::UnitScore;
use crate::ports::{CollaboratorResult, ReasoningError};

/// Action recommended above a 0.7 risk score.
pub const ESCALATE_ACTION: &str = "Escalate immediately for compliance review";

/// Action recommended otherwise.
pub const MONITOR_ACTION: &str = "Monitor conversation closely";

const SENTIMENT_PENALTY: f64 = 0.2;

/// Combines engine signals into a risk verdict.
pub struct RiskAggregator;

impl RiskAggregator {
    /// Computes the deterministic verdict.
    ///
    /// # Algorithm
    /// score = clamp01(
    ///     min(critical × 0.3, 0.5) + min(high × 0.1, 0.3)
    ///     + (0.2 if customer sentiment < -0.5)
    ///     + min(exposures × 0.2, 0.4))
    ///
    /// Terms accumulate left to right in this order and the thresholds
    /// compare the unrounded sum.
    pub fn compute(signals: &RiskSignals) -> RiskAssessment {
        let mut score = 0.0;
        score += (signals.critical_violations as f64 * 0.3).min(0.5);
        score += (signals.high_violations as f64 * 0.1).min(0.3);
        if signals.customer_overall_sentiment < -0.5 {
            score += SENTIMENT_PENALTY;
        }
        score += (signals.exposure_count as f64 * 0.2).min(0.4);
        let score = UnitScore::new(score);
        let value = score.value();

        RiskAssessment {
            overall_risk_score: score,
            risk_level: RiskLevel::from_score(value),
            escalation_required: value > 0.6 || signals.critical_violations > 0,
            escalation_priority: EscalationPriority::from_score(value),
            recommended_action: if value > 0.7 {
                ESCALATE_ACTION.to_string()
            } else {
                MONITOR_ACTION.to_string()
            },
            risk_summary: format!(
                "{} critical violations, customer sentiment {:.2}",
                signals.critical_violations, signals.customer_overall_sentiment
            ),
        }
    }

    /// Picks the collaborator's verdict when usable, else computes one.
    ///
    /// A `Success` payload that fails validation counts as malformed.
    pub fn resolve(
        result: CollaboratorResult<RiskAssessment>,
        signals: &RiskSignals,
    ) -> (RiskAssessment, RiskSource) {
        let reason = match result {
            CollaboratorResult::Success(assessment) => match assessment.validate() {
                Ok(()) => return (assessment, RiskSource::Collaborator),
                Err(e) => ReasoningError::malformed(e.to_string()),
            },
            CollaboratorResult::Unavailable(reason) => reason,
        };

        match reason {
            ReasoningError::NotConfigured => {
                debug!("No reasoning service configured, using deterministic risk")
            }
            reason => {
                warn!(reason = %reason, "Risk synthesis unavailable, using deterministic fallback")
            }
        }
        (Self::compute(signals), RiskSource::Deterministic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(critical: usize, high: usize, sentiment: f64, exposures: usize) -> RiskSignals {
        RiskSignals {
            critical_violations: critical,
            high_violations: high,
            customer_overall_sentiment: sentiment,
            exposure_count: exposures,
            ..RiskSignals::default()
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quiet_signals_are_low_risk() {
        let risk = RiskAggregator::compute(&RiskSignals::default());
        assert_eq!(risk.overall_risk_score, UnitScore::ZERO);
        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert!(!risk.escalation_required);
        assert_eq!(risk.escalation_priority, EscalationPriority::Routine);
        assert_eq!(risk.recommended_action, MONITOR_ACTION);
        assert_eq!(risk.risk_summary, "0 critical violations, customer sentiment 0.00");
    }

    #[test]
    fn components_are_individually_capped() {
        let risk = RiskAggregator::compute(&signals(5, 0, 0.0, 0));
        assert!(approx(risk.overall_risk_score.value(), 0.5));

        let risk = RiskAggregator::compute(&signals(0, 10, 0.0, 0));
        assert!(approx(risk.overall_risk_score.value(), 0.3));

        let risk = RiskAggregator::compute(&signals(0, 0, 0.0, 7));
        assert!(approx(risk.overall_risk_score.value(), 0.4));
    }

    #[test]
    fn total_is_clamped_to_one() {
        let risk = RiskAggregator::compute(&signals(3, 5, -0.9, 4));
        assert_eq!(risk.overall_risk_score, UnitScore::ONE);
        assert_eq!(risk.risk_level, RiskLevel::Critical);
        assert_eq!(risk.escalation_priority, EscalationPriority::Immediate);
        assert_eq!(risk.recommended_action, ESCALATE_ACTION);
    }

    #[test]
    fn critical_violation_always_escalates() {
        let risk = RiskAggregator::compute(&signals(1, 0, 0.0, 0));
        assert!(approx(risk.overall_risk_score.value(), 0.3));
        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert!(risk.escalation_required);
    }

    #[test]
    fn negative_sentiment_adds_fixed_amount() {
        let risk = RiskAggregator::compute(&signals(0, 0, -0.6, 0));
        assert!(approx(risk.overall_risk_score.value(), 0.2));
        let risk = RiskAggregator::compute(&signals(0, 0, -0.5, 0));
        assert_eq!(risk.overall_risk_score, UnitScore::ZERO);
    }

    #[test]
    fn exposure_and_critical_violation_reach_high() {
        let risk = RiskAggregator::compute(&signals(1, 0, 0.0, 2));
        assert!(approx(risk.overall_risk_score.value(), 0.7));
        assert_eq!(risk.risk_level, RiskLevel::High);
        assert_eq!(risk.recommended_action, MONITOR_ACTION);
    }

    #[test]
    fn sentiment_penalty_is_added_before_exposure() {
        // 0.1 + 0.2 + 0.4 accumulates to 0.7000000000000001
        let risk = RiskAggregator::compute(&signals(0, 1, -0.6, 2));
        assert_eq!(risk.overall_risk_score.value(), 0.1 + 0.2 + 0.4);
        assert!(risk.overall_risk_score.value() > 0.7);
        assert_eq!(risk.recommended_action, ESCALATE_ACTION);
        assert_eq!(risk.risk_level, RiskLevel::High);
        assert_eq!(risk.escalation_priority, EscalationPriority::Urgent);
        assert!(risk.escalation_required);
    }

    #[test]
    fn exact_seven_tenths_only_monitors() {
        let risk = RiskAggregator::compute(&signals(1, 0, -0.6, 1));
        assert_eq!(risk.overall_risk_score.value(), 0.7);
        assert_eq!(risk.recommended_action, MONITOR_ACTION);
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn exact_eight_tenths_is_high_not_critical() {
        for (critical, high, sentiment, exposures) in
            [(2, 3, 0.0, 0), (1, 1, 0.0, 2), (0, 2, -0.6, 2), (2, 1, -0.6, 0)]
        {
            let risk = RiskAggregator::compute(&signals(critical, high, sentiment, exposures));
            assert_eq!(risk.overall_risk_score.value(), 0.8);
            assert_eq!(risk.risk_level, RiskLevel::High);
            assert_eq!(risk.escalation_priority, EscalationPriority::Urgent);
            assert_eq!(risk.recommended_action, ESCALATE_ACTION);
        }
    }

    #[test]
    fn rounding_above_lower_thresholds_moves_the_level() {
        // 0.1 + 0.2 lands just above 0.3
        let risk = RiskAggregator::compute(&signals(0, 1, -0.6, 0));
        assert!(risk.overall_risk_score.value() > 0.3);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
        assert_eq!(risk.escalation_priority, EscalationPriority::Routine);
        assert!(!risk.escalation_required);

        // 0.2 + 0.2 + 0.2 lands just above 0.6
        let risk = RiskAggregator::compute(&signals(0, 2, -0.6, 1));
        assert!(risk.overall_risk_score.value() > 0.6);
        assert_eq!(risk.risk_level, RiskLevel::High);
        assert_eq!(risk.escalation_priority, EscalationPriority::Urgent);
        assert!(risk.escalation_required);
        assert_eq!(risk.recommended_action, MONITOR_ACTION);
    }

    #[test]
    fn resolve_prefers_valid_collaborator_verdict() {
        let verdict = RiskAssessment {
            overall_risk_score: UnitScore::new(0.42),
            risk_level: RiskLevel::Medium,
            recommended_action: "Follow up".into(),
            ..RiskAssessment::default()
        };
        let (risk, source) = RiskAggregator::resolve(
            CollaboratorResult::Success(verdict.clone()),
            &signals(3, 0, 0.0, 0),
        );
        assert_eq!(source, RiskSource::Collaborator);
        assert_eq!(risk, verdict);
    }

    #[test]
    fn resolve_falls_back_when_unavailable() {
        let (risk, source) = RiskAggregator::resolve(
            CollaboratorResult::Unavailable(ReasoningError::NotConfigured),
            &signals(1, 0, 0.0, 0),
        );
        assert_eq!(source, RiskSource::Deterministic);
        assert!(risk.escalation_required);
    }

    #[test]
    fn resolve_treats_invalid_payload_as_malformed() {
        let payload: RiskAssessment = serde_json::from_str(
            r#"{"overall_risk_score": 3.0, "risk_level": "critical", "escalation_required": true,
                "escalation_priority": "immediate", "recommended_action": "x", "risk_summary": ""}"#,
        )
        .unwrap();
        let (risk, source) =
            RiskAggregator::resolve(CollaboratorResult::Success(payload), &RiskSignals::default());
        assert_eq!(source, RiskSource::Deterministic);
        assert_eq!(risk.risk_level, RiskLevel::Low);
    }
}
