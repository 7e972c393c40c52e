//! Sentiment Engine - Per-speaker aggregates, arcs and turning points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::{EMPATHY_INDICATORS, FRUSTRATION_INDICATORS};
use super::scorer::{EmotionalTone, SentimentLabel, StatementScorer};
use crate::domain::conversation::{SpeakerRoles, Utterance};
use crate::domain::foundation::{contains_term, fold_case, truncate_chars, Valence};

/// Minimum |Δ| between consecutive customer scores for a turning point.
pub const TURNING_POINT_THRESHOLD: f64 = 0.5;

/// Turning points reported per conversation.
pub const MAX_TURNING_POINTS: usize = 5;

/// |score| above which an agent statement counts as extreme.
pub const EXTREME_SCORE: f64 = 0.7;

const TIMELINE_TEXT_CHARS: usize = 100;
const TRIGGER_TEXT_CHARS: usize = 50;
const SUSTAINED_THRESHOLD: f64 = 0.2;

/// Qualitative trajectory of a speaker's sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentArc {
    NegativeToPositive,
    PositiveToNegative,
    SustainedPositive,
    SustainedNegative,
    Fluctuating,
    #[default]
    Neutral,
}

impl SentimentArc {
    /// Classifies a score series.
    ///
    /// Fewer than two points is `Neutral`. Start/end decide the arc; a
    /// sustained arc whose middle averages to the opposite sign is
    /// reported as `Fluctuating` instead.
    pub fn classify(scores: &[f64]) -> Self {
        let (Some(&start), Some(&end)) = (scores.first(), scores.last()) else {
            return SentimentArc::Neutral;
        };
        if scores.len() < 2 {
            return SentimentArc::Neutral;
        }

        let middle = if scores.len() > 2 {
            mean(&scores[1..scores.len() - 1])
        } else {
            start
        };

        if start < 0.0 && end > 0.0 {
            SentimentArc::NegativeToPositive
        } else if start > 0.0 && end < 0.0 {
            SentimentArc::PositiveToNegative
        } else if start > SUSTAINED_THRESHOLD && end > SUSTAINED_THRESHOLD {
            if middle < 0.0 {
                SentimentArc::Fluctuating
            } else {
                SentimentArc::SustainedPositive
            }
        } else if start < -SUSTAINED_THRESHOLD && end < -SUSTAINED_THRESHOLD {
            if middle > 0.0 {
                SentimentArc::Fluctuating
            } else {
                SentimentArc::SustainedNegative
            }
        } else {
            SentimentArc::Fluctuating
        }
    }
}

/// Direction of a sentiment shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    Improved,
    Deteriorated,
}

/// Suggested reaction to a turning point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intervention {
    ImmediateEscalation,
    DeEscalation,
    ContinueCurrentApproach,
    MonitorClosely,
}

impl Intervention {
    /// Picks the intervention for a shift `delta` landing on `current`.
    pub fn for_shift(delta: f64, current: f64) -> Self {
        if delta < -0.5 && current < -0.5 {
            Intervention::ImmediateEscalation
        } else if delta < -0.3 {
            Intervention::DeEscalation
        } else if delta > 0.5 {
            Intervention::ContinueCurrentApproach
        } else {
            Intervention::MonitorClosely
        }
    }

    /// Human-readable recommendation.
    pub fn describe(&self) -> &'static str {
        match self {
            Intervention::ImmediateEscalation => "Immediate escalation recommended",
            Intervention::DeEscalation => "De-escalation techniques needed",
            Intervention::ContinueCurrentApproach => "Continue current approach",
            Intervention::MonitorClosely => "Monitor closely",
        }
    }
}

/// A sharp shift in the customer's sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurningPoint {
    pub timestamp: String,
    pub trigger: String,
    pub trigger_speaker: String,
    pub sentiment_before: Valence,
    pub sentiment_after: Valence,
    pub shift_direction: ShiftDirection,
    pub magnitude: f64,
    pub recommendation: Intervention,
}

/// One scored utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: String,
    pub speaker: String,
    pub text: String,
    pub sentiment_score: Valence,
    pub tone: EmotionalTone,
    pub sentiment: SentimentLabel,
    pub intensity: f64,
}

/// Customer aggregates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerSentiment {
    pub speaker: String,
    pub overall_score: f64,
    pub arc: SentimentArc,
    pub min_score: f64,
    pub max_score: f64,
    pub volatility: f64,
}

/// Agent aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTone {
    pub speaker: String,
    pub overall_score: f64,
    pub arc: SentimentArc,
    pub professionalism_score: f64,
    pub empathy_score: f64,
}

impl Default for AgentTone {
    fn default() -> Self {
        Self {
            speaker: String::new(),
            overall_score: 0.0,
            arc: SentimentArc::Neutral,
            professionalism_score: NO_AGENT_PROFESSIONALISM,
            empathy_score: 0.0,
        }
    }
}

/// Professionalism reported when the agent never speaks.
pub const NO_AGENT_PROFESSIONALISM: f64 = 0.5;

/// Full sentiment output for one conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentReport {
    pub timeline: Vec<TimelineEntry>,
    pub customer_sentiment: CustomerSentiment,
    pub agent_tone: AgentTone,
    pub frustration_level: f64,
    pub emotional_turning_points: Vec<TurningPoint>,
}

/// Computes per-utterance valence and per-speaker aggregates.
pub struct SentimentEngine;

impl SentimentEngine {
    /// Analyzes a conversation.
    ///
    /// # Edge Cases
    /// - No utterances: zero scores, `Neutral` arcs, no turning points
    /// - Single speaker: that speaker is both customer and agent
    pub fn analyze(utterances: &[Utterance], roles: &SpeakerRoles) -> SentimentReport {
        let timeline: Vec<TimelineEntry> = utterances
            .iter()
            .map(|u| {
                let scored = StatementScorer::score(&u.text);
                TimelineEntry {
                    timestamp: u.timestamp.clone(),
                    speaker: u.speaker.clone(),
                    text: truncate_chars(&u.text, TIMELINE_TEXT_CHARS),
                    sentiment_score: scored.score,
                    tone: EmotionalTone::from_score(scored.score.value()),
                    sentiment: scored.label,
                    intensity: scored.intensity,
                }
            })
            .collect();

        // Full texts stay paired with scores; the timeline copy is truncated.
        let scored: Vec<(&Utterance, f64)> = utterances
            .iter()
            .zip(timeline.iter())
            .map(|(u, t)| (u, t.sentiment_score.value()))
            .collect();

        let customer_lines: Vec<(&Utterance, f64)> = scored
            .iter()
            .filter(|(u, _)| u.is_spoken_by(&roles.customer))
            .copied()
            .collect();
        let agent_lines: Vec<(&Utterance, f64)> = scored
            .iter()
            .filter(|(u, _)| u.is_spoken_by(&roles.agent))
            .copied()
            .collect();

        let customer_scores: Vec<f64> = customer_lines.iter().map(|(_, s)| *s).collect();
        let agent_scores: Vec<f64> = agent_lines.iter().map(|(_, s)| *s).collect();

        let customer_sentiment = CustomerSentiment {
            speaker: roles.customer.clone(),
            overall_score: mean(&customer_scores),
            arc: SentimentArc::classify(&customer_scores),
            min_score: customer_scores.iter().copied().reduce(f64::min).unwrap_or(0.0),
            max_score: customer_scores.iter().copied().reduce(f64::max).unwrap_or(0.0),
            volatility: volatility(&customer_scores),
        };

        let agent_tone = AgentTone {
            speaker: roles.agent.clone(),
            overall_score: mean(&agent_scores),
            arc: SentimentArc::classify(&agent_scores),
            professionalism_score: professionalism(&agent_scores),
            empathy_score: indicator_fraction(&agent_lines, EMPATHY_INDICATORS),
        };

        let frustration_level = frustration(&customer_lines);
        let emotional_turning_points = turning_points(&customer_lines, &roles.customer);

        debug!(
            utterances = utterances.len(),
            customer_score = customer_sentiment.overall_score,
            turning_points = emotional_turning_points.len(),
            "Sentiment analysis complete"
        );

        SentimentReport {
            timeline,
            customer_sentiment,
            agent_tone,
            frustration_level,
            emotional_turning_points,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean absolute difference between consecutive scores.
fn volatility(scores: &[f64]) -> f64 {
    if scores.len() < 2 {
        return 0.0;
    }
    let diffs: Vec<f64> = scores.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    mean(&diffs)
}

/// 1 − 0.5 × (fraction of statements with |score| > 0.7).
fn professionalism(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return NO_AGENT_PROFESSIONALISM;
    }
    let extreme = scores.iter().filter(|s| s.abs() > EXTREME_SCORE).count();
    1.0 - (extreme as f64 / scores.len() as f64) * 0.5
}

fn indicator_fraction(lines: &[(&Utterance, f64)], indicators: &[&str]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let hits = lines
        .iter()
        .filter(|(u, _)| mentions_any(&u.text, indicators))
        .count();
    hits as f64 / lines.len() as f64
}

/// Σ|score| over frustrated statements, divided by all the speaker's statements, capped at 1.
fn frustration(lines: &[(&Utterance, f64)]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let total: f64 = lines
        .iter()
        .filter(|(u, _)| mentions_any(&u.text, FRUSTRATION_INDICATORS))
        .map(|(_, s)| s.abs())
        .sum();
    (total / lines.len() as f64).min(1.0)
}

fn mentions_any(text: &str, indicators: &[&str]) -> bool {
    let folded = fold_case(text);
    indicators.iter().any(|term| contains_term(&folded, term))
}

/// First five consecutive-score jumps above the threshold, in conversation order.
fn turning_points(lines: &[(&Utterance, f64)], customer: &str) -> Vec<TurningPoint> {
    lines
        .windows(2)
        .filter_map(|pair| {
            let (_, before) = pair[0];
            let (current, after) = pair[1];
            let delta = after - before;

            if delta.abs() <= TURNING_POINT_THRESHOLD {
                return None;
            }

            Some(TurningPoint {
                timestamp: current.timestamp.clone(),
                trigger: truncate_chars(&current.text, TRIGGER_TEXT_CHARS),
                trigger_speaker: customer.to_string(),
                sentiment_before: Valence::new(before),
                sentiment_after: Valence::new(after),
                shift_direction: if delta > 0.0 {
                    ShiftDirection::Improved
                } else {
                    ShiftDirection::Deteriorated
                },
                magnitude: delta.abs(),
                recommendation: Intervention::for_shift(delta, after),
            })
        })
        .take(MAX_TURNING_POINTS)
        .collect()
}
