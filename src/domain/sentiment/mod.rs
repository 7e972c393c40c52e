//! Sentiment Module - Lexicon-based valence scoring and per-speaker arcs.
//!
//! # Components
//!
//! - `StatementScorer` - Valence of a single statement with intensity adjustment
//! - `SentimentEngine` - Timeline, customer/agent aggregates, turning points
//!
//! All scoring is pure and deterministic. Scores are bounded `Valence`
//! values in [-1, 1].

mod engine;
mod lexicon;
mod scorer;

pub use engine::{
    AgentTone, CustomerSentiment, Intervention, SentimentArc, SentimentEngine, SentimentReport,
    ShiftDirection, TimelineEntry, TurningPoint, EXTREME_SCORE, MAX_TURNING_POINTS,
    NO_AGENT_PROFESSIONALISM, TURNING_POINT_THRESHOLD,
};
pub use lexicon::{EMPATHY_INDICATORS, FRUSTRATION_INDICATORS};
pub use scorer::{tokenize, EmotionalTone, SentimentLabel, StatementScorer, StatementSentiment};
