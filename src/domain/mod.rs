//! Domain layer containing the analysis engines and their value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (bounded scores, severity, errors, text helpers)
//! - `conversation` - Transcript parsing, speaker roles, domain detection
//! - `sentiment` - Per-utterance valence, arcs and turning points
//! - `tone` - Multi-label tone scoring and agent tone flags
//! - `compliance` - Policy catalog and violation retrieval
//! - `exposure` - Sensitive-data exposure scanning
//! - `risk` - Signal aggregation into a risk verdict
//! - `insight` - Summary, intent and language outputs with fallbacks
//! - `report` - Agent scorecard and the assembled report

pub mod compliance;
pub mod conversation;
pub mod exposure;
pub mod foundation;
pub mod insight;
pub mod report;
pub mod risk;
pub mod sentiment;
pub mod tone;
