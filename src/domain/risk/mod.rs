//! Risk Module - Signal aggregation into an overall risk verdict.
//!
//! # Components
//!
//! - `RiskSignals` - Engine outputs reduced to risk inputs
//! - `RiskAssessment` - Verdict shape shared with the reasoning collaborator
//! - `RiskAggregator` - Deterministic verdict and collaborator resolution
//! - `RiskFlags` - Boolean flags for downstream routing

mod aggregator;
mod assessment;
mod flags;
mod signals;

pub use aggregator::{RiskAggregator, ESCALATE_ACTION, MONITOR_ACTION};
pub use assessment::{EscalationPriority, RiskAssessment, RiskLevel, RiskSource};
pub use flags::{RiskFlags, COMMITMENT_POLICY_IDS};
pub use signals::{ResolutionStatus, RiskSignals};
