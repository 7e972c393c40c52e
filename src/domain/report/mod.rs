//! Report Module - Derived scorecards and the assembled conversation report.

mod agent_performance;
mod conversation_report;
mod indicators;

pub use agent_performance::{AgentPerformance, Grade, COMMUNICATION_CLARITY};
pub use conversation_report::ConversationReport;
pub use indicators::OutcomeIndicators;
