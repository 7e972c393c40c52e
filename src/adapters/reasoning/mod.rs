//! Reasoning collaborator adapters.

mod mock;
mod offline;

pub use mock::MockReasoning;
pub use offline::OfflineReasoning;
