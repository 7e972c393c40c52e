//! Application layer - Catalog loading and the analysis handler.
//!
//! This layer orchestrates domain engines and coordinates between ports.

mod catalogs;
pub mod handlers;

pub use catalogs::Catalogs;
pub use handlers::{AnalyzeConversationCommand, AnalyzeConversationHandler};
