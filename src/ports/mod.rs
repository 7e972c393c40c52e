//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Loads the policy and sensitive-data catalogs
//! - `ReasoningCollaborator` - External summary, risk, intent and language steps

mod catalog_source;
mod reasoning;

pub use catalog_source::{CatalogLoadError, CatalogSource};
pub use reasoning::{CollaboratorResult, ReasoningCollaborator, ReasoningError};
