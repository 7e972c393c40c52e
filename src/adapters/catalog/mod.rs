//! Catalog source adapters.

mod filesystem;
mod in_memory;

pub use filesystem::FileCatalogSource;
pub use in_memory::InMemoryCatalogSource;
