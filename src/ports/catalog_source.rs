//! Catalog Source Port - Loading of the policy and sensitive-data catalogs.
//!
//! Catalogs are read once at startup. A failed load is never fatal: the
//! application layer substitutes an empty catalog and logs a warning.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::compliance::PolicyDocument;
use crate::domain::exposure::SensitiveDataDocument;

/// Port for reading catalog documents.
///
/// # Contract
///
/// - `load_policies` returns one `(domain, document)` pair per policy
///   document, in a stable order. The domain is the name used when the
///   document does not declare its own.
/// - A single unreadable document inside an otherwise readable store is
///   skipped by the implementation, not reported as an error.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads every policy document.
    async fn load_policies(&self) -> Result<Vec<(String, PolicyDocument)>, CatalogLoadError>;

    /// Loads the sensitive-data pattern document.
    async fn load_sensitive_data(&self) -> Result<SensitiveDataDocument, CatalogLoadError>;
}

/// Errors from catalog loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogLoadError {
    #[error("catalog not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    #[error("malformed catalog document {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl CatalogLoadError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io {
                path,
                reason: err.to_string(),
            }
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
