//! Filesystem Catalog Source
//!
//! Reads policy documents from a directory (one document per domain) and the
//! sensitive-data document from a single file. Documents are JSON or YAML,
//! chosen by file extension.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::compliance::PolicyDocument;
use crate::domain::exposure::SensitiveDataDocument;
use crate::ports::{CatalogLoadError, CatalogSource};

/// Document encodings recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, path: &Path, raw: &str) -> Result<T, CatalogLoadError> {
        match self {
            Self::Json => {
                serde_json::from_str(raw).map_err(|e| CatalogLoadError::malformed(path, e))
            }
            Self::Yaml => {
                serde_yaml::from_str(raw).map_err(|e| CatalogLoadError::malformed(path, e))
            }
        }
    }
}

/// Catalog source backed by files on disk
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    policy_store_path: PathBuf,
    critical_data_path: PathBuf,
}

impl FileCatalogSource {
    /// # Example
    /// ```ignore
    /// let source = FileCatalogSource::new("policy_store", "critical_data_store/sensitive_patterns.json");
    /// ```
    pub fn new(policy_store_path: impl AsRef<Path>, critical_data_path: impl AsRef<Path>) -> Self {
        Self {
            policy_store_path: policy_store_path.as_ref().to_path_buf(),
            critical_data_path: critical_data_path.as_ref().to_path_buf(),
        }
    }

    /// Policy document files in the store, sorted by file name.
    async fn policy_files(&self) -> Result<Vec<PathBuf>, CatalogLoadError> {
        let mut dir = fs::read_dir(&self.policy_store_path)
            .await
            .map_err(|e| CatalogLoadError::io(&self.policy_store_path, e))?;

        let mut files = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| CatalogLoadError::io(&self.policy_store_path, e))?
        {
            let path = entry.path();
            if path.is_file() && DocumentFormat::from_path(&path).is_some() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogLoadError> {
        let format = DocumentFormat::from_path(path).unwrap_or(DocumentFormat::Json);
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| CatalogLoadError::io(path, e))?;
        format.parse(path, &raw)
    }
}

/// Lowercased file stem, used when a document names no domain.
fn domain_from_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load_policies(&self) -> Result<Vec<(String, PolicyDocument)>, CatalogLoadError> {
        let mut documents = Vec::new();

        for path in self.policy_files().await? {
            match Self::read_document::<PolicyDocument>(&path).await {
                Ok(document) => {
                    debug!(
                        path = %path.display(),
                        policies = document.policies.len(),
                        "Loaded policy document"
                    );
                    documents.push((domain_from_stem(&path), document));
                }
                Err(e) => warn!(error = %e, "Skipping unreadable policy document"),
            }
        }

        Ok(documents)
    }

    async fn load_sensitive_data(&self) -> Result<SensitiveDataDocument, CatalogLoadError> {
        Self::read_document(&self.critical_data_path).await
    }
}
