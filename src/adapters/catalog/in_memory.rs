//! In-memory Catalog Source
//!
//! Serves documents supplied at construction. Used by tests and by callers
//! that embed their catalogs.

use async_trait::async_trait;

use crate::domain::compliance::PolicyDocument;
use crate::domain::exposure::SensitiveDataDocument;
use crate::ports::{CatalogLoadError, CatalogSource};

/// Catalog source holding its documents in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    policies: Vec<(String, PolicyDocument)>,
    sensitive_data: SensitiveDataDocument,
    failure: Option<CatalogLoadError>,
}

impl InMemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a policy document under the given fallback domain.
    pub fn with_policies(mut self, domain: impl Into<String>, document: PolicyDocument) -> Self {
        self.policies.push((domain.into(), document));
        self
    }

    pub fn with_sensitive_data(mut self, document: SensitiveDataDocument) -> Self {
        self.sensitive_data = document;
        self
    }

    /// Makes every load fail with `error`.
    pub fn failing(error: CatalogLoadError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), CatalogLoadError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load_policies(&self) -> Result<Vec<(String, PolicyDocument)>, CatalogLoadError> {
        self.check()?;
        Ok(self.policies.clone())
    }

    async fn load_sensitive_data(&self) -> Result<SensitiveDataDocument, CatalogLoadError> {
        self.check()?;
        Ok(self.sensitive_data.clone())
    }
}
