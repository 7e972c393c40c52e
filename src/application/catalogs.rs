//! Catalogs - The once-loaded, shared policy and sensitive-data catalogs.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::compliance::PolicyCatalog;
use crate::domain::exposure::SensitiveDataCatalog;
use crate::ports::CatalogSource;

/// Immutable catalogs shared by every analysis.
///
/// Cloning is cheap; both catalogs sit behind `Arc` and are never mutated
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub policies: Arc<PolicyCatalog>,
    pub sensitive_data: Arc<SensitiveDataCatalog>,
}

impl Catalogs {
    pub fn new(policies: PolicyCatalog, sensitive_data: SensitiveDataCatalog) -> Self {
        Self {
            policies: Arc::new(policies),
            sensitive_data: Arc::new(sensitive_data),
        }
    }

    /// Loads both catalogs from `source`.
    ///
    /// A failed load leaves that catalog empty and logs a warning; loading
    /// never fails as a whole.
    pub async fn load(source: &dyn CatalogSource) -> Self {
        let policies = match source.load_policies().await {
            Ok(documents) => PolicyCatalog::from_documents(documents),
            Err(e) => {
                warn!(error = %e, "Policy catalog unavailable, compliance checks disabled");
                PolicyCatalog::empty()
            }
        };

        let sensitive_data = match source.load_sensitive_data().await {
            Ok(document) => SensitiveDataCatalog::from_document(document),
            Err(e) => {
                warn!(error = %e, "Sensitive-data catalog unavailable, exposure scan disabled");
                SensitiveDataCatalog::empty()
            }
        };

        info!(
            domains = policies.domains().len(),
            policies = policies.policy_count(),
            sensitive_data_types = sensitive_data.len(),
            "Catalogs loaded"
        );

        Self::new(policies, sensitive_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCatalogSource;
    use crate::domain::compliance::{PolicyDocument, PolicyRecord};
    use crate::domain::exposure::{SensitiveDataDocument, SensitiveDataType};
    use crate::domain::foundation::Severity;
    use crate::ports::CatalogLoadError;
    use std::path::PathBuf;

    fn policy_document() -> PolicyDocument {
        PolicyDocument {
            domain: Some("banking".to_string()),
            policies: vec![PolicyRecord {
                id: "BANK_SEC_3.2.1".to_string(),
                text: "Agents must never request an OTP.".to_string(),
                category: "security".to_string(),
                keywords: vec!["otp".to_string()],
                violation_patterns: vec!["your otp".to_string()],
                severity_if_violated: Severity::Critical,
                regulatory_basis: None,
            }],
        }
    }

    #[tokio::test]
    async fn loads_both_catalogs() {
        let source = InMemoryCatalogSource::new()
            .with_policies("banking", policy_document())
            .with_sensitive_data(SensitiveDataDocument {
                critical_data_types: vec![SensitiveDataType {
                    data_type: "OTP".to_string(),
                    patterns: vec!["otp".to_string()],
                    severity: Severity::Critical,
                    description: "One-time password".to_string(),
                }],
            });

        let catalogs = Catalogs::load(&source).await;

        assert_eq!(catalogs.policies.policy_count(), 1);
        assert!(catalogs.policies.has_domain("banking"));
        assert_eq!(catalogs.sensitive_data.len(), 1);
    }

    #[tokio::test]
    async fn failed_load_degrades_to_empty() {
        let source =
            InMemoryCatalogSource::failing(CatalogLoadError::NotFound(PathBuf::from("missing")));

        let catalogs = Catalogs::load(&source).await;

        assert!(catalogs.policies.is_empty());
        assert!(catalogs.sensitive_data.is_empty());
    }
}
