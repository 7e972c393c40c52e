//! Catalog location configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the policy and sensitive-data catalogs live
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding one policy document per domain
    #[serde(default = "default_policy_store_path")]
    pub policy_store_path: PathBuf,

    /// Sensitive-data pattern document
    #[serde(default = "default_critical_data_path")]
    pub critical_data_path: PathBuf,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.policy_store_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG__POLICY_STORE_PATH"));
        }
        if self.critical_data_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG__CRITICAL_DATA_PATH"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            policy_store_path: default_policy_store_path(),
            critical_data_path: default_critical_data_path(),
        }
    }
}

fn default_policy_store_path() -> PathBuf {
    PathBuf::from("policy_store")
}

fn default_critical_data_path() -> PathBuf {
    PathBuf::from("critical_data_store/sensitive_patterns.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.policy_store_path, PathBuf::from("policy_store"));
        assert_eq!(
            config.critical_data_path,
            PathBuf::from("critical_data_store/sensitive_patterns.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_policy_path_rejected() {
        let config = CatalogConfig {
            policy_store_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("CATALOG__POLICY_STORE_PATH"))
        );
    }
}
