//! Application configuration module
//!
//! Configuration is read from environment variables with the `CALLSCOPE`
//! prefix; nested values are separated by a double underscore, for example
//! `CALLSCOPE__ANALYSIS__CHUNK_SIZE=300`. Every value has a default, so an
//! empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use callscope::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Policies read from {}", config.catalog.policy_store_path.display());
//! ```

mod analysis;
mod catalog;
mod error;
mod logging;
mod reasoning;

pub use analysis::AnalysisConfig;
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use reasoning::ReasoningConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog locations
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Domain selection and chunking
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// External reasoning collaborator
    #[serde(default)]
    pub reasoning: ReasoningConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CALLSCOPE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CALLSCOPE")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.analysis.validate()?;
        self.reasoning.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Environment variables are process-wide
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CALLSCOPE__CATALOG__POLICY_STORE_PATH");
        env::remove_var("CALLSCOPE__ANALYSIS__DEFAULT_DOMAIN");
        env::remove_var("CALLSCOPE__ANALYSIS__CHUNK_SIZE");
        env::remove_var("CALLSCOPE__REASONING__ENABLED");
        env::remove_var("CALLSCOPE__REASONING__TIMEOUT_SECS");
        env::remove_var("CALLSCOPE__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.chunk_size, 200);
        assert_eq!(config.analysis.default_domain, "auto");
        assert!(!config.reasoning.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CALLSCOPE__CATALOG__POLICY_STORE_PATH", "/srv/policies");
        env::set_var("CALLSCOPE__ANALYSIS__DEFAULT_DOMAIN", "banking");
        env::set_var("CALLSCOPE__ANALYSIS__CHUNK_SIZE", "300");
        env::set_var("CALLSCOPE__REASONING__ENABLED", "true");
        env::set_var("CALLSCOPE__REASONING__TIMEOUT_SECS", "5");
        env::set_var("CALLSCOPE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.policy_store_path, PathBuf::from("/srv/policies"));
        assert_eq!(config.analysis.default_domain, "banking");
        assert_eq!(config.analysis.chunk_size, 300);
        assert!(config.reasoning.enabled);
        assert_eq!(config.reasoning.timeout_secs, 5);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CALLSCOPE__ANALYSIS__CHUNK_SIZE", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidChunkSize));
    }
}
