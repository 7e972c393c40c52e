//! Reasoning collaborator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// External reasoning settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReasoningConfig {
    /// Whether to call the reasoning service at all
    #[serde(default)]
    pub enabled: bool,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ReasoningConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate reasoning configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
