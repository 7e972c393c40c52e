//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::compliance::ChunkingConfig;
use crate::domain::conversation::DomainSelection;

/// Analysis tuning
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// `auto` or a domain name
    #[serde(default = "default_domain")]
    pub default_domain: String,

    /// Characters accumulated before a chunk is emitted
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Sentences carried into the next chunk
    #[serde(default = "default_overlap")]
    pub chunk_overlap_sentences: usize,
}

impl AnalysisConfig {
    pub fn domain_selection(&self) -> DomainSelection {
        DomainSelection::parse(&self.default_domain)
    }

    pub fn chunking(&self) -> ChunkingConfig {
        ChunkingConfig {
            chunk_size: self.chunk_size,
            overlap_sentences: self.chunk_overlap_sentences,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chunk_size == 0 {
            return Err(ValidationError::InvalidChunkSize);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_domain: default_domain(),
            chunk_size: default_chunk_size(),
            chunk_overlap_sentences: default_overlap(),
        }
    }
}

fn default_domain() -> String {
    "auto".to_string()
}

fn default_chunk_size() -> usize {
    200
}

fn default_overlap() -> usize {
    2
}
