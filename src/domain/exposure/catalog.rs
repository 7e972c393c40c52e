//! Sensitive-data catalog.

use serde::{Deserialize, Serialize};

use crate::domain::compliance::PatternMatcher;
use crate::domain::foundation::Severity;

fn default_severity() -> Severity {
    Severity::High
}

/// A kind of sensitive data as written in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveDataType {
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
}

/// The document: `{critical_data_types: [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensitiveDataDocument {
    #[serde(default)]
    pub critical_data_types: Vec<SensitiveDataType>,
}

/// A data type with compiled patterns.
#[derive(Debug, Clone)]
pub struct SensitiveDataEntry {
    pub data_type: SensitiveDataType,
    pub patterns: Vec<PatternMatcher>,
}

/// Immutable sensitive-data pattern catalog.
#[derive(Debug, Clone, Default)]
pub struct SensitiveDataCatalog {
    entries: Vec<SensitiveDataEntry>,
}

impl SensitiveDataCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(types: Vec<SensitiveDataType>) -> Self {
        let entries = types
            .into_iter()
            .filter(|t| !t.data_type.trim().is_empty())
            .map(|data_type| SensitiveDataEntry {
                patterns: data_type
                    .patterns
                    .iter()
                    .map(|p| PatternMatcher::new(p.as_str()))
                    .collect(),
                data_type,
            })
            .collect();
        Self { entries }
    }

    pub fn from_document(document: SensitiveDataDocument) -> Self {
        Self::new(document.critical_data_types)
    }

    pub fn entries(&self) -> &[SensitiveDataEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
