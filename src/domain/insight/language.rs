//! Language analysis.

use serde::{Deserialize, Serialize};

/// Languages spoken in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageAnalysis {
    pub primary_language: String,
    pub language_name: String,
    pub confidence: f64,
    #[serde(default)]
    pub code_switching_detected: bool,
    #[serde(default)]
    pub code_switching_languages: Vec<String>,
    #[serde(default)]
    pub agent_language: Option<String>,
    #[serde(default)]
    pub customer_language: Option<String>,
    #[serde(default)]
    pub language_mismatch: bool,
    #[serde(default)]
    pub risk_flag: bool,
    #[serde(default)]
    pub notes: String,
}

impl LanguageAnalysis {
    /// English defaults, used when detection is unavailable.
    pub fn fallback() -> Self {
        Self {
            primary_language: "en".to_string(),
            language_name: "English".to_string(),
            confidence: 0.8,
            code_switching_detected: false,
            code_switching_languages: Vec::new(),
            agent_language: Some("en".to_string()),
            customer_language: Some("en".to_string()),
            language_mismatch: false,
            risk_flag: false,
            notes: "Language detection unavailable, defaulting to English".to_string(),
        }
    }
}

impl Default for LanguageAnalysis {
    fn default() -> Self {
        Self::fallback()
    }
}
