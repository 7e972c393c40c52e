//! Policy records and the documents they are loaded from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Severity, ValidationError};

/// Terms that only count as a violation when an action is requested nearby.
pub const CRITICAL_KEYWORDS: &[&str] = &["otp", "cvv", "password", "ssn", "aadhaar"];

/// A single compliance rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub domain: String,
    pub category: String,
    pub text: String,
    pub keywords: Vec<String>,
    pub violation_patterns: Vec<String>,
    pub severity_if_violated: Severity,
    pub regulatory_basis: Option<String>,
}

impl Policy {
    /// Builds a policy from its document record.
    ///
    /// Keywords are de-duplicated case-insensitively, keeping first order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` when id or text is blank.
    pub fn from_record(domain: &str, record: PolicyRecord) -> Result<Self, ValidationError> {
        if record.id.trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if record.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }

        let mut keywords: Vec<String> = Vec::new();
        for keyword in record.keywords {
            let keyword = keyword.trim().to_string();
            if keyword.is_empty() || keywords.iter().any(|k| k.eq_ignore_ascii_case(&keyword)) {
                continue;
            }
            keywords.push(keyword);
        }

        Ok(Self {
            id: record.id.trim().to_string(),
            domain: domain.to_string(),
            category: record.category,
            text: record.text,
            keywords,
            violation_patterns: record.violation_patterns,
            severity_if_violated: record.severity_if_violated,
            regulatory_basis: record.regulatory_basis.filter(|b| !b.trim().is_empty()),
        })
    }

    /// Text indexed for similarity ranking: clause plus keywords.
    pub fn indexed_text(&self) -> String {
        let mut text = self.text.clone();
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text
    }
}

/// Whether a keyword needs an action context to count.
pub fn is_critical_keyword(keyword: &str) -> bool {
    CRITICAL_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(keyword.trim()))
}

/// A policy as written in a domain document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub violation_patterns: Vec<String>,
    #[serde(default)]
    pub severity_if_violated: Severity,
    #[serde(default)]
    pub regulatory_basis: Option<String>,
}

/// One domain document: `{domain, policies: [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Defaults to the file stem when absent.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub policies: Vec<PolicyRecord>,
}
