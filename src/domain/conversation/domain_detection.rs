//! Domain Detector - Keyword heuristic for picking the policy domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{count_occurrences, fold_case};

/// Domain reported when no keyword matched.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Confidence reported for the unknown domain.
pub const UNKNOWN_DOMAIN_CONFIDENCE: f64 = 0.3;

/// Upper bound on detection confidence.
pub const MAX_DETECTION_CONFIDENCE: f64 = 0.99;

/// Fixed keyword table, in declaration order (ties resolve to the earlier domain).
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "banking",
        &["bank", "account", "credit", "debit", "loan", "mortgage", "otp", "cvv", "card"],
    ),
    (
        "telecom",
        &["plan", "roaming", "4g", "5g", "network", "call", "data", "recharge"],
    ),
    (
        "ecommerce",
        &["order", "delivery", "refund", "return", "shipping", "product", "payment"],
    ),
    (
        "healthcare",
        &["appointment", "prescription", "medical", "doctor", "hospital", "health"],
    ),
    (
        "insurance",
        &["policy", "claim", "coverage", "premium", "insurance", "deductible"],
    ),
];

/// How the caller picks the policy domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainSelection {
    /// Detect the domain from the conversation text.
    #[default]
    Auto,
    /// Use the named domain.
    Named(String),
}

impl DomainSelection {
    /// Parses a domain selector; `"auto"` (any case) or empty means detection.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            DomainSelection::Auto
        } else {
            DomainSelection::Named(trimmed.to_lowercase())
        }
    }
}

impl fmt::Display for DomainSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainSelection::Auto => f.write_str("auto"),
            DomainSelection::Named(name) => f.write_str(name),
        }
    }
}

/// Result of domain detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainDetection {
    pub detected_domain: String,
    pub detection_confidence: f64,
    pub industry: String,
}

impl DomainDetection {
    fn unknown() -> Self {
        Self {
            detected_domain: UNKNOWN_DOMAIN.to_string(),
            detection_confidence: UNKNOWN_DOMAIN_CONFIDENCE,
            industry: "other".to_string(),
        }
    }

    /// Detection result for an explicitly requested domain.
    pub fn explicit(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            industry: domain.clone(),
            detected_domain: domain,
            detection_confidence: 1.0,
        }
    }
}

/// Keyword-count domain detection over the five fixed domains.
pub struct DomainDetector;

impl DomainDetector {
    /// Resolves a selection: named domains pass through, `Auto` runs detection.
    pub fn resolve(selection: &DomainSelection, conversation: &str) -> DomainDetection {
        match selection {
            DomainSelection::Named(name) => DomainDetection::explicit(name.clone()),
            DomainSelection::Auto => Self::detect(conversation),
        }
    }

    /// Detects the domain by counting keyword occurrences.
    ///
    /// # Algorithm
    /// count[d] = Σ occurrences(keyword) for each keyword of d;
    /// winner = argmax (first declared on ties);
    /// confidence = min(count[winner] / max(1, total / 2), 0.99)
    pub fn detect(conversation: &str) -> DomainDetection {
        let folded = fold_case(conversation);

        let counts: Vec<(&str, usize)> = DOMAIN_KEYWORDS
            .iter()
            .map(|(domain, keywords)| {
                let hits = keywords.iter().map(|k| count_occurrences(&folded, k)).sum();
                (*domain, hits)
            })
            .collect();

        let total: usize = counts.iter().map(|(_, c)| c).sum();

        let mut best: Option<(&str, usize)> = None;
        for &(domain, count) in &counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((domain, count));
            }
        }

        match best {
            Some((domain, count)) if count > 0 => {
                let denominator = (total as f64 / 2.0).max(1.0);
                let confidence = (count as f64 / denominator).min(MAX_DETECTION_CONFIDENCE);
                DomainDetection {
                    detected_domain: domain.to_string(),
                    detection_confidence: confidence,
                    industry: domain.to_string(),
                }
            }
            _ => DomainDetection::unknown(),
        }
    }

    /// Names of the domains the detector can emit.
    pub fn known_domains() -> Vec<&'static str> {
        DOMAIN_KEYWORDS.iter().map(|(d, _)| *d).collect()
    }
}
