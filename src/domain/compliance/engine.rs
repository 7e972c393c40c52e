//! Policy Retrieval Engine - Chunked pattern/keyword policy matching.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{CatalogEntry, PolicyCatalog};
use super::chunker::{chunk_text, ChunkingConfig};
use super::pattern::{phrase_window, PatternHit};
use super::policy::is_critical_keyword;
use super::remediation::remediation_for;
use crate::domain::foundation::{contains_term, fold_case, Severity, UnitScore};

/// Confidence of a violation-pattern hit.
pub const PATTERN_CONFIDENCE: f64 = 0.98;

/// Confidence of a keyword hit.
pub const KEYWORD_CONFIDENCE: f64 = 0.75;

/// Terms that put a critical keyword in a request context.
pub const ACTION_CONTEXT_TERMS: &[&str] =
    &["ask", "request", "tell", "give", "share", "provide", "confir"];

const NO_REGULATORY_BASIS: &str = "N/A";

/// A detected policy breach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub policy_id: String,
    pub clause: String,
    pub category: String,
    pub severity: Severity,
    pub regulatory_basis: String,
    pub detected_phrase: String,
    pub confidence: UnitScore,
    pub domain: String,
    pub remediation: String,
}

impl Violation {
    fn new(entry: &CatalogEntry, detected_phrase: String, confidence: f64) -> Self {
        let policy = &entry.policy;
        Self {
            policy_id: policy.id.clone(),
            clause: policy.text.clone(),
            category: policy.category.clone(),
            severity: policy.severity_if_violated,
            regulatory_basis: policy
                .regulatory_basis
                .clone()
                .unwrap_or_else(|| NO_REGULATORY_BASIS.to_string()),
            detected_phrase,
            confidence: UnitScore::new(confidence),
            domain: policy.domain.clone(),
            remediation: remediation_for(&policy.id).to_string(),
        }
    }
}

/// Overall compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    /// No policies were available to check against.
    #[default]
    Unknown,
}

/// Compliance output for one conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub violations: Vec<Violation>,
    pub policy_references: Vec<String>,
    pub total_violations: usize,
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub severity_score: f64,
    pub compliance_status: ComplianceStatus,
    pub chunks_analyzed: usize,
}

impl ComplianceReport {
    fn from_violations(violations: Vec<Violation>, chunks_analyzed: usize) -> Self {
        let count = |severity: Severity| violations.iter().filter(|v| v.severity == severity).count();
        let critical_count = count(Severity::Critical);
        let high_count = count(Severity::High);
        let medium_count = count(Severity::Medium);
        let low_count = count(Severity::Low);

        let total = violations.len();
        let severity_score = ((critical_count as f64 * 0.9 + high_count as f64 * 0.5)
            / total.max(1) as f64)
            .min(1.0);

        Self {
            policy_references: violations.iter().map(|v| v.policy_id.clone()).collect(),
            total_violations: total,
            critical_count,
            high_count,
            medium_count,
            low_count,
            severity_score,
            compliance_status: if violations.is_empty() {
                ComplianceStatus::Compliant
            } else {
                ComplianceStatus::NonCompliant
            },
            chunks_analyzed,
            violations,
        }
    }

    pub fn has_violation(&self, policy_id: &str) -> bool {
        self.violations.iter().any(|v| v.policy_id == policy_id)
    }
}

/// Matches conversation text against catalog policies.
///
/// This is pattern and keyword matching over chunks, not similarity
/// search. `PolicyCatalog::similar_policies` is never consulted here.
pub struct PolicyRetrievalEngine;

impl PolicyRetrievalEngine {
    /// Detects violations for a domain (`None` or unknown: whole corpus).
    ///
    /// # Algorithm
    /// 1. chunk the text by sentences with overlap
    /// 2. per chunk and policy: each matching violation pattern emits a
    ///    0.98 hit; otherwise the first qualifying keyword emits a 0.75 hit
    /// 3. keep one violation per policy id, the highest confidence
    ///    (first seen on ties), in first-seen order
    pub fn detect(
        catalog: &PolicyCatalog,
        conversation: &str,
        domain: Option<&str>,
        chunking: &ChunkingConfig,
    ) -> ComplianceReport {
        if catalog.is_empty() {
            return ComplianceReport::default();
        }

        let policies = catalog.relevant(domain);
        let chunks = chunk_text(conversation, chunking);

        let mut violations = Vec::new();
        for chunk in &chunks {
            violations.extend(Self::check_chunk(chunk, &policies));
        }
        let raw_hits = violations.len();
        let violations = deduplicate(violations);

        debug!(
            chunks = chunks.len(),
            policies = policies.len(),
            raw_hits,
            violations = violations.len(),
            "Policy retrieval complete"
        );

        ComplianceReport::from_violations(violations, chunks.len())
    }

    /// Violations found in one chunk, in policy order.
    pub fn check_chunk(chunk: &str, policies: &[&CatalogEntry]) -> Vec<Violation> {
        let folded = fold_case(chunk);
        let has_action_context = ACTION_CONTEXT_TERMS
            .iter()
            .any(|term| contains_term(&folded, term));

        let mut violations = Vec::new();
        for entry in policies {
            let mut found_for_policy = false;

            for pattern in &entry.patterns {
                if let Some(hit) = pattern.find(chunk, &folded) {
                    violations.push(Violation::new(
                        entry,
                        phrase_window(chunk, hit),
                        PATTERN_CONFIDENCE,
                    ));
                    found_for_policy = true;
                }
            }

            if found_for_policy {
                continue;
            }

            let keyword_match = entry.policy.keywords.iter().find_map(|keyword| {
                let hit = keyword_hit(&folded, keyword)?;
                if is_critical_keyword(keyword) && !has_action_context {
                    return None;
                }
                Some(hit)
            });

            if let Some(hit) = keyword_match {
                violations.push(Violation::new(
                    entry,
                    phrase_window(chunk, hit),
                    KEYWORD_CONFIDENCE,
                ));
            }
        }
        violations
    }
}

fn keyword_hit(folded: &str, keyword: &str) -> Option<PatternHit> {
    let folded_keyword = fold_case(keyword);
    if folded_keyword.is_empty() {
        return None;
    }
    let byte_start = folded.find(&folded_keyword)?;
    Some(PatternHit {
        char_start: folded[..byte_start].chars().count(),
        char_len: folded_keyword.chars().count(),
    })
}

/// One violation per policy id: highest confidence wins, position is first seen.
pub fn deduplicate(violations: Vec<Violation>) -> Vec<Violation> {
    let mut kept: Vec<Violation> = Vec::new();
    for violation in violations {
        match kept.iter_mut().find(|v| v.policy_id == violation.policy_id) {
            Some(existing) => {
                if violation.confidence > existing.confidence {
                    *existing = violation;
                }
            }
            None => kept.push(violation),
        }
    }
    kept
}
