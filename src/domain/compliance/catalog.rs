//! Policy Catalog - Immutable, domain-partitioned policy set.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::pattern::PatternMatcher;
use super::policy::{Policy, PolicyDocument};
use super::term_index::TermIndex;
use crate::domain::foundation::Severity;

/// A policy with its violation patterns compiled.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub policy: Policy,
    pub patterns: Vec<PatternMatcher>,
}

impl CatalogEntry {
    fn new(policy: Policy) -> Self {
        let patterns = policy
            .violation_patterns
            .iter()
            .map(|p| PatternMatcher::new(p.as_str()))
            .collect();
        Self { policy, patterns }
    }
}

#[derive(Debug, Clone)]
struct DomainPolicies {
    domain: String,
    entries: Vec<CatalogEntry>,
}

/// Coverage overview for one domain or the whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyCoverage {
    Domain {
        domain: String,
        policy_count: usize,
        categories: Vec<String>,
        critical_policies: usize,
    },
    Corpus {
        total_domains: usize,
        total_policies: usize,
        domains: Vec<String>,
    },
}

/// A policy ranked by text similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPolicy {
    pub policy_id: String,
    pub domain: String,
    pub similarity: f64,
}

/// Domain name to ordered policies, built once and read-only afterwards.
///
/// Domains keep the order their documents were supplied in; a domain
/// supplied twice is extended.
#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    domains: Vec<DomainPolicies>,
    index: TermIndex,
}

impl PolicyCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the catalog from parsed documents paired with a fallback domain name.
    ///
    /// Records that fail validation are skipped with a warning.
    pub fn from_documents(documents: Vec<(String, PolicyDocument)>) -> Self {
        let mut policies = Vec::new();
        for (fallback_domain, document) in documents {
            let domain = document
                .domain
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(fallback_domain);
            for record in document.policies {
                let id = record.id.clone();
                match Policy::from_record(&domain, record) {
                    Ok(policy) => policies.push(policy),
                    Err(e) => warn!(domain = %domain, policy_id = %id, error = %e, "Skipping invalid policy"),
                }
            }
        }
        Self::from_policies(policies)
    }

    /// Builds the catalog from policies, grouped by their domain.
    pub fn from_policies(policies: Vec<Policy>) -> Self {
        let mut domains: Vec<DomainPolicies> = Vec::new();
        for policy in policies {
            let entry = CatalogEntry::new(policy);
            match domains.iter_mut().find(|d| d.domain == entry.policy.domain) {
                Some(group) => group.entries.push(entry),
                None => domains.push(DomainPolicies {
                    domain: entry.policy.domain.clone(),
                    entries: vec![entry],
                }),
            }
        }

        let texts: Vec<String> = domains
            .iter()
            .flat_map(|d| d.entries.iter().map(|e| e.policy.indexed_text()))
            .collect();

        Self {
            domains,
            index: TermIndex::build(&texts),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.policy_count() == 0
    }

    pub fn policy_count(&self) -> usize {
        self.domains.iter().map(|d| d.entries.len()).sum()
    }

    pub fn domains(&self) -> Vec<&str> {
        self.domains.iter().map(|d| d.domain.as_str()).collect()
    }

    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d.domain == domain)
    }

    /// All entries, domain by domain.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.domains.iter().flat_map(|d| d.entries.iter())
    }

    /// Policies to check for a domain.
    ///
    /// A known domain yields its own policies; `None` or an unknown
    /// domain yields the whole corpus.
    pub fn relevant(&self, domain: Option<&str>) -> Vec<&CatalogEntry> {
        match domain.and_then(|name| self.domains.iter().find(|d| d.domain == name)) {
            Some(group) => group.entries.iter().collect(),
            None => self.entries().collect(),
        }
    }

    pub fn policy(&self, policy_id: &str) -> Option<&Policy> {
        self.entries()
            .map(|e| &e.policy)
            .find(|p| p.id == policy_id)
    }

    /// Coverage for a known domain, else corpus totals.
    pub fn coverage(&self, domain: Option<&str>) -> PolicyCoverage {
        if let Some(group) = domain.and_then(|name| self.domains.iter().find(|d| d.domain == name)) {
            let mut categories: Vec<String> = Vec::new();
            for entry in &group.entries {
                if !categories.contains(&entry.policy.category) {
                    categories.push(entry.policy.category.clone());
                }
            }
            return PolicyCoverage::Domain {
                domain: group.domain.clone(),
                policy_count: group.entries.len(),
                categories,
                critical_policies: group
                    .entries
                    .iter()
                    .filter(|e| e.policy.severity_if_violated == Severity::Critical)
                    .count(),
            };
        }

        PolicyCoverage::Corpus {
            total_domains: self.domains.len(),
            total_policies: self.policy_count(),
            domains: self.domains.iter().map(|d| d.domain.clone()).collect(),
        }
    }

    /// Up to `k` policies ranked by TF-IDF cosine similarity to `text`.
    ///
    /// Advisory only; violation detection does not use this ranking.
    /// Zero-similarity policies are omitted; ties keep catalog order.
    pub fn similar_policies(&self, text: &str, k: usize) -> Vec<SimilarPolicy> {
        let mut ranked: Vec<SimilarPolicy> = self
            .entries()
            .zip(self.index.similarities(text))
            .filter(|(_, similarity)| *similarity > 0.0)
            .map(|(entry, similarity)| SimilarPolicy {
                policy_id: entry.policy.id.clone(),
                domain: entry.policy.domain.clone(),
                similarity,
            })
            .collect();

        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        ranked.truncate(k);
        ranked
    }
}
