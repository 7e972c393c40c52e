//! Compliance Module - Policy catalog and violation retrieval.
//!
//! # Components
//!
//! - `PolicyCatalog` - Domain-partitioned, immutable policy set with compiled patterns
//! - `PatternMatcher` - Case-insensitive literal match with regex fallback
//! - `chunk_text` - Sentence chunking with overlap
//! - `TermIndex` - TF-IDF vectors backing advisory `similar_policies`
//! - `PolicyRetrievalEngine` - Chunked pattern/keyword detection and dedup
//!
//! Detection is deterministic pattern and keyword matching. The term index
//! is built at load time but never consulted by detection.

mod catalog;
mod chunker;
mod engine;
mod pattern;
mod policy;
mod remediation;
mod term_index;

pub use catalog::{CatalogEntry, PolicyCatalog, PolicyCoverage, SimilarPolicy};
pub use chunker::{chunk_text, split_sentences, ChunkingConfig};
pub use engine::{
    deduplicate, ComplianceReport, ComplianceStatus, PolicyRetrievalEngine, Violation,
    ACTION_CONTEXT_TERMS, KEYWORD_CONFIDENCE, PATTERN_CONFIDENCE,
};
pub use pattern::{phrase_window, PatternHit, PatternMatcher, PHRASE_LEAD_CHARS, PHRASE_TAIL_CHARS};
pub use policy::{is_critical_keyword, Policy, PolicyDocument, PolicyRecord, CRITICAL_KEYWORDS};
pub use remediation::{mapped_policy_ids, remediation_for, GENERIC_REMEDIATION};
pub use term_index::TermIndex;
