//! Term Index - TF-IDF vectors over policy text.
//!
//! Built when the catalog loads. Detection never reads it; it only backs
//! advisory similarity ranking.

use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::fold_case;

const STOP_WORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "any", "are", "as", "at", "be", "been", "before", "but",
    "by", "can", "do", "does", "for", "from", "had", "has", "have", "he", "her", "his", "if", "in",
    "into", "is", "it", "its", "me", "more", "my", "no", "not", "of", "on", "only", "or", "our",
    "she", "should", "so", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "to", "under", "up", "was", "we", "were", "what", "when", "which",
    "who", "will", "with", "would", "you", "your",
];

/// Sparse, L2-normalized term vector.
type TermVector = BTreeMap<usize, f64>;

/// TF-IDF index over unigrams and bigrams.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<TermVector>,
}

impl TermIndex {
    /// Builds the index; document order is preserved.
    pub fn build<S: AsRef<str>>(documents: &[S]) -> Self {
        let term_lists: Vec<Vec<String>> = documents.iter().map(|d| terms(d.as_ref())).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();
        for list in &term_lists {
            let mut seen: Vec<usize> = Vec::new();
            for term in list {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(term.clone()).or_insert(next_id);
                if id == document_frequency.len() {
                    document_frequency.push(0);
                }
                if !seen.contains(&id) {
                    seen.push(id);
                    document_frequency[id] += 1;
                }
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1
        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            documents: Vec::new(),
        };
        index.documents = term_lists.iter().map(|list| index.vectorize(list)).collect();
        index
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Cosine similarity of `query` against every document, in document order.
    ///
    /// Terms outside the vocabulary are ignored.
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let query = self.vectorize(&terms(query));
        self.documents
            .iter()
            .map(|doc| {
                query
                    .iter()
                    .filter_map(|(term, weight)| doc.get(term).map(|w| w * weight))
                    .sum()
            })
            .collect()
    }

    fn vectorize(&self, terms: &[String]) -> TermVector {
        let mut vector = TermVector::new();
        for term in terms {
            if let Some(&id) = self.vocabulary.get(term) {
                *vector.entry(id).or_insert(0.0) += 1.0;
            }
        }
        for (id, weight) in vector.iter_mut() {
            *weight *= self.idf[*id];
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }
        vector
    }
}

/// Unigrams of two or more characters minus stop words, then adjacent bigrams.
fn terms(text: &str) -> Vec<String> {
    let words: Vec<String> = fold_case(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect();

    let bigrams: Vec<String> = words.windows(2).map(|w| format!("{} {}", w[0], w[1])).collect();
    words.into_iter().chain(bigrams).collect()
}
