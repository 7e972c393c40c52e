//! Pattern Matcher - Substring-first matching with regex fallback.
//!
//! Shared by policy violation patterns and sensitive-data patterns.

use regex::{Regex, RegexBuilder};

use crate::domain::foundation::fold_case;

/// Characters kept before a match in the reported phrase.
pub const PHRASE_LEAD_CHARS: usize = 20;

/// Characters kept after a match in the reported phrase.
pub const PHRASE_TAIL_CHARS: usize = 30;

/// A match location, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternHit {
    pub char_start: usize,
    pub char_len: usize,
}

/// One catalog pattern, compiled once.
///
/// The pattern is first tried as a case-insensitive literal. If the
/// literal is absent and the pattern is a valid regex, a case-insensitive
/// regex search follows. Invalid regexes are substring-only.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    raw: String,
    folded: String,
    regex: Option<Regex>,
}

impl PatternMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let folded = fold_case(&raw);
        let regex = if raw.is_empty() {
            None
        } else {
            RegexBuilder::new(&raw).case_insensitive(true).build().ok()
        };
        Self { raw, folded, regex }
    }

    /// The pattern as written in the catalog.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the regex form compiled.
    pub fn has_regex(&self) -> bool {
        self.regex.is_some()
    }

    /// Finds the first hit in `text`; `folded` must be `fold_case(text)`.
    pub fn find(&self, text: &str, folded: &str) -> Option<PatternHit> {
        if !self.folded.is_empty() {
            if let Some(byte_start) = folded.find(&self.folded) {
                return Some(PatternHit {
                    char_start: folded[..byte_start].chars().count(),
                    char_len: self.folded.chars().count(),
                });
            }
        }

        let found = self.regex.as_ref()?.find(text)?;
        Some(PatternHit {
            char_start: text[..found.start()].chars().count(),
            char_len: found.as_str().chars().count(),
        })
    }

    pub fn is_match(&self, text: &str, folded: &str) -> bool {
        self.find(text, folded).is_some()
    }
}

/// Cuts the phrase around a hit: 20 chars before, 30 after, trimmed.
pub fn phrase_window(text: &str, hit: PatternHit) -> String {
    let start = hit.char_start.saturating_sub(PHRASE_LEAD_CHARS);
    let len = hit.char_start + hit.char_len + PHRASE_TAIL_CHARS - start;
    text.chars()
        .skip(start)
        .take(len)
        .collect::<String>()
        .trim()
        .to_string()
}
