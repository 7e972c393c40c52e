//! Text helpers shared by the lexicon and pattern engines.

/// Lowercases text one character at a time, keeping the character count.
///
/// `str::to_lowercase` may expand a single character into several
/// (e.g. `'İ'`), which would shift positions between the original and the
/// folded text. Match windows are computed on the folded text and cut from
/// the original, so both must line up char for char.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Returns true when the already-folded text contains the term (case-insensitive on the term).
pub fn contains_term(folded_text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    folded_text.contains(fold_case(term).as_str())
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Truncates to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
