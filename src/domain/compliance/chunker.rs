//! Sentence chunker with sentence overlap.

use serde::{Deserialize, Serialize};

/// Chunking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// A chunk is emitted once its joined length reaches this many characters.
    pub chunk_size: usize,
    /// Trailing sentences carried into the next chunk.
    pub overlap_sentences: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 200,
            overlap_sentences: 2,
        }
    }
}

/// Splits after `.`, `!` or `?` when followed by whitespace.
///
/// The whitespace run is dropped; empty pieces are skipped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(next_idx, next)) = chars.peek() else {
            continue;
        };
        if !next.is_whitespace() {
            continue;
        }

        let end = idx + c.len_utf8();
        push_trimmed(&mut sentences, &text[start..end]);

        start = next_idx;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            chars.next();
            start = ws_idx + ws.len_utf8();
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

/// Accumulates sentences into chunks.
///
/// A chunk is emitted when the space-joined sentences reach `chunk_size`
/// characters; the next chunk starts from the last `overlap_sentences`
/// sentences. The final partial chunk is emitted only if it holds a
/// sentence no earlier chunk has.
pub fn chunk_text(text: &str, config: &ChunkingConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut has_unemitted = false;

    for sentence in split_sentences(text) {
        current.push(sentence);
        has_unemitted = true;

        let joined = current.join(" ");
        if joined.chars().count() >= config.chunk_size {
            chunks.push(joined);
            has_unemitted = false;
            if current.len() > config.overlap_sentences {
                current.drain(..current.len() - config.overlap_sentences);
            }
        }
    }

    if has_unemitted && !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
