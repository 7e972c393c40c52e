//! Conversation Parser - Raw transcript text to ordered utterances.
//!
//! Accepted line shapes:
//!
//! ```text
//! Agent: Hello, how can I help?
//! [01:15] Customer: My card was blocked.
//! a line without a label
//! ```
//!
//! Unlabelled lines alternate between `agent` (even positions) and
//! `customer` (odd positions), counted over every utterance emitted so far.

use super::utterance::{Utterance, DEFAULT_TIMESTAMP};

/// Character separating the speaker label from the utterance text.
pub const SPEAKER_SEPARATOR: char = ':';

/// Parser for "Speaker: utterance" transcripts.
pub struct ConversationParser;

impl ConversationParser {
    /// Parses a raw transcript into utterances in line order.
    ///
    /// # Edge Cases
    /// - Empty input or only blank lines: returns an empty Vec
    /// - Empty label (`": text"`): treated as unlabelled
    pub fn parse(raw: &str) -> Vec<Utterance> {
        let mut utterances: Vec<Utterance> = Vec::new();

        for line in raw.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (timestamp, rest) = match split_timestamp(line) {
                Some((ts, rest)) => (ts.to_string(), rest),
                None => (DEFAULT_TIMESTAMP.to_string(), line),
            };

            let labelled = rest
                .split_once(SPEAKER_SEPARATOR)
                .map(|(speaker, text)| (speaker.trim(), text.trim()))
                .filter(|(speaker, _)| !speaker.is_empty());

            let utterance = match labelled {
                Some((speaker, text)) => Utterance::new(speaker, text),
                None if rest.trim().is_empty() => continue,
                None => Utterance::new(alternating_speaker(utterances.len()), rest.trim()),
            };

            utterances.push(utterance.with_timestamp(timestamp));
        }

        utterances
    }
}

fn alternating_speaker(position: usize) -> &'static str {
    if position % 2 == 0 {
        "agent"
    } else {
        "customer"
    }
}

/// Splits a leading `[mm:ss]` or `[hh:mm:ss]` marker off the line.
fn split_timestamp(line: &str) -> Option<(&str, &str)> {
    let inner_and_rest = line.strip_prefix('[')?;
    let (inner, rest) = inner_and_rest.split_once(']')?;

    let parts: Vec<&str> = inner.split(':').collect();
    let well_formed = (2..=3).contains(&parts.len())
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.len() <= 2 && p.chars().all(|c| c.is_ascii_digit()));

    if !well_formed {
        return None;
    }
    Some((inner, rest.trim_start()))
}
