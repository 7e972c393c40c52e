//! Utterance and speaker-role types.

use serde::{Deserialize, Serialize};

/// Timestamp assigned to lines that carry none.
pub const DEFAULT_TIMESTAMP: &str = "00:00";

/// One speaker-attributed line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
    pub timestamp: String,
}

impl Utterance {
    /// Creates an utterance with the default timestamp.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: DEFAULT_TIMESTAMP.to_string(),
        }
    }

    /// Sets the timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Case-insensitive speaker comparison.
    pub fn is_spoken_by(&self, speaker: &str) -> bool {
        self.speaker.to_lowercase() == speaker.to_lowercase()
    }
}

const CUSTOMER_LABELS: &[&str] = &["customer", "caller"];
const AGENT_LABELS: &[&str] = &["agent", "representative"];

/// Which speaker label plays the customer and which plays the agent.
///
/// Resolution only understands two-party calls. With three or more
/// participants and no explicit labels the agent falls back to the first
/// non-customer speaker, which may be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRoles {
    pub customer: String,
    pub agent: String,
}

impl Default for SpeakerRoles {
    fn default() -> Self {
        Self {
            customer: "customer".to_string(),
            agent: "agent".to_string(),
        }
    }
}

impl SpeakerRoles {
    /// Resolves roles from the utterance sequence.
    ///
    /// - customer: first label in {customer, caller}, else the first speaker seen
    /// - agent: first label in {agent, representative}, else the first other
    ///   speaker seen, else the customer itself
    /// - no utterances: `customer` / `agent`
    pub fn resolve(utterances: &[Utterance]) -> Self {
        let speakers = distinct_speakers(utterances);
        let Some(first) = speakers.first() else {
            return Self::default();
        };

        let customer = find_labelled(&speakers, CUSTOMER_LABELS).unwrap_or(first).clone();

        let agent = find_labelled(&speakers, AGENT_LABELS)
            .or_else(|| {
                speakers
                    .iter()
                    .find(|s| s.to_lowercase() != customer.to_lowercase())
            })
            .unwrap_or(&customer)
            .clone();

        Self { customer, agent }
    }
}

fn find_labelled<'a>(speakers: &'a [String], labels: &[&str]) -> Option<&'a String> {
    speakers
        .iter()
        .find(|s| labels.contains(&s.to_lowercase().as_str()))
}

/// Distinct speaker labels in first-seen order (case-insensitive dedup).
pub fn distinct_speakers(utterances: &[Utterance]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for utterance in utterances {
        let lowered = utterance.speaker.to_lowercase();
        if !seen.iter().any(|s| s.to_lowercase() == lowered) {
            seen.push(utterance.speaker.clone());
        }
    }
    seen
}

/// Number of distinct speakers, never less than one.
pub fn speaker_count(utterances: &[Utterance]) -> usize {
    distinct_speakers(utterances).len().max(1)
}
