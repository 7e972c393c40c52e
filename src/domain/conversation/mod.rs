//! Conversation Module - Transcript parsing and conversation-level context.
//!
//! # Components
//!
//! - `ConversationParser` - Raw transcript to ordered `Utterance`s
//! - `SpeakerRoles` - Customer/agent role resolution
//! - `DomainDetector` - Keyword heuristic for the policy domain

mod domain_detection;
mod parser;
mod utterance;

pub use domain_detection::{
    DomainDetection, DomainDetector, DomainSelection, UNKNOWN_DOMAIN,
    UNKNOWN_DOMAIN_CONFIDENCE,
};
pub use parser::{ConversationParser, SPEAKER_SEPARATOR};
pub use utterance::{distinct_speakers, speaker_count, SpeakerRoles, Utterance, DEFAULT_TIMESTAMP};
