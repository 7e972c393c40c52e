//! Tone Module - Lexicon-driven tone detection for agent statements.
//!
//! Six weighted lexicons plus an implicit neutral category. Only the
//! agent's statements produce flags.

mod engine;
mod lexicon;

pub use engine::{
    Tone, ToneEngine, ToneFlag, ToneReport, ToneScores, FLAG_THRESHOLD, MAX_TONE_FLAGS,
    MAX_TONE_INTENSITY,
};
