//! Tone lexicons.
//!
//! Terms are matched as substrings of the case-folded statement, so
//! multi-word entries ("fed up") and stems ("apologize") both work.

use once_cell::sync::Lazy;

use super::Tone;

pub const AGGRESSIVE: &[&str] = &[
    "demand", "insist", "must", "have to", "need to", "you better", "threat", "warn", "serious",
    "angry", "furious",
];

pub const FRUSTRATED: &[&str] = &[
    "frustrated", "annoyed", "irritated", "tired", "fed up", "sick of", "why me", "again", "still",
    "yet", "ridiculous", "unacceptable",
];

pub const EMPATHETIC: &[&str] = &[
    "understand", "appreciate", "sorry", "apologize", "concern", "care", "empathy", "compassion",
    "help", "assist", "support", "grateful",
];

pub const APOLOGETIC: &[&str] = &[
    "apologize", "sorry", "regret", "forgive", "excuse", "mistake", "error", "wrong",
    "mea culpa", "unreasonable", "unfair",
];

pub const ESCALATORY: &[&str] = &[
    "manager", "supervisor", "complaint", "escalate", "legal", "lawsuit", "sue", "authority",
    "report", "higher", "boss",
];

pub const DISMISSIVE: &[&str] = &[
    "whatever", "honestly", "frankly", "clearly", "obviously", "dont care", "fine", "nevermind",
];

/// Lexicon for a scored tone; `Neutral` has none.
pub fn lexicon(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Aggressive => AGGRESSIVE,
        Tone::Frustrated => FRUSTRATED,
        Tone::Empathetic => EMPATHETIC,
        Tone::Apologetic => APOLOGETIC,
        Tone::Escalatory => ESCALATORY,
        Tone::Dismissive => DISMISSIVE,
        Tone::Neutral => &[],
    }
}

/// Every emotional term once, in lexicon order.
pub static EMOTIONAL_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut terms: Vec<&'static str> = Vec::new();
    for tone in Tone::LEXICAL {
        for term in lexicon(tone) {
            if !terms.contains(term) {
                terms.push(term);
            }
        }
    }
    terms
});
