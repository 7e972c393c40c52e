//! Sentiment lexicons.
//!
//! Valences follow the usual -4..+4 human-rated scale; the scorer
//! normalizes the summed valence into [-1, 1].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Word valences.
pub static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("love", 3.2),
        ("loved", 2.9),
        ("excellent", 3.2),
        ("amazing", 2.8),
        ("wonderful", 2.7),
        ("fantastic", 2.6),
        ("perfect", 2.7),
        ("great", 3.1),
        ("awesome", 3.1),
        ("brilliant", 2.8),
        ("outstanding", 3.0),
        ("good", 1.9),
        ("nice", 1.8),
        ("happy", 2.7),
        ("glad", 2.0),
        ("pleased", 1.9),
        ("satisfied", 1.8),
        ("delighted", 2.9),
        ("thank", 1.5),
        ("thanks", 1.9),
        ("grateful", 2.0),
        ("appreciate", 1.7),
        ("appreciated", 2.3),
        ("helpful", 1.8),
        ("help", 1.7),
        ("resolved", 1.6),
        ("fixed", 1.1),
        ("solved", 1.3),
        ("easy", 1.9),
        ("quick", 1.1),
        ("fast", 1.0),
        ("kind", 2.4),
        ("welcome", 2.0),
        ("best", 3.2),
        ("better", 1.9),
        ("fine", 0.8),
        ("okay", 0.9),
        ("ok", 0.9),
        ("sure", 1.3),
        ("yes", 1.7),
        ("like", 1.5),
        ("enjoy", 2.2),
        ("relieved", 1.5),
        ("reliable", 1.7),
        ("smooth", 1.2),
        ("success", 2.7),
        ("successful", 2.8),
        ("fair", 1.3),
        ("calm", 1.3),
        ("safe", 1.9),
        ("secure", 1.4),
        ("support", 1.7),
        ("understand", 1.0),
        ("sorry", -0.3),
        // negative
        ("hate", -2.7),
        ("terrible", -2.5),
        ("awful", -2.0),
        ("horrible", -2.5),
        ("worst", -3.1),
        ("bad", -2.5),
        ("worse", -2.1),
        ("poor", -2.1),
        ("angry", -2.3),
        ("furious", -2.7),
        ("upset", -1.6),
        ("annoyed", -1.6),
        ("irritated", -1.8),
        ("frustrated", -2.0),
        ("frustrating", -1.9),
        ("disappointed", -1.9),
        ("disappointing", -2.2),
        ("unhappy", -1.8),
        ("dissatisfied", -1.6),
        ("disgusted", -2.4),
        ("useless", -1.8),
        ("ridiculous", -1.5),
        ("unacceptable", -2.0),
        ("pathetic", -2.3),
        ("stupid", -2.4),
        ("incompetent", -2.3),
        ("rude", -2.0),
        ("scam", -2.6),
        ("fraud", -2.8),
        ("stolen", -2.2),
        ("broken", -2.1),
        ("problem", -1.7),
        ("problems", -1.7),
        ("issue", -0.8),
        ("wrong", -2.1),
        ("fail", -2.5),
        ("failed", -2.3),
        ("failure", -2.3),
        ("error", -1.7),
        ("mistake", -1.6),
        ("delay", -1.3),
        ("delayed", -1.5),
        ("late", -1.1),
        ("waiting", -0.5),
        ("lost", -1.3),
        ("blocked", -1.3),
        ("declined", -1.2),
        ("denied", -1.7),
        ("refuse", -1.2),
        ("cancel", -0.8),
        ("complaint", -1.5),
        ("worried", -1.6),
        ("afraid", -1.9),
        ("scared", -1.9),
        ("confused", -1.3),
        ("tired", -1.0),
        ("sick", -2.0),
        ("no", -1.2),
        ("never", -0.6),
        ("lawsuit", -1.8),
        ("sue", -1.5),
        ("threat", -2.4),
        ("damn", -1.7),
        ("hell", -3.6),
        ("nonsense", -1.7),
        ("waste", -1.8),
        ("overcharged", -1.9),
        ("charged", -0.4),
    ]
    .into_iter()
    .collect()
});

/// Tokens that flip the polarity of a following sentiment word.
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "cannot", "cant",
    "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "isnt", "isn't", "wasnt",
    "wasn't", "arent", "aren't", "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't",
    "shouldnt", "shouldn't", "hasnt", "hasn't", "havent", "haven't", "without",
];

/// Number of preceding tokens a negator reaches.
pub const NEGATION_WINDOW: usize = 3;

/// Scaling applied to a negated valence.
pub const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the summed valence.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

/// Amplifier words and the intensity floor each sets.
pub const AMPLIFIERS: &[(&str, f64)] = &[
    ("extremely", 2.0),
    ("very", 1.8),
    ("really", 1.6),
    ("quite", 1.4),
    ("fairly", 1.2),
    ("somewhat", 0.8),
];

/// Terms marking a frustrated customer utterance.
pub const FRUSTRATION_INDICATORS: &[&str] = &[
    "frustrated",
    "angry",
    "upset",
    "annoyed",
    "irritated",
    "exasperated",
    "fed up",
    "unhappy",
    "dissatisfied",
    "disappointed",
    "disgusted",
    "sick of",
    "tired of",
];

/// Terms marking an empathetic agent utterance.
pub const EMPATHY_INDICATORS: &[&str] = &[
    "apologize",
    "sorry",
    "understand",
    "appreciate",
    "thank",
    "help",
    "concern",
    "care",
    "assist",
    "support",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valence_lexicon_is_within_scale() {
        assert!(VALENCE.values().all(|v| (-4.0..=4.0).contains(v)));
    }

    #[test]
    fn valence_lexicon_has_both_polarities() {
        assert!(VALENCE.get("excellent").is_some_and(|v| *v > 0.0));
        assert!(VALENCE.get("terrible").is_some_and(|v| *v < 0.0));
    }

    #[test]
    fn amplifier_table_is_ordered_strongest_first() {
        let weights: Vec<f64> = AMPLIFIERS.iter().map(|(_, w)| *w).collect();
        let mut sorted = weights.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(weights, sorted);
    }
}
