//! Statement Scorer - Lexicon-weighted valence with intensity adjustment.

use serde::{Deserialize, Serialize};

use super::lexicon::{
    AMPLIFIERS, NEGATION_SCALAR, NEGATION_WINDOW, NEGATORS, NORMALIZATION_ALPHA, VALENCE,
};
use crate::domain::foundation::{fold_case, Valence};

/// Cap on the combined intensity multiplier.
pub const MAX_INTENSITY: f64 = 2.0;

/// Multiplier for a word repeated three or more times in a row.
pub const REPETITION_MULTIPLIER: f64 = 1.5;

/// Multiplier for `!!!` or `???`.
pub const PUNCTUATION_MULTIPLIER: f64 = 1.3;

/// Five-way label for a valence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    /// Maps a score to its label.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            SentimentLabel::VeryPositive
        } else if score >= 0.05 {
            SentimentLabel::Positive
        } else if score > -0.05 {
            SentimentLabel::Neutral
        } else if score >= -0.5 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::VeryNegative
        }
    }
}

/// Coarse emotional tone implied by a valence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTone {
    Positive,
    Warm,
    Neutral,
    Frustrated,
    Hostile,
}

impl EmotionalTone {
    /// Maps a score to its tone.
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            EmotionalTone::Positive
        } else if score > 0.1 {
            EmotionalTone::Warm
        } else if score > -0.1 {
            EmotionalTone::Neutral
        } else if score > -0.5 {
            EmotionalTone::Frustrated
        } else {
            EmotionalTone::Hostile
        }
    }
}

/// Scored statement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatementSentiment {
    /// Normalized polarity before intensity.
    pub polarity: Valence,
    /// Combined intensity multiplier, in [1, 2].
    pub intensity: f64,
    /// Final score: polarity scaled by intensity, re-clamped.
    pub score: Valence,
    pub label: SentimentLabel,
}

/// Scores single statements.
pub struct StatementScorer;

impl StatementScorer {
    /// Scores a statement.
    ///
    /// # Algorithm
    /// 1. sum word valences, negated words scaled by -0.74
    /// 2. polarity = sum / sqrt(sum² + 15)
    /// 3. score = clamp(polarity × intensity, -1, 1)
    pub fn score(text: &str) -> StatementSentiment {
        let tokens = tokenize(text);
        let polarity = Valence::new(Self::polarity(&tokens));
        let intensity = Self::intensity(text, &tokens);
        let score = Valence::new(polarity.value() * intensity);

        StatementSentiment {
            polarity,
            intensity,
            score,
            label: SentimentLabel::from_score(score.value()),
        }
    }

    fn polarity(tokens: &[String]) -> f64 {
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(valence) = VALENCE.get(token.as_str()) else {
                continue;
            };
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            let negated = tokens[window_start..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));

            sum += if negated {
                valence * NEGATION_SCALAR
            } else {
                *valence
            };
        }

        if sum == 0.0 {
            return 0.0;
        }
        sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()
    }

    /// Intensity multiplier from amplifiers, repetition and punctuation.
    ///
    /// Amplifiers set a floor (the strongest matched, never below 1.0);
    /// repetition and punctuation multiply on top; the total is capped at 2.0.
    pub fn intensity(text: &str, tokens: &[String]) -> f64 {
        let mut intensity: f64 = 1.0;

        for (marker, weight) in AMPLIFIERS {
            if tokens.iter().any(|t| t == marker) {
                intensity = intensity.max(*weight);
            }
        }

        if has_repeated_run(tokens, 3) {
            intensity *= REPETITION_MULTIPLIER;
        }

        if text.contains("!!!") || text.contains("???") {
            intensity *= PUNCTUATION_MULTIPLIER;
        }

        intensity.min(MAX_INTENSITY)
    }
}

/// Lowercased word tokens; apostrophes stay inside words.
pub fn tokenize(text: &str) -> Vec<String> {
    fold_case(&text.replace('\u{2019}', "'"))
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_repeated_run(tokens: &[String], run: usize) -> bool {
    if run == 0 || tokens.len() < run {
        return false;
    }
    tokens
        .windows(run)
        .any(|w| w.iter().all(|t| t == &w[0]))
}
