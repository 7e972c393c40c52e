//! Tone Engine - Multi-label tone scoring and agent tone flags.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

use super::lexicon::{lexicon, EMOTIONAL_TERMS};
use crate::domain::conversation::{SpeakerRoles, Utterance};
use crate::domain::foundation::{contains_term, fold_case, truncate_chars, Severity, UnitScore, Valence};

/// Tone scores above this emit a flag.
pub const FLAG_THRESHOLD: f64 = 0.3;

/// Flags retained after ordering.
pub const MAX_TONE_FLAGS: usize = 10;

/// Cap on the linguistic intensity multiplier.
pub const MAX_TONE_INTENSITY: f64 = 2.5;

const SCORE_PER_MATCH: f64 = 0.15;
const MAX_BASE_SCORE: f64 = 0.8;
const NEUTRAL_PENALTY_PER_MATCH: f64 = 0.2;
const STATEMENT_CHARS: usize = 50;

/// Tone categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Aggressive,
    Frustrated,
    Empathetic,
    Apologetic,
    Escalatory,
    Dismissive,
    Neutral,
}

impl Tone {
    /// Tones backed by a lexicon, in scoring order.
    pub const LEXICAL: [Tone; 6] = [
        Tone::Aggressive,
        Tone::Frustrated,
        Tone::Empathetic,
        Tone::Apologetic,
        Tone::Escalatory,
        Tone::Dismissive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Aggressive => "aggressive",
            Tone::Frustrated => "frustrated",
            Tone::Empathetic => "empathetic",
            Tone::Apologetic => "apologetic",
            Tone::Escalatory => "escalatory",
            Tone::Dismissive => "dismissive",
            Tone::Neutral => "neutral",
        }
    }

    /// Static contribution of this tone to conversation risk.
    pub fn risk_contribution(&self) -> Valence {
        Valence::new(match self {
            Tone::Aggressive => 0.9,
            Tone::Escalatory => 0.85,
            Tone::Frustrated => 0.6,
            Tone::Dismissive => 0.4,
            Tone::Empathetic => -0.3,
            Tone::Apologetic => -0.2,
            Tone::Neutral => 0.0,
        })
    }

    /// Severity of a flag for this tone at `score`.
    pub fn severity_at(&self, score: f64) -> Severity {
        match self {
            Tone::Aggressive | Tone::Escalatory if score > 0.6 => Severity::Critical,
            Tone::Aggressive | Tone::Escalatory | Tone::Frustrated if score > 0.5 => Severity::High,
            Tone::Dismissive if score > 0.5 => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tone scores for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToneScores {
    pub aggressive: UnitScore,
    pub frustrated: UnitScore,
    pub empathetic: UnitScore,
    pub apologetic: UnitScore,
    pub escalatory: UnitScore,
    pub dismissive: UnitScore,
    pub neutral: UnitScore,
}

impl ToneScores {
    pub fn get(&self, tone: Tone) -> UnitScore {
        match tone {
            Tone::Aggressive => self.aggressive,
            Tone::Frustrated => self.frustrated,
            Tone::Empathetic => self.empathetic,
            Tone::Apologetic => self.apologetic,
            Tone::Escalatory => self.escalatory,
            Tone::Dismissive => self.dismissive,
            Tone::Neutral => self.neutral,
        }
    }

    fn set(&mut self, tone: Tone, score: UnitScore) {
        match tone {
            Tone::Aggressive => self.aggressive = score,
            Tone::Frustrated => self.frustrated = score,
            Tone::Empathetic => self.empathetic = score,
            Tone::Apologetic => self.apologetic = score,
            Tone::Escalatory => self.escalatory = score,
            Tone::Dismissive => self.dismissive = score,
            Tone::Neutral => self.neutral = score,
        }
    }

    /// All seven scores in scoring order, neutral last.
    pub fn iter(&self) -> impl Iterator<Item = (Tone, UnitScore)> + '_ {
        Tone::LEXICAL
            .into_iter()
            .chain(std::iter::once(Tone::Neutral))
            .map(move |tone| (tone, self.get(tone)))
    }
}

/// A significant tone detected in an agent statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneFlag {
    pub speaker: String,
    pub tone: Tone,
    pub timestamp: String,
    pub statement: String,
    pub score: UnitScore,
    pub severity: Severity,
    pub risk_contribution: Valence,
}

/// Tone output for one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneReport {
    pub tone_flags: Vec<ToneFlag>,
    pub dominant_tone: Tone,
    pub tone_distribution: BTreeMap<Tone, usize>,
    pub tone_consistency: f64,
    pub red_flags_summary: String,
    pub recommendations: Vec<String>,
}

impl Default for ToneReport {
    fn default() -> Self {
        Self {
            tone_flags: Vec::new(),
            dominant_tone: Tone::Neutral,
            tone_distribution: BTreeMap::new(),
            tone_consistency: 1.0,
            red_flags_summary: NO_ISSUES_SUMMARY.to_string(),
            recommendations: Vec::new(),
        }
    }
}

impl ToneReport {
    /// Whether any flag carried the given tone.
    pub fn has_tone(&self, tone: Tone) -> bool {
        self.tone_distribution.contains_key(&tone)
    }
}

const NO_ISSUES_SUMMARY: &str = "No significant tone issues detected.";
const MINOR_ISSUES_SUMMARY: &str = "Minor tone variations, overall professional.";

/// Scores statements for tone and flags significant agent tones.
pub struct ToneEngine;

impl ToneEngine {
    /// Scores one statement for every tone.
    ///
    /// Lexicon matches are distinct terms contained in the folded text.
    /// Intensity is read from the original text so capitalization counts.
    pub fn score_statement(text: &str) -> ToneScores {
        let folded = fold_case(text);
        let intensity = Self::intensity(text);
        let mut scores = ToneScores::default();

        for tone in Tone::LEXICAL {
            let matches = count_matches(&folded, lexicon(tone));
            let score = if matches == 0 {
                0.0
            } else {
                let base = (SCORE_PER_MATCH * matches as f64).min(MAX_BASE_SCORE);
                (base * intensity).min(1.0)
            };
            scores.set(tone, UnitScore::new(score));
        }

        let emotional = count_matches(&folded, &EMOTIONAL_TERMS);
        scores.neutral = UnitScore::new(1.0 - NEUTRAL_PENALTY_PER_MATCH * emotional as f64);
        scores
    }

    /// Linguistic intensity multiplier, in [1, 2.5].
    pub fn intensity(text: &str) -> f64 {
        let mut intensity: f64 = 1.0;

        let exclamations = text.matches('!').count();
        if exclamations >= 3 {
            intensity *= 1.5;
        } else if exclamations >= 1 {
            intensity *= 1.2;
        }

        if text.matches('?').count() >= 2 {
            intensity *= 1.1;
        }

        let total = text.chars().count();
        let upper = text.chars().filter(|c| c.is_uppercase()).count();
        if total > 0 && upper as f64 / total as f64 > 0.3 {
            intensity *= 1.3;
        }

        let mut word_counts: HashMap<String, usize> = HashMap::new();
        for word in fold_case(text).split_whitespace() {
            *word_counts.entry(word.to_string()).or_default() += 1;
        }
        if word_counts.values().any(|count| *count >= 3) {
            intensity *= 1.2;
        }

        intensity.min(MAX_TONE_INTENSITY)
    }

    /// Analyzes the agent's statements.
    pub fn analyze(utterances: &[Utterance], roles: &SpeakerRoles) -> ToneReport {
        let mut flags: Vec<ToneFlag> = Vec::new();

        for utterance in utterances.iter().filter(|u| u.is_spoken_by(&roles.agent)) {
            let scores = Self::score_statement(&utterance.text);
            for (tone, score) in scores.iter() {
                if score.value() <= FLAG_THRESHOLD {
                    continue;
                }
                flags.push(ToneFlag {
                    speaker: utterance.speaker.clone(),
                    tone,
                    timestamp: utterance.timestamp.clone(),
                    statement: truncate_chars(&utterance.text, STATEMENT_CHARS),
                    score,
                    severity: tone.severity_at(score.value()),
                    risk_contribution: tone.risk_contribution(),
                });
            }
        }

        let dominant_tone = dominant_tone(&flags);
        let mut tone_distribution = BTreeMap::new();
        for flag in &flags {
            *tone_distribution.entry(flag.tone).or_insert(0) += 1;
        }
        let tone_consistency = consistency(&flags);
        let red_flags_summary = summarize(&flags);

        // Stable: critical, then high, otherwise conversation order.
        flags.sort_by_key(|f| f.severity.flag_rank());
        let total_flags = flags.len();
        flags.truncate(MAX_TONE_FLAGS);

        let mut report = ToneReport {
            tone_flags: flags,
            dominant_tone,
            tone_distribution,
            tone_consistency,
            red_flags_summary,
            recommendations: Vec::new(),
        };
        report.recommendations = recommendations(&report);

        debug!(
            flags = total_flags,
            dominant = %report.dominant_tone,
            "Tone analysis complete"
        );

        report
    }
}

fn count_matches(folded: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| contains_term(folded, t)).count()
}

/// Most frequent flagged tone; ties go to the tone flagged first.
fn dominant_tone(flags: &[ToneFlag]) -> Tone {
    let mut counts: Vec<(Tone, usize)> = Vec::new();
    for flag in flags {
        match counts.iter_mut().find(|(tone, _)| *tone == flag.tone) {
            Some((_, count)) => *count += 1,
            None => counts.push((flag.tone, 1)),
        }
    }

    let mut best: Option<(Tone, usize)> = None;
    for (tone, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((tone, count));
        }
    }
    best.map(|(tone, _)| tone).unwrap_or(Tone::Neutral)
}

fn consistency(flags: &[ToneFlag]) -> f64 {
    if flags.len() < 2 {
        return 1.0;
    }
    let mut distinct: Vec<Tone> = flags.iter().map(|f| f.tone).collect();
    distinct.sort();
    distinct.dedup();
    1.0 - (distinct.len() as f64 / flags.len() as f64) * 0.5
}

fn summarize(flags: &[ToneFlag]) -> String {
    if flags.is_empty() {
        return NO_ISSUES_SUMMARY.to_string();
    }

    let critical = flags.iter().filter(|f| f.severity == Severity::Critical).count();
    let high = flags.iter().filter(|f| f.severity == Severity::High).count();

    let mut parts = Vec::new();
    if critical > 0 {
        parts.push(format!("CRITICAL: {critical} aggressive/escalatory moments detected"));
    }
    if high > 0 {
        parts.push(format!("HIGH: {high} frustrated/escalatory statements"));
    }

    if parts.is_empty() {
        MINOR_ISSUES_SUMMARY.to_string()
    } else {
        format!("{}.", parts.join(". "))
    }
}

fn recommendations(report: &ToneReport) -> Vec<String> {
    let mut recommendations = Vec::new();
    if report.has_tone(Tone::Aggressive) {
        recommendations.push("Train agent on de-escalation techniques".to_string());
    }
    if report.has_tone(Tone::Dismissive) {
        recommendations.push("Improve customer empathy and active listening".to_string());
    }
    if report.tone_consistency < 0.5 {
        recommendations.push("Agent tone is inconsistent; provide coaching".to_string());
    }
    if report.has_tone(Tone::Escalatory) {
        recommendations.push("Monitor for potential escalations".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(text: &str) -> Utterance {
        Utterance::new("Agent", text)
    }

    fn roles() -> SpeakerRoles {
        SpeakerRoles {
            customer: "Customer".into(),
            agent: "Agent".into(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const AGGRESSIVE_LINE: &str = "You must pay. I demand it. You better hurry, this is serious!!!";

    #[test]
    fn plain_statement_is_fully_neutral() {
        let scores = ToneEngine::score_statement("Your balance is 500 dollars.");
        assert_eq!(scores.neutral, UnitScore::ONE);
        assert!(Tone::LEXICAL.iter().all(|t| scores.get(*t) == UnitScore::ZERO));
    }

    #[test]
    fn base_score_scales_with_matches() {
        let scores = ToneEngine::score_statement("I understand and I am sorry, let me help");
        assert!(approx(scores.empathetic.value(), 0.45));
        assert!(approx(scores.apologetic.value(), 0.15));
        // understand, sorry, help counted once across lexicons
        assert!(approx(scores.neutral.value(), 0.4));
    }

    #[test]
    fn intensity_markers_compose() {
        assert!(approx(ToneEngine::intensity("fine"), 1.0));
        assert!(approx(ToneEngine::intensity("fine!"), 1.2));
        assert!(approx(ToneEngine::intensity("fine!!!"), 1.5));
        assert!(approx(ToneEngine::intensity("what?? really"), 1.1));
        assert!(approx(ToneEngine::intensity("STOP NOW"), 1.3));
        assert!(approx(ToneEngine::intensity("no no no"), 1.2));
        assert!(approx(ToneEngine::intensity("NO NO NO NO!!! WHY??"), 2.5));
    }

    #[test]
    fn aggressive_statement_scores_critical() {
        let scores = ToneEngine::score_statement(AGGRESSIVE_LINE);
        // must, demand, you better, serious -> 0.6 base x 1.5
        assert!(approx(scores.aggressive.value(), 0.9));
        assert_eq!(Tone::Aggressive.severity_at(scores.aggressive.value()), Severity::Critical);
    }

    #[test]
    fn severity_rules() {
        assert_eq!(Tone::Escalatory.severity_at(0.61), Severity::Critical);
        assert_eq!(Tone::Aggressive.severity_at(0.6), Severity::High);
        assert_eq!(Tone::Frustrated.severity_at(0.9), Severity::High);
        assert_eq!(Tone::Dismissive.severity_at(0.55), Severity::Medium);
        assert_eq!(Tone::Empathetic.severity_at(0.9), Severity::Low);
        assert_eq!(Tone::Frustrated.severity_at(0.5), Severity::Low);
    }

    #[test]
    fn only_agent_statements_are_flagged() {
        let utterances = vec![
            Utterance::new("Customer", AGGRESSIVE_LINE),
            agent("Your balance is 500 dollars."),
        ];
        let report = ToneEngine::analyze(&utterances, &roles());
        assert_eq!(report.tone_flags.len(), 1);
        assert_eq!(report.tone_flags[0].tone, Tone::Neutral);
        assert_eq!(report.tone_flags[0].speaker, "Agent");
        assert_eq!(report.dominant_tone, Tone::Neutral);
    }

    #[test]
    fn critical_flags_sort_first_and_stay_stable() {
        let utterances = vec![
            agent("Your balance is 500 dollars."),
            agent(AGGRESSIVE_LINE),
        ];
        let report = ToneEngine::analyze(&utterances, &roles());
        assert_eq!(report.tone_flags[0].tone, Tone::Aggressive);
        assert_eq!(report.tone_flags[0].severity, Severity::Critical);
        assert_eq!(report.tone_flags[1].tone, Tone::Neutral);
        assert!(report.red_flags_summary.starts_with("CRITICAL: 1"));
        assert!(report
            .recommendations
            .contains(&"Train agent on de-escalation techniques".to_string()));
    }

    #[test]
    fn flags_truncated_to_ten_but_distribution_counts_all() {
        let utterances: Vec<_> = (0..12).map(|_| agent("The transfer is complete.")).collect();
        let report = ToneEngine::analyze(&utterances, &roles());
        assert_eq!(report.tone_flags.len(), MAX_TONE_FLAGS);
        assert_eq!(report.tone_distribution.get(&Tone::Neutral), Some(&12));
        assert_eq!(report.red_flags_summary, MINOR_ISSUES_SUMMARY);
    }

    #[test]
    fn consistency_formula() {
        let utterances = vec![
            agent("The transfer is complete."),
            agent("I understand and I am sorry, let me help"),
        ];
        // flags: neutral, empathetic, neutral -> 2 distinct / 3
        let report = ToneEngine::analyze(&utterances, &roles());
        assert_eq!(report.tone_distribution.values().sum::<usize>(), 3);
        assert!(approx(report.tone_consistency, 1.0 - (2.0 / 3.0) * 0.5));
    }

    #[test]
    fn dominant_tone_ties_go_to_first_seen() {
        let utterances = vec![
            agent("I understand and I am sorry, let me help"),
            agent("Obviously, honestly, clearly, frankly that is whatever!!!"),
        ];
        let report = ToneEngine::analyze(&utterances, &roles());
        assert_eq!(report.dominant_tone, Tone::Empathetic);
    }

    #[test]
    fn empty_conversation_defaults() {
        let report = ToneEngine::analyze(&[], &roles());
        assert_eq!(report, ToneReport::default());
    }

    #[test]
    fn risk_contribution_table() {
        assert_eq!(Tone::Aggressive.risk_contribution().value(), 0.9);
        assert_eq!(Tone::Empathetic.risk_contribution().value(), -0.3);
        assert_eq!(Tone::Neutral.risk_contribution().value(), 0.0);
    }
}
