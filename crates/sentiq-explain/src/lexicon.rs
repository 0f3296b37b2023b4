//! Keyword sets driving the word-importance heuristic

use std::collections::HashSet;

const POSITIVE: &[&str] = &[
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "great",
    "love",
    "perfect",
    "best",
    "brilliant",
    "outstanding",
    "superb",
    "incredible",
    "awesome",
    "magnificent",
    "spectacular",
    "marvelous",
    "terrific",
    "good",
    "nice",
    "beautiful",
    "enjoyed",
    "loved",
    "fun",
    "entertaining",
];

const NEGATIVE: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "bad",
    "worst",
    "hate",
    "boring",
    "disappointing",
    "waste",
    "poor",
    "mediocre",
    "dull",
    "weak",
    "failed",
    "disaster",
    "mess",
    "ruined",
    "pointless",
    "painful",
    "tedious",
    "stupid",
    "garbage",
    "trash",
    "worthless",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "absolutely",
    "completely",
    "totally",
    "really",
    "quite",
    "pretty",
    "highly",
    "incredibly",
    "so",
];

const NEGATIONS: &[&str] = &[
    "not", "never", "no", "nothing", "nowhere", "n't", "neither", "nobody",
];

/// The four keyword sets used by [`crate::score_tokens`]
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashSet<String>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from custom word sets (stored lowercased)
    pub fn new<I, S>(positive: I, negative: I, intensifiers: I, negations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let collect = |words: I| -> HashSet<String> {
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect()
        };
        Self {
            positive: collect(positive),
            negative: collect(negative),
            intensifiers: collect(intensifiers),
            negations: collect(negations),
        }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(POSITIVE, NEGATIVE, INTENSIFIERS, NEGATIONS)
    }
}
