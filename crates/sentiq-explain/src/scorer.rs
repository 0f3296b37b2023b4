//! Token scoring with one-step lookback

use crate::lexicon::Lexicon;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Importance and signed sentiment contribution for one whitespace token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenScore {
    pub word: String,
    /// Signed contribution: positive pulls toward positive sentiment
    pub score: f64,
    /// In [0, 1]; sentiment-bearing words score high, filler scores low
    pub importance: f64,
    pub index: usize,
}

/// Score each whitespace-delimited token of `text`.
///
/// Tokens are lowercased and stripped of non-word characters before lookup.
/// A negation flips the sign of the immediately following sentiment word; an
/// intensifier amplifies the next token when that token carries weight.
/// Lookback flags persist only by re-trigger, never by accumulation.
pub fn score_tokens(text: &str, lexicon: &Lexicon) -> Vec<TokenScore> {
    let re = NON_WORD_RE.get_or_init(|| Regex::new(r"[^\w]").unwrap());

    let mut scores = Vec::new();
    let mut previous_is_negation = false;
    let mut previous_is_intensifier = false;

    for (index, word) in text.to_lowercase().split_whitespace().enumerate() {
        let clean = re.replace_all(word, "");

        let mut score: f64;
        let mut importance: f64;
        if lexicon.is_positive(&clean) {
            score = if previous_is_negation { -0.8 } else { 0.8 };
            importance = 0.9;
        } else if lexicon.is_negative(&clean) {
            score = if previous_is_negation { 0.8 } else { -0.8 };
            importance = 0.9;
        } else if lexicon.is_intensifier(&clean) {
            score = 0.0;
            importance = 0.5;
            previous_is_intensifier = true;
        } else if lexicon.is_negation(&clean) {
            score = 0.0;
            importance = 0.7;
            previous_is_negation = true;
        } else {
            score = 0.0;
            importance = 0.1;
        }

        if previous_is_intensifier && importance > 0.5 {
            importance = (importance * 1.3).min(1.0);
            score *= 1.2;
        }

        scores.push(TokenScore {
            word: word.to_string(),
            score,
            importance,
            index,
        });

        if !lexicon.is_intensifier(&clean) {
            previous_is_intensifier = false;
        }
        if !lexicon.is_negation(&clean) {
            previous_is_negation = false;
        }
    }

    scores
}
