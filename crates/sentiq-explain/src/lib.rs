//! Word-importance scoring for review text
//!
//! This is a keyword-table heuristic for presentation, not a model-derived
//! explanation: it assigns each token an importance and a signed sentiment
//! contribution from four fixed (but configurable) keyword sets.

mod insights;
mod lexicon;
mod scorer;

pub use insights::insights;
pub use lexicon::Lexicon;
pub use scorer::{score_tokens, TokenScore};
