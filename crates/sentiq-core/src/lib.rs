//! Core domain types shared across the sentiq client

mod config;
mod types;
mod validate;

pub use config::ClientConfig;
pub use types::{Prediction, Scores, Sentiment};
pub use validate::{validate, word_count, ValidationError, ValidationRules};
