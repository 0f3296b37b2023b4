//! Review-text validation applied before any API call

use thiserror::Error;

/// Limits enforced on review text
#[derive(Debug, Clone)]
pub struct ValidationRules {
    pub min_length: usize,
    pub max_length: usize,
    pub min_words: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_length: 10,
            max_length: 1000,
            min_words: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("review text is empty")]
    Empty,
    #[error("review too short: {chars} characters (minimum {min})")]
    TooShort { chars: usize, min: usize },
    #[error("review too long: {chars} characters (maximum {max})")]
    TooLong { chars: usize, max: usize },
    #[error("review needs more words: {words} (minimum {min})")]
    TooFewWords { words: usize, min: usize },
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Check review text against the rules; a failing input never reaches the API
pub fn validate(text: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let chars = trimmed.chars().count();
    if chars < rules.min_length {
        return Err(ValidationError::TooShort {
            chars,
            min: rules.min_length,
        });
    }
    if chars > rules.max_length {
        return Err(ValidationError::TooLong {
            chars,
            max: rules.max_length,
        });
    }

    let words = word_count(trimmed);
    if words < rules.min_words {
        return Err(ValidationError::TooFewWords {
            words,
            min: rules.min_words,
        });
    }

    Ok(())
}
