//! Short textual takeaways derived from token scores

use crate::scorer::TokenScore;
use sentiq_core::Sentiment;

/// Summarize a scored review: strong indicators per side plus confidence
/// commentary. Mirrors what the result view shows next to the heatmap.
pub fn insights(scores: &[TokenScore], sentiment: Sentiment, confidence: f64) -> Vec<String> {
    let strong: Vec<&TokenScore> = scores.iter().filter(|t| t.importance > 0.7).collect();
    let positive = strong.iter().filter(|t| t.score > 0.0).count();
    let negative = strong.iter().filter(|t| t.score < 0.0).count();

    let mut lines = Vec::new();
    match sentiment {
        Sentiment::Positive => {
            lines.push(format!(
                "The model detected {positive} strong positive indicator(s)."
            ));
            if negative > 0 {
                lines.push(format!(
                    "Despite {negative} negative word(s), positive sentiment dominates."
                ));
            }
        }
        Sentiment::Negative => {
            lines.push(format!(
                "The model detected {negative} strong negative indicator(s)."
            ));
            if positive > 0 {
                lines.push(format!(
                    "Even with {positive} positive word(s), negative sentiment prevails."
                ));
            }
        }
    }

    lines.push(format!(
        "Prediction confidence: {:.1}%",
        confidence * 100.0
    ));
    if confidence > 0.9 {
        lines.push("The model is very confident about this prediction.".to_string());
    } else if confidence < 0.6 {
        lines.push("The sentiment is mixed or ambiguous.".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{score_tokens, Lexicon};

    #[test]
    fn test_insights_count_strong_indicators() {
        let scores = score_tokens("a great and beautiful but boring film", &Lexicon::default());
        let lines = insights(&scores, Sentiment::Positive, 0.95);

        assert!(lines[0].contains("2 strong positive"));
        assert!(lines.iter().any(|l| l.contains("Despite 1 negative")));
        assert!(lines.iter().any(|l| l.contains("very confident")));
    }

    #[test]
    fn test_insights_low_confidence_note() {
        let scores = score_tokens("it was fine i guess", &Lexicon::default());
        let lines = insights(&scores, Sentiment::Negative, 0.55);
        assert!(lines.iter().any(|l| l.contains("mixed or ambiguous")));
    }
}
