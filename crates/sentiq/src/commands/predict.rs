use sentiq_core::{validate, Prediction, ValidationRules};
use sentiq_explain::{insights, score_tokens, Lexicon};

pub fn run(text: &str, explain: bool, no_history: bool, api_url: Option<&str>) -> anyhow::Result<()> {
    let rules = ValidationRules::default();
    validate(text, &rules)?;

    let client = super::api_client(api_url);
    let runtime = super::runtime()?;
    let prediction = runtime.block_on(client.predict(text))?;

    print_prediction(&prediction);

    if !no_history {
        let mut store = super::open_store()?;
        store.add(&prediction);
    }

    if explain {
        let lexicon = Lexicon::default();
        let scores = score_tokens(text, &lexicon);
        super::explain::print_scores(&scores);
        if let (Some(sentiment), Some(confidence)) = (prediction.sentiment, prediction.confidence)
        {
            println!();
            for line in insights(&scores, sentiment, confidence) {
                println!("  {line}");
            }
        }
    }

    Ok(())
}

fn print_prediction(prediction: &Prediction) {
    let label = prediction
        .sentiment
        .map(|s| s.as_str())
        .unwrap_or("unknown");
    match prediction.confidence {
        Some(confidence) => {
            println!("Sentiment: {label} ({:.1}% confidence)", confidence * 100.0)
        }
        None => println!("Sentiment: {label}"),
    }
    if let Some(scores) = &prediction.scores {
        println!(
            "Scores: positive {:.4} | negative {:.4}",
            scores.positive, scores.negative
        );
    }
}

#[cfg(test)]
mod tests {
    use sentiq_core::{validate, ValidationError, ValidationRules};

    #[test]
    fn test_invalid_input_is_rejected_before_any_request() {
        // The validation gate runs first, so bad input never reaches the API
        let rules = ValidationRules::default();
        assert_eq!(validate("meh", &rules), Err(ValidationError::TooShort { chars: 3, min: 10 }));
    }
}
