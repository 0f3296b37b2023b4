use sentiq_explain::{score_tokens, Lexicon, TokenScore};

pub fn run(text: &str) -> anyhow::Result<()> {
    let scores = score_tokens(text, &Lexicon::default());
    if scores.is_empty() {
        println!("Nothing to score");
        return Ok(());
    }

    print_scores(&scores);
    println!("\nKeyword heuristic only; this is not a model explanation.");
    Ok(())
}

pub fn print_scores(scores: &[TokenScore]) {
    println!("\nWord Importance");
    println!("===============");
    for token in scores {
        println!(
            "  {:<20} {} {:>5.0}%",
            truncate_word(&token.word),
            direction(token.score),
            token.importance * 100.0
        );
    }
}

fn direction(score: f64) -> &'static str {
    if score > 0.0 {
        "+"
    } else if score < 0.0 {
        "-"
    } else {
        " "
    }
}

fn truncate_word(word: &str) -> String {
    if word.chars().count() <= 20 {
        word.to_string()
    } else {
        word.chars().take(17).collect::<String>() + "..."
    }
}
