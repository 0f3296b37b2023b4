use sentiq_export::{read_reviews_csv, write_predictions_csv};
use sentiq_store::BatchRecord;
use std::path::Path;

pub fn run(
    file: &str,
    name: Option<&str>,
    out: Option<&str>,
    api_url: Option<&str>,
) -> anyhow::Result<()> {
    let path = Path::new(file);

    // Parse locally first so an empty or unreadable file fails before upload
    let reviews = read_reviews_csv(path)?;
    println!("Uploading {} review(s) from {file}...", reviews.len());

    let client = super::api_client(api_url);
    let runtime = super::runtime()?;
    let predictions = runtime.block_on(client.predict_file(path))?;

    let mut store = super::open_store()?;
    let record = store.add_batch(&predictions, name);
    if let Some(batch) = record.as_batch() {
        print_summary(batch);
    }

    if let Some(out) = out {
        write_predictions_csv(Path::new(out), &predictions)?;
        println!("\nResults written to {out}");
    }

    Ok(())
}

fn print_summary(batch: &BatchRecord) {
    let summary = &batch.summary;
    println!("\n{}", batch.name);
    println!("================");
    println!("Total reviews: {}", summary.total);
    println!(
        "Positive: {} ({}%)",
        summary.positive, summary.positive_percent
    );
    println!(
        "Negative: {} ({}%)",
        summary.negative, summary.negative_percent
    );
    println!("Avg confidence: {:.4}", summary.avg_confidence);
}
