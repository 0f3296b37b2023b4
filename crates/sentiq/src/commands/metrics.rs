use sentiq_client::Metrics;

pub fn run(threshold: f64, api_url: Option<&str>) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&threshold),
        "threshold must be within [0, 1]"
    );

    let client = super::api_client(api_url);
    let runtime = super::runtime()?;
    let metrics = runtime.block_on(client.metrics(threshold))?;

    print!("{}", render(&metrics));
    Ok(())
}

fn render(metrics: &Metrics) -> String {
    let mut sections = Vec::new();

    sections.push(format!(
        "Model Metrics (threshold {:.2})\n\
         =============================\n\
         Accuracy:  {:.4}\n\
         Precision: {:.4}\n\
         Recall:    {:.4}\n\
         F1:        {:.4}",
        metrics.threshold.unwrap_or(0.5),
        metrics.accuracy,
        metrics.precision,
        metrics.recall,
        metrics.f1,
    ));

    if let [neg, pos] = metrics.label_distribution[..] {
        sections.push(format!(
            "\nLabels\n------\nNegative: {neg} | Positive: {pos}"
        ));
    }

    if metrics.confusion_matrix.len() == 2 && metrics.confusion_matrix.iter().all(|r| r.len() == 2)
    {
        sections.push(format!(
            "\nConfusion Matrix\n----------------\n\
             {:>16} {:>10}\n\
             true neg {:>7} {:>10}\n\
             true pos {:>7} {:>10}",
            "pred neg",
            "pred pos",
            metrics.confusion_matrix[0][0],
            metrics.confusion_matrix[0][1],
            metrics.confusion_matrix[1][0],
            metrics.confusion_matrix[1][1],
        ));
    }

    sections.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_all_scores() {
        let metrics = Metrics {
            accuracy: 0.91,
            precision: 0.9,
            recall: 0.88,
            f1: 0.89,
            confusion_matrix: vec![vec![40, 5], vec![4, 51]],
            label_distribution: vec![45, 55],
            threshold: Some(0.6),
        };
        let out = render(&metrics);
        assert!(out.contains("threshold 0.60"));
        assert!(out.contains("0.9100"));
        assert!(out.contains("Confusion Matrix"));
        assert!(out.contains("51"));
    }

    #[test]
    fn test_render_skips_malformed_matrix() {
        let metrics = Metrics {
            accuracy: 0.5,
            precision: 0.5,
            recall: 0.5,
            f1: 0.5,
            confusion_matrix: vec![],
            label_distribution: vec![],
            threshold: None,
        };
        let out = render(&metrics);
        assert!(!out.contains("Confusion Matrix"));
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(run(1.5, None).is_err());
    }
}
