use sentiq_client::DatasetInfo;

pub fn run(api_url: Option<&str>) -> anyhow::Result<()> {
    let client = super::api_client(api_url);
    let runtime = super::runtime()?;
    let info = runtime.block_on(client.dataset_info())?;

    print!("{}", render(&info));
    Ok(())
}

fn render(info: &DatasetInfo) -> String {
    let mut out = String::from("Dataset\n=======\n");
    for (key, value) in &info.stats {
        out.push_str(&format!("{key}: {value}\n"));
    }

    if !info.samples.is_empty() {
        out.push_str("\nSamples\n-------\n");
        for sample in &info.samples {
            let preview: String = sample.text.chars().take(70).collect();
            out.push_str(&format!("  [{}] {preview}\n", sample.label));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiq_client::DatasetSample;
    use sentiq_core::Sentiment;

    #[test]
    fn test_render_stats_and_samples() {
        let mut stats = std::collections::BTreeMap::new();
        stats.insert("Total samples".to_string(), serde_json::json!(5000));

        let info = DatasetInfo {
            stats,
            samples: vec![DatasetSample {
                text: "an instant classic".to_string(),
                label: Sentiment::Positive,
            }],
        };

        let out = render(&info);
        assert!(out.contains("Total samples: 5000"));
        assert!(out.contains("[positive] an instant classic"));
    }
}
