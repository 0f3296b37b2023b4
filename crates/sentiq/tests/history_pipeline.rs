use sentiq_core::{Prediction, Sentiment};
use sentiq_store::{HistoryRecord, HistoryStore};
use tempfile::TempDir;

fn prediction(text: &str, sentiment: Sentiment, confidence: f64) -> Prediction {
    Prediction::new(text, sentiment, confidence)
}

#[test]
fn test_bound_holds_for_any_overflow() {
    let temp = TempDir::new().unwrap();
    let mut store = HistoryStore::open(temp.path().join("history.json")).with_max_items(10);

    for i in 0..35 {
        store.add(&prediction(
            &format!("review number {i}"),
            Sentiment::Positive,
            0.8,
        ));
    }

    // Exactly the bound survives, and it is the most recent M additions
    assert_eq!(store.get_all().len(), 10);
    let texts: Vec<_> = store
        .get_all()
        .iter()
        .filter_map(|r| r.as_single())
        .filter_map(|s| s.text.clone())
        .collect();
    let expected: Vec<String> = (25..35).rev().map(|i| format!("review number {i}")).collect();
    assert_eq!(texts, expected);
}

#[test]
fn test_mixed_single_and_batch_lifecycle() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.json");
    let mut store = HistoryStore::open(&path);

    store.add(&prediction("a charming debut", Sentiment::Positive, 0.92));
    let batch_items: Vec<_> = (0..15)
        .map(|i| {
            prediction(
                &format!("bulk review {i}"),
                if i % 3 == 0 {
                    Sentiment::Negative
                } else {
                    Sentiment::Positive
                },
                0.75,
            )
        })
        .collect();
    let batch = store.add_batch(&batch_items, Some("opening weekend"));

    // Summary covers the whole batch even though the preview is capped
    let batch = batch.as_batch().unwrap();
    assert_eq!(batch.count, 15);
    assert_eq!(batch.predictions.len(), 10);
    assert_eq!(
        batch.summary.positive + batch.summary.negative,
        batch_items.len()
    );
    let percent_sum = batch.summary.positive_percent + batch.summary.negative_percent;
    assert!((percent_sum - 100.0).abs() < 0.11);

    // Reopening sees the same collection
    drop(store);
    let reopened = HistoryStore::open(&path);
    assert_eq!(reopened.get_all().len(), 2);
    assert!(reopened.get_all()[0].is_batch());

    let stats = reopened.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.single_predictions, 1);
    assert_eq!(stats.batch_predictions, 1);
}

#[test]
fn test_export_import_reproduces_collection() {
    let temp = TempDir::new().unwrap();
    let mut source = HistoryStore::open(temp.path().join("source.json"));

    source.add(&prediction("great movie", Sentiment::Positive, 0.9));
    source.add(&prediction("dire sequel", Sentiment::Negative, 0.85));
    source.add_batch(
        &[prediction("okay film", Sentiment::Positive, 0.6)],
        Some("festival"),
    );
    let exported = source.export_json().unwrap();

    let mut target = HistoryStore::open(temp.path().join("target.json"));
    target.import_json(&exported).unwrap();

    let source_ids: Vec<i64> = source.get_all().iter().map(HistoryRecord::id).collect();
    let target_ids: Vec<i64> = target.get_all().iter().map(HistoryRecord::id).collect();
    assert_eq!(source_ids, target_ids);

    let original = source.get_all()[2].as_single().unwrap();
    let roundtrip = target.get_all()[2].as_single().unwrap();
    assert_eq!(original.text, roundtrip.text);
    assert_eq!(original.sentiment, roundtrip.sentiment);
    assert_eq!(original.confidence, roundtrip.confidence);
}

#[test]
fn test_import_merge_prefers_imported_and_respects_bound() {
    let temp = TempDir::new().unwrap();
    let mut store = HistoryStore::open(temp.path().join("history.json")).with_max_items(4);

    for i in 0..3 {
        store.add(&prediction(&format!("local {i}"), Sentiment::Positive, 0.7));
    }

    let imported = serde_json::json!([
        {"type": "single", "id": 1, "text": "imported a", "sentiment": 0,
         "timestamp": "2024-12-01T08:00:00Z"},
        {"type": "single", "id": 2, "text": "imported b", "sentiment": 1,
         "timestamp": "2024-12-01T09:00:00Z"}
    ]);
    store.import_json(&imported.to_string()).unwrap();

    let all = store.get_all();
    assert_eq!(all.len(), 4); // 2 imported + 3 local, truncated to the bound
    assert_eq!(all[0].id(), 1); // imported records come first
    assert_eq!(all[1].id(), 2);
}

#[test]
fn test_import_failure_leaves_history_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.json");
    let mut store = HistoryStore::open(&path);
    store.add(&prediction("the only record", Sentiment::Positive, 0.9));

    assert!(store.import_json("{\"not\": \"an array\"}").is_err());
    assert!(store.import_json("also not json").is_err());

    assert_eq!(store.get_all().len(), 1);
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_search_and_filters_compose_over_real_history() {
    let temp = TempDir::new().unwrap();
    let mut store = HistoryStore::open(temp.path().join("history.json"));

    store.add(&prediction("GREAT movie night", Sentiment::Positive, 0.95));
    store.add(&prediction("a total waste of time", Sentiment::Negative, 0.88));
    store.add_batch(
        &[prediction("fine", Sentiment::Positive, 0.7)],
        Some("great batch"),
    );

    // Case-insensitive text search also covers batch names
    assert_eq!(store.search("great").len(), 2);
    assert_eq!(store.search("WASTE").len(), 1);
    assert!(store.search("terrible").is_empty());

    // Sentiment filter excludes non-matching singles but keeps batches
    let positives = store.filter_by_sentiment(Sentiment::Positive);
    assert_eq!(positives.len(), 2);

    // Date range covering everything returns everything, inclusive
    let oldest = store.get_all().last().unwrap().timestamp();
    let newest = store.get_all().first().unwrap().timestamp();
    assert_eq!(store.filter_by_date_range(oldest, newest).len(), 3);
}
