//! History record types

use chrono::{DateTime, Utc};
use sentiq_core::{Prediction, Scores, Sentiment};
use serde::{Deserialize, Deserializer, Serialize};

/// How many per-item predictions a batch record keeps for preview.
/// `count` always reflects the true batch size; do not assume
/// `predictions.len() == count`.
pub const BATCH_PREVIEW_LEN: usize = 10;

/// A stored prediction, tagged by origin
///
/// `single` and `csv` share the same shape; `csv` is kept so collections
/// exported by older clients import unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HistoryRecord {
    #[serde(rename = "single")]
    Single(SingleRecord),
    #[serde(rename = "csv")]
    Csv(SingleRecord),
    #[serde(rename = "batch")]
    Batch(BatchRecord),
}

impl HistoryRecord {
    pub fn id(&self) -> i64 {
        match self {
            HistoryRecord::Single(r) | HistoryRecord::Csv(r) => r.id,
            HistoryRecord::Batch(r) => r.id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            HistoryRecord::Single(r) | HistoryRecord::Csv(r) => r.timestamp,
            HistoryRecord::Batch(r) => r.timestamp,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, HistoryRecord::Batch(_))
    }

    pub fn as_single(&self) -> Option<&SingleRecord> {
        match self {
            HistoryRecord::Single(r) | HistoryRecord::Csv(r) => Some(r),
            HistoryRecord::Batch(_) => None,
        }
    }

    pub fn as_batch(&self) -> Option<&BatchRecord> {
        match self {
            HistoryRecord::Batch(r) => Some(r),
            _ => None,
        }
    }
}

/// One prediction result
///
/// Every payload field except `id` and `timestamp` is optional: a prediction
/// missing a field is stored with the field absent, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate of many predictions submitted together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRecord {
    pub id: i64,
    pub name: String,
    /// True total, independent of the bounded preview below
    pub count: usize,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub summary: BatchSummary,
    pub timestamp: DateTime<Utc>,
}

/// Summary computed once over the whole batch at insertion time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    #[serde(rename = "avgConfidence", deserialize_with = "lenient_f64")]
    pub avg_confidence: f64,
    #[serde(rename = "positivePercent", deserialize_with = "lenient_f64")]
    pub positive_percent: f64,
    #[serde(rename = "negativePercent", deserialize_with = "lenient_f64")]
    pub negative_percent: f64,
}

impl BatchSummary {
    /// Summarize the full prediction set (not just the stored preview).
    /// Zero-length input yields zeros rather than NaN.
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        let total = predictions.len();
        if total == 0 {
            return Self {
                total: 0,
                positive: 0,
                negative: 0,
                avg_confidence: 0.0,
                positive_percent: 0.0,
                negative_percent: 0.0,
            };
        }

        let positive = predictions
            .iter()
            .filter(|p| p.sentiment == Some(Sentiment::Positive))
            .count();
        let negative = total - positive;
        let avg_confidence = predictions
            .iter()
            .map(|p| p.confidence.unwrap_or(0.0))
            .sum::<f64>()
            / total as f64;

        Self {
            total,
            positive,
            negative,
            avg_confidence: round_to(avg_confidence, 4),
            positive_percent: round_to(positive as f64 / total as f64 * 100.0, 1),
            negative_percent: round_to(negative as f64 / total as f64 * 100.0, 1),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Accept a float, an integer, or the string-encoded numbers older exports
/// carry (`"66.7"`, `"0.9412"`)
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid number {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(sentiment: Sentiment, confidence: f64) -> Prediction {
        Prediction::new("a review", sentiment, confidence)
    }

    #[test]
    fn test_summary_counts_and_percents() {
        let predictions = vec![
            prediction(Sentiment::Positive, 0.9),
            prediction(Sentiment::Positive, 0.8),
            prediction(Sentiment::Negative, 0.7),
        ];

        let summary = BatchSummary::from_predictions(&predictions);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.positive + summary.negative, predictions.len());
        assert_eq!(summary.avg_confidence, 0.8);
        assert_eq!(summary.positive_percent, 66.7);
        assert_eq!(summary.negative_percent, 33.3);
        assert!((summary.positive_percent + summary.negative_percent - 100.0).abs() < 0.11);
    }

    #[test]
    fn test_summary_empty_input_is_guarded() {
        let summary = BatchSummary::from_predictions(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_confidence, 0.0);
        assert_eq!(summary.positive_percent, 0.0);
        assert_eq!(summary.negative_percent, 0.0);
    }

    #[test]
    fn test_summary_missing_confidence_counts_as_zero() {
        let mut p = prediction(Sentiment::Positive, 0.8);
        p.confidence = None;
        let summary = BatchSummary::from_predictions(&[p, prediction(Sentiment::Negative, 0.4)]);
        assert_eq!(summary.avg_confidence, 0.2);
    }

    #[test]
    fn test_record_tagged_roundtrip() {
        let record = HistoryRecord::Single(SingleRecord {
            id: 1700000000000,
            text: Some("great movie".to_string()),
            sentiment: Some(Sentiment::Positive),
            confidence: Some(0.91),
            scores: None,
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"single\""));

        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), 1700000000000);
        assert!(!back.is_batch());
    }

    #[test]
    fn test_csv_records_behave_as_singles() {
        let json = r#"{"type":"csv","id":7,"text":"ok film","sentiment":0,"timestamp":"2025-03-01T10:00:00Z"}"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert!(record.as_single().is_some());
        assert!(!record.is_batch());
    }

    #[test]
    fn test_batch_record_accepts_legacy_string_summary() {
        // Shape produced by the original web client's export
        let json = r#"{
            "type": "batch",
            "id": 1700000000001,
            "name": "Batch 3/1/2025, 10:00:00 AM",
            "count": 120,
            "predictions": [{"text": "fine", "sentiment": 1, "confidence": 0.75}],
            "summary": {
                "total": 120,
                "positive": 80,
                "negative": 40,
                "avgConfidence": "0.8123",
                "positivePercent": "66.7",
                "negativePercent": "33.3"
            },
            "timestamp": "2025-03-01T10:00:00Z"
        }"#;

        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        let batch = record.as_batch().unwrap();
        assert_eq!(batch.count, 120);
        assert_eq!(batch.predictions.len(), 1); // preview is decoupled from count
        assert_eq!(batch.summary.avg_confidence, 0.8123);
        assert_eq!(batch.summary.positive_percent, 66.7);
    }
}
