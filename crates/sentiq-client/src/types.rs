//! Wire types for the metrics and dataset endpoints

use sentiq_core::{Prediction, Sentiment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Batch prediction response; some server versions name the array
/// `predictions` instead of `results`
#[derive(Debug, Clone, Deserialize)]
pub struct BatchResponse {
    #[serde(alias = "predictions")]
    pub results: Vec<Prediction>,
}

/// Model evaluation metrics at a given decision threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Rows are true labels, columns predicted: [[tn, fp], [fn, tp]]
    pub confusion_matrix: Vec<Vec<u64>>,
    /// [negative, positive] counts in the evaluation set
    pub label_distribution: Vec<u64>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSample {
    pub text: String,
    pub label: Sentiment,
}

/// Training-set statistics plus a handful of sample rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub stats: BTreeMap<String, serde_json::Value>,
    pub samples: Vec<DatasetSample>,
}
