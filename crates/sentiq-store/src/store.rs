//! Bounded prediction history with JSON-file persistence

use crate::io::atomic_write;
use crate::record::{BatchRecord, BatchSummary, HistoryRecord, SingleRecord, BATCH_PREVIEW_LEN};
use chrono::{DateTime, Local, Utc};
use sentiq_core::{Prediction, Sentiment};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MAX_ITEMS: usize = 50;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history import must be a JSON array")]
    NotAnArray,
    #[error("malformed history data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Aggregate statistics over the stored collection
///
/// Percentages are computed over single (non-batch) predictions only and
/// formatted to one decimal; empty history yields `"0.0"`, never NaN.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HistoryStats {
    pub total: usize,
    pub single_predictions: usize,
    pub batch_predictions: usize,
    pub positive: usize,
    pub negative: usize,
    pub positive_percent: String,
    pub negative_percent: String,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

/// Size of the serialized collection and item-quota usage
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageInfo {
    pub bytes: usize,
    pub kb: f64,
    pub mb: f64,
    pub items: usize,
    pub max_items: usize,
    pub percentage_full: f64,
}

/// Newest-first, bounded record of past predictions
///
/// Loads the persisted collection once on open; every mutating operation
/// persists synchronously before returning. Concurrent processes sharing the
/// same file race read-modify-write (last write wins, no merge).
pub struct HistoryStore {
    path: PathBuf,
    max_items: usize,
    records: Vec<HistoryRecord>,
    last_id: i64,
}

impl HistoryStore {
    /// Open the store at `path`. A missing file is an empty history; a
    /// corrupted file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_records(&path);
        let last_id = records.iter().map(HistoryRecord::id).max().unwrap_or(0);
        Self {
            path,
            max_items: DEFAULT_MAX_ITEMS,
            records,
            last_id,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.max(1);
        self
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Ids stay millisecond-scale (interoperable with older exports) but are
    /// issued monotonically, so rapid insertions never collide in-process.
    fn next_id(&mut self) -> i64 {
        self.last_id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id
    }

    /// Record a single prediction; prepends, truncates to the bound, persists
    pub fn add(&mut self, prediction: &Prediction) -> HistoryRecord {
        let record = HistoryRecord::Single(SingleRecord {
            id: self.next_id(),
            text: prediction.text.clone(),
            sentiment: prediction.sentiment,
            confidence: prediction.confidence,
            scores: prediction.scores,
            timestamp: Utc::now(),
        });
        self.insert(record.clone());
        record
    }

    /// Record a batch. The summary covers the entire `predictions` slice;
    /// only the first [`BATCH_PREVIEW_LEN`] items are retained for preview.
    pub fn add_batch(&mut self, predictions: &[Prediction], name: Option<&str>) -> HistoryRecord {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => format!("Batch {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        };

        let record = HistoryRecord::Batch(BatchRecord {
            id: self.next_id(),
            name,
            count: predictions.len(),
            predictions: predictions.iter().take(BATCH_PREVIEW_LEN).cloned().collect(),
            summary: BatchSummary::from_predictions(predictions),
            timestamp: Utc::now(),
        });
        self.insert(record.clone());
        record
    }

    fn insert(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.max_items);
        self.persist();
    }

    /// Full collection, newest first
    pub fn get_all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn get_by_id(&self, id: i64) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_recent(&self, count: usize) -> &[HistoryRecord] {
        &self.records[..count.min(self.records.len())]
    }

    /// Case-insensitive substring match: record text for singles, name for
    /// batches
    pub fn search(&self, query: &str) -> Vec<&HistoryRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| match record {
                HistoryRecord::Batch(b) => b.name.to_lowercase().contains(&query),
                _ => record
                    .as_single()
                    .and_then(|s| s.text.as_deref())
                    .is_some_and(|t| t.to_lowercase().contains(&query)),
            })
            .collect()
    }

    /// Single records matching `sentiment`. Batch records always pass this
    /// filter; they are aggregates, not labeled items.
    pub fn filter_by_sentiment(&self, sentiment: Sentiment) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|record| match record.as_single() {
                Some(single) => single.sentiment == Some(sentiment),
                None => true,
            })
            .collect()
    }

    /// Records whose timestamp falls within `[start, end]`, inclusive
    pub fn filter_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|r| {
                let ts = r.timestamp();
                ts >= start && ts <= end
            })
            .collect()
    }

    pub fn stats(&self) -> HistoryStats {
        let singles: Vec<&SingleRecord> =
            self.records.iter().filter_map(HistoryRecord::as_single).collect();
        let positive = singles
            .iter()
            .filter(|s| s.sentiment == Some(Sentiment::Positive))
            .count();
        let negative = singles.len() - positive;

        let percent = |part: usize| {
            if singles.is_empty() {
                "0.0".to_string()
            } else {
                format!("{:.1}", part as f64 / singles.len() as f64 * 100.0)
            }
        };

        HistoryStats {
            total: self.records.len(),
            single_predictions: singles.len(),
            batch_predictions: self.records.iter().filter(|r| r.is_batch()).count(),
            positive,
            negative,
            positive_percent: percent(positive),
            negative_percent: percent(negative),
            oldest: self.records.last().map(HistoryRecord::timestamp),
            newest: self.records.first().map(HistoryRecord::timestamp),
        }
    }

    /// Remove the record with `id`, persist, and return the remainder
    pub fn remove(&mut self, id: i64) -> &[HistoryRecord] {
        self.records.retain(|r| r.id() != id);
        self.persist();
        &self.records
    }

    /// Drop the whole collection and delete the persisted file
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Serialize the full collection for export
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Merge records parsed from `contents` into the collection.
    ///
    /// The top-level value must be a JSON array or the import is rejected
    /// before any mutation. Imported records come first, duplicates by id are
    /// dropped (first occurrence wins), and the merged collection is
    /// truncated to the bound and persisted.
    pub fn import_json(&mut self, contents: &str) -> Result<&[HistoryRecord], StoreError> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        if !value.is_array() {
            return Err(StoreError::NotAnArray);
        }
        let imported: Vec<HistoryRecord> = serde_json::from_value(value)?;

        let current = std::mem::take(&mut self.records);
        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for record in imported.into_iter().chain(current) {
            if seen.insert(record.id()) {
                merged.push(record);
            }
        }
        merged.truncate(self.max_items);

        self.last_id = merged
            .iter()
            .map(HistoryRecord::id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        self.records = merged;
        self.persist();
        Ok(&self.records)
    }

    pub fn storage_info(&self) -> StorageInfo {
        let bytes = serde_json::to_string(&self.records)
            .map(|s| s.len())
            .unwrap_or(0);
        let items = self.records.len();
        StorageInfo {
            bytes,
            kb: round2(bytes as f64 / 1024.0),
            mb: round2(bytes as f64 / (1024.0 * 1024.0)),
            items,
            max_items: self.max_items,
            percentage_full: round1(items as f64 / self.max_items as f64 * 100.0),
        }
    }

    /// Persist, falling back to the quota policy: on failure halve the
    /// collection and retry once; a second failure is logged and the store
    /// stays in-memory only.
    fn persist(&mut self) {
        if let Err(first) = self.try_persist() {
            tracing::warn!("history persist failed, halving collection: {first}");
            self.records.truncate(self.max_items / 2);
            if let Err(second) = self.try_persist() {
                tracing::error!("history persist failed after cleanup: {second}");
            }
        }
    }

    fn try_persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        atomic_write(&self.path, json.as_bytes())?;
        Ok(())
    }
}

fn load_records(path: &Path) -> Vec<HistoryRecord> {
    if !path.exists() {
        return Vec::new();
    }
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("could not read history file {}: {e}", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("corrupted history file {}: {e}", path.display());
            Vec::new()
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
