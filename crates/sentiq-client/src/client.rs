//! Request plumbing for the sentiment API
//!
//! Requests carry no retry policy and no client-side timeout: a transport
//! failure or non-2xx status surfaces immediately to the caller.

use crate::types::{BatchResponse, DatasetInfo, Metrics};
use sentiq_core::{ClientConfig, Prediction};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("could not read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Predict sentiment for one review
    pub async fn predict(&self, text: &str) -> Result<Prediction, ClientError> {
        let response = self
            .http
            .post(self.url("/api/predict"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        let response = check_status(response).await?;

        let mut prediction: Prediction = response.json().await?;
        // The single-prediction response omits the input text; carry it so
        // the history record is searchable.
        if prediction.text.is_none() {
            prediction.text = Some(text.to_string());
        }
        Ok(prediction)
    }

    /// Upload a CSV of reviews for batch prediction
    pub async fn predict_file(&self, path: &Path) -> Result<Vec<Prediction>, ClientError> {
        let bytes = std::fs::read(path).map_err(|source| ClientError::File {
            path: path.display().to_string(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "reviews.csv".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/predict"))
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let batch: BatchResponse = response.json().await?;
        Ok(batch.results)
    }

    /// Model metrics re-evaluated at `threshold`
    pub async fn metrics(&self, threshold: f64) -> Result<Metrics, ClientError> {
        let response = self
            .http
            .get(self.url("/api/metrics"))
            .query(&[("threshold", threshold)])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn dataset_info(&self) -> Result<DatasetInfo, ClientError> {
        let response = self.http.get(self.url("/api/dataset-info")).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, body })
    }
}
