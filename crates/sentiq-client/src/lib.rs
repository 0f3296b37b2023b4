//! HTTP client for the sentiment prediction API

mod client;
mod types;

pub use client::{ApiClient, ClientError};
pub use types::{BatchResponse, DatasetInfo, DatasetSample, Metrics};
