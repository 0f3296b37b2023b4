pub mod batch;
pub mod dataset;
pub mod explain;
pub mod history;
pub mod metrics;
pub mod predict;
pub mod theme;
pub mod version;

use sentiq_client::ApiClient;
use sentiq_core::ClientConfig;
use sentiq_store::{HistoryStore, Paths};

/// Service objects are built once per command and passed down explicitly
pub fn api_client(api_url: Option<&str>) -> ApiClient {
    let config = match api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    ApiClient::new(&config)
}

pub fn open_store() -> anyhow::Result<HistoryStore> {
    let paths = Paths::new()?;
    Ok(HistoryStore::open(paths.history_file()))
}

/// Networked commands block on a current-thread runtime; everything else in
/// the CLI stays synchronous
pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
