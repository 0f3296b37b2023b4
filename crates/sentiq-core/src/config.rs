//! Client configuration

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where to find the sentiment API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from `SENTIQ_API_URL`, falling back to the default local server
    pub fn from_env() -> Self {
        match std::env::var("SENTIQ_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
