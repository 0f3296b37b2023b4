//! Path resolution for sentiq data files

use std::path::PathBuf;

/// Resolves standard paths for persisted client state
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            data_dir: home.join(".sentiq"),
        })
    }

    /// One file holds the whole serialized history collection
    pub fn history_file(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }

    /// One file holds the active theme name
    pub fn theme_file(&self) -> PathBuf {
        self.data_dir.join("theme.json")
    }
}
