//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DATA_PATH_ENV, DEFAULT_DATA_PATH};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the persisted JSON document
    pub data_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first when present; `SAFETYNET_DATA_PATH` falls back to
    /// `data/data.json`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_path: env::var(DATA_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
        }
    }

    /// Override the document location (e.g. from a CLI flag).
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_path_overrides_default() {
        let config = Config::default().with_data_path("/tmp/alerts.json");
        assert_eq!(config.data_path, PathBuf::from("/tmp/alerts.json"));
    }
}
