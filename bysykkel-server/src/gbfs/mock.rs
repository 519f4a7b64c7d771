//! File-backed feeds for running without network access.
//!
//! Loads `station_information.json` and `station_status.json` from a
//! directory and serves them as if they were live responses.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::FeedProvider;
use super::error::FeedError;

/// File name of the station information feed in a mock directory.
pub const INFORMATION_FILE: &str = "station_information.json";

/// File name of the station status feed in a mock directory.
pub const STATUS_FILE: &str = "station_status.json";

/// Feeds served from memory.
#[derive(Debug, Clone)]
pub struct MockFeeds {
    information: Arc<Value>,
    status: Arc<Value>,
}

impl MockFeeds {
    /// Load both feeds from `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let data_dir = data_dir.as_ref();
        let information = load_feed(&data_dir.join(INFORMATION_FILE))?;
        let status = load_feed(&data_dir.join(STATUS_FILE))?;
        Ok(Self::from_values(information, status))
    }

    /// Serve the given payloads.
    pub fn from_values(information: Value, status: Value) -> Self {
        Self {
            information: Arc::new(information),
            status: Arc::new(status),
        }
    }
}

fn load_feed(path: &Path) -> Result<Value, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|e| FeedError::Mock {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&json).map_err(|e| FeedError::Mock {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

impl FeedProvider for MockFeeds {
    async fn station_information(&self) -> Result<Value, FeedError> {
        Ok(Value::clone(&self.information))
    }

    async fn station_status(&self) -> Result<Value, FeedError> {
        Ok(Value::clone(&self.status))
    }
}
