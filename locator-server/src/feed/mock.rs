//! Mock feed client for development without network access.
//!
//! Loads the two GBFS documents from JSON files and serves them as if they
//! were live responses.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::client::{STATION_INFORMATION, STATION_STATUS};
use super::convert::{FeedData, convert_feed};
use super::error::FetchError;
use super::types::FeedDocument;

/// Mock feed that serves data from JSON files.
///
/// Expects `station_information.json` and `station_status.json` in the
/// data directory, in the same format the live feed publishes.
#[derive(Debug, Clone)]
pub struct MockFeedClient {
    data: Arc<FeedData>,
}

impl MockFeedClient {
    /// Load both documents from `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FetchError> {
        let data_dir = data_dir.as_ref();

        let information = load_document(&data_dir.join(STATION_INFORMATION))?;
        let status = load_document(&data_dir.join(STATION_STATUS))?;

        Ok(Self {
            data: Arc::new(convert_feed(information, status)),
        })
    }

    /// Serve the loaded documents.
    ///
    /// Mimics `FeedClient::fetch`; the data is static.
    pub async fn fetch(&self) -> Result<FeedData, FetchError> {
        Ok(FeedData::clone(&self.data))
    }
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<FeedDocument<T>, FetchError> {
    let json = std::fs::read_to_string(path).map_err(|e| FetchError::Fixture {
        path: path.to_path_buf(),
        message: format!("failed to read: {}", e),
    })?;

    serde_json::from_str(&json).map_err(|e| FetchError::Fixture {
        path: path.to_path_buf(),
        message: format!("failed to parse: {}", e),
    })
}
