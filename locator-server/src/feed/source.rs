//! Selection between the live feed and the mock feed.

use super::client::FeedClient;
use super::convert::FeedData;
use super::error::FetchError;
use super::mock::MockFeedClient;

/// Where station data comes from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// The operator's GBFS endpoints
    Live(FeedClient),
    /// JSON files on disk
    Mock(MockFeedClient),
}

impl FeedSource {
    /// Fetch both documents from the selected source.
    pub async fn fetch(&self) -> Result<FeedData, FetchError> {
        match self {
            FeedSource::Live(client) => client.fetch().await,
            FeedSource::Mock(client) => client.fetch().await,
        }
    }

    /// Short description for startup logging.
    pub fn describe(&self) -> String {
        match self {
            FeedSource::Live(client) => format!("live feed at {}", client.base_url()),
            FeedSource::Mock(_) => "mock feed".to_string(),
        }
    }
}
