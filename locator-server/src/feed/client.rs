//! GBFS HTTP client.
//!
//! Fetches the station information and station status documents. Both
//! requests carry the operator's required `Client-Identifier` header and
//! are issued concurrently; the fetch fails if either does.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::convert::{FeedData, convert_feed};
use super::error::FetchError;
use super::types::{FeedDocument, StationInformationDto, StationStatusDto};

/// Default base URL for the Oslo City Bike GBFS feed.
const DEFAULT_BASE_URL: &str = "https://gbfs.urbansharing.com/oslobysykkel.no";

/// Default value for the `Client-Identifier` header.
pub const DEFAULT_CLIENT_IDENTIFIER: &str = "bikeshare-locator";

/// Header the feed operator uses to identify API consumers.
pub const CLIENT_IDENTIFIER_HEADER: &str = "client-identifier";

/// Station metadata document.
pub const STATION_INFORMATION: &str = "station_information.json";

/// Live availability document.
pub const STATION_STATUS: &str = "station_status.json";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Value sent in the `Client-Identifier` header
    pub client_identifier: String,
    /// Base URL the two documents live under
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config with the given client identifier.
    pub fn new(client_identifier: impl Into<String>) -> Self {
        Self {
            client_identifier: client_identifier.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_IDENTIFIER)
    }
}

/// Client for a GBFS station feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();

        let identifier = HeaderValue::from_str(&config.client_identifier)
            .map_err(|_| FetchError::InvalidIdentifier(config.client_identifier.clone()))?;
        headers.insert(HeaderName::from_static(CLIENT_IDENTIFIER_HEADER), identifier);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL documents are fetched from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch both documents.
    ///
    /// A single attempt: the first failure is returned as-is, with no retry
    /// and no partial result.
    pub async fn fetch(&self) -> Result<FeedData, FetchError> {
        let (information, status) = tokio::try_join!(
            self.get_document::<StationInformationDto>(STATION_INFORMATION),
            self.get_document::<StationStatusDto>(STATION_STATUS)
        )?;

        let data = convert_feed(information, status);
        info!(
            stations = data.stations.len(),
            statuses = data.availability.len(),
            "fetched station feed"
        );
        Ok(data)
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        document: &'static str,
    ) -> Result<FeedDocument<T>, FetchError> {
        let url = format!("{}/{}", self.base_url, document);
        debug!(%url, "requesting feed document");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Http { document, source })?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FetchError::Unauthorized { document });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                document,
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Http { document, source })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Json {
            document,
            message: e.to_string(),
        })
    }
}
