//! Feed error types.

use std::path::PathBuf;

/// Errors that can occur while fetching the station feed.
///
/// Any of these fails the fetch as a whole: a snapshot is never built from
/// one document alone.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// The client identifier is not a valid header value
    #[error("invalid client identifier {0:?}")]
    InvalidIdentifier(String),

    /// Request failed (network error, timeout, etc.)
    #[error("HTTP error fetching {document}: {source}")]
    Http {
        document: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The feed refused the client identifier
    #[error("unauthorized fetching {document}: check CLIENT_IDENTIFIER")]
    Unauthorized { document: &'static str },

    /// The feed returned an error status
    #[error("feed error {status} fetching {document}: {message}")]
    Api {
        document: &'static str,
        status: u16,
        message: String,
    },

    /// The document was not valid GBFS JSON
    #[error("JSON parse error in {document}: {message}")]
    Json {
        document: &'static str,
        message: String,
    },

    /// A mock feed file could not be read
    #[error("mock feed error for {}: {message}", path.display())]
    Fixture { path: PathBuf, message: String },
}
