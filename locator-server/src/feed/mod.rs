//! GBFS station feed client.
//!
//! The feed publishes two independent documents:
//! - `station_information.json`: static metadata (name, address, position)
//! - `station_status.json`: live bike and dock counts
//!
//! Both are keyed by `station_id`. This module fetches and converts them;
//! joining them is the locator's job.

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{
    CLIENT_IDENTIFIER_HEADER, DEFAULT_CLIENT_IDENTIFIER, FeedClient, FeedConfig,
    STATION_INFORMATION, STATION_STATUS,
};
pub use convert::{FeedData, convert_feed};
pub use error::FetchError;
pub use mock::MockFeedClient;
pub use source::FeedSource;
pub use types::{FeedDocument, StationInformationDto, StationList, StationStatusDto};
