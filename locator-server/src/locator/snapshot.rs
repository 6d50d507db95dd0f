//! The merged station data shared by request handlers.

use chrono::{DateTime, Utc};

use crate::domain::MergedStation;
use crate::feed::FeedData;

use super::merge::merge;

/// One fetch, merged.
///
/// Immutable once built; a refresh builds a new snapshot rather than
/// editing this one.
#[derive(Debug, Clone, Default)]
pub struct StationSnapshot {
    /// Merged stations, in station information order.
    pub stations: Vec<MergedStation>,
    /// When the station information document last changed.
    pub information_updated: Option<DateTime<Utc>>,
    /// When the station status document last changed.
    pub status_updated: Option<DateTime<Utc>>,
}

impl StationSnapshot {
    /// Merge freshly fetched feed data.
    pub fn from_feed(data: FeedData) -> Self {
        Self {
            stations: merge(&data.stations, &data.availability),
            information_updated: data.information_updated,
            status_updated: data.status_updated,
        }
    }

    /// Age of the live availability data, as the feed reports it.
    pub fn status_age(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        self.status_updated.map(|updated| now - updated)
    }
}
