//! Station identifiers and the records published by the feed.

use std::fmt;

use serde::Serialize;

use super::Coordinate;

/// A feed-assigned station identifier.
///
/// Identifiers are opaque strings. Both feed documents use the same value
/// for the same physical station, which is what the merge joins on.
///
/// # Examples
///
/// ```
/// use locator_server::domain::StationId;
///
/// let id = StationId::new("377");
/// assert_eq!(id.as_str(), "377");
/// assert_eq!(id.to_string(), "377");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static metadata for a docking station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
}

/// Bike and dock counts for one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub bikes_available: u32,
    pub docks_available: u32,
}

/// A live availability record, keyed by station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationAvailability {
    pub id: StationId,
    pub bikes_available: u32,
    pub docks_available: u32,
}

impl StationAvailability {
    /// The counts without the identifier.
    pub fn counts(&self) -> Availability {
        Availability {
            bikes_available: self.bikes_available,
            docks_available: self.docks_available,
        }
    }
}

/// A station's metadata joined with its live availability.
///
/// `availability` is `None` when the status feed had no record for the
/// station. That is "unknown", not zero bikes and zero docks.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedStation {
    pub info: StationInfo,
    pub availability: Option<Availability>,
}

impl MergedStation {
    pub fn id(&self) -> &StationId {
        &self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn address(&self) -> &str {
        &self.info.address
    }

    pub fn location(&self) -> Coordinate {
        self.info.location
    }

    /// Bikes available, if the status feed reported this station.
    pub fn bikes_available(&self) -> Option<u32> {
        self.availability.map(|a| a.bikes_available)
    }

    /// Free docks, if the status feed reported this station.
    pub fn docks_available(&self) -> Option<u32> {
        self.availability.map(|a| a.docks_available)
    }
}
