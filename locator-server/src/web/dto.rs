//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{GeoError, MergedStation, ReferencePoint};
use crate::locator::{DisplayMode, StationSnapshot, ViewRequest, ViewState};

use super::maps::directions_url;

/// Query parameters for the station list.
#[derive(Debug, Default, Deserialize)]
pub struct StationsQuery {
    /// Search text
    pub q: Option<String>,

    /// Stations already revealed by "show more"
    pub shown: Option<usize>,

    /// Show only the station nearest to `lat`/`lon`
    #[serde(default)]
    pub nearest: bool,

    /// User latitude, once the browser has a position
    pub lat: Option<f64>,

    /// User longitude, once the browser has a position
    pub lon: Option<f64>,
}

impl StationsQuery {
    /// The user's position, if both halves were sent.
    pub fn reference_point(&self) -> Result<Option<ReferencePoint>, GeoError> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => ReferencePoint::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }

    pub fn view_request(&self) -> ViewRequest {
        ViewRequest {
            search_text: self.q.as_deref().unwrap_or_default().trim().to_string(),
            nearest: self.nearest,
            shown: self.shown,
        }
    }
}

/// A station in list results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,

    pub name: String,

    pub address: String,

    pub latitude: f64,

    pub longitude: f64,

    /// `null` when the status feed has no record for the station
    pub bikes_available: Option<u32>,

    /// `null` when the status feed has no record for the station
    pub docks_available: Option<u32>,

    /// Distance from the user, when their position is known
    pub distance_metres: Option<f64>,

    /// Directions link from the user to the station
    pub directions_url: String,
}

impl StationResult {
    pub fn from_station(station: &MergedStation, reference: Option<&ReferencePoint>) -> Self {
        let location = station.location();

        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            address: station.address().to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            bikes_available: station.bikes_available(),
            docks_available: station.docks_available(),
            distance_metres: reference.map(|r| r.distance_metres(&location).round()),
            directions_url: directions_url(reference, location),
        }
    }
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub mode: DisplayMode,

    /// Search text in effect
    pub search_text: String,

    pub stations: Vec<StationResult>,

    /// Size of the list the visible stations were taken from
    pub total: usize,

    /// `shown` value to request for "show more"; absent when everything is visible
    pub next_shown: Option<usize>,

    /// Whether a nearest-station request can succeed
    pub nearest_enabled: bool,

    /// When the availability data last changed at the source
    pub status_updated: Option<DateTime<Utc>>,

    /// Seconds since `status_updated`
    pub status_age_secs: Option<i64>,
}

impl StationsResponse {
    pub fn from_view(
        view: &ViewState<'_>,
        reference: Option<&ReferencePoint>,
        snapshot: &StationSnapshot,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            mode: view.mode,
            search_text: view.search_text.clone(),
            stations: view
                .stations
                .iter()
                .map(|s| StationResult::from_station(s, reference))
                .collect(),
            total: view.total,
            next_shown: view.next_shown,
            nearest_enabled: view.nearest_enabled,
            status_updated: snapshot.status_updated,
            status_age_secs: snapshot.status_age(now).map(|age| age.num_seconds()),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
