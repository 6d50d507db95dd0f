//! Conversion from feed DTOs to domain types.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::{Coordinate, StationAvailability, StationId, StationInfo};

use super::types::{FeedDocument, StationInformationDto, StationStatusDto};

/// Both feed documents, converted to domain records.
///
/// Produced only when both requests succeeded; there is no partially
/// fetched state.
#[derive(Debug, Clone, Default)]
pub struct FeedData {
    /// Station metadata, in feed order.
    pub stations: Vec<StationInfo>,
    /// Live availability, in feed order.
    pub availability: Vec<StationAvailability>,
    /// When the station information document last changed.
    pub information_updated: Option<DateTime<Utc>>,
    /// When the station status document last changed.
    pub status_updated: Option<DateTime<Utc>>,
}

/// Convert the two fetched documents.
///
/// Records without a station id cannot be joined and are skipped with a
/// warning rather than failing the whole feed.
pub fn convert_feed(
    information: FeedDocument<StationInformationDto>,
    status: FeedDocument<StationStatusDto>,
) -> FeedData {
    let stations = information
        .data
        .stations
        .into_iter()
        .filter_map(convert_information)
        .collect();

    let availability = status
        .data
        .stations
        .into_iter()
        .filter_map(convert_status)
        .collect();

    FeedData {
        stations,
        availability,
        information_updated: timestamp(information.last_updated),
        status_updated: timestamp(status.last_updated),
    }
}

fn convert_information(dto: StationInformationDto) -> Option<StationInfo> {
    if dto.station_id.is_empty() {
        warn!(name = %dto.name, "skipping station information without station_id");
        return None;
    }

    Some(StationInfo {
        id: StationId::new(dto.station_id),
        name: dto.name,
        address: dto.address,
        location: Coordinate::new(dto.lat, dto.lon),
    })
}

fn convert_status(dto: StationStatusDto) -> Option<StationAvailability> {
    if dto.station_id.is_empty() {
        warn!("skipping station status without station_id");
        return None;
    }

    Some(StationAvailability {
        id: StationId::new(dto.station_id),
        bikes_available: dto.num_bikes_available,
        docks_available: dto.num_docks_available,
    })
}

fn timestamp(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
}
