//! Joining station metadata with live availability.

use std::collections::HashMap;

use crate::domain::{Availability, MergedStation, StationAvailability, StationId, StationInfo};

/// Join each station with its availability record.
///
/// The output has exactly one entry per input station, in input order,
/// since that order drives display and pagination. Stations the status
/// feed did not report get `availability: None`. Should the status feed
/// repeat an id, the first record wins.
pub fn merge(stations: &[StationInfo], availability: &[StationAvailability]) -> Vec<MergedStation> {
    let mut by_id: HashMap<&StationId, Availability> = HashMap::with_capacity(availability.len());
    for record in availability {
        by_id.entry(&record.id).or_insert_with(|| record.counts());
    }

    stations
        .iter()
        .map(|info| MergedStation {
            info: info.clone(),
            availability: by_id.get(&info.id).copied(),
        })
        .collect()
}
