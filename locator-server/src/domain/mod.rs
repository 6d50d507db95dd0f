//! Domain types for the station locator.
//!
//! Stations as published by the feed, the merged station view, and the
//! coordinates used for nearest-station lookup. User-supplied positions are
//! validated at construction, so code holding a `ReferencePoint` can trust it.

mod error;
mod geo;
mod station;

pub use error::GeoError;
pub use geo::{Coordinate, EARTH_RADIUS_METRES, ReferencePoint};
pub use station::{Availability, MergedStation, StationAvailability, StationId, StationInfo};
