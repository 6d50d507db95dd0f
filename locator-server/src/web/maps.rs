//! Google Maps directions links.
//!
//! Cycling isn't offered everywhere, so the link asks for walking
//! directions to the dock.

use crate::domain::{Coordinate, ReferencePoint};

/// Generate a directions URL from the user's position to a station.
///
/// Without a known position the origin is left empty, which Maps fills in
/// with the device's own location.
///
/// # Example
///
/// ```ignore
/// let url = directions_url(Some(&here), Coordinate::new(59.9103, 10.7268));
/// // Returns: "https://www.google.com/maps/dir/59.9111,10.7528/59.9103,10.7268/data=!4m2!4m1!3e2"
/// ```
pub fn directions_url(origin: Option<&ReferencePoint>, destination: Coordinate) -> String {
    let origin = origin
        .map(|p| format!("{},{}", p.latitude(), p.longitude()))
        .unwrap_or_default();

    format!(
        "https://www.google.com/maps/dir/{}/{},{}/data=!4m2!4m1!3e2",
        origin, destination.latitude, destination.longitude,
    )
}
