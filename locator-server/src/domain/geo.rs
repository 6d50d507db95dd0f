//! Coordinates and great-circle distance.

use serde::Serialize;

use super::GeoError;

/// Mean Earth radius (IUGG), in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_008.8;

/// A WGS84 latitude/longitude pair, in decimal degrees.
///
/// Feed coordinates are taken as published; use [`ReferencePoint`] for
/// positions that must be validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance to `other` using the haversine formula.
    pub fn distance_metres(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

        // Rounding can push `a` fractionally above 1 for antipodal points.
        2.0 * EARTH_RADIUS_METRES * a.min(1.0).sqrt().asin()
    }
}

/// The user's position, as reported by the browser.
///
/// Always a finite, in-range coordinate. The `0,0` sentinel the browser
/// side uses for "no position yet" is rejected, so "no reference point" is
/// expressed as `Option<ReferencePoint>` rather than a magic value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint(Coordinate);

impl ReferencePoint {
    /// Validate a position.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        if latitude == 0.0 && longitude == 0.0 {
            return Err(GeoError::Unset);
        }
        Ok(Self(Coordinate::new(latitude, longitude)))
    }

    pub fn coordinate(&self) -> Coordinate {
        self.0
    }

    pub fn latitude(&self) -> f64 {
        self.0.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.0.longitude
    }

    /// Distance from this position to `target`.
    pub fn distance_metres(&self, target: &Coordinate) -> f64 {
        self.0.distance_metres(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let oslo_s = Coordinate::new(59.9111, 10.7528);
        assert_eq!(oslo_s.distance_metres(&oslo_s), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let d = a.distance_metres(&b);
        assert!((d - 111_195.08).abs() < 1.0, "got {d}");
    }

    #[test]
    fn oslo_s_to_the_palace() {
        let oslo_s = Coordinate::new(59.9111, 10.7528);
        let palace = Coordinate::new(59.9169, 10.7276);
        let d = oslo_s.distance_metres(&palace);
        assert!((1_500.0..1_600.0).contains(&d), "got {d}");
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = a.distance_metres(&b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METRES).abs() < 1.0);
    }

    #[test]
    fn reference_point_accepts_valid_position() {
        let point = ReferencePoint::new(59.91, 10.75).unwrap();
        assert_eq!(point.latitude(), 59.91);
        assert_eq!(point.longitude(), 10.75);
        assert_eq!(point.coordinate(), Coordinate::new(59.91, 10.75));
    }

    #[test]
    fn reference_point_rejects_sentinel() {
        assert_eq!(ReferencePoint::new(0.0, 0.0), Err(GeoError::Unset));
    }

    #[test]
    fn reference_point_allows_zero_on_one_axis() {
        assert!(ReferencePoint::new(0.0, 10.0).is_ok());
        assert!(ReferencePoint::new(51.48, 0.0).is_ok());
    }

    #[test]
    fn reference_point_rejects_out_of_range() {
        assert_eq!(
            ReferencePoint::new(91.0, 0.5),
            Err(GeoError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            ReferencePoint::new(10.0, -180.5),
            Err(GeoError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn reference_point_rejects_non_finite() {
        assert_eq!(ReferencePoint::new(f64::NAN, 1.0), Err(GeoError::NotFinite));
        assert_eq!(
            ReferencePoint::new(1.0, f64::INFINITY),
            Err(GeoError::NotFinite)
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in arb_coordinate(), b in arb_coordinate()) {
            let ab = a.distance_metres(&b);
            let ba = b.distance_metres(&a);
            prop_assert!((ab - ba).abs() < 1e-6, "{} != {}", ab, ba);
        }

        #[test]
        fn distance_is_bounded(a in arb_coordinate(), b in arb_coordinate()) {
            let d = a.distance_metres(&b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_METRES + 1.0);
        }
    }
}
