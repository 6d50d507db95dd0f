//! Nearest-station lookup.
//!
//! A linear scan: at a few hundred stations this is cheaper than building
//! any spatial index.

use crate::domain::{MergedStation, ReferencePoint};

/// Find the station closest to `reference` by great-circle distance.
///
/// Ties go to the earliest candidate. Candidates with non-finite
/// coordinates are skipped. Returns `None` only when no candidate has a
/// usable position.
pub fn nearest<'a>(
    reference: &ReferencePoint,
    candidates: &'a [MergedStation],
) -> Option<&'a MergedStation> {
    let mut best: Option<(&MergedStation, f64)> = None;

    for station in candidates {
        let location = station.location();
        if !location.is_finite() {
            continue;
        }

        let distance = reference.distance_metres(&location);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((station, distance)),
        }
    }

    best.map(|(station, _)| station)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coordinate, StationId, StationInfo};
    use proptest::prelude::*;

    fn arb_station() -> impl Strategy<Value = MergedStation> {
        ("[a-z]{4}", 59.8f64..60.1, 10.5f64..11.0).prop_map(|(id, lat, lon)| MergedStation {
            info: StationInfo {
                id: StationId::new(id.clone()),
                name: id,
                address: String::new(),
                location: Coordinate::new(lat, lon),
            },
            availability: None,
        })
    }

    fn arb_reference() -> impl Strategy<Value = ReferencePoint> {
        (59.8f64..60.1, 10.5f64..11.0)
            .prop_map(|(lat, lon)| ReferencePoint::new(lat, lon).unwrap())
    }

    proptest! {
        #[test]
        fn result_is_a_minimum(
            reference in arb_reference(),
            stations in prop::collection::vec(arb_station(), 1..50)
        ) {
            let found = nearest(&reference, &stations).unwrap();
            let best = reference.distance_metres(&found.location());

            for s in &stations {
                prop_assert!(best <= reference.distance_metres(&s.location()));
            }
        }

        #[test]
        fn co_located_candidate_is_found(
            reference in arb_reference(),
            mut stations in prop::collection::vec(arb_station(), 0..50),
            index in any::<prop::sample::Index>()
        ) {
            let here = MergedStation {
                info: StationInfo {
                    id: StationId::new("HERE"),
                    name: "here".to_string(),
                    address: String::new(),
                    location: reference.coordinate(),
                },
                availability: None,
            };
            let at = index.index(stations.len() + 1);
            stations.insert(at, here);

            let found = nearest(&reference, &stations).unwrap();
            prop_assert_eq!(reference.distance_metres(&found.location()), 0.0);

            let found_at = stations.iter().position(|s| std::ptr::eq(s, found)).unwrap();
            prop_assert!(found_at <= at);
        }
    }
}
