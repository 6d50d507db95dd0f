//! Free-text filtering and incremental pagination.

use std::num::NonZeroUsize;

use crate::domain::MergedStation;

/// The text a search term is matched against.
///
/// Every displayable value of the station, space-joined: id, name, address,
/// coordinates, and the bike and dock counts when known. A term may
/// therefore match any field, or span two adjacent ones.
pub fn search_text(station: &MergedStation) -> String {
    let location = station.location();
    let mut fields = vec![
        station.id().to_string(),
        station.name().to_string(),
        station.address().to_string(),
        location.latitude.to_string(),
        location.longitude.to_string(),
    ];

    if let Some(availability) = station.availability {
        fields.push(availability.bikes_available.to_string());
        fields.push(availability.docks_available.to_string());
    }

    fields.join(" ")
}

/// Stations whose search text contains `text`, ignoring case.
///
/// Empty text matches everything. Input order is preserved.
pub fn filter<'a>(text: &str, candidates: &'a [MergedStation]) -> Vec<&'a MergedStation> {
    if text.is_empty() {
        return candidates.iter().collect();
    }

    let needle = text.to_lowercase();
    candidates
        .iter()
        .filter(|station| search_text(station).to_lowercase().contains(&needle))
        .collect()
}

/// The first `shown` candidates, or all of them if there are fewer.
pub fn page<T>(candidates: &[T], shown: usize) -> &[T] {
    &candidates[..shown.min(candidates.len())]
}

/// How many stations of the full list are visible.
///
/// Starts at one page and grows by a page per "show more", never past the
/// end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    shown: usize,
}

impl Pagination {
    /// One page visible.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size: page_size.get(),
            shown: page_size.get(),
        }
    }

    /// Resume at a count the client sent back.
    ///
    /// Counts below one page are raised to one page.
    pub fn with_shown(page_size: NonZeroUsize, shown: usize) -> Self {
        Self {
            page_size: page_size.get(),
            shown: shown.max(page_size.get()),
        }
    }

    /// Number of stations requested to be visible.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Whether "show more" should be offered for a list of `total`.
    pub fn has_more(&self, total: usize) -> bool {
        self.shown < total
    }

    /// Reveal another page, clamped to `total`.
    ///
    /// Does nothing once everything is visible.
    pub fn show_more(&mut self, total: usize) {
        if self.has_more(total) {
            self.shown = (self.shown + self.page_size).min(total);
        }
    }

    /// The visible prefix of `candidates`.
    pub fn visible<'a, T>(&self, candidates: &'a [T]) -> &'a [T] {
        page(candidates, self.shown)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Availability, Coordinate, StationId, StationInfo};
    use proptest::prelude::*;

    fn arb_station() -> impl Strategy<Value = MergedStation> {
        (
            "[0-9]{1,4}",
            "[A-Za-z ]{1,16}",
            "[A-Za-z0-9 ]{0,20}",
            proptest::option::of((0u32..40, 0u32..40)),
        )
            .prop_map(|(id, name, address, counts)| MergedStation {
                info: StationInfo {
                    id: StationId::new(id),
                    name,
                    address,
                    location: Coordinate::new(59.9, 10.75),
                },
                availability: counts.map(|(bikes, docks)| Availability {
                    bikes_available: bikes,
                    docks_available: docks,
                }),
            })
    }

    fn arb_stations() -> impl Strategy<Value = Vec<MergedStation>> {
        prop::collection::vec(arb_station(), 0..40)
    }

    proptest! {
        #[test]
        fn filter_results_contain_text(stations in arb_stations(), text in "[A-Za-z0-9 ]{1,3}") {
            let needle = text.to_lowercase();
            for s in filter(&text, &stations) {
                prop_assert!(search_text(s).to_lowercase().contains(&needle));
            }
        }

        #[test]
        fn filter_is_complete(stations in arb_stations(), text in "[A-Za-z0-9 ]{1,3}") {
            let found = filter(&text, &stations);
            let expected = stations
                .iter()
                .filter(|s| search_text(s).to_lowercase().contains(&text.to_lowercase()))
                .count();
            prop_assert_eq!(found.len(), expected);
        }

        #[test]
        fn filter_narrows_monotonically(
            stations in arb_stations(),
            text in "[A-Za-z0-9 ]{0,2}",
            more in "[A-Za-z0-9 ]{1,2}"
        ) {
            let broad = filter(&text, &stations);
            let narrow = filter(&format!("{text}{more}"), &stations);

            for s in &narrow {
                prop_assert!(broad.iter().any(|b| std::ptr::eq(*b, *s)));
            }
        }

        #[test]
        fn page_is_prefix(items in prop::collection::vec(any::<u8>(), 0..60), shown in 0usize..80) {
            let visible = page(&items, shown);
            prop_assert_eq!(visible.len(), shown.min(items.len()));
            prop_assert_eq!(visible, &items[..visible.len()]);
        }

        #[test]
        fn show_more_strictly_increases_until_exhausted(total in 0usize..200, page_size in 1usize..30) {
            let mut p = Pagination::new(NonZeroUsize::new(page_size).unwrap());
            let mut steps = 0;

            while p.has_more(total) {
                let before = p.shown();
                p.show_more(total);
                prop_assert!(p.shown() > before);
                prop_assert!(p.shown() <= total);
                steps += 1;
                prop_assert!(steps <= total);
            }

            prop_assert!(p.shown() >= total);
        }
    }
}
