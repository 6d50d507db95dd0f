//! Display mode resolution.
//!
//! The list shows exactly one of: the nearest station, the stations
//! matching a search, or a page of the full list. Precedence is in that
//! order.

use serde::Serialize;

use crate::domain::{MergedStation, ReferencePoint};

use super::config::LocatorConfig;
use super::nearest::nearest;
use super::query::{Pagination, filter};

/// What the user asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRequest {
    /// Search box contents.
    pub search_text: String,
    /// Whether the nearest-station button was pressed.
    pub nearest: bool,
    /// Stations already revealed in the full list, if any.
    pub shown: Option<usize>,
}

/// Which of the three displays is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Nearest,
    Search,
    Browse,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Nearest => "nearest",
            DisplayMode::Search => "search",
            DisplayMode::Browse => "browse",
        }
    }
}

/// The resolved list for one request.
#[derive(Debug, Clone)]
pub struct ViewState<'a> {
    pub mode: DisplayMode,
    /// Search text in effect (cleared in nearest mode).
    pub search_text: String,
    pub nearest_result: Option<&'a MergedStation>,
    /// Stations to display, in order.
    pub stations: Vec<&'a MergedStation>,
    /// Size of the list the visible stations were taken from.
    pub total: usize,
    /// The `shown` value for the next "show more", when it is offered.
    pub next_shown: Option<usize>,
    /// Whether a reference point is known, so nearest lookup is possible.
    pub nearest_enabled: bool,
}

impl<'a> ViewState<'a> {
    /// Resolve a request against the merged stations.
    ///
    /// A nearest request without a reference point falls through to the
    /// search or browse display.
    pub fn resolve(
        stations: &'a [MergedStation],
        reference: Option<&ReferencePoint>,
        request: &ViewRequest,
        config: &LocatorConfig,
    ) -> Self {
        let nearest_enabled = reference.is_some();

        let nearest_result = if request.nearest {
            reference.and_then(|r| nearest(r, stations))
        } else {
            None
        };

        if let Some(found) = nearest_result {
            return Self {
                mode: DisplayMode::Nearest,
                search_text: String::new(),
                nearest_result,
                stations: vec![found],
                total: 1,
                next_shown: None,
                nearest_enabled,
            };
        }

        if !request.search_text.is_empty() {
            let matches = filter(&request.search_text, stations);
            return Self {
                mode: DisplayMode::Search,
                search_text: request.search_text.clone(),
                nearest_result: None,
                total: matches.len(),
                stations: matches,
                next_shown: None,
                nearest_enabled,
            };
        }

        let pagination = match request.shown {
            Some(shown) => Pagination::with_shown(config.page_size, shown),
            None => Pagination::new(config.page_size),
        };

        let next_shown = pagination.has_more(stations.len()).then(|| {
            let mut next = pagination;
            next.show_more(stations.len());
            next.shown()
        });

        Self {
            mode: DisplayMode::Browse,
            search_text: String::new(),
            nearest_result: None,
            stations: pagination.visible(stations).iter().collect(),
            total: stations.len(),
            next_shown,
            nearest_enabled,
        }
    }

    /// Number of stations displayed.
    pub fn visible_count(&self) -> usize {
        self.stations.len()
    }

    /// Whether the "show more" control is displayed.
    pub fn show_more(&self) -> bool {
        self.next_shown.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, StationId, StationInfo};
    use std::num::NonZeroUsize;

    fn station(id: &str, name: &str, lat: f64, lon: f64) -> MergedStation {
        MergedStation {
            info: StationInfo {
                id: StationId::new(id),
                name: name.to_string(),
                address: String::new(),
                location: Coordinate::new(lat, lon),
            },
            availability: None,
        }
    }

    fn many(n: usize) -> Vec<MergedStation> {
        (0..n)
            .map(|i| station(&i.to_string(), &format!("Station {i}"), 59.9, 10.7))
            .collect()
    }

    fn config(page: usize) -> LocatorConfig {
        LocatorConfig::new(NonZeroUsize::new(page).unwrap())
    }

    fn search(text: &str) -> ViewRequest {
        ViewRequest {
            search_text: text.to_string(),
            ..ViewRequest::default()
        }
    }

    #[test]
    fn browse_shows_first_page() {
        let stations = many(45);
        let view = ViewState::resolve(&stations, None, &ViewRequest::default(), &config(20));

        assert_eq!(view.mode, DisplayMode::Browse);
        assert_eq!(view.visible_count(), 20);
        assert_eq!(view.total, 45);
        assert_eq!(view.next_shown, Some(40));
        assert!(view.show_more());
        assert!(!view.nearest_enabled);
    }

    #[test]
    fn browse_show_more_reaches_end() {
        let stations = many(45);
        let request = ViewRequest {
            shown: Some(40),
            ..ViewRequest::default()
        };
        let view = ViewState::resolve(&stations, None, &request, &config(20));
        assert_eq!(view.visible_count(), 40);
        assert_eq!(view.next_shown, Some(45));

        let request = ViewRequest {
            shown: Some(45),
            ..ViewRequest::default()
        };
        let view = ViewState::resolve(&stations, None, &request, &config(20));
        assert_eq!(view.visible_count(), 45);
        assert!(!view.show_more());
    }

    #[test]
    fn short_list_hides_show_more() {
        let stations = many(3);
        let view = ViewState::resolve(&stations, None, &ViewRequest::default(), &config(20));
        assert_eq!(view.visible_count(), 3);
        assert!(!view.show_more());
    }

    #[test]
    fn search_is_unpaginated() {
        let stations = many(45);
        let view = ViewState::resolve(&stations, None, &search("station"), &config(20));

        assert_eq!(view.mode, DisplayMode::Search);
        assert_eq!(view.visible_count(), 45);
        assert!(!view.show_more());
        assert_eq!(view.search_text, "station");
    }

    #[test]
    fn nearest_without_reference_falls_through() {
        let stations = many(3);
        let request = ViewRequest {
            search_text: "1".to_string(),
            nearest: true,
            shown: None,
        };
        let view = ViewState::resolve(&stations, None, &request, &config(20));

        assert_eq!(view.mode, DisplayMode::Search);
        assert!(view.nearest_result.is_none());
        assert!(!view.nearest_enabled);
    }

    #[test]
    fn nearest_takes_precedence_and_clears_search() {
        let stations = vec![
            station("A", "Far", 60.5, 11.0),
            station("B", "Close", 59.912, 10.75),
        ];
        let reference = ReferencePoint::new(59.911, 10.75).unwrap();
        let request = ViewRequest {
            search_text: "far".to_string(),
            nearest: true,
            shown: Some(40),
        };
        let view = ViewState::resolve(&stations, Some(&reference), &request, &config(20));

        assert_eq!(view.mode, DisplayMode::Nearest);
        assert_eq!(view.search_text, "");
        assert_eq!(view.nearest_result.unwrap().id().as_str(), "B");
        assert_eq!(view.visible_count(), 1);
        assert!(!view.show_more());
        assert!(view.nearest_enabled);
    }

    #[test]
    fn reference_alone_does_not_trigger_nearest() {
        let stations = many(3);
        let reference = ReferencePoint::new(59.9, 10.7).unwrap();
        let view = ViewState::resolve(
            &stations,
            Some(&reference),
            &ViewRequest::default(),
            &config(20),
        );

        assert_eq!(view.mode, DisplayMode::Browse);
        assert!(view.nearest_enabled);
    }

    #[test]
    fn nearest_with_no_stations_falls_through() {
        let reference = ReferencePoint::new(59.9, 10.7).unwrap();
        let request = ViewRequest {
            nearest: true,
            ..ViewRequest::default()
        };
        let view = ViewState::resolve(&[], Some(&reference), &request, &config(20));

        assert_eq!(view.mode, DisplayMode::Browse);
        assert_eq!(view.visible_count(), 0);
    }

    #[test]
    fn display_mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DisplayMode::Nearest).unwrap(),
            "\"nearest\""
        );
        assert_eq!(
            serde_json::to_string(&DisplayMode::Browse).unwrap(),
            "\"browse\""
        );
        assert_eq!(DisplayMode::Search.as_str(), "search");
    }
}
