//! Askama templates for the web frontend.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::{MergedStation, ReferencePoint};
use crate::locator::{DisplayMode, ViewState};

use super::maps::directions_url;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: search box, controls and the first page of stations.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub list: StationListView,
    /// Shown in the alert region when the feed could not be fetched.
    pub alert: Option<String>,
    pub updated: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Station list fragment.
#[derive(Template)]
#[template(path = "station_list.html")]
pub struct StationListTemplate {
    pub list: StationListView,
}

/// Alert fragment for a failed fetch.
#[derive(Template)]
#[template(path = "alert.html")]
pub struct AlertTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station list view model.
#[derive(Debug, Clone)]
pub struct StationListView {
    /// Rendered as `data-mode` for the browser script.
    pub mode: DisplayMode,
    pub cards: Vec<StationCardView>,
    pub search_text: String,
    pub next_shown: Option<usize>,
    pub nearest_enabled: bool,
}

impl StationListView {
    /// Create from a resolved view.
    pub fn from_view(view: &ViewState<'_>, reference: Option<&ReferencePoint>) -> Self {
        Self {
            mode: view.mode,
            cards: view
                .stations
                .iter()
                .map(|s| StationCardView::from_station(s, reference))
                .collect(),
            search_text: view.search_text.clone(),
            next_shown: view.next_shown,
            nearest_enabled: view.nearest_enabled,
        }
    }

    /// An empty list, for when there is no data to show.
    pub fn empty() -> Self {
        Self {
            mode: DisplayMode::Browse,
            cards: Vec::new(),
            search_text: String::new(),
            next_shown: None,
            nearest_enabled: false,
        }
    }

    pub fn is_nearest(&self) -> bool {
        self.mode == DisplayMode::Nearest
    }
}

/// One station card.
#[derive(Debug, Clone)]
pub struct StationCardView {
    pub name: String,
    pub address: String,
    pub bikes: String,
    pub docks: String,
    /// False when the status feed has no record for this station.
    pub availability_known: bool,
    pub distance: Option<String>,
    pub directions_url: String,
}

impl StationCardView {
    /// Create from a merged station.
    pub fn from_station(station: &MergedStation, reference: Option<&ReferencePoint>) -> Self {
        let location = station.location();

        Self {
            name: station.name().to_string(),
            address: station.address().to_string(),
            bikes: format_count(station.bikes_available()),
            docks: format_count(station.docks_available()),
            availability_known: station.availability.is_some(),
            distance: reference.map(|r| format_distance(r.distance_metres(&location))),
            directions_url: directions_url(reference, location),
        }
    }
}

/// A count, or "unknown" when the feed did not report one.
pub fn format_count(count: Option<u32>) -> String {
    count.map_or_else(|| "unknown".to_string(), |n| n.to_string())
}

/// Human-readable distance: whole metres below 1 km, else kilometres.
pub fn format_distance(metres: f64) -> String {
    let rounded = metres.round();
    if rounded < 1_000.0 {
        format!("{} m", rounded as u64)
    } else {
        format!("{:.1} km", metres / 1_000.0)
    }
}

/// Feed timestamp for the page footer.
pub fn format_updated(updated: Option<DateTime<Utc>>) -> Option<String> {
    updated.map(|t| t.format("%H:%M:%S UTC").to_string())
}
