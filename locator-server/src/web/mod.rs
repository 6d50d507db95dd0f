//! Web layer for the station locator.
//!
//! Serves the page, the station list (as an HTML fragment or JSON) and the
//! static assets the page needs.

mod dto;
mod maps;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use maps::directions_url;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
