//! Station reconciliation and query engine.
//!
//! Feed data flows through here in one direction: the two fetched
//! collections are merged into a [`StationSnapshot`], and each request
//! resolves a [`ViewState`] from that snapshot: nearest station, text
//! search, or a page of the full list. Everything in this module is pure.

mod config;
mod merge;
mod nearest;
mod query;
mod snapshot;
mod view;

pub use config::LocatorConfig;
pub use merge::merge;
pub use nearest::nearest;
pub use query::{Pagination, filter, page, search_text};
pub use snapshot::StationSnapshot;
pub use view::{DisplayMode, ViewRequest, ViewState};
