//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedFeed;
use crate::locator::LocatorConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station feed with the cached, merged snapshot
    pub feed: Arc<CachedFeed>,

    /// Display configuration
    pub config: Arc<LocatorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feed: CachedFeed, config: LocatorConfig) -> Self {
        Self {
            feed: Arc::new(feed),
            config: Arc::new(config),
        }
    }
}
