//! Configuration for station queries.

use std::num::NonZeroUsize;

/// Default number of stations per page.
const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// Configuration parameters for listing stations.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Stations shown initially, and added per "show more".
    pub page_size: NonZeroUsize,
}

impl LocatorConfig {
    /// Create a new configuration with the given page size.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
