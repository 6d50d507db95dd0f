//! Caching layer for the merged station snapshot.
//!
//! The feed asks clients to cache documents for a few seconds, and every
//! page load and keystroke needs the same data. One merged snapshot is held
//! for a short TTL; when it expires the next request fetches and merges
//! again, replacing the snapshot whole. Requests that arrive during a
//! fetch wait for it rather than starting their own.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::feed::{FeedSource, FetchError};
use crate::locator::StationSnapshot;

/// There is only ever one snapshot.
type SnapshotKey = ();

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a fetched snapshot is served before refetching.
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15),
        }
    }
}

/// Feed source with a cached, merged snapshot.
pub struct CachedFeed {
    source: FeedSource,
    snapshots: MokaCache<SnapshotKey, Arc<StationSnapshot>>,
}

impl CachedFeed {
    /// Create a new cached feed.
    pub fn new(source: FeedSource, config: &CacheConfig) -> Self {
        let snapshots = MokaCache::builder().time_to_live(config.ttl).build();

        Self { source, snapshots }
    }

    /// Get the current snapshot, fetching and merging if none is cached.
    ///
    /// Concurrent callers on a miss share a single fetch. Failures are not
    /// cached: the next call tries the feed again.
    pub async fn snapshot(&self) -> Result<Arc<StationSnapshot>, Arc<FetchError>> {
        if let Some(cached) = self.snapshots.get(&()).await {
            debug!(stations = cached.stations.len(), "serving cached snapshot");
            return Ok(cached);
        }

        self.snapshots
            .try_get_with((), async {
                let data = self.source.fetch().await.inspect_err(|e| {
                    warn!(error = %e, "station feed fetch failed");
                })?;
                Ok::<_, FetchError>(Arc::new(StationSnapshot::from_feed(data)))
            })
            .await
    }

    /// The underlying source.
    pub fn source(&self) -> &FeedSource {
        &self.source
    }
}
