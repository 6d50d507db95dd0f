//! Application configuration from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::feed::FeedConfig;
use crate::locator::LocatorConfig;

/// Default static asset directory, relative to the working directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `LOCATOR_ADDR`
    pub bind_addr: SocketAddr,
    /// `FEED_BASE_URL`, `CLIENT_IDENTIFIER`, `FEED_TIMEOUT_SECS`
    pub feed: FeedConfig,
    /// `SNAPSHOT_TTL_SECS`
    pub cache: CacheConfig,
    /// `PAGE_SIZE`
    pub locator: LocatorConfig,
    /// `STATIC_DIR`
    pub static_dir: PathBuf,
    /// `MOCK_FEED_DIR`: serve fixtures from here instead of the live feed.
    pub mock_feed_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, using defaults for unset keys.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse(&get, "LOCATOR_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let mut feed = match get("CLIENT_IDENTIFIER") {
            Some(identifier) => FeedConfig::new(identifier),
            None => FeedConfig::default(),
        };
        if let Some(url) = get("FEED_BASE_URL") {
            feed = feed.with_base_url(url);
        }
        if let Some(secs) = parse::<u64>(&get, "FEED_TIMEOUT_SECS")? {
            feed = feed.with_timeout(secs);
        }

        let cache = match parse::<u64>(&get, "SNAPSHOT_TTL_SECS")? {
            Some(secs) => CacheConfig::new(Duration::from_secs(secs)),
            None => CacheConfig::default(),
        };

        let locator = match parse::<NonZeroUsize>(&get, "PAGE_SIZE")? {
            Some(page_size) => LocatorConfig::new(page_size),
            None => LocatorConfig::default(),
        };

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            bind_addr,
            feed,
            cache,
            locator,
            static_dir,
            mock_feed_dir: get("MOCK_FEED_DIR").map(PathBuf::from),
        })
    }
}

fn parse<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    get(key)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError {
                key,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
