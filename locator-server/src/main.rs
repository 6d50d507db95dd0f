use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use locator_server::cache::CachedFeed;
use locator_server::config::AppConfig;
use locator_server::feed::{FeedClient, FeedSource, MockFeedClient};
use locator_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("locator_server=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let source = match &config.mock_feed_dir {
        Some(dir) => MockFeedClient::new(dir).map(FeedSource::Mock),
        None => FeedClient::new(config.feed.clone()).map(FeedSource::Live),
    };
    let source = match source {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "failed to create feed source");
            return ExitCode::FAILURE;
        }
    };

    let feed = CachedFeed::new(source, &config.cache);
    info!(source = %feed.source().describe(), "using station feed");

    // Warm the cache; a failure here is retried on the first request.
    match feed.snapshot().await {
        Ok(snapshot) => info!(stations = snapshot.stations.len(), "loaded stations"),
        Err(e) => warn!(error = %e, "initial station fetch failed"),
    }

    let state = AppState::new(feed, config.locator.clone());
    let app = create_router(state, &config.static_dir.to_string_lossy());

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("station locator listening on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
