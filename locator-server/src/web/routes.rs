//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tracing::{debug, error};

use crate::domain::ReferencePoint;
use crate::feed::FetchError;
use crate::locator::ViewState;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search box and the first page of stations.
///
/// A failed fetch still renders the page, with the alert shown.
async fn index_page(
    State(state): State<AppState>,
    Query(req): Query<StationsQuery>,
) -> Result<Response, AppError> {
    let (status, template) = match state.feed.snapshot().await {
        Ok(snapshot) => {
            let reference = reference_point(&req);
            let view = ViewState::resolve(
                &snapshot.stations,
                reference.as_ref(),
                &req.view_request(),
                &state.config,
            );
            let template = IndexTemplate {
                list: StationListView::from_view(&view, reference.as_ref()),
                alert: None,
                updated: format_updated(snapshot.status_updated),
            };
            (StatusCode::OK, template)
        }
        Err(e) => {
            let template = IndexTemplate {
                list: StationListView::empty(),
                alert: Some(fetch_alert(&e)),
                updated: None,
            };
            (StatusCode::BAD_GATEWAY, template)
        }
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok((status, Html(html)).into_response())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The user's position, ignoring invalid or placeholder coordinates.
fn reference_point(req: &StationsQuery) -> Option<ReferencePoint> {
    req.reference_point()
        .inspect_err(|e| debug!(error = %e, "ignoring reference point"))
        .ok()
        .flatten()
}

/// Message shown to the user when the feed is unavailable.
fn fetch_alert(e: &FetchError) -> String {
    format!("Could not load station data: {e}")
}

/// Station list: nearest station, search matches or a page of all stations.
async fn list_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StationsQuery>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);

    let snapshot = match state.feed.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) if html => {
            let alert = AlertTemplate {
                message: fetch_alert(&e),
            };
            let body = alert.render().map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
            return Ok((StatusCode::BAD_GATEWAY, Html(body)).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let reference = reference_point(&req);
    let view = ViewState::resolve(
        &snapshot.stations,
        reference.as_ref(),
        &req.view_request(),
        &state.config,
    );

    debug!(
        mode = view.mode.as_str(),
        visible = view.visible_count(),
        total = view.total,
        "resolved station list"
    );

    if html {
        let template = StationListTemplate {
            list: StationListView::from_view(&view, reference.as_ref()),
        };
        let body = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(body).into_response())
    } else {
        let response =
            StationsResponse::from_view(&view, reference.as_ref(), &snapshot, Utc::now());
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The station feed could not be fetched
    BadGateway { message: String },
    Internal { message: String },
}

impl From<Arc<FetchError>> for AppError {
    fn from(e: Arc<FetchError>) -> Self {
        AppError::BadGateway {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
