//! HTTP server for the exchange listing
//!
//! Serves listing pages under a configurable base path:
//! `GET {base}/sort-{sortType}[/{tagPath...}]/results-{resultsPerPage}.{pageNumber}.json`

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::ListingError;
use crate::listing;
use crate::query::ListingQuery;
use crate::store::CardStore;

/// Base path the exchange listing has always been served under
pub const DEFAULT_BASE_PATH: &str = "/content/www/us/en/insights.collectionx.json";

/// Listen address and routing settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

/// Shared application state (read-only card store)
#[derive(Clone)]
struct AppState {
    store: Arc<CardStore>,
}

/// Optional query-string parameters of a listing request
#[derive(Debug, Deserialize)]
struct ListingParams {
    price: Option<String>,
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    cards: usize,
}

/// GET {base}/{*listing}
async fn listing_handler(
    State(state): State<AppState>,
    listing_path: Result<Path<String>, PathRejection>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Response {
    // Extractor failures get the same JSON error body as listing errors
    let Path(listing_path) = match listing_path {
        Ok(path) => path,
        Err(rejection) => {
            let err = ListingError::InvalidRequest(rejection.body_text());
            return error_response("<undecodable path>", err);
        }
    };
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => {
            let err = ListingError::InvalidRequest(rejection.body_text());
            return error_response(&listing_path, err);
        }
    };

    let result = ListingQuery::parse(&listing_path)
        .and_then(|query| query.with_price_filter(params.price.as_deref()))
        .and_then(|query| listing::handle(&state.store, &query));

    match result {
        Ok(response) => {
            log::info!(
                "{} -> page {} of {} ({} results)",
                listing_path,
                response.page,
                response.total_pages,
                response.total_results
            );
            Json(&response).into_response()
        }
        Err(e) => error_response(&listing_path, e),
    }
}

fn error_response(listing_path: &str, err: ListingError) -> Response {
    let status = if err.is_client_error() {
        log::warn!("Rejected listing request {}: {}", listing_path, err);
        StatusCode::BAD_REQUEST
    } else {
        log::error!("Listing request {} failed: {}", listing_path, err);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let body = ErrorResponse {
        success: false,
        error: err.to_string(),
    };
    (status, Json(body)).into_response()
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cards: state.store.len(),
    })
}

/// Normalize a base path to `/segment/...` without a trailing slash
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Build the web server router with permissive CORS
pub fn create_router(store: Arc<CardStore>, base_path: &str) -> Router {
    let state = AppState { store };
    let listing_route = format!("{}/{{*listing}}", normalize_base_path(base_path));

    Router::new()
        .route("/health", get(health_handler))
        .route(&listing_route, get(listing_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the web server and run until Ctrl+C
pub async fn serve(
    store: Arc<CardStore>,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(store, &config.base_path);

    // Bind to the configured interface (0.0.0.0 by default for Docker port mapping)
    let addr = format!("{}:{}", config.bind, config.port);

    log::info!(
        "Listing API listening on {}{}",
        addr,
        normalize_base_path(&config.base_path)
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve until Ctrl+C, letting in-flight requests finish
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[cfg(test)]
#[path = "web_tests.rs"]
mod tests;
