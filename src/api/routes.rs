//! API Routes
//!
//! Configures the Axum router with all station endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, list_handler, station_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /?page=&limit=` - Paginated station list
/// - `GET /:id` - Station with live departures
/// - `GET /stats` - Station cache statistics
/// - `GET /health` - Health check endpoint
///
/// Static paths win over `/:id`, so `/stats` and `/health` never reach the
/// station handler.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(list_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/:id", get(station_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
