//! API Handlers
//!
//! HTTP request handlers for each station endpoint.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::departures::{DepartureFetcher, HttpDepartureFetcher, UpstreamConfig};
use crate::error::{AppError, Result};
use crate::models::{HealthResponse, ListQuery, StationDetail, StationListResponse, StatsResponse};
use crate::resolver::StationResolver;
use crate::stations::StationDirectory;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-backed station detail lookup
    pub resolver: StationResolver,
    /// Listing page size when the query gives none
    pub default_page_size: usize,
}

impl AppState {
    /// Creates a new AppState around a loaded directory and a departure source.
    pub fn new(
        directory: StationDirectory,
        fetcher: Arc<dyn DepartureFetcher>,
        config: &Config,
    ) -> Self {
        let resolver = StationResolver::new(
            Arc::new(directory),
            Arc::new(RwLock::new(TtlCache::new())),
            fetcher,
            config.departure_limit,
            config.cache_ttl_duration(),
        );

        Self {
            resolver,
            default_page_size: config.default_page_size,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Loads the station CSV and builds the live stationboard client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let directory = StationDirectory::load(&config.stations_file)
            .with_context(|| format!("loading stations from {}", config.stations_file))?;
        info!("Train station data loaded: {} stations", directory.len());

        let upstream = UpstreamConfig::new()
            .with_base_url(config.upstream_base_url.as_str())
            .with_timeout(config.upstream_timeout);
        let fetcher =
            HttpDepartureFetcher::new(upstream).context("building stationboard client")?;

        Ok(Self::new(directory, Arc::new(fetcher), config))
    }
}

/// Handler for GET /
///
/// Returns one page of the station list.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<StationListResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let page = query.page.unwrap_or(1);
    let page_size = query.limit.unwrap_or(state.default_page_size);
    let listed = state.resolver.directory().list(page, page_size);

    Ok(Json(StationListResponse::new(page, page_size, listed)))
}

/// Handler for GET /:id
///
/// Returns the station merged with its upcoming departures.
pub async fn station_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationDetail>> {
    let detail = state.resolver.resolve(&id).await?;
    Ok(Json(detail))
}

/// Handler for GET /stats
///
/// Returns station cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let stats = state.resolver.cache().read().await.stats();

    Json(StatsResponse::new(&stats, state.resolver.directory().len()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
