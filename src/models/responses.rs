//! Response DTOs for the station API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::departures::{departing_in, Departure};
use crate::stations::{Page, Station};

/// A departure as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureDetail {
    /// Line or train designation
    pub name: String,
    /// Destination
    pub to: String,
    pub platform: Option<String>,
    /// Upstream timestamp, unchanged
    pub departure_time: String,
    /// Relative text computed when the record was built
    pub departing_in: String,
}

impl DepartureDetail {
    /// Attaches the relative "departing in" text as seen from `now`.
    pub fn from_departure(departure: Departure, now: DateTime<Utc>) -> Self {
        let departing_in = departing_in(&departure.departure_time, now);
        Self {
            name: departure.name,
            to: departure.to,
            platform: departure.platform,
            departure_time: departure.departure_time,
            departing_in,
        }
    }
}

/// Response body for the detail endpoint (GET /:id)
///
/// Station fields are omitted when no station with the id is listed.
/// This is also the value kept in the station cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Departures in upstream order
    pub departures: Vec<DepartureDetail>,
}

impl StationDetail {
    /// Merges an optional station with its departures.
    pub fn merge(station: Option<&Station>, departures: Vec<DepartureDetail>) -> Self {
        Self {
            id: station.map(|s| s.id.clone()),
            name: station.map(|s| s.name.clone()),
            departures,
        }
    }
}

/// Response body for the listing endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationListResponse {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub results_count: usize,
    pub data: Vec<Station>,
}

impl StationListResponse {
    /// Builds the listing body from a directory page.
    pub fn new(page: usize, page_size: usize, listed: Page<'_>) -> Self {
        Self {
            page,
            page_size,
            total_pages: listed.total_count.div_ceil(page_size.max(1)),
            total_count: listed.total_count,
            results_count: listed.stations.len(),
            data: listed.stations.to_vec(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Number of stations loaded
    pub stations: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    ///
    /// # Arguments
    /// * `stats` - Snapshot of the station cache counters
    /// * `stations` - Number of stations in the directory
    pub fn new(stats: &CacheStats, stations: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            stations,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
