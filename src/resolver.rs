//! Station Detail Resolver
//!
//! Builds the composite record for one station: cache first, then directory
//! lookup plus a live departure fetch, then a cache write.
//!
//! Two concurrent misses for the same id both fetch upstream; whichever
//! finishes last overwrites the other's cache entry. Both results are complete
//! records, so nothing is corrupted.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::departures::DepartureFetcher;
use crate::models::{DepartureDetail, StationDetail};
use crate::stations::StationDirectory;

/// Prefix of every station cache key.
pub const CACHE_KEY_PREFIX: &str = "station_";

/// Shared cache of composite station records.
pub type StationCache = Arc<RwLock<TtlCache<StationDetail>>>;

/// Failures of [`StationResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Empty or non-numeric station id
    #[error("invalid station id: {0:?}")]
    InvalidIdentifier(String),

    /// The departure fetch failed; the cause has already been logged
    #[error("upstream departures unavailable for station {0}")]
    UpstreamUnavailable(String),
}

/// Cache key for a station id.
pub fn cache_key(station_id: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{station_id}")
}

/// Whether `station_id` is a well-formed id: non-empty and all ASCII digits.
pub fn is_valid_station_id(station_id: &str) -> bool {
    !station_id.is_empty() && station_id.bytes().all(|b| b.is_ascii_digit())
}

// == Station Resolver ==
/// Coordinates the cache, the directory and the departure fetcher.
#[derive(Clone)]
pub struct StationResolver {
    directory: Arc<StationDirectory>,
    cache: StationCache,
    fetcher: Arc<dyn DepartureFetcher>,
    departure_limit: usize,
    cache_ttl: Duration,
}

impl StationResolver {
    /// # Arguments
    /// * `directory` - Loaded station list
    /// * `cache` - Shared station cache
    /// * `fetcher` - Live departure source
    /// * `departure_limit` - Maximum departures per record
    /// * `cache_ttl` - How long a record is served from cache
    pub fn new(
        directory: Arc<StationDirectory>,
        cache: StationCache,
        fetcher: Arc<dyn DepartureFetcher>,
        departure_limit: usize,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            directory,
            cache,
            fetcher,
            departure_limit,
            cache_ttl,
        }
    }

    pub fn directory(&self) -> &Arc<StationDirectory> {
        &self.directory
    }

    pub fn cache(&self) -> &StationCache {
        &self.cache
    }

    // == Resolve ==
    /// Returns the composite record for `station_id` as of now.
    pub async fn resolve(&self, station_id: &str) -> Result<StationDetail, ResolveError> {
        self.resolve_at(station_id, Utc::now()).await
    }

    /// Returns the composite record for `station_id` as of `now`.
    ///
    /// `now` drives cache expiry and the "departing in" text. That text is
    /// frozen into the cached record, so a later hit serves it unchanged.
    pub async fn resolve_at(
        &self,
        station_id: &str,
        now: DateTime<Utc>,
    ) -> Result<StationDetail, ResolveError> {
        if !is_valid_station_id(station_id) {
            return Err(ResolveError::InvalidIdentifier(station_id.to_string()));
        }

        let key = cache_key(station_id);
        let now_ms = now.timestamp_millis().max(0) as u64;

        // The guard is dropped here; no lock is held across the upstream fetch
        let cached = self.cache.write().await.get_at(&key, now_ms);
        if let Some(cached) = cached {
            debug!("Cache hit for {}", key);
            return Ok(cached);
        }

        let station = self.directory.find_by_id(station_id);
        if station.is_none() {
            debug!("Station {} is not listed, serving departures only", station_id);
        }

        let departures = self
            .fetcher
            .fetch(station_id, self.departure_limit)
            .await
            .map_err(|e| {
                warn!("Departure fetch for {} failed: {}", station_id, e);
                ResolveError::UpstreamUnavailable(station_id.to_string())
            })?;

        let departures = departures
            .into_iter()
            .take(self.departure_limit)
            .map(|d| DepartureDetail::from_departure(d, now))
            .collect();
        let detail = StationDetail::merge(station, departures);

        // Saturate rather than wrap for TTLs beyond u64 milliseconds
        let ttl_ms = u64::try_from(self.cache_ttl.as_millis()).unwrap_or(u64::MAX);
        self.cache
            .write()
            .await
            .put_at(key, detail.clone(), ttl_ms, now_ms);

        Ok(detail)
    }
}
