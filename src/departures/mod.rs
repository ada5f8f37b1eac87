//! Departure Fetcher Module
//!
//! Live departures for a station, fetched from the transport.opendata.ch
//! stationboard API.
//!
//! - Times are upstream timestamps such as `2024-05-01T12:34:00+0200`
//! - The board is returned in upstream order and never re-sorted
//! - Failures are reported as a single [`UpstreamError`]; nothing is retried

mod client;
mod error;
mod relative;
mod types;

use async_trait::async_trait;

pub use client::{HttpDepartureFetcher, UpstreamConfig};
pub use error::UpstreamError;
pub use relative::{departing_in, humanize, parse_departure_time};
pub use types::{Departure, StationBoard, StationBoardEntry, StopInfo};

// == Departure Fetcher ==
/// Source of upcoming departures for a station.
#[async_trait]
pub trait DepartureFetcher: Send + Sync {
    /// Returns at most `limit` departures for `station_id`, in upstream order.
    async fn fetch(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<Departure>, UpstreamError>;
}
