//! Station Board - a read-through HTTP service over a static station list
//!
//! Each station is enriched on request with live departures from the
//! transport.opendata.ch stationboard, kept in a short-lived cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod departures;
pub mod error;
pub mod models;
pub mod resolver;
pub mod stations;

pub use api::AppState;
pub use config::Config;
pub use resolver::{ResolveError, StationResolver};
