//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Listing page size when no `limit` is given
    pub default_page_size: usize,
    /// Maximum departures fetched per station
    pub departure_limit: usize,
    /// Station cache TTL in seconds
    pub cache_ttl: u64,
    /// Path of the station CSV file
    pub stations_file: String,
    /// Base URL of the transport API
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DEFAULT_PAGE_SIZE` - Listing page size (default: 20)
    /// - `DEPARTURE_LIMIT` - Departures per station (default: 5)
    /// - `CACHE_TTL` - Station cache TTL in seconds (default: 30)
    /// - `STATIONS_FILE` - Station CSV path (default: ./bahnhof.csv)
    /// - `UPSTREAM_BASE_URL` - Transport API (default: https://transport.opendata.ch/v1)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE")
                .filter(|&n| n > 0)
                .unwrap_or(defaults.default_page_size),
            departure_limit: parse_var("DEPARTURE_LIMIT")
                .filter(|&n| n > 0)
                .unwrap_or(defaults.departure_limit),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            stations_file: env::var("STATIONS_FILE").unwrap_or(defaults.stations_file),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
        }
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

/// Reads and parses an environment variable; unset or unparsable yields None.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            default_page_size: 20,
            departure_limit: 5,
            cache_ttl: 30,
            stations_file: "./bahnhof.csv".to_string(),
            upstream_base_url: "https://transport.opendata.ch/v1".to_string(),
            upstream_timeout: 10,
        }
    }
}
