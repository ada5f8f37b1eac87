//! Cache Module
//!
//! In-memory key-value cache with per-entry TTL, expired lazily on read.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::TtlCache;
