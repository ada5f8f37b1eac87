//! Station Directory Module
//!
//! The static list of stations, loaded once from CSV at startup and read-only
//! afterwards.

mod directory;
mod error;

pub use directory::{Page, Station, StationDirectory};
pub use error::DirectoryError;
