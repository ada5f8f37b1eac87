//! Request and Response models for the station API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query strings and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ListQuery;
pub use responses::{
    DepartureDetail, HealthResponse, StationDetail, StationListResponse, StatsResponse,
};
