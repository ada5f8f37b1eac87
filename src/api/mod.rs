//! API Module
//!
//! HTTP handlers and routing for the station REST API.
//!
//! # Endpoints
//! - `GET /?page=&limit=` - Paginated station list
//! - `GET /:id` - Station with live departures
//! - `GET /stats` - Station cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
