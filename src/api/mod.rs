//! API Module
//!
//! HTTP handlers, rate-limit middleware and routing for the service.
//!
//! # Endpoints
//! - `POST /keys` - Build a cache key and its TTL
//! - `PUT /cache` - Store a result
//! - `GET /cache/:key` - Look up a result
//! - `DELETE /cache/:key` - Drop a result
//! - `DELETE /cache` - Invalidate every result
//! - `GET /stats` - Cache and rate limit statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use middleware::{rate_limit_middleware, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER};
pub use routes::create_router;
