//! Inventory Guard - response cache and rate limiter for an inventory admin API
//!
//! Provides a TTL cache for memoized listing results and a per-client
//! fixed-window rate limiter, each swept by a background task.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod rate_limit;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{generate_key, TtlCache};
pub use config::Config;
pub use rate_limit::{client_identifier, RateLimitDecision, RateLimiter};
pub use tasks::{spawn_cleanup_task, CleanupTasks};
