//! Rate Limit Module
//!
//! Per-client fixed-window request throttling.

mod client;
mod entry;
mod limiter;


pub use client::{client_identifier, FORWARDED_FOR_HEADER, REAL_IP_HEADER, UNKNOWN_CLIENT};
pub use entry::RateLimitEntry;
pub use limiter::{RateLimitDecision, RateLimiter};

// == Public Constants ==
/// Window length in milliseconds
pub const DEFAULT_WINDOW_MS: u64 = 60_000;

/// Requests allowed per identifier per window
pub const DEFAULT_MAX_REQUESTS: u32 = 100;
