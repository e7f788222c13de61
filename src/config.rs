//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_TTL_SECS, SEARCH_TTL_SECS};
use crate::rate_limit::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_MS};

/// Default interval in seconds between background sweeps
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default TTL in seconds for cached results
    pub default_ttl: u64,
    /// TTL in seconds for listing results that carry a search term
    pub search_ttl: u64,
    /// Cache cleanup interval in seconds
    pub cache_cleanup_interval: u64,
    /// Rate limit window length in milliseconds
    pub rate_limit_window_ms: u64,
    /// Requests allowed per client per window
    pub rate_limit_max_requests: u32,
    /// Rate limit cleanup interval in seconds
    pub rate_limit_cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 60)
    /// - `CACHE_SEARCH_TTL` - TTL in seconds for search listings (default: 30)
    /// - `CACHE_CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 300)
    /// - `RATE_LIMIT_WINDOW_MS` - Window length in milliseconds (default: 60000)
    /// - `RATE_LIMIT_MAX_REQUESTS` - Requests per window per client (default: 100)
    /// - `RATE_LIMIT_CLEANUP_INTERVAL` - Rate limit sweep frequency in seconds (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            default_ttl: env_or("CACHE_DEFAULT_TTL", defaults.default_ttl),
            search_ttl: env_or("CACHE_SEARCH_TTL", defaults.search_ttl),
            cache_cleanup_interval: env_or(
                "CACHE_CLEANUP_INTERVAL",
                defaults.cache_cleanup_interval,
            ),
            rate_limit_window_ms: env_or("RATE_LIMIT_WINDOW_MS", defaults.rate_limit_window_ms),
            rate_limit_max_requests: env_or(
                "RATE_LIMIT_MAX_REQUESTS",
                defaults.rate_limit_max_requests,
            ),
            rate_limit_cleanup_interval: env_or(
                "RATE_LIMIT_CLEANUP_INTERVAL",
                defaults.rate_limit_cleanup_interval,
            ),
        }
    }

    /// TTL for a listing result: shorter when a free-text search is present.
    pub fn listing_ttl(&self, has_search: bool) -> u64 {
        if has_search {
            self.search_ttl
        } else {
            self.default_ttl
        }
    }

    pub fn cache_cleanup_period(&self) -> Duration {
        Duration::from_secs(self.cache_cleanup_interval)
    }

    pub fn rate_limit_cleanup_period(&self) -> Duration {
        Duration::from_secs(self.rate_limit_cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: DEFAULT_TTL_SECS,
            search_ttl: SEARCH_TTL_SECS,
            cache_cleanup_interval: DEFAULT_CLEANUP_INTERVAL_SECS,
            rate_limit_window_ms: DEFAULT_WINDOW_MS,
            rate_limit_max_requests: DEFAULT_MAX_REQUESTS,
            rate_limit_cleanup_interval: DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
