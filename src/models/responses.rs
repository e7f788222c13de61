//! Response DTOs for the service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for a cache hit (GET /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for PUT /cache
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// TTL in seconds applied to the entry
    pub ttl: u64,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, ttl: u64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached for {}s", key, ttl),
            key,
            ttl,
        }
    }
}

/// Response body for DELETE /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub key: String,
    /// Whether an entry was present
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>, deleted: bool) -> Self {
        let key = key.into();
        let message = if deleted {
            format!("Key '{}' deleted successfully", key)
        } else {
            format!("Key '{}' was not cached", key)
        };
        Self {
            message,
            key,
            deleted,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries invalidated
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("{} cached entries invalidated", cleared),
            cleared,
        }
    }
}

/// Response body for POST /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    /// Deterministic cache key
    pub key: String,
    /// TTL in seconds to store the result with
    pub ttl: u64,
}

/// Cache section of the stats response
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// TTL in seconds for entries stored without one
    pub default_ttl: u64,
}

/// Rate limit section of the stats response
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitStatsResponse {
    /// Clients with an open or not yet swept window
    pub tracked_clients: usize,
    pub window_ms: u64,
    pub max_requests: u32,
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub cache: CacheStatsResponse,
    pub rate_limit: RateLimitStatsResponse,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, default_ttl: u64, rate_limit: RateLimitStatsResponse) -> Self {
        Self {
            cache: CacheStatsResponse {
                hit_rate: stats.hit_rate(),
                stats,
                default_ttl,
            },
            rate_limit,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current time, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
