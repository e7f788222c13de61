//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::{generate_key, has_search_term, TtlCache};
use crate::clock::{system_clock, Clock};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, KeyRequest, KeyResponse,
    RateLimitStatsResponse, SetRequest, SetResponse, StatsResponse,
};
use crate::rate_limit::RateLimiter;

/// Response header reporting whether a lookup was served from cache
pub const CACHE_STATUS_HEADER: &str = "x-cache";
pub const CACHE_HIT: &str = "HIT";
pub const CACHE_MISS: &str = "MISS";

/// Application state shared across all handlers.
///
/// Built once at startup; every handler and the rate-limit middleware
/// receive a clone pointing at the same cache and limiter.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<TtlCache<Value>>>,
    pub rate_limiter: Arc<RwLock<RateLimiter>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(cache: TtlCache<Value>, rate_limiter: RateLimiter, config: Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
            config: Arc::new(config),
        }
    }

    /// Creates the state on the system clock.
    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with_clock(config, system_clock())
    }

    /// Creates the state with both components reading time from `clock`.
    pub fn from_config_with_clock(config: &Config, clock: Clock) -> Self {
        let cache = TtlCache::with_clock(config.default_ttl, clock.clone());
        let rate_limiter = RateLimiter::with_clock(
            config.rate_limit_window_ms,
            config.rate_limit_max_requests,
            clock,
        );
        Self::new(cache, rate_limiter, config.clone())
    }
}

/// Handler for POST /keys
///
/// Builds the cache key for a prefix and parameter set, with the TTL the
/// result should be cached for.
pub async fn key_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<KeyResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let key = generate_key(&req.prefix, &req.params);
    let ttl = state.config.listing_ttl(has_search_term(&req.params));

    Ok(Json(KeyResponse { key, ttl }))
}

/// Handler for PUT /cache
///
/// Stores a JSON result under a key with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let ttl = req.ttl.unwrap_or(cache.default_ttl());
    cache.set(req.key.clone(), req.value, Some(ttl));

    Ok(Json(SetResponse::new(req.key, ttl)))
}

/// Handler for GET /cache/:key
///
/// Returns the cached result tagged `x-cache: HIT`, or 404 tagged
/// `x-cache: MISS`.
pub async fn get_handler(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    // Write lock: an expired entry is removed on read.
    let value = state.cache.write().await.get(&key);

    match value {
        Some(value) => (
            [(CACHE_STATUS_HEADER, CACHE_HIT)],
            Json(GetResponse::new(key, value)),
        )
            .into_response(),
        None => ([(CACHE_STATUS_HEADER, CACHE_MISS)], AppError::NotFound(key)).into_response(),
    }
}

/// Handler for DELETE /cache/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let deleted = state.cache.write().await.delete(&key);
    Json(DeleteResponse::new(key, deleted))
}

/// Handler for DELETE /cache
///
/// Invalidates every cached result. Called after any create, update or
/// delete of the underlying data.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.write().await.clear();
    debug!("Cache invalidated on request: {} entries", cleared);
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let (stats, default_ttl) = {
        let cache = state.cache.read().await;
        (cache.stats(), cache.default_ttl())
    };
    let rate_limit = {
        let limiter = state.rate_limiter.read().await;
        RateLimitStatsResponse {
            tracked_clients: limiter.len(),
            window_ms: limiter.window_ms(),
            max_requests: limiter.max_requests(),
        }
    };

    Json(StatsResponse::new(stats, default_ttl, rate_limit))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
