//! Rate Limiter Module
//!
//! Fixed-window request counter keyed by client identifier.

use std::collections::HashMap;

use serde::Serialize;

use crate::clock::{now_ms, system_clock, Clock};
use crate::rate_limit::{RateLimitEntry, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_MS};

// == Decision ==
/// Outcome of a single `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// Requests left in the current window
    pub remaining: u32,
    /// End of the current window (Unix milliseconds)
    pub reset_at: u64,
}

// == Rate Limiter ==
/// Fixed-window rate limiter.
///
/// Each identifier gets `max_requests` per window of `window_ms`. A window
/// opens on the first request after the previous one ended. Rejected
/// requests are not counted and do not move the window. Up to twice the
/// limit can pass in quick succession across a window edge.
#[derive(Debug)]
pub struct RateLimiter {
    requests: HashMap<String, RateLimitEntry>,
    window_ms: u64,
    max_requests: u32,
    clock: Clock,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter on the system clock.
    ///
    /// # Arguments
    /// * `window_ms` - Window length in milliseconds
    /// * `max_requests` - Requests allowed per identifier per window
    pub fn new(window_ms: u64, max_requests: u32) -> Self {
        Self::with_clock(window_ms, max_requests, system_clock())
    }

    /// Creates a limiter reading time from `clock`.
    pub fn with_clock(window_ms: u64, max_requests: u32, clock: Clock) -> Self {
        Self {
            requests: HashMap::new(),
            window_ms,
            max_requests,
            clock,
        }
    }

    // == Check ==
    /// Records a request from `identifier` and decides whether it may proceed.
    pub fn check(&mut self, identifier: &str) -> RateLimitDecision {
        let now = now_ms(&self.clock);

        if self
            .requests
            .get(identifier)
            .is_some_and(|entry| entry.is_expired_at(now))
        {
            self.requests.remove(identifier);
        }

        let Some(entry) = self.requests.get_mut(identifier) else {
            let entry = RateLimitEntry::open(now, self.window_ms);
            self.requests.insert(identifier.to_string(), entry);
            return RateLimitDecision {
                allowed: true,
                remaining: self.max_requests.saturating_sub(1),
                reset_at: entry.reset_at,
            };
        };

        if entry.count >= self.max_requests {
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                reset_at: entry.reset_at,
            };
        }

        entry.count += 1;
        RateLimitDecision {
            allowed: true,
            remaining: self.max_requests - entry.count,
            reset_at: entry.reset_at,
        }
    }

    // == Cleanup ==
    /// Forgets identifiers whose window has ended. Returns the number removed.
    pub fn cleanup(&mut self) -> usize {
        let now = now_ms(&self.clock);
        let before = self.requests.len();
        self.requests.retain(|_, entry| !entry.is_expired_at(now));
        before - self.requests.len()
    }

    /// Number of identifiers currently tracked.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true when no identifier is tracked.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Window length in milliseconds.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Requests admitted per identifier per window.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS, DEFAULT_MAX_REQUESTS)
    }
}
