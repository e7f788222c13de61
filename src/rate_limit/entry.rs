//! Rate Limit Entry Module
//!
//! Per-identifier request counter for the current window.

// == Rate Limit Entry ==
/// Requests seen from one identifier in its current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    /// Requests admitted in the current window
    pub count: u32,
    /// End of the current window (Unix milliseconds)
    pub reset_at: u64,
}

impl RateLimitEntry {
    /// Opens a window at `now_ms` with the first request already counted.
    pub fn open(now_ms: u64, window_ms: u64) -> Self {
        Self {
            count: 1,
            reset_at: now_ms.saturating_add(window_ms),
        }
    }

    /// The window is over once `now_ms` is strictly past `reset_at`.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms > self.reset_at
    }
}
