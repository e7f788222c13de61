//! Expiry Cleanup Tasks
//!
//! Background tasks that periodically sweep expired cache entries and
//! finished rate-limit windows.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::TtlCache;
use crate::rate_limit::RateLimiter;

// == Sweep Trait ==
/// A store whose expired state can be removed in one pass.
pub trait Sweep: Send + Sync + 'static {
    /// Removes expired state and returns how many items went away.
    fn sweep(&mut self) -> usize;
}

impl<V: Clone + Send + Sync + 'static> Sweep for TtlCache<V> {
    fn sweep(&mut self) -> usize {
        self.cleanup()
    }
}

impl Sweep for RateLimiter {
    fn sweep(&mut self) -> usize {
        self.cleanup()
    }
}

/// Spawns a background task that sweeps `target` every `interval`.
///
/// The first sweep runs one full interval after spawning. The returned
/// handle aborts the task.
///
/// # Arguments
/// * `target` - Shared store to sweep
/// * `interval` - Time between sweeps
/// * `label` - Name used in log lines
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(TtlCache::<Value>::new(60)));
/// let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(300), "cache");
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<S: Sweep>(
    target: Arc<RwLock<S>>,
    interval: Duration,
    label: &'static str,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting {} cleanup task with interval of {} seconds",
            label,
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = target.write().await;
                guard.sweep()
            };

            if removed > 0 {
                info!("{} cleanup: removed {} expired entries", label, removed);
            } else {
                debug!("{} cleanup: no expired entries found", label);
            }
        }
    })
}

// == Cleanup Tasks ==
/// Handles to the sweep tasks started for one service instance.
#[derive(Debug)]
pub struct CleanupTasks {
    handles: Vec<JoinHandle<()>>,
}

impl CleanupTasks {
    /// Starts one sweep task for the cache and one for the rate limiter.
    pub fn spawn<V: Clone + Send + Sync + 'static>(
        cache: Arc<RwLock<TtlCache<V>>>,
        cache_interval: Duration,
        rate_limiter: Arc<RwLock<RateLimiter>>,
        rate_limit_interval: Duration,
    ) -> Self {
        Self {
            handles: vec![
                spawn_cleanup_task(cache, cache_interval, "cache"),
                spawn_cleanup_task(rate_limiter, rate_limit_interval, "rate limit"),
            ],
        }
    }

    /// Returns true once every task has stopped.
    pub fn is_finished(&self) -> bool {
        self.handles.iter().all(JoinHandle::is_finished)
    }

    /// Aborts every sweep task.
    pub fn shutdown(&self) {
        for handle in &self.handles {
            handle.abort();
        }
        warn!("Cleanup tasks aborted");
    }
}
