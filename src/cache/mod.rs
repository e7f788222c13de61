//! Cache Module
//!
//! Provides an in-memory TTL cache for memoized query results, plus the
//! deterministic key builder used to address it.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{generate_key, has_search_term, KEY_PAIR_DELIMITER};
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// TTL in seconds for entries stored without an explicit TTL
pub const DEFAULT_TTL_SECS: u64 = 60;

/// TTL in seconds for listing results filtered by a free-text search
pub const SEARCH_TTL_SECS: u64 = 30;
