//! Clock Module
//!
//! Time source shared by the cache and the rate limiter, backed by
//! [`tick::Clock`]. All timestamps handed to the stores are Unix milliseconds.

use std::time::UNIX_EPOCH;

use tick::runtime::InactiveClock;
pub use tick::Clock;

/// Returns a clock reading wall-clock time from the operating system.
///
/// Only the current time is read, so the timer driver is not needed and
/// no runtime has to be running.
pub fn system_clock() -> Clock {
    let (clock, _driver) = InactiveClock::default().activate();
    clock
}

/// Current time of `clock` in Unix milliseconds.
///
/// A clock set before 1970 reads as the epoch.
pub fn now_ms(clock: &Clock) -> u64 {
    clock
        .system_time()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
