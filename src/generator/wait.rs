//! Wait and backoff strategies for sequence exhaustion
//!
//! Implements spin-wait and exponential backoff for waiting until next millisecond

use std::thread;
use std::time::Duration;

use crate::config::SnowflakeConfig;

/// Perform spin-wait loop, checking for timestamp advancement
///
/// Returns Some(new_ts) if timestamp advanced, None if spin loops exhausted
#[inline]
pub fn spin_wait<F>(from_timestamp: u64, config: &SnowflakeConfig, get_time: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning new timestamp once advanced
#[inline]
pub fn sleep_until_next_ms<F>(from_timestamp: u64, max_backoff_ms: u64, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    let mut backoff_ms = 1u64;
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }
        backoff_ms = next_backoff(backoff_ms, max_backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at `max_ms`
#[inline(always)]
pub const fn next_backoff(current: u64, max_ms: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > max_ms {
        if max_ms == 0 {
            1
        } else {
            max_ms
        }
    } else {
        next
    }
}
