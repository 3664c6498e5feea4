//! Time source for snowflake generation

use chrono::Utc;

/// Millisecond clock read by the generator
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
}

/// Wall clock. Trusted as is; no cross-machine synchronisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_ms(&self) -> u64 {
        unix_time_ms()
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch
///
/// Readings before 1970 clamp to 0.
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
