//! Core snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last used millisecond and sequence, guarded by the generator mutex
//! - `clock` - Wall-clock time source
//! - `wait` - Spin and backoff strategies
//! - `generate` - ID generation logic
//! - `codec_methods` - Integer, byte and hex shortcuts

mod clock;
mod codec_methods;
mod generate;
mod state;
mod wait;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::SnowflakeConfig;
use crate::extractor::SnowflakeExtractor;
use crate::layout::BitLayout;

pub use clock::{unix_time_ms, Clock, SystemClock};
#[cfg(test)]
pub(crate) use clock::test_clock::ManualClock;
use state::State;
use wait::{sleep_until_next_ms, spin_wait};

/// Thread-safe snowflake generator
///
/// One instance per discriminator assignment. Every call holds the internal
/// mutex for the whole clock check, sequence update and ID assembly.
#[derive(Debug)]
pub struct SnowflakeGenerator<C: Clock = SystemClock> {
    state: Mutex<State>,
    layout: Arc<BitLayout>,
    clock: C,

    pub(crate) config: SnowflakeConfig,
    pub(crate) extract: SnowflakeExtractor,
}

impl SnowflakeGenerator<SystemClock> {
    /// Create with the default Twitter layout
    pub fn new() -> Self {
        Self::with_config(SnowflakeConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: SnowflakeConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for SnowflakeGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SnowflakeGenerator<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(config: SnowflakeConfig, clock: C) -> Self {
        let layout = Arc::clone(config.layout());
        Self {
            state: Mutex::new(State::default()),
            extract: SnowflakeExtractor::new(Arc::clone(&layout)),
            layout,
            clock,
            config,
        }
    }

    pub fn layout(&self) -> &Arc<BitLayout> {
        &self.layout
    }

    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    /// Extractor bound to this generator's layout
    pub fn extract(&self) -> &SnowflakeExtractor {
        &self.extract
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Unix millisecond of the last issued ID, 0 before the first one
    pub fn last_timestamp(&self) -> u64 {
        self.lock_state().last_use_time
    }

    /// Sequence of the last issued ID
    pub fn current_sequence(&self) -> u64 {
        self.lock_state().sequence
    }

    // The state is two integers written together under the lock, so a
    // poisoned guard still holds a consistent value.
    pub(crate) fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Block until the clock reads past `from_ts`, returning the new reading
    pub(crate) fn wait_next_millis(&self, from_ts: u64) -> u64 {
        if let Some(new_ts) = spin_wait(from_ts, &self.config, || self.now_ms()) {
            return new_ts;
        }
        sleep_until_next_ms(from_ts, self.config.max_backoff_ms(), || self.now_ms())
    }
}
