//! Configuration for the snowflake generator

mod builder;

use std::sync::Arc;

pub use builder::SnowflakeConfigBuilder;
use builder::{DEFAULT_MAX_BACKOFF_MS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS, DEFAULT_SPIN_YIELD_EVERY};

use crate::layout::BitLayout;

/// Configuration for a snowflake generator
///
/// Pairs an immutable [`BitLayout`] with the tuning used while waiting for the
/// clock to move on.
#[derive(Debug, Clone)]
pub struct SnowflakeConfig {
    layout: Arc<BitLayout>,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
    max_backoff_ms: u64,
}

impl SnowflakeConfig {
    /// Wrap an existing layout with default wait tuning
    pub fn from_layout(layout: Arc<BitLayout>) -> Self {
        Self {
            layout,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(layout: BitLayout, b: &SnowflakeConfigBuilder) -> Self {
        let mut cfg = Self::from_layout(Arc::new(layout));
        cfg.spin_enabled = b.spin_enabled;
        cfg.spin_loops = b.spin_loops;
        cfg.spin_yield_every = b.spin_yield_every;
        cfg.max_backoff_ms = b.max_backoff_ms;
        cfg
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    pub fn layout(&self) -> &Arc<BitLayout> {
        &self.layout
    }

    #[inline(always)]
    pub fn epoch(&self) -> u64 {
        self.layout.epoch()
    }

    #[inline(always)]
    pub fn sequence_bits(&self) -> u8 {
        self.layout.sequence_bits()
    }

    #[inline(always)]
    pub fn max_sequence(&self) -> u64 {
        self.layout.sequence_max()
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn max_backoff_ms(&self) -> u64 {
        self.max_backoff_ms
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::from_layout(BitLayout::twitter())
    }
}
