//! SnowflakeConfig builder for constructing configuration

use std::collections::HashMap;

use super::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::layout::{BitLayout, DEFAULT_EPOCH, DEFAULT_FIELDS, DEFAULT_SEQUENCE_BITS};

/// Default wait tuning
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;
pub(super) const DEFAULT_MAX_BACKOFF_MS: u64 = 16;

/// Builder for SnowflakeConfig
///
/// Starts from the Twitter layout: epoch `1288834974657`, 12 sequence bits and
/// the fields `unused` (1 bit) and `machine` (10 bits). Calling [`field`] or
/// [`field_order`] replaces the default fields.
///
/// [`field`]: SnowflakeConfigBuilder::field
/// [`field_order`]: SnowflakeConfigBuilder::field_order
#[derive(Debug, Clone)]
pub struct SnowflakeConfigBuilder {
    epoch: u64,
    sequence_bits: u8,
    order: Vec<String>,
    bits: HashMap<String, u8>,
    default_fields: bool,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
    pub(super) max_backoff_ms: u64,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            order: DEFAULT_FIELDS.iter().map(|&(name, _)| name.to_string()).collect(),
            bits: DEFAULT_FIELDS
                .iter()
                .map(|&(name, bits)| (name.to_string(), bits))
                .collect(),
            default_fields: true,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }

    /// Set a custom epoch timestamp in milliseconds
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the width of the per-millisecond sequence counter
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    // Default widths stay in the table; names outside the order are ignored.
    fn clear_default_fields(&mut self) {
        if self.default_fields {
            self.order.clear();
            self.default_fields = false;
        }
    }

    /// Append a field and its width in one step
    pub fn field(mut self, name: impl Into<String>, bits: u8) -> Self {
        self.clear_default_fields();
        let name = name.into();
        self.order.push(name.clone());
        self.bits.insert(name, bits);
        self
    }

    /// Replace the declared field order
    ///
    /// Widths come from [`field_bits`](Self::field_bits). A name without a
    /// width makes [`build`](Self::build) fail.
    pub fn field_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clear_default_fields();
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Set the width of a named field, declared or not
    pub fn field_bits(mut self, name: impl Into<String>, bits: u8) -> Self {
        self.bits.insert(name.into(), bits);
        self
    }

    /// Enable or disable micro spin before sleep on overflow
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Cap for the exponential sleep backoff
    pub const fn max_backoff_ms(mut self, ms: u64) -> Self {
        self.max_backoff_ms = ms;
        self
    }

    /// Validate the layout and build the final SnowflakeConfig
    pub fn build(self) -> Result<SnowflakeConfig, SnowflakeError> {
        let layout = BitLayout::build(self.epoch, self.sequence_bits, &self.order, &self.bits)?;
        Ok(SnowflakeConfig::from_builder(layout, &self))
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
