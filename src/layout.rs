//! Bit layout of a snowflake
//!
//! From the most significant bit down, a snowflake holds the declared fields
//! (first declared field highest), then the timestamp offset, then the sequence:
//!
//! ```text
//! | field 0 | field 1 | ... | field n | timestamp | sequence |
//! 63                                                        0
//! ```
//!
//! The timestamp receives whatever the sequence and fields leave of the 64 bits.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::SnowflakeError;

/// Twitter epoch, Nov 04 2010 01:42:54.657 UTC
pub const DEFAULT_EPOCH: u64 = 1288834974657;
pub const DEFAULT_SEQUENCE_BITS: u8 = 12;
/// One spare bit over a 10 bit machine number
pub const DEFAULT_FIELDS: [(&str, u8); 2] = [("unused", 1), ("machine", 10)];

static DEFAULT_LAYOUT: Lazy<Arc<BitLayout>> = Lazy::new(|| {
    let fields = DEFAULT_FIELDS
        .iter()
        .map(|&(name, bits)| (name.to_string(), bits))
        .collect();
    Arc::new(BitLayout::compute(DEFAULT_EPOCH, DEFAULT_SEQUENCE_BITS, fields))
});

/// Mask covering the lowest `bits` bits
#[inline(always)]
pub(crate) const fn mask(bits: u8) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Shift that yields 0 instead of overflowing
#[inline(always)]
pub(crate) const fn shl(value: u64, offset: u8) -> u64 {
    if offset >= 64 {
        0
    } else {
        value << offset
    }
}

#[inline(always)]
pub(crate) const fn shr(value: u64, offset: u8) -> u64 {
    if offset >= 64 {
        0
    } else {
        value >> offset
    }
}

/// A named discriminator field and its position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    bits: u8,
    offset: u8,
    max: u64,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn offset(&self) -> u8 {
        self.offset
    }

    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Place `value` at this field's offset without range checking
    #[inline(always)]
    pub(crate) const fn encode(&self, value: u64) -> u64 {
        shl(value, self.offset)
    }

    #[inline(always)]
    pub(crate) const fn decode(&self, raw: u64) -> u64 {
        shr(raw, self.offset) & self.max
    }
}

/// Immutable offsets and maxima for every part of a snowflake
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitLayout {
    epoch: u64,
    sequence_bits: u8,
    sequence_max: u64,
    timestamp_bits: u8,
    timestamp_offset: u8,
    timestamp_max: u64,
    fields: Vec<Field>,
}

impl BitLayout {
    /// Build a layout from fields given in declaration order
    pub fn new(epoch: u64, sequence_bits: u8, fields: &[(&str, u8)]) -> Result<Self, SnowflakeError> {
        let order: Vec<String> = fields.iter().map(|&(name, _)| name.to_string()).collect();
        let bits: HashMap<String, u8> = fields
            .iter()
            .map(|&(name, bits)| (name.to_string(), bits))
            .collect();
        Self::build(epoch, sequence_bits, &order, &bits)
    }

    /// Build a layout from a declared order and a separate width table
    ///
    /// Widths for names missing from `order` are ignored. Every name in
    /// `order` must have a width.
    pub fn build(
        epoch: u64,
        sequence_bits: u8,
        order: &[String],
        bits: &HashMap<String, u8>,
    ) -> Result<Self, SnowflakeError> {
        let max_field_bits = 64u8.saturating_sub(sequence_bits);
        let mut total = sequence_bits as u32;
        let mut seen = HashSet::with_capacity(order.len());
        let mut fields = Vec::with_capacity(order.len());

        for name in order {
            let width = *bits.get(name).ok_or_else(|| SnowflakeError::UnknownField {
                name: name.clone(),
            })?;
            if !seen.insert(name.as_str()) {
                return Err(SnowflakeError::DuplicateField { name: name.clone() });
            }
            if width > max_field_bits {
                return Err(SnowflakeError::FieldTooWide {
                    name: name.clone(),
                    bits: width,
                    max: max_field_bits,
                });
            }
            total += width as u32;
            fields.push((name.clone(), width));
        }

        if total > 64 {
            return Err(SnowflakeError::BitBudgetExceeded { total });
        }

        Ok(Self::compute(epoch, sequence_bits, fields))
    }

    /// Derive offsets from already validated widths
    fn compute(epoch: u64, sequence_bits: u8, fields: Vec<(String, u8)>) -> Self {
        let field_bits: u8 = fields.iter().map(|(_, bits)| bits).sum();
        let timestamp_bits = 64 - sequence_bits - field_bits;
        let timestamp_offset = sequence_bits;

        let mut offset = timestamp_offset + timestamp_bits;
        let mut placed: Vec<Field> = fields
            .into_iter()
            .rev()
            .map(|(name, bits)| {
                let field = Field {
                    name,
                    bits,
                    offset,
                    max: mask(bits),
                };
                offset += bits;
                field
            })
            .collect();
        placed.reverse();

        let layout = Self {
            epoch,
            sequence_bits,
            sequence_max: mask(sequence_bits),
            timestamp_bits,
            timestamp_offset,
            timestamp_max: mask(timestamp_bits),
            fields: placed,
        };
        let placement: Vec<(&str, u8, u8)> = layout
            .fields
            .iter()
            .map(|f| (f.name(), f.bits(), f.offset()))
            .collect();
        debug!(
            epoch = layout.epoch,
            sequence_bits = layout.sequence_bits,
            timestamp_bits = layout.timestamp_bits,
            fields = ?placement,
            "built snowflake layout"
        );
        layout
    }

    /// Layout with one spare bit, a 10 bit machine number and a 12 bit sequence
    pub fn twitter() -> Arc<Self> {
        Arc::clone(&DEFAULT_LAYOUT)
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn sequence_max(&self) -> u64 {
        self.sequence_max
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        self.timestamp_bits
    }

    #[inline(always)]
    pub const fn timestamp_offset(&self) -> u8 {
        self.timestamp_offset
    }

    #[inline(always)]
    pub const fn timestamp_max(&self) -> u64 {
        self.timestamp_max
    }

    /// Sequence always starts at bit 0
    #[inline(always)]
    pub const fn sequence_offset(&self) -> u8 {
        0
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Resolve name-keyed values into declaration order
    ///
    /// Unknown names are ignored and absent fields default to 0.
    pub fn resolve(&self, named: &[(&str, u64)]) -> Vec<u64> {
        let mut values = vec![0; self.fields.len()];
        for &(name, value) in named {
            if let Some(index) = self.field_index(name) {
                values[index] = value;
            }
        }
        values
    }

    /// Copy positional values, padding missing ones with 0 and dropping extras
    pub(crate) fn take_values(&self, values: &[u64]) -> Box<[u64]> {
        (0..self.fields.len())
            .map(|i| values.get(i).copied().unwrap_or(0))
            .collect()
    }

    /// Range check positional values against their fields
    pub(crate) fn check_values(&self, values: &[u64]) -> Result<(), SnowflakeError> {
        for (field, &value) in self.fields.iter().zip(values) {
            if value > field.max {
                return Err(SnowflakeError::FieldOverflow {
                    name: field.name.clone(),
                    value,
                    max: field.max,
                });
            }
        }
        Ok(())
    }
}
