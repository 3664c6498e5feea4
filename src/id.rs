//! Decoded snowflake value and its encoded forms

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::hex;
use crate::layout::{shl, BitLayout};

/// A snowflake broken into its timestamp offset, sequence and field values
///
/// Field values are stored in declaration order. They are not range checked:
/// a value wider than its field spills into the bits above it when encoded.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SnowflakeId {
    layout: Arc<BitLayout>,
    timestamp: u64,
    sequence: u64,
    fields: Box<[u64]>,
}

impl SnowflakeId {
    pub(crate) fn from_parts(
        layout: Arc<BitLayout>,
        timestamp: u64,
        sequence: u64,
        fields: Box<[u64]>,
    ) -> Self {
        Self {
            layout,
            timestamp,
            sequence,
            fields,
        }
    }

    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Milliseconds between the layout epoch and creation
    #[inline(always)]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    #[inline(always)]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Field values in declaration order
    pub fn fields(&self) -> &[u64] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<u64> {
        self.layout.field_index(name).map(|i| self.fields[i])
    }

    #[inline]
    pub fn to_u64(&self) -> u64 {
        // the timestamp is masked so a long-lived layout wraps instead of
        // corrupting the fields; caller field values are not
        let timestamp = self.timestamp & self.layout.timestamp_max();
        let head = shl(timestamp, self.layout.timestamp_offset())
            | shl(self.sequence, self.layout.sequence_offset());
        self.layout
            .fields()
            .iter()
            .zip(self.fields.iter())
            .fold(head, |acc, (field, &value)| acc | field.encode(value))
    }

    /// Signed integer form, the same bits as [`to_u64`](Self::to_u64)
    #[inline]
    pub fn to_i64(&self) -> i64 {
        self.to_u64() as i64
    }

    /// Big-endian byte form
    pub fn to_bytes(&self) -> [u8; 8] {
        self.to_u64().to_be_bytes()
    }

    /// Lowercase hex, always 16 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_u64())
    }

    /// Creation time in Unix milliseconds
    pub fn create_time(&self) -> u64 {
        self.timestamp + self.layout.epoch()
    }

    /// Creation time as a UTC date, `None` outside chrono's range
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.create_time()).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("SnowflakeId");
        s.field("timestamp", &self.timestamp)
            .field("sequence", &self.sequence);
        for (field, value) in self.layout.fields().iter().zip(self.fields.iter()) {
            s.field(field.name(), value);
        }
        s.finish()
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&SnowflakeId> for u64 {
    fn from(id: &SnowflakeId) -> Self {
        id.to_u64()
    }
}

impl From<&SnowflakeId> for i64 {
    fn from(id: &SnowflakeId) -> Self {
        id.to_i64()
    }
}
