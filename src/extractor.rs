use std::sync::Arc;

use crate::error::SnowflakeError;
use crate::hex;
use crate::id::SnowflakeId;
use crate::layout::{shr, BitLayout};

/// Snowflake component extractor
#[derive(Debug, Clone)]
pub struct SnowflakeExtractor {
    layout: Arc<BitLayout>,
}

impl SnowflakeExtractor {
    /// Create a new extractor for the given layout
    pub fn new(layout: Arc<BitLayout>) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Arc<BitLayout> {
        &self.layout
    }

    /// Extract timestamp component from a raw snowflake
    #[inline(always)]
    pub fn timestamp(&self, raw: u64) -> u64 {
        shr(raw, self.layout.timestamp_offset()) & self.layout.timestamp_max()
    }

    /// Extract sequence component from a raw snowflake
    #[inline(always)]
    pub fn sequence(&self, raw: u64) -> u64 {
        shr(raw, self.layout.sequence_offset()) & self.layout.sequence_max()
    }

    /// Extract a named field, `None` if the layout has no such field
    #[inline]
    pub fn field(&self, raw: u64, name: &str) -> Option<u64> {
        self.layout.field(name).map(|f| f.decode(raw))
    }

    /// Decompose a raw snowflake into all of its components
    pub fn decompose(&self, raw: u64) -> SnowflakeId {
        let fields = self.layout.fields().iter().map(|f| f.decode(raw)).collect();
        SnowflakeId::from_parts(
            Arc::clone(&self.layout),
            self.timestamp(raw),
            self.sequence(raw),
            fields,
        )
    }

    /// Parse the signed integer form
    pub fn from_i64(&self, raw: i64) -> SnowflakeId {
        self.decompose(raw as u64)
    }

    /// Parse the 8 byte big-endian form
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<SnowflakeId, SnowflakeError> {
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| SnowflakeError::InvalidByteLength { len: bytes.len() })?;
        Ok(self.decompose(u64::from_be_bytes(raw)))
    }

    /// Parse the hex form
    pub fn from_hex(&self, encoded: &str) -> Result<SnowflakeId, SnowflakeError> {
        let raw = hex::decode(encoded)?;
        Ok(self.decompose(raw))
    }
}
