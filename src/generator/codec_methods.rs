//! Integer, byte and hex convenience methods for the generator

use super::{Clock, SnowflakeGenerator};
use crate::error::SnowflakeError;
use crate::id::SnowflakeId;

impl<C: Clock> SnowflakeGenerator<C> {
    /// Generate a new snowflake as a signed integer
    #[inline]
    pub fn next_i64(&self, values: &[u64]) -> i64 {
        self.next_id(values).to_i64()
    }

    /// Generate a new snowflake as an unsigned integer
    #[inline]
    pub fn next_u64(&self, values: &[u64]) -> u64 {
        self.next_id(values).to_u64()
    }

    /// Generate a new snowflake as 8 big-endian bytes
    pub fn next_bytes(&self, values: &[u64]) -> [u8; 8] {
        self.next_id(values).to_bytes()
    }

    /// Generate a new snowflake as 16 lowercase hex characters
    pub fn next_hex(&self, values: &[u64]) -> String {
        self.next_id(values).to_hex()
    }

    /// Decompose an integer snowflake
    pub fn parse_i64(&self, raw: i64) -> SnowflakeId {
        self.extract.from_i64(raw)
    }

    /// Decompose a byte snowflake, which must be exactly 8 bytes
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<SnowflakeId, SnowflakeError> {
        self.extract.from_bytes(bytes)
    }

    /// Decompose a hex snowflake
    pub fn parse_hex(&self, encoded: &str) -> Result<SnowflakeId, SnowflakeError> {
        self.extract.from_hex(encoded)
    }
}
