use thiserror::Error;

use crate::hex::DecodeError;

/// Represents errors that can occur while configuring, generating or parsing snowflakes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// A field appears in the declared order but was never given a bit width
    #[error("Field \"{name}\" is declared but has no bit width")]
    UnknownField { name: String },
    /// The same field name was declared twice
    #[error("Field \"{name}\" is declared more than once")]
    DuplicateField { name: String },
    /// Sequence bits plus field bits do not fit into 64 bits
    #[error("Layout needs {total} bits but only 64 are available")]
    BitBudgetExceeded { total: u32 },
    /// A single field is wider than the space left beside the sequence
    #[error("Field \"{name}\" uses {bits} bits. Maximum allowed width is {max}")]
    FieldTooWide { name: String, bits: u8, max: u8 },
    /// Checked generation was given a value that does not fit its field
    #[error("Value {value} does not fit field \"{name}\". Maximum allowed value is {max}")]
    FieldOverflow { name: String, value: u64, max: u64 },
    /// Byte form must be exactly 8 bytes
    #[error("Expected 8 bytes, got {len}")]
    InvalidByteLength { len: usize },
    /// Hex form could not be parsed
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl SnowflakeError {
    /// True for errors raised while building a layout
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownField { .. }
                | Self::DuplicateField { .. }
                | Self::BitBudgetExceeded { .. }
                | Self::FieldTooWide { .. }
        )
    }

    /// True for errors raised while parsing bytes or hex text
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidByteLength { .. } | Self::Decode(_))
    }
}
