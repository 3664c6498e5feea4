//! # snowfield
//!
//! Snowflake-style 64-bit identifiers with a configurable layout.
//!
//! Each identifier packs a millisecond timestamp offset, a per-millisecond
//! sequence counter and any number of named discriminator fields (machine,
//! shard, region...) into one 64-bit integer:
//! - 📈 Time-ordered per generator
//! - 🔒 Thread-safe, one mutex per generator
//! - 🧩 Field widths chosen at configuration time and validated once
//! - 🔁 Lossless integer, 8-byte and 16-character hex forms
//!
//! ```
//! use snowfield::SnowflakeGenerator;
//!
//! let generator = SnowflakeGenerator::new();
//! let id = generator.next_id_named(&[("machine", 7)]);
//! assert_eq!(id.field("machine"), Some(7));
//!
//! let parsed = generator.parse_hex(&id.to_hex()).unwrap();
//! assert_eq!(parsed, id);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
pub mod hex;
mod id;
mod layout;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder};
pub use error::SnowflakeError;
pub use extractor::SnowflakeExtractor;
pub use generator::{unix_time_ms, Clock, SnowflakeGenerator, SystemClock};
pub use id::SnowflakeId;
pub use layout::{BitLayout, Field, DEFAULT_EPOCH, DEFAULT_FIELDS, DEFAULT_SEQUENCE_BITS};

pub use hex::DecodeError as HexDecodeError;
