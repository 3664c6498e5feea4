/// Fixed-width base16 encoding and decoding for snowflakes
///
/// Encoded values are always 16 lowercase characters, left padded with `'0'`,
/// so the text form sorts the same way as the unsigned integer form.
use once_cell::sync::Lazy;

/// Character set for encoding
const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Lookup table for decoding characters to their values (both cases accepted)
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in HEX_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_uppercase() as usize] = i as i8;
    }
    map
});

/// Length of an encoded u64
pub const ENCODED_LEN: usize = 16;

/// Encode a u64 into a stack buffer
pub fn encode_array(mut value: u64) -> [u8; ENCODED_LEN] {
    let mut buffer = [b'0'; ENCODED_LEN];
    let mut position = ENCODED_LEN;

    while value > 0 {
        position -= 1;
        buffer[position] = HEX_CHARS[(value & 0xf) as usize];
        value >>= 4;
    }

    buffer
}

/// Encode a u64 into a 16 character string
pub fn encode(value: u64) -> String {
    encode_array(value).iter().map(|&b| b as char).collect()
}

/// Decode a base16 string to a u64
///
/// Leading zeros are allowed, so inputs longer than 16 characters decode as
/// long as the value itself fits.
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let mut result: u64 = 0;
    for c in encoded.chars() {
        let value = if c.is_ascii() { DECODE_MAP[c as usize] } else { -1 };
        if value == -1 {
            return Err(DecodeError::InvalidCharacter(c));
        }

        if result.leading_zeros() < 4 {
            return Err(DecodeError::Overflow);
        }
        result = (result << 4) | value as u64;
    }

    Ok(result)
}

/// Errors that can occur during base16 decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("Cannot decode an empty string")]
    EmptyString,

    /// The input string contains a non hex character
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("Decoded value would overflow u64")]
    Overflow,
}
