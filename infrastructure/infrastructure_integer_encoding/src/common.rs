//! Common Encoding/Decoding Utilities
//!
//! Error types and the conversions between malachite integers and raw
//! big-endian bytes shared by the encoder and decoder.
//!
//! ## Overview
//!
//! - [`magnitude_bytes`]: big-endian unsigned bytes of `|value|`
//! - [`negate_to_twos_complement`]: two's-complement bytes of `-m`
//! - [`unsigned_integer`]: big-endian unsigned bytes back to an `Integer`
//!
//! ## See Also
//!
//! - [`encoder`](super::encoder/index.html): uses these helpers to build word magnitudes
//! - [`decoder`](super::decoder/index.html): uses these helpers to rebuild integers

use entities_integer_magnitude::{MagnitudeError, Sign};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// No value was supplied
    #[error("empty integer")]
    EmptyInteger,
    /// Magnitude exceeds the supported word count
    #[error(transparent)]
    Overflow(#[from] MagnitudeError),
}

/// Minimal-encoding violations, reported only by the strict API
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MinimalityError {
    /// Zero-length content
    #[error("empty integer")]
    Empty,
    /// Redundant leading 0x00 or 0xFF byte
    #[error("integer not minimally-encoded")]
    NotMinimal,
}

/// Sign of a malachite integer
pub fn sign_of(value: &Integer) -> Sign {
    Sign::from(value.cmp(&Integer::ZERO))
}

/// Big-endian unsigned bytes of the absolute value.
///
/// Zero yields an empty vector; otherwise the first byte is nonzero.
pub fn magnitude_bytes(value: &Integer) -> Vec<u8> {
    PowerOf2Digits::<u8>::to_power_of_2_digits_desc(value.unsigned_abs_ref(), 8)
}

/// Two's-complement bytes of `-m` for a big-endian unsigned magnitude `m`.
///
/// A zero byte is prepended before negating so the result always carries a
/// sign byte.
pub fn negate_to_twos_complement(magnitude: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(magnitude.len() + 1);
    bytes.push(0xFF);
    bytes.extend(magnitude.iter().map(|&b| !b));

    for byte in bytes.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
    bytes
}

/// Natural number from big-endian unsigned bytes
pub fn natural_from_be_bytes(bytes: &[u8]) -> Natural {
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(8, bytes.iter().copied())
        .unwrap_or(Natural::ZERO)
}

/// Non-negative integer from big-endian unsigned bytes
pub fn unsigned_integer(bytes: &[u8]) -> Integer {
    Integer::from(natural_from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_of() {
        assert_eq!(sign_of(&Integer::from(-5)), Sign::Negative);
        assert_eq!(sign_of(&Integer::ZERO), Sign::Zero);
        assert_eq!(sign_of(&Integer::from(5)), Sign::Positive);
    }

    #[test]
    fn test_magnitude_bytes() {
        assert!(magnitude_bytes(&Integer::ZERO).is_empty());
        assert_eq!(magnitude_bytes(&Integer::from(255)), vec![0xFF]);
        assert_eq!(magnitude_bytes(&Integer::from(-256)), vec![0x01, 0x00]);
        assert_eq!(
            magnitude_bytes(&Integer::from(i64::MIN)),
            vec![0x80, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_negate_to_twos_complement() {
        assert_eq!(negate_to_twos_complement(&[0x01]), vec![0xFF, 0xFF]);
        assert_eq!(negate_to_twos_complement(&[0x80]), vec![0xFF, 0x80]);
        assert_eq!(
            negate_to_twos_complement(&[0x01, 0x00]),
            vec![0xFF, 0xFF, 0x00]
        );
        assert_eq!(negate_to_twos_complement(&[0x7F]), vec![0xFF, 0x81]);
    }

    #[test]
    fn test_unsigned_integer() {
        assert_eq!(unsigned_integer(&[]), Integer::ZERO);
        assert_eq!(unsigned_integer(&[0x00, 0x00]), Integer::ZERO);
        assert_eq!(unsigned_integer(&[0x01, 0x00]), Integer::from(256));
        assert_eq!(unsigned_integer(&[0xFF, 0xFF]), Integer::from(65535));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(EncodeError::EmptyInteger.to_string(), "empty integer");
        assert_eq!(
            MinimalityError::NotMinimal.to_string(),
            "integer not minimally-encoded"
        );
    }
}
