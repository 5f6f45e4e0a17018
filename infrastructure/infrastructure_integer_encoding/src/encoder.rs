//! Integer Encoder
//!
//! Encodes a malachite `Integer` as minimal big-endian two's-complement
//! content bytes.
//!
//! The value is first reduced to a [`Sign`] and a [`WordMagnitude`]. The
//! output length comes from the two's-complement bit length, and the buffer
//! is filled from the least significant byte upward, one two's-complement
//! word at a time. The result always has exactly one sign-disambiguating
//! leading byte and never a redundant `0x00` or `0xFF`.

use entities_integer_magnitude::bit_width::{minimal_byte_length, twos_complement_words};
use entities_integer_magnitude::{Sign, WordMagnitude};
use malachite::Integer;
use tracing::{debug, trace, warn};

use crate::common::{magnitude_bytes, negate_to_twos_complement, sign_of, EncodeError};
use crate::config::CodecConfig;

/// Minimal two's-complement encoder
#[derive(Debug, Clone, Default)]
pub struct IntegerEncoder {
    config: CodecConfig,
}

impl IntegerEncoder {
    /// Create an encoder with the default configuration
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create an encoder with a custom configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration this encoder was built with
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an optional value
    ///
    /// # Arguments
    ///
    /// * `value` - Value to encode, `None` when absent
    ///
    /// # Returns
    ///
    /// * `Ok(bytes)` - Content bytes, as for [`encode`](Self::encode)
    /// * `Err(EncodeError::EmptyInteger)` - No value was supplied
    pub fn encode_optional(&self, value: Option<&Integer>) -> Result<Vec<u8>, EncodeError> {
        match value {
            Some(value) => self.encode(value),
            None => Err(EncodeError::EmptyInteger),
        }
    }

    /// Encode `value` as minimal big-endian two's complement.
    ///
    /// # Returns
    ///
    /// * `Ok(bytes)` - Content bytes, at least one
    /// * `Err(EncodeError::Overflow)` - Magnitude beyond the configured word limit
    pub fn encode(&self, value: &Integer) -> Result<Vec<u8>, EncodeError> {
        let (sign, magnitude) = self.sign_and_magnitude(value)?;

        let mut bytes = vec![0u8; minimal_byte_length(sign, &magnitude)];
        let words = twos_complement_words(sign, &magnitude);
        for (chunk, word) in bytes.rchunks_mut(4).zip(words) {
            let word = word.to_be_bytes();
            chunk.copy_from_slice(&word[4 - chunk.len()..]);
        }

        trace!(len = bytes.len(), "encoded integer content");
        Ok(bytes)
    }

    /// Length of the content [`encode`](Self::encode) would produce
    ///
    /// # Returns
    ///
    /// * `Ok(len)` - Content length in bytes, at least one
    /// * `Err(EncodeError::Overflow)` - Magnitude beyond the configured word limit
    pub fn encoded_len(&self, value: &Integer) -> Result<usize, EncodeError> {
        let (sign, magnitude) = self.sign_and_magnitude(value)?;
        Ok(minimal_byte_length(sign, &magnitude))
    }

    /// Reduce `value` to a sign and a range-checked word magnitude.
    ///
    /// Negative values go through their two's-complement byte form so the
    /// magnitude is rebuilt by complement-and-increment.
    fn sign_and_magnitude(&self, value: &Integer) -> Result<(Sign, WordMagnitude), EncodeError> {
        let abs_bytes = magnitude_bytes(value);

        let (sign, magnitude) = match sign_of(value) {
            Sign::Negative => {
                let twos = negate_to_twos_complement(&abs_bytes);
                (
                    Sign::Negative,
                    WordMagnitude::from_bytes_twos_complement_negative(&twos),
                )
            }
            _ => {
                let magnitude = WordMagnitude::from_bytes_unsigned(&abs_bytes);
                let sign = if magnitude.is_empty() {
                    Sign::Zero
                } else {
                    Sign::Positive
                };
                (sign, magnitude)
            }
        };
        debug!(?sign, words = magnitude.len(), "built integer magnitude");

        let max_words = self.config.max_magnitude_words;
        if magnitude.len() >= max_words {
            if let Err(err) = magnitude.check_range(max_words) {
                warn!(words = magnitude.len(), max_words, "integer exceeds magnitude range");
                return Err(err.into());
            }
        }

        Ok((sign, magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_integer_magnitude::MagnitudeError;
    use malachite::base::num::basic::traits::Zero;
    use test_case::test_case;

    fn encode(value: i64) -> Vec<u8> {
        IntegerEncoder::new().encode(&Integer::from(value)).unwrap()
    }

    #[test_case(0, &[0x00]; "zero")]
    #[test_case(1, &[0x01]; "one")]
    #[test_case(-1, &[0xFF]; "minus one")]
    #[test_case(127, &[0x7F]; "127")]
    #[test_case(128, &[0x00, 0x80]; "128 needs sign byte")]
    #[test_case(-128, &[0x80]; "minus 128")]
    #[test_case(-129, &[0xFF, 0x7F]; "minus 129")]
    #[test_case(255, &[0x00, 0xFF]; "255")]
    #[test_case(256, &[0x01, 0x00]; "256")]
    #[test_case(-256, &[0xFF, 0x00]; "minus 256")]
    #[test_case(-257, &[0xFE, 0xFF]; "minus 257")]
    #[test_case(0x7FFF_FFFF, &[0x7F, 0xFF, 0xFF, 0xFF]; "i32 max")]
    #[test_case(-0x8000_0000, &[0x80, 0x00, 0x00, 0x00]; "i32 min")]
    #[test_case(0x8000_0000, &[0x00, 0x80, 0x00, 0x00, 0x00]; "2^31")]
    #[test_case(-0x8000_0001, &[0xFF, 0x7F, 0xFF, 0xFF, 0xFF]; "below i32 min")]
    #[test_case(-0x1_0000_0000, &[0xFF, 0x00, 0x00, 0x00, 0x00]; "minus 2^32")]
    #[test_case(i64::MIN, &[0x80, 0, 0, 0, 0, 0, 0, 0]; "i64 min")]
    #[test_case(i64::MAX, &[0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]; "i64 max")]
    fn test_encode_vectors(value: i64, expected: &[u8]) {
        assert_eq!(encode(value), expected);
    }

    #[test]
    fn test_encode_matches_native_big_endian() {
        for value in [-65_536i64, -65_535, -1_000_000, 40_000, 1 << 40, -(1 << 40)] {
            let native = value.to_be_bytes();
            let encoded = encode(value);
            assert_eq!(&native[8 - encoded.len()..], encoded.as_slice());
        }
    }

    #[test]
    fn test_encode_optional_none_is_empty_integer() {
        let encoder = IntegerEncoder::new();
        assert_eq!(encoder.encode_optional(None), Err(EncodeError::EmptyInteger));
        assert_eq!(
            encoder.encode_optional(Some(&Integer::ZERO)),
            Ok(vec![0x00])
        );
    }

    #[test]
    fn test_encoded_len() {
        let encoder = IntegerEncoder::new();
        assert_eq!(encoder.encoded_len(&Integer::ZERO), Ok(1));
        assert_eq!(encoder.encoded_len(&Integer::from(128)), Ok(2));
        assert_eq!(encoder.encoded_len(&Integer::from(-128)), Ok(1));
        assert_eq!(encoder.encoded_len(&Integer::from(u64::MAX)), Ok(9));
    }

    #[test]
    fn test_encode_negative_power_with_many_zero_words_is_linear() {
        // -2^(32 * 200_000): every low word is zero, so the lowest nonzero
        // word sits at the top of the magnitude
        let exponent = 32 * 200_000u64;
        let value = -(Integer::from(1) << exponent);

        let bytes = IntegerEncoder::new().encode(&value).unwrap();
        assert_eq!(bytes.len(), 800_001);
        assert_eq!(bytes[0], 0xFF);
        assert!(bytes[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_overflow_beyond_word_limit() {
        let encoder = IntegerEncoder::with_config(CodecConfig::default().with_max_magnitude_words(2));
        let value = Integer::from(u64::MAX) + Integer::from(1);
        assert_eq!(
            encoder.encode(&value),
            Err(EncodeError::Overflow(MagnitudeError::Overflow {
                words: 3,
                max_words: 2
            }))
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_overflow_is_logged() {
        let encoder = IntegerEncoder::with_config(CodecConfig::default().with_max_magnitude_words(1));
        assert!(encoder.encode(&Integer::from(1u64 << 40)).is_err());
        assert!(logs_contain("integer exceeds magnitude range"));
    }

    #[test]
    fn test_overflow_at_word_limit_with_top_bit() {
        let encoder = IntegerEncoder::with_config(CodecConfig::default().with_max_magnitude_words(2));
        assert!(encoder.encode(&Integer::from(1u64 << 63)).is_err());
        assert!(encoder.encode(&Integer::from(i64::MIN)).is_err());
        assert_eq!(
            encoder.encode(&Integer::from(i64::MAX)).map(|b| b.len()),
            Ok(8)
        );
    }
}
