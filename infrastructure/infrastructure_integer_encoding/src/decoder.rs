//! Integer Decoder
//!
//! Decodes big-endian two's-complement content bytes into a malachite
//! `Integer`.
//!
//! Decoding is lenient: it never fails. Content that is not minimally
//! encoded is read as an unsigned magnitude, and content carrying the
//! legacy `0x01` padding byte is repaired, both for compatibility with data
//! written by older encoders. [`check_minimal`] and
//! [`IntegerDecoder::decode_strict`] are available for callers that must
//! reject such content instead.

use malachite::base::num::basic::traits::Zero;
use malachite::{Integer, Natural};
use tracing::{debug, warn};

use crate::common::{natural_from_be_bytes, unsigned_integer, MinimalityError};
use crate::config::CodecConfig;

/// Check that `bytes` is a minimal two's-complement INTEGER encoding.
///
/// Content longer than one byte must not start with `0x00` followed by a
/// byte with the top bit clear, nor with `0xFF` followed by a byte with the
/// top bit set.
///
/// # Returns
///
/// * `Ok(())` - Content is minimal
/// * `Err(MinimalityError::Empty)` - Content is empty
/// * `Err(MinimalityError::NotMinimal)` - Content carries a redundant leading byte
pub fn check_minimal(bytes: &[u8]) -> Result<(), MinimalityError> {
    match bytes {
        [] => Err(MinimalityError::Empty),
        [0x00, next, ..] if next & 0x80 == 0 => Err(MinimalityError::NotMinimal),
        [0xFF, next, ..] if next & 0x80 != 0 => Err(MinimalityError::NotMinimal),
        _ => Ok(()),
    }
}

/// Interpret `bytes` as big-endian two's complement (empty is zero)
pub fn decode_twos_complement(bytes: &[u8]) -> Integer {
    match bytes.first() {
        Some(first) if first & 0x80 != 0 => {
            let complement: Vec<u8> = bytes.iter().map(|&b| !b).collect();
            -Integer::from(natural_from_be_bytes(&complement) + Natural::from(1u32))
        }
        _ => unsigned_integer(bytes),
    }
}

/// Undo the extra `0x01` padding byte some older encoders put in front of
/// negative values: the byte is dropped and the rest is read as the
/// magnitude of a negative number.
pub fn repair_legacy_padding(bytes: &[u8]) -> Integer {
    warn!(len = bytes.len(), "repairing legacy padded integer content");
    match bytes.split_first() {
        Some((_, rest)) => -unsigned_integer(rest),
        None => Integer::ZERO,
    }
}

/// Lenient two's-complement decoder
#[derive(Debug, Clone, Default)]
pub struct IntegerDecoder {
    config: CodecConfig,
}

impl IntegerDecoder {
    /// Create a decoder with the default configuration
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create a decoder with a custom configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration this decoder was built with
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode content bytes into an integer.
    ///
    /// Never fails. Empty content decodes to zero.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Content bytes with tag and length already removed
    ///
    /// # Returns
    ///
    /// The decoded value. Non-minimal content is read as an unsigned
    /// magnitude and legacy padded content is repaired, when the
    /// configuration allows it.
    pub fn decode(&self, bytes: &[u8]) -> Integer {
        if bytes.is_empty() {
            debug!("empty integer content, decoding as zero");
            return Integer::ZERO;
        }

        if self.config.tolerate_non_minimal {
            if let Err(err) = check_minimal(bytes) {
                debug!(%err, len = bytes.len(), "decoding as unsigned magnitude");
                return unsigned_integer(bytes);
            }
        }

        if self.is_legacy_padded(bytes) {
            return repair_legacy_padding(bytes);
        }

        debug!(len = bytes.len(), "decoding two's-complement content");
        decode_twos_complement(bytes)
    }

    /// Decode content bytes, rejecting anything that is not minimally
    /// encoded. No legacy repair is attempted.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - Decoded two's-complement value
    /// * `Err(MinimalityError)` - Content is empty or not minimal
    pub fn decode_strict(&self, bytes: &[u8]) -> Result<Integer, MinimalityError> {
        check_minimal(bytes)?;
        Ok(decode_twos_complement(bytes))
    }

    fn is_legacy_padded(&self, bytes: &[u8]) -> bool {
        self.config.repair_legacy_padding
            && bytes.len() > self.config.legacy_padding_threshold
            && bytes[0] == 0x01
    }
}
