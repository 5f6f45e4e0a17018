//! Word Magnitude
//!
//! Absolute value of a signed integer as a sequence of 32-bit words in base
//! 2^32, most significant word first.
//!
//! A magnitude never carries a leading zero word; the empty sequence is zero.
//! Magnitudes are built once from a byte buffer and then only read.
//!
//! ## Construction paths
//!
//! - [`WordMagnitude::from_bytes_unsigned`]: big-endian unsigned bytes
//! - [`WordMagnitude::from_bytes_twos_complement_negative`]: big-endian
//!   two's-complement bytes of a negative value, yielding the magnitude of
//!   its negation

/// Largest supported magnitude, in words (`i32::MAX / 32 + 1`, i.e. 2^26).
///
/// A magnitude of exactly this many words is still accepted as long as the
/// top bit of its leading word is clear.
pub const MAX_MAG_LENGTH: usize = (i32::MAX as usize) / 32 + 1;

/// Errors raised while validating a magnitude
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MagnitudeError {
    /// Word count is beyond the supported range
    #[error("value would exceed supported magnitude range ({words} words, limit {max_words})")]
    Overflow {
        /// Number of words in the rejected magnitude
        words: usize,
        /// Limit the magnitude was checked against
        max_words: usize,
    },
}

/// Unsigned magnitude in base 2^32, most significant word first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordMagnitude {
    words: Vec<u32>,
}

impl WordMagnitude {
    /// The empty magnitude (zero)
    pub fn zero() -> Self {
        Self { words: Vec::new() }
    }

    /// Build a magnitude from words, most significant first.
    ///
    /// Leading zero words are dropped.
    pub fn from_words(mut words: Vec<u32>) -> Self {
        let keep = words.iter().position(|&w| w != 0).unwrap_or(words.len());
        words.drain(..keep);
        Self { words }
    }

    /// Build a magnitude from big-endian unsigned bytes.
    ///
    /// Leading zero bytes are stripped. The most significant partial word is
    /// zero-padded, so an all-zero (or empty) input yields the empty
    /// magnitude.
    pub fn from_bytes_unsigned(bytes: &[u8]) -> Self {
        let keep = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[keep..];

        let word_count = significant.len().div_ceil(4);
        let mut words = vec![0u32; word_count];
        for (i, chunk) in significant.rchunks(4).enumerate() {
            words[word_count - 1 - i] = pack_word(chunk);
        }

        Self { words }
    }

    /// Build the magnitude of `-a`, where `bytes` holds `a`, a negative value
    /// in big-endian two's complement.
    ///
    /// The run of leading `0xFF` sign bytes is skipped. When everything after
    /// that run is zero the value is `-2^k` and one extra byte of headroom is
    /// reserved, since the final `+1` carries all the way out of the
    /// complemented bytes. Positions before the start of the buffer read as
    /// sign bytes.
    pub fn from_bytes_twos_complement_negative(bytes: &[u8]) -> Self {
        let len = bytes.len();
        let keep = bytes.iter().position(|&b| b != 0xFF).unwrap_or(len);
        let extra_byte = usize::from(bytes[keep..].iter().all(|&b| b == 0));

        let word_count = (len - keep + extra_byte).div_ceil(4);
        let mut words = vec![0u32; word_count];

        // One's complement, least significant word first. The lowest byte of
        // each word is always taken; the next three only while still past
        // the sign run. The mask limits the complement to the bytes taken.
        for j in 0..word_count {
            let low = len.checked_sub(1 + 4 * j);
            let mut raw = low.map_or(0xFF, |pos| u32::from(bytes[pos]));
            let mut taken = 0;
            if let Some(low) = low {
                taken = low.saturating_sub(keep).min(3);
                for k in 1..=taken {
                    raw |= u32::from(bytes[low - k]) << (8 * k);
                }
            }
            let mask = u32::MAX >> (8 * (3 - taken));
            words[word_count - 1 - j] = !raw & mask;
        }

        // +1, carrying upward from the least significant word
        for word in words.iter_mut().rev() {
            *word = word.wrapping_add(1);
            if *word != 0 {
                break;
            }
        }

        Self::from_words(words)
    }

    /// Words, most significant first
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True for the zero magnitude
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Most significant word, `None` for zero
    pub fn leading_word(&self) -> Option<u32> {
        self.words.first().copied()
    }

    /// Word `n` counted from the least significant end (0 = lowest).
    ///
    /// Returns `None` past the magnitude's extent.
    pub fn word_from_least_significant(&self, n: usize) -> Option<u32> {
        let len = self.words.len();
        if n >= len {
            return None;
        }
        Some(self.words[len - 1 - n])
    }

    /// Reject magnitudes beyond `max_words`.
    ///
    /// A magnitude of exactly `max_words` words overflows when the top bit of
    /// its leading word is set.
    pub fn check_range(&self, max_words: usize) -> Result<(), MagnitudeError> {
        let len = self.words.len();
        let top_bit_set = self
            .leading_word()
            .is_some_and(|w| w & 0x8000_0000 != 0);
        if len > max_words || (len == max_words && top_bit_set) {
            return Err(MagnitudeError::Overflow {
                words: len,
                max_words,
            });
        }
        Ok(())
    }
}

/// Pack up to four big-endian bytes into a word
fn pack_word(chunk: &[u8]) -> u32 {
    chunk
        .iter()
        .fold(0u32, |word, &byte| (word << 8) | u32::from(byte))
}
