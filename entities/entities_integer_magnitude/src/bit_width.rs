//! Two's-Complement Bit Width
//!
//! Pure functions over a [`Sign`] and a [`WordMagnitude`] that size and
//! extract the minimal two's-complement form of a signed value.
//!
//! ## Overview
//!
//! - [`bit_length`]: bits needed excluding the sign bit
//! - [`minimal_byte_length`]: bytes needed including the sign bit
//! - [`twos_complement_word`]: word `n` of the little-endian two's-complement
//!   view, sign-extended indefinitely above the magnitude
//! - [`twos_complement_words`]: the same words as a single linear pass
//!
//! `-2^k` needs one bit fewer than `2^k`, which is why [`bit_length`] looks at
//! whether a negative magnitude is an exact power of two.

use crate::sign::Sign;
use crate::word_magnitude::WordMagnitude;

/// Number of significant bits in a single word (0 for zero)
pub fn bit_length_of_word(word: u32) -> usize {
    (u32::BITS - word.leading_zeros()) as usize
}

/// True when the magnitude is an exact power of two.
///
/// The leading word has a single set bit and every other word is zero.
pub fn is_power_of_two(magnitude: &WordMagnitude) -> bool {
    match magnitude.words().split_first() {
        Some((leading, rest)) => leading.count_ones() == 1 && rest.iter().all(|&w| w == 0),
        None => false,
    }
}

/// Number of bits in the minimal two's-complement representation, excluding
/// the sign bit. Zero has a bit length of 0.
pub fn bit_length(sign: Sign, magnitude: &WordMagnitude) -> usize {
    let Some(leading) = magnitude.leading_word() else {
        return 0;
    };

    let magnitude_bits = 32 * (magnitude.len() - 1) + bit_length_of_word(leading);
    if sign.is_negative() && is_power_of_two(magnitude) {
        magnitude_bits - 1
    } else {
        magnitude_bits
    }
}

/// Bytes needed for the minimal two's-complement encoding, sign bit included.
///
/// Always at least one byte.
pub fn minimal_byte_length(sign: Sign, magnitude: &WordMagnitude) -> usize {
    bit_length(sign, magnitude) / 8 + 1
}

/// Index, from the least significant end, of the lowest nonzero word.
///
/// Returns the magnitude length for zero.
pub fn first_nonzero_word_index(magnitude: &WordMagnitude) -> usize {
    magnitude
        .words()
        .iter()
        .rev()
        .position(|&w| w != 0)
        .unwrap_or(magnitude.len())
}

/// Word `n` (0 = least significant) of the two's-complement representation.
///
/// Negative values are negated word by word: the words up to and including
/// the lowest nonzero one are negated, those above it are complemented,
/// and everything past the magnitude reads as all ones.
pub fn twos_complement_word(n: usize, sign: Sign, magnitude: &WordMagnitude) -> u32 {
    word_at(n, sign, magnitude, first_nonzero_word_index(magnitude))
}

/// All words of the two's-complement representation, least significant
/// first.
///
/// The lowest nonzero word is located once up front, so walking `k` words
/// costs `O(k)`. The iterator never ends; past the magnitude it yields the
/// sign extension.
pub fn twos_complement_words(sign: Sign, magnitude: &WordMagnitude) -> TwosComplementWords<'_> {
    TwosComplementWords {
        sign,
        magnitude,
        lowest_nonzero: first_nonzero_word_index(magnitude),
        next: 0,
    }
}

/// Iterator returned by [`twos_complement_words`]
#[derive(Debug, Clone)]
pub struct TwosComplementWords<'a> {
    sign: Sign,
    magnitude: &'a WordMagnitude,
    lowest_nonzero: usize,
    next: usize,
}

impl Iterator for TwosComplementWords<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let word = word_at(self.next, self.sign, self.magnitude, self.lowest_nonzero);
        self.next += 1;
        Some(word)
    }
}

fn word_at(n: usize, sign: Sign, magnitude: &WordMagnitude, lowest_nonzero: usize) -> u32 {
    let Some(word) = magnitude.word_from_least_significant(n) else {
        return if sign.is_negative() { u32::MAX } else { 0 };
    };

    if !sign.is_negative() {
        word
    } else if n <= lowest_nonzero {
        word.wrapping_neg()
    } else {
        !word
    }
}
