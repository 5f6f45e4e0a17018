//! Entities Layer: Integer Magnitude
//!
//! Provides the sign/magnitude model behind the minimal two's-complement
//! INTEGER codec:
//! - [`Sign`]: negative, zero or positive
//! - [`WordMagnitude`]: absolute value as 32-bit words, most significant first
//! - [`bit_width`]: bit-length and word extraction for the two's-complement form
//!
//! This crate has no knowledge of any arbitrary-precision integer type; it
//! works purely on bytes and words.
//!
//! ## See Also
//!
//! - [`infrastructure_integer_encoding`](../infrastructure_integer_encoding/index.html): encoder and decoder built on these types

pub mod bit_width;
pub mod sign;
pub mod word_magnitude;

pub use sign::Sign;
pub use word_magnitude::{MagnitudeError, WordMagnitude, MAX_MAG_LENGTH};
