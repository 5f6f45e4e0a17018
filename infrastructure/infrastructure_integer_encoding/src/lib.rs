//! Infrastructure Layer: Integer Encoding
//!
//! Converts arbitrary-precision signed integers to and from the minimal
//! big-endian two's-complement content bytes used for INTEGER values under
//! distinguished encoding rules (DER).
//!
//! ## Overview
//!
//! The encoder is strict: it always emits the canonical minimal form. The
//! decoder is lenient: it never fails, and recovers content produced by
//! older, non-canonical encoders. Tag and length framing belong to the
//! surrounding encoding layer and are not handled here.
//!
//! ## Codecs
//!
//! - **[`encoder`](encoder/index.html)**: `Integer` to content bytes
//! - **[`decoder`](decoder/index.html)**: content bytes to `Integer`, plus
//!   strict minimality checking
//!
//! ## Example
//!
//! ```
//! use infrastructure_integer_encoding::{decode_integer, encode_integer};
//! use malachite::Integer;
//!
//! let bytes = encode_integer(&Integer::from(-256)).unwrap();
//! assert_eq!(bytes, vec![0xFF, 0x00]);
//! assert_eq!(decode_integer(&bytes), Integer::from(-256));
//! ```
//!
//! ## Logging
//!
//! Codec steps are reported through `tracing` events. The crate never
//! installs a subscriber; callers that want to observe a call can scope one
//! with `tracing::subscriber::with_default`.
//!
//! ## See Also
//!
//! - [`entities_integer_magnitude`](../entities_integer_magnitude/index.html): sign, word magnitude and bit width

mod common;

pub mod config;
pub mod decoder;
pub mod encoder;

pub use config::CodecConfig;
pub use decoder::{check_minimal, repair_legacy_padding, IntegerDecoder};
pub use encoder::IntegerEncoder;

// Re-export error types for convenience
pub use common::{EncodeError, MinimalityError};

use malachite::Integer;

/// Encode with the default configuration
pub fn encode_integer(value: &Integer) -> Result<Vec<u8>, EncodeError> {
    IntegerEncoder::new().encode(value)
}

/// Decode with the default configuration
pub fn decode_integer(bytes: &[u8]) -> Integer {
    IntegerDecoder::new().decode(bytes)
}
