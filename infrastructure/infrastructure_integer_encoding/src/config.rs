//! Codec Configuration
//!
//! Limits and legacy-compatibility switches shared by
//! [`IntegerEncoder`](crate::IntegerEncoder) and
//! [`IntegerDecoder`](crate::IntegerDecoder).

use entities_integer_magnitude::MAX_MAG_LENGTH;

/// Content length above which a leading `0x01` is treated as legacy padding
pub const LEGACY_PADDING_THRESHOLD: usize = 32;

/// Options for encoding and decoding integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Largest magnitude accepted by the encoder, in 32-bit words
    pub max_magnitude_words: usize,
    /// Decode non-minimal content as an unsigned magnitude instead of
    /// interpreting it as two's complement
    pub tolerate_non_minimal: bool,
    /// Repair content carrying the legacy `0x01` padding byte
    pub repair_legacy_padding: bool,
    /// Content must be longer than this for the legacy repair to apply
    pub legacy_padding_threshold: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_magnitude_words: MAX_MAG_LENGTH,
            tolerate_non_minimal: true,
            repair_legacy_padding: true,
            legacy_padding_threshold: LEGACY_PADDING_THRESHOLD,
        }
    }
}

impl CodecConfig {
    /// Configuration that only accepts canonical content
    pub fn canonical() -> Self {
        Self {
            tolerate_non_minimal: false,
            repair_legacy_padding: false,
            ..Self::default()
        }
    }

    /// Set the largest magnitude the encoder accepts, in words
    pub fn with_max_magnitude_words(mut self, max_magnitude_words: usize) -> Self {
        self.max_magnitude_words = max_magnitude_words;
        self
    }

    /// Enable or disable reading non-minimal content as unsigned
    pub fn with_tolerate_non_minimal(mut self, tolerate: bool) -> Self {
        self.tolerate_non_minimal = tolerate;
        self
    }

    /// Enable or disable the legacy `0x01` padding repair
    pub fn with_repair_legacy_padding(mut self, repair: bool) -> Self {
        self.repair_legacy_padding = repair;
        self
    }

    /// Set the length content must exceed for the legacy repair
    pub fn with_legacy_padding_threshold(mut self, threshold: usize) -> Self {
        self.legacy_padding_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.max_magnitude_words, 1 << 26);
        assert!(config.tolerate_non_minimal);
        assert!(config.repair_legacy_padding);
        assert_eq!(config.legacy_padding_threshold, 32);
    }

    #[test]
    fn test_canonical_config() {
        let config = CodecConfig::canonical();
        assert!(!config.tolerate_non_minimal);
        assert!(!config.repair_legacy_padding);
        assert_eq!(config.max_magnitude_words, MAX_MAG_LENGTH);
    }

    #[test]
    fn test_builder_methods() {
        let config = CodecConfig::default()
            .with_max_magnitude_words(4)
            .with_tolerate_non_minimal(false)
            .with_repair_legacy_padding(false)
            .with_legacy_padding_threshold(8);
        assert_eq!(config.max_magnitude_words, 4);
        assert!(!config.tolerate_non_minimal);
        assert!(!config.repair_legacy_padding);
        assert_eq!(config.legacy_padding_threshold, 8);
    }
}
