//! asciidec - byte-token text decoder
//!
//! A pure Rust library for decoding loosely-formatted binary, hexadecimal,
//! and decimal byte tokens into text, with a per-token validity report for
//! display.
//!
//! Decoding never fails: stray characters outside a format's alphabet are
//! silently dropped, and tokens that break the digit pattern or exceed the
//! selected bit width come back as invalid rows instead of errors.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Token decoding modules (format strategies, bit helpers, decode pipeline)
pub mod decoder;
/// Core data structures (DecodeOptions, TokenRow, DecodeResult)
pub mod models;
/// Display rendering for decoded characters (control-char escapes)
pub mod render;

pub use models::{BitWidth, DecodeOptions, DecodeResult, TokenFormat, TokenRow};
pub use render::{INVALID_GLYPH, printable};

/// Decode byte tokens into text
///
/// # Arguments
/// * `raw` - Input text; characters outside the format's alphabet are dropped
/// * `options` - Format, bit width, and auto-chunk behavior
///
/// # Returns
/// A [`DecodeResult`] with the decoded text, one row per token, and the list
/// of invalid tokens in input order
pub fn decode(raw: &str, options: DecodeOptions) -> DecodeResult {
    decoder::token_decoder::decode(raw, options)
}

/// Decoder with optional result caching
///
/// [`decode`] is pure, so callers that re-decode on every input change (the
/// original use case) can keep a `Decoder` around and skip recomputation when
/// the input and options have not changed. The cache holds the most recent
/// result only.
pub struct Decoder {
    cache: Option<(String, DecodeOptions, DecodeResult)>,
    caching: bool,
}

impl Decoder {
    /// Create a decoder without caching
    pub fn new() -> Self {
        Self {
            cache: None,
            caching: false,
        }
    }

    /// Create a decoder that memoizes the most recent call
    pub fn with_cache() -> Self {
        Self {
            cache: None,
            caching: true,
        }
    }

    /// Decode byte tokens, reusing the cached result when input is unchanged
    pub fn decode(&mut self, raw: &str, options: DecodeOptions) -> DecodeResult {
        if !self.caching {
            return decode(raw, options);
        }

        if let Some((cached_raw, cached_options, cached_result)) = &self.cache {
            if cached_raw == raw && *cached_options == options {
                return cached_result.clone();
            }
        }

        let result = decode(raw, options);
        self.cache = Some((raw.to_string(), options, result.clone()));
        result
    }

    /// Drop the cached result
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_default_binary() {
        let result = decode("01000001 01000010", DecodeOptions::default());
        assert_eq!(result.text, "AB");
        assert_eq!(result.rows.len(), 2);
        assert!(result.invalid_tokens.is_empty());
    }

    #[test]
    fn test_decode_empty() {
        let result = decode("", DecodeOptions::default());
        assert!(result.text.is_empty());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_cached_decoder_matches_pure_decode() {
        let options = DecodeOptions::new(TokenFormat::Hex, BitWidth::Eight, true);
        let mut decoder = Decoder::with_cache();

        let first = decoder.decode("41 42 43", options);
        let second = decoder.decode("41 42 43", options);
        assert_eq!(first, second);
        assert_eq!(first, decode("41 42 43", options));

        // Changing options must invalidate the cache
        let seven = DecodeOptions::new(TokenFormat::Hex, BitWidth::Seven, true);
        let third = decoder.decode("41 42 43", seven);
        assert_eq!(third.text, "ABC");

        decoder.clear_cache();
        let fourth = decoder.decode("41 42 43", options);
        assert_eq!(fourth.text, "ABC");
    }
}
