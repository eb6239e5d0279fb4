//! Decode pipeline - wires cleaning, tokenization, and per-token parsing
//! together into a [`DecodeResult`]

use crate::decoder::formats::TokenValue;
use crate::models::{DecodeOptions, DecodeResult, TokenRow};

/// Decode byte tokens into text.
///
/// Total over all inputs: malformed and out-of-range tokens become invalid
/// rows and entries in `invalid_tokens`, never errors. Each call allocates a
/// fresh result; nothing is shared across calls.
pub fn decode(raw: &str, options: DecodeOptions) -> DecodeResult {
    let cleaned = options.format.clean(raw);
    let tokens = options
        .format
        .tokenize(&cleaned, options.bit_width, options.auto_chunk);

    let mut text = String::new();
    let mut rows = Vec::with_capacity(tokens.len());
    let mut invalid_tokens = Vec::new();

    for token in tokens {
        match options.format.parse_token(&token, options.bit_width) {
            TokenValue::Malformed => {
                invalid_tokens.push(token.clone());
                rows.push(TokenRow::malformed(token));
            }
            TokenValue::OutOfRange { value, bits } => {
                invalid_tokens.push(token.clone());
                rows.push(TokenRow::out_of_range(token, bits, value));
            }
            TokenValue::Valid { value, bits } => {
                let character = char::from(value as u8);
                text.push(character);
                rows.push(TokenRow::decoded(token, bits, value, character));
            }
        }
    }

    DecodeResult {
        text,
        rows,
        invalid_tokens,
    }
}
