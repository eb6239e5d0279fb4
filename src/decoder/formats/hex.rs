use crate::decoder::bits::{chunk_exact, to_bits};
use crate::decoder::formats::TokenValue;
use crate::models::BitWidth;

/// Hexadecimal format: byte pairs from `[0-9a-fA-F]`
pub struct HexFormat;

impl HexFormat {
    /// Drop every character that is not a hex digit or whitespace
    pub fn clean(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_hexdigit() || c.is_whitespace())
            .collect()
    }

    /// Split on whitespace runs; a single continuous run like `414243` is
    /// re-chunked into pairs when `auto_chunk` is set, dropping an odd
    /// leftover digit
    pub fn tokenize(cleaned: &str, auto_chunk: bool) -> Vec<String> {
        let tokens: Vec<String> = cleaned.split_whitespace().map(str::to_string).collect();
        if auto_chunk && tokens.len() == 1 {
            return chunk_exact(&tokens[0], 2);
        }
        tokens
    }

    /// Validate and parse one token
    pub fn parse_token(token: &str, bit_width: BitWidth) -> TokenValue {
        let pattern_ok = token.len() == 2 && token.chars().all(|c| c.is_ascii_hexdigit());
        if !pattern_ok {
            return TokenValue::Malformed;
        }

        let value = match u16::from_str_radix(token, 16) {
            Ok(v) => v,
            Err(_) => return TokenValue::Malformed,
        };

        // Bits are always displayed 8 wide for hex, even in 7-bit mode
        if value > bit_width.max_value() {
            return TokenValue::OutOfRange {
                value,
                bits: to_bits(value, 8),
            };
        }

        TokenValue::Valid {
            value,
            bits: to_bits(value, 8),
        }
    }
}
