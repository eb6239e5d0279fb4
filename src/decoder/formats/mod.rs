//! Per-format token strategies (clean, tokenize, validate)
//!
//! Each format lives in its own module; [`TokenFormat`] dispatches to the
//! right one so the decode pipeline has a single code path.

pub mod binary;
pub mod decimal;
pub mod hex;

use crate::models::{BitWidth, TokenFormat};
use binary::BinaryFormat;
use decimal::DecimalFormat;
use hex::HexFormat;

/// Outcome of validating and parsing one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// Token does not match the format's digit pattern
    Malformed,
    /// Token parsed but its value exceeds the bit-width range
    OutOfRange {
        /// Parsed numeric value
        value: u16,
        /// Binary display form (empty on the decimal path)
        bits: String,
    },
    /// Token parsed to an in-range byte value
    Valid {
        /// Parsed numeric value
        value: u16,
        /// Binary display form
        bits: String,
    },
}

impl TokenFormat {
    /// Strip characters outside this format's alphabet, keeping separators
    pub fn clean(&self, raw: &str) -> String {
        match self {
            TokenFormat::Bin => BinaryFormat::clean(raw),
            TokenFormat::Hex => HexFormat::clean(raw),
            TokenFormat::Dec => DecimalFormat::clean(raw),
        }
    }

    /// Split cleaned input into candidate tokens
    pub fn tokenize(&self, cleaned: &str, bit_width: BitWidth, auto_chunk: bool) -> Vec<String> {
        match self {
            TokenFormat::Bin => BinaryFormat::tokenize(cleaned, bit_width, auto_chunk),
            TokenFormat::Hex => HexFormat::tokenize(cleaned, auto_chunk),
            TokenFormat::Dec => DecimalFormat::tokenize(cleaned),
        }
    }

    /// Validate one token and parse its value
    pub fn parse_token(&self, token: &str, bit_width: BitWidth) -> TokenValue {
        match self {
            TokenFormat::Bin => BinaryFormat::parse_token(token, bit_width),
            TokenFormat::Hex => HexFormat::parse_token(token, bit_width),
            TokenFormat::Dec => DecimalFormat::parse_token(token, bit_width),
        }
    }
}
