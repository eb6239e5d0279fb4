//! Token decoding modules
//!
//! This module contains all the logic for turning raw input into a decode
//! result:
//! - Per-format strategies (binary, hex, decimal): cleaning, tokenization,
//!   auto-chunking, and per-token validation
//! - Bit-string helpers for the zero-padded display form
//! - The decode pipeline that assembles rows, text, and the invalid report

/// Bit-string helpers (zero-padded binary, fixed-width chunking)
pub mod bits;
/// Per-format token strategies (binary, hex, decimal)
pub mod formats;
/// Main decode pipeline that orchestrates cleaning, tokenizing, and parsing
pub mod token_decoder;
