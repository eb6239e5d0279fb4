//! Display rendering for decoded characters
//!
//! Control characters are mapped to visible escape text so the per-token
//! table stays readable; invalid rows render [`INVALID_GLYPH`] instead of a
//! character.

/// Placeholder shown in place of a character for invalid rows
pub const INVALID_GLYPH: &str = "⟂";

/// Visible display form of a decoded character
pub fn printable(ch: char) -> String {
    match ch {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => "␠".to_string(),
        c if (c as u32) < 32 => format!("CTRL({})", c as u32),
        c => c.to_string(),
    }
}
