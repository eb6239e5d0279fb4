/// One decoded (or rejected) token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    /// Token text exactly as it appeared in the cleaned input
    pub token: String,
    /// Zero-padded binary form for display; empty when the token never parsed
    pub bits: String,
    /// Parsed numeric value; `None` when the token failed its digit pattern
    pub value: Option<u16>,
    /// Decoded character; `None` for any invalid token
    pub character: Option<char>,
    /// Whether the token decoded to a character
    pub valid: bool,
}

impl TokenRow {
    /// Row for a token that failed its digit pattern (no value, no bits)
    pub fn malformed(token: String) -> Self {
        Self {
            token,
            bits: String::new(),
            value: None,
            character: None,
            valid: false,
        }
    }

    /// Row for a token that parsed but exceeds the bit-width range
    pub fn out_of_range(token: String, bits: String, value: u16) -> Self {
        Self {
            token,
            bits,
            value: Some(value),
            character: None,
            valid: false,
        }
    }

    /// Row for a token that decoded to a character
    pub fn decoded(token: String, bits: String, value: u16, character: char) -> Self {
        Self {
            token,
            bits,
            value: Some(value),
            character: Some(character),
            valid: true,
        }
    }
}

/// Result of decoding one input string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeResult {
    /// Concatenation of all valid rows' characters, in order
    pub text: String,
    /// One row per token, in input order
    pub rows: Vec<TokenRow>,
    /// Original text of every invalid token, in input order
    pub invalid_tokens: Vec<String>,
}

impl DecodeResult {
    /// Number of tokens that decoded to a character
    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|row| row.valid).count()
    }

    /// Whether every token decoded
    pub fn is_fully_valid(&self) -> bool {
        self.invalid_tokens.is_empty()
    }
}
