/// Input format for byte tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenFormat {
    /// Binary digits, one group per character (e.g. `01000001`)
    Bin,
    /// Hexadecimal byte pairs (e.g. `41 42 43`)
    Hex,
    /// Decimal values 0-255, separated by whitespace/comma/semicolon
    Dec,
}

impl TokenFormat {
    /// Get the format from its short name (`bin`, `hex`, `dec`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bin" => Some(TokenFormat::Bin),
            "hex" => Some(TokenFormat::Hex),
            "dec" => Some(TokenFormat::Dec),
            _ => None,
        }
    }

    /// Short name of the format
    pub fn name(&self) -> &'static str {
        match self {
            TokenFormat::Bin => "bin",
            TokenFormat::Hex => "hex",
            TokenFormat::Dec => "dec",
        }
    }
}

/// Code-unit width for decoded characters (7-bit or 8-bit ASCII)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitWidth {
    /// 7-bit ASCII, values 0-127
    Seven,
    /// 8-bit, values 0-255
    Eight,
}

impl BitWidth {
    /// Get the width from a bit count (7 or 8)
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            7 => Some(BitWidth::Seven),
            8 => Some(BitWidth::Eight),
            _ => None,
        }
    }

    /// Number of bits per character
    pub fn bits(&self) -> usize {
        match self {
            BitWidth::Seven => 7,
            BitWidth::Eight => 8,
        }
    }

    /// Largest value representable at this width
    pub fn max_value(&self) -> u16 {
        match self {
            BitWidth::Seven => 127,
            BitWidth::Eight => 255,
        }
    }
}

/// Options for a single decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Token format of the input
    pub format: TokenFormat,
    /// Bits per decoded character
    pub bit_width: BitWidth,
    /// Re-chunk a single continuous run into fixed-width tokens (bin/hex only)
    pub auto_chunk: bool,
}

impl DecodeOptions {
    /// Create options for a decode call
    pub fn new(format: TokenFormat, bit_width: BitWidth, auto_chunk: bool) -> Self {
        Self {
            format,
            bit_width,
            auto_chunk,
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            format: TokenFormat::Bin,
            bit_width: BitWidth::Eight,
            auto_chunk: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(TokenFormat::from_name("bin"), Some(TokenFormat::Bin));
        assert_eq!(TokenFormat::from_name("hex"), Some(TokenFormat::Hex));
        assert_eq!(TokenFormat::from_name("dec"), Some(TokenFormat::Dec));
        assert_eq!(TokenFormat::from_name("oct"), None);
    }

    #[test]
    fn test_bit_width_values() {
        assert_eq!(BitWidth::Seven.bits(), 7);
        assert_eq!(BitWidth::Eight.bits(), 8);
        assert_eq!(BitWidth::Seven.max_value(), 127);
        assert_eq!(BitWidth::Eight.max_value(), 255);
        assert_eq!(BitWidth::from_bits(7), Some(BitWidth::Seven));
        assert_eq!(BitWidth::from_bits(9), None);
    }

    #[test]
    fn test_default_options() {
        let options = DecodeOptions::default();
        assert_eq!(options.format, TokenFormat::Bin);
        assert_eq!(options.bit_width, BitWidth::Eight);
        assert!(options.auto_chunk);
    }
}
