use crate::decoder::bits::to_bits;
use crate::decoder::formats::TokenValue;
use crate::models::BitWidth;

/// Decimal format: 1-3 digit values separated by whitespace, comma, or semicolon
pub struct DecimalFormat;

impl DecimalFormat {
    /// Drop every character that is not a decimal digit or a separator
    pub fn clean(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_digit() || Self::is_separator(*c))
            .collect()
    }

    /// Split on runs of whitespace/comma/semicolon.
    ///
    /// Decimal has no auto-chunk path: digit boundaries are ambiguous in a
    /// continuous run, so an unseparated run stays a single token.
    pub fn tokenize(cleaned: &str) -> Vec<String> {
        cleaned
            .split(Self::is_separator)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate and parse one token
    pub fn parse_token(token: &str, bit_width: BitWidth) -> TokenValue {
        let pattern_ok = (1..=3).contains(&token.len())
            && token.chars().all(|c| c.is_ascii_digit());
        if !pattern_ok {
            return TokenValue::Malformed;
        }

        let value = match token.parse::<u16>() {
            Ok(v) => v,
            Err(_) => return TokenValue::Malformed,
        };

        // Range failures keep the parsed value but no bits on this path
        if value > bit_width.max_value() {
            return TokenValue::OutOfRange {
                value,
                bits: String::new(),
            };
        }

        TokenValue::Valid {
            value,
            bits: to_bits(value, 8),
        }
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || c == ',' || c == ';'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_keeps_digits_and_separators() {
        assert_eq!(DecimalFormat::clean("65, 66; 67!"), "65, 66; 67");
        assert_eq!(DecimalFormat::clean("a1b2"), "12");
    }

    #[test]
    fn test_tokenize_separator_runs() {
        assert_eq!(DecimalFormat::tokenize("65,66;;  67"), vec!["65", "66", "67"]);
        assert_eq!(DecimalFormat::tokenize(" ,; "), Vec::<String>::new());
    }

    #[test]
    fn test_no_auto_chunk_for_decimal() {
        // A continuous run stays one (invalid) token
        assert_eq!(DecimalFormat::tokenize("656667"), vec!["656667"]);
    }

    #[test]
    fn test_parse_token_range() {
        assert!(matches!(
            DecimalFormat::parse_token("65", BitWidth::Eight),
            TokenValue::Valid { value: 65, .. }
        ));
        assert!(matches!(
            DecimalFormat::parse_token("255", BitWidth::Eight),
            TokenValue::Valid { value: 255, .. }
        ));
        match DecimalFormat::parse_token("300", BitWidth::Eight) {
            TokenValue::OutOfRange { value, bits } => {
                assert_eq!(value, 300);
                assert!(bits.is_empty());
            }
            other => panic!("expected out-of-range token, got {:?}", other),
        }
        assert!(matches!(
            DecimalFormat::parse_token("128", BitWidth::Seven),
            TokenValue::OutOfRange { value: 128, .. }
        ));
    }

    #[test]
    fn test_parse_token_pattern() {
        assert!(matches!(
            DecimalFormat::parse_token("1234", BitWidth::Eight),
            TokenValue::Malformed
        ));
        assert!(matches!(
            DecimalFormat::parse_token("", BitWidth::Eight),
            TokenValue::Malformed
        ));
    }
}
