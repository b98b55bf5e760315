//! Numeric parsing and formatting for measurement columns.

/// Parse a raw cell as a number.
///
/// Handles thousands separators (`1,234`), stray whitespace inside the
/// value, and scientific notation. Non-finite results count as unparseable
/// since the output format has no representation for them.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = trimmed.replace([',', ' ', '\u{a0}'], "");
    cleaned.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Round to `decimals` places and render the shortest representation.
pub fn format_rounded(value: f64, decimals: i32) -> String {
    let factor = 10f64.powi(decimals);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        rounded = 0.0; // normalize -0
    }
    format!("{rounded}")
}

/// Round to the nearest whole number and render without a fraction.
pub fn format_integer(value: f64) -> String {
    format!("{}", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_numeric("123"), Some(123.0));
        assert_eq!(parse_numeric("-45.67"), Some(-45.67));
        assert_eq!(parse_numeric("  88.1  "), Some(88.1));
    }

    #[test]
    fn parses_separators_and_notation() {
        assert_eq!(parse_numeric("1,234,567"), Some(1_234_567.0));
        assert_eq!(parse_numeric("1.23e2"), Some(123.0));
    }

    #[test]
    fn rejects_non_numbers_and_non_finite() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("12.34.56"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
    }

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(format_rounded(1.23456, 3), "1.235");
        assert_eq!(format_rounded(1.2, 3), "1.2");
        assert_eq!(format_rounded(-0.0004, 3), "0");
        assert_eq!(format_rounded(100.0, 3), "100");
    }

    #[test]
    fn integers_round_half_away_from_zero() {
        assert_eq!(format_integer(3.5), "4");
        assert_eq!(format_integer(2.2), "2");
        assert_eq!(format_integer(-1.5), "-2");
    }
}
