//! Numeric casting helpers.

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parses a string as a finite f64, returning None for invalid, empty, or
/// non-finite strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("3"), Some(3));
        assert_eq!(parse_i64(" -5 "), Some(-5));
        assert_eq!(parse_i64("3.0"), None);
        assert_eq!(parse_i64("three"), None);
        assert_eq!(parse_i64(""), None);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64("9.995"), Some(9.995));
        assert_eq!(parse_f64(" 10 "), Some(10.0));
        assert_eq!(parse_f64("free"), None);
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("NaN"), None);
    }
}
