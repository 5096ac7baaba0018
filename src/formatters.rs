//! Formatting and parsing utilities for display values
//!
//! The catalog and store keep market cap, volume, price and age as display
//! strings ("$1.2K", "30s"); these helpers convert between those strings and
//! numeric magnitudes. Parsing is fail-soft: malformed input degrades to 0
//! rather than returning an error, since the values only drive sorting and
//! filtering.

/// Parse a currency string (e.g. "$1.2K", "$5M") into a number.
///
/// Strips the currency symbol and thousands separators; "K" multiplies by
/// 1,000 and "M" by 1,000,000. Malformed input returns 0.0.
pub fn parse_currency_value(value: &str) -> f64 {
    let multiplier = if value.contains('K') {
        1_000.0
    } else if value.contains('M') {
        1_000_000.0
    } else {
        1.0
    };

    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | 'K' | 'M' | ','))
        .collect();

    cleaned.trim().parse::<f64>().unwrap_or(0.0) * multiplier
}

/// Format a number to a currency string with K/M suffixes.
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

/// Parse an age string (e.g. "30s", "5m", "2h") into seconds.
///
/// A bare number with no recognized suffix is returned as-is; malformed
/// input returns 0.0.
pub fn parse_age_to_seconds(age: &str) -> f64 {
    let digits: String = age.chars().take_while(|c| c.is_ascii_digit()).collect();
    let num = digits.parse::<f64>().unwrap_or(0.0);

    if age.contains('s') {
        num
    } else if age.contains('m') {
        num * 60.0
    } else if age.contains('h') {
        num * 3600.0
    } else {
        num
    }
}

/// Format seconds into a human-readable age string.
pub fn format_age(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}h", seconds / 3600)
    }
}

/// Format a percentage change value with an explicit sign.
pub fn format_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// Format a price as a currency string.
///
/// Sub-dollar prices get 6 decimal places so micro-cap moves stay visible;
/// everything else gets 3.
pub fn format_price(value: f64) -> String {
    if value < 1.0 {
        format!("${:.6}", value)
    } else {
        format!("${:.3}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_parse_currency_thousands() {
        assert_eq!(parse_currency_value("$1K"), 1_000.0);
        assert_close(parse_currency_value("$3.92K"), 3_920.0);
        assert_eq!(parse_currency_value("$1,234K"), 1_234_000.0);
    }

    #[test]
    fn test_parse_currency_millions() {
        assert_eq!(parse_currency_value("$5M"), 5_000_000.0);
        assert_close(parse_currency_value("$1.26M"), 1_260_000.0);
    }

    #[test]
    fn test_parse_currency_plain() {
        assert_eq!(parse_currency_value("$535"), 535.0);
        assert_eq!(parse_currency_value("$0.123456"), 0.123456);
    }

    #[test]
    fn test_parse_currency_malformed() {
        assert_eq!(parse_currency_value(""), 0.0);
        assert_eq!(parse_currency_value("garbage"), 0.0);
        assert_eq!(parse_currency_value("$"), 0.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_234.0), "$1.23K");
        assert_eq!(format_currency(5_600_000.0), "$5.60M");
        assert_eq!(format_currency(42.5), "$42.50");
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age_to_seconds("30s"), 30.0);
        assert_eq!(parse_age_to_seconds("5m"), 300.0);
        assert_eq!(parse_age_to_seconds("2h"), 7200.0);
        assert_eq!(parse_age_to_seconds("42"), 42.0);
        assert_eq!(parse_age_to_seconds("junk"), 0.0);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(45), "45s");
        assert_eq!(format_age(300), "5m");
        assert_eq!(format_age(3700), "1h");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.0), "+5.00%");
        assert_eq!(format_percentage(-3.25), "-3.25%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(0.5), "$0.500000");
        assert_eq!(format_price(2.0), "$2.000");
        assert_eq!(format_price(0.000001), "$0.000001");
    }
}
