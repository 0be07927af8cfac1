//! Utility functions for text normalization and report formatting.
//!
//! This module provides small helpers used throughout the application:
//! - Whitespace collapsing for text pulled out of HTML elements
//! - Cell truncation for the fixed-width console table
//! - Currency formatting for prices

/// Collapse runs of whitespace into single spaces and trim the ends.
///
/// Text extracted from an HTML element arrives as a series of text nodes,
/// often padded with indentation and newlines from the page source. This
/// normalizes it into a single display string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_ws("  Treadmill\n  10  "), "Treadmill 10");
/// ```
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to fit a table column.
///
/// Strings longer than `width` characters are cut to `width - 2` and marked
/// with a trailing `".."` so the rendered cell never exceeds its column.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_cell("short", 10), "short");
/// assert_eq!(truncate_cell("a very long product name", 10), "a very l..");
/// ```
pub fn truncate_cell(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let mut cut: String = s.chars().take(width.saturating_sub(2)).collect();
        cut.push_str("..");
        cut
    } else {
        s.to_string()
    }
}

/// Format an optional price for display.
///
/// Present prices render as US currency with thousands separators and two
/// decimal places; absent prices render as `"N/A"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_price(Some(1299.99)), "$1,299.99");
/// assert_eq!(format_price(None), "N/A");
/// ```
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price else {
        return "N/A".to_string();
    };

    // Round to cents first so 1299.995 doesn't split into 1299 + 100 cents.
    let cents = (price * 100.0).round() as i64;
    let dollars = cents / 100;
    let fraction = (cents % 100).abs();

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 && c.is_ascii_digit() {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_ws() {
        assert_eq!(collapse_ws("  Treadmill\n  10  "), "Treadmill 10");
        assert_eq!(collapse_ws("one two"), "one two");
        assert_eq!(collapse_ws("\t\n "), "");
        assert_eq!(collapse_ws(""), "");
    }

    #[test]
    fn test_truncate_cell_short_string() {
        assert_eq!(truncate_cell("short", 10), "short");
        assert_eq!(truncate_cell("exactly-10", 10), "exactly-10");
    }

    #[test]
    fn test_truncate_cell_long_string() {
        let long = "a".repeat(45);
        let cell = truncate_cell(&long, 40);
        assert_eq!(cell.chars().count(), 40);
        assert!(cell.ends_with(".."));
    }

    #[test]
    fn test_format_price_currency() {
        assert_eq!(format_price(Some(1299.99)), "$1,299.99");
        assert_eq!(format_price(Some(899.0)), "$899.00");
        assert_eq!(format_price(Some(49.5)), "$49.50");
        assert_eq!(format_price(Some(1_234_567.5)), "$1,234,567.50");
        assert_eq!(format_price(Some(0.0)), "$0.00");
    }

    #[test]
    fn test_format_price_absent() {
        assert_eq!(format_price(None), "N/A");
    }
}
