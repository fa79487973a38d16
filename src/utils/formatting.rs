//! Text formatting helpers for the dashboard pages.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

/// Inserts thousands separators into an integer.
///
/// # Examples
/// ```ignore
/// assert_eq!(group_thousands(1000), "1,000");
/// assert_eq!(group_thousands(-1234567), "-1,234,567");
/// ```
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        result.push('-');
    }
    let chars: Vec<char> = digits.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

/// US-dollar amount with two decimals: `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Short US date: `Apr 5, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%b"), date.day(), date.year())
}

/// Grid formatter for currency fields; non-numbers render empty.
pub fn currency_cell(value: &Value) -> String {
    value.as_f64().map(format_currency).unwrap_or_default()
}

/// Grid formatter for ISO date fields; unparsable values pass through.
pub fn date_cell(value: &Value) -> String {
    match value.as_str() {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(format_date)
            .unwrap_or_else(|_| text.to_string()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(299.99), "$299.99");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        assert_eq!(format_date(date), "Apr 5, 2025");
    }

    #[test]
    fn test_cells() {
        assert_eq!(currency_cell(&json!(89.99)), "$89.99");
        assert_eq!(currency_cell(&json!(null)), "");
        assert_eq!(date_cell(&json!("2025-04-01")), "Apr 1, 2025");
        assert_eq!(date_cell(&json!("soon")), "soon");
    }
}
