//! Money formatting for the order grid.
//!
//! Two representations exist side by side: the *display* form produced by
//! [`format_currency`] / [`format_currency_str`] ("$1,234.50") and the
//! *edit-mode* form produced by [`normalize_currency_keystroke`]
//! ("1234.50": two fraction digits, no symbol, no separators).

/// Formats a value as `$1,234.50`: dollar sign, comma thousands separators,
/// exactly two fraction digits. Negative values render as `-$…`.
///
/// Rounding to two digits follows Rust's `{:.2}` float formatting, which
/// rounds the decimal expansion of the nearest representable double half to
/// even. Non-finite values fall back to `$0.00`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);
    if value < 0.0 {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}

/// Formats a decimal string, tolerating thousands separators, whitespace and
/// a leading currency symbol. Unparsable input falls back to the literal
/// `$0.00` rather than an error.
pub fn format_currency_str(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && *c != '$' && !c.is_whitespace())
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) => format_currency(value),
        Err(_) => "$0.00".to_string(),
    }
}

/// Normalizes a raw keystroke buffer into the edit-mode currency form.
///
/// All non-digit characters are stripped; the remaining digit string is read
/// as an integer number of cents (empty input is zero cents) and rendered as
/// `<dollars>.<cents>` with exactly two fraction digits and no separators.
/// If the digit string overflows the cents integer the previous value is
/// kept unchanged. Idempotent once the value is in canonical form.
pub fn normalize_currency_keystroke(previous: &str, raw_input: &str) -> String {
    let digits: String = raw_input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return "0.00".to_string();
    }
    match digits.parse::<u64>() {
        Ok(cents) => format!("{}.{:02}", cents / 100, cents % 100),
        Err(_) => previous.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.89), "$1,234,567.89");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_str() {
        assert_eq!(format_currency_str("1234.5"), "$1,234.50");
        assert_eq!(format_currency_str("1,234.5"), "$1,234.50");
        assert_eq!(format_currency_str("12575.00"), "$12,575.00");
        assert_eq!(format_currency_str("abc"), "$0.00");
        assert_eq!(format_currency_str(""), "$0.00");
    }

    #[test]
    fn test_format_currency_idempotent_through_reparse() {
        for value in [0.0, 1.0, 1234.5, 98765.432, 1_000_000.0] {
            let display = format_currency(value);
            assert_eq!(format_currency_str(&display), display);
        }
    }

    #[test]
    fn test_normalize_keystroke_strips_non_digits() {
        assert_eq!(normalize_currency_keystroke("", "12a34"), "12.34");
        assert_eq!(normalize_currency_keystroke("", "1234"), "12.34");
        assert_eq!(normalize_currency_keystroke("", "$1,234"), "12.34");
    }

    #[test]
    fn test_normalize_keystroke_empty_is_zero() {
        assert_eq!(normalize_currency_keystroke("5.00", ""), "0.00");
        assert_eq!(normalize_currency_keystroke("5.00", "abc"), "0.00");
    }

    #[test]
    fn test_normalize_keystroke_idempotent() {
        let once = normalize_currency_keystroke("", "9a87");
        assert_eq!(once, "9.87");
        assert_eq!(normalize_currency_keystroke(&once, &once), once);
    }

    #[test]
    fn test_normalize_keystroke_overflow_keeps_previous() {
        let too_long = "9".repeat(24);
        assert_eq!(normalize_currency_keystroke("12.34", &too_long), "12.34");
    }

    #[test]
    fn test_normalize_keystroke_leading_zeros() {
        assert_eq!(normalize_currency_keystroke("", "0012"), "0.12");
        assert_eq!(normalize_currency_keystroke("", "7"), "0.07");
    }
}
