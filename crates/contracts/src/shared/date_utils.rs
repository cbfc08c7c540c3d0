//! Date formatting for the order grid.
//!
//! Order dates arrive either ISO-style ("2025-04-23T11:06:41") or in the
//! legacy export form "23-APR-2025 11:06:41"; both display as MM-DD-YYYY.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("JAN", 1),
        ("FEB", 2),
        ("MAR", 3),
        ("APR", 4),
        ("MAY", 5),
        ("JUN", 6),
        ("JUL", 7),
        ("AUG", 8),
        ("SEP", 9),
        ("OCT", 10),
        ("NOV", 11),
        ("DEC", 12),
    ])
});

/// Formats a date string as `MM-DD-YYYY` with zero-padded month and day.
///
/// ISO-style input is tried first ("2025-04-23", optionally followed by a
/// `T`- or space-separated time), then `DD-MON-YYYY[ HH:mm:ss]` with a
/// three-letter, case-insensitive month abbreviation. Anything that parses
/// under neither pattern is returned unchanged.
pub fn format_date_mmddyyyy(input: &str) -> String {
    match parse_iso(input).or_else(|| parse_dd_mon_yyyy(input)) {
        Some(date) => date.format("%m-%d-%Y").to_string(),
        None => input.to_string(),
    }
}

fn parse_iso(input: &str) -> Option<NaiveDate> {
    let date_part = input.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_dd_mon_yyyy(input: &str) -> Option<NaiveDate> {
    let date_part = input.trim().split_whitespace().next()?;
    let mut parts = date_part.split('-');
    let day = parts.next()?.parse::<u32>().ok()?;
    let month_abbr = parts.next()?.to_ascii_uppercase();
    let year = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = *MONTHS.get(month_abbr.as_str())?;
    NaiveDate::from_ymd_opt(year, month, day)
}
