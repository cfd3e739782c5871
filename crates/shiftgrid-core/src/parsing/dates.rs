use crate::profile::schema::Profile;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Years accepted from date-looking cells. Keeps "01/11/24" from becoming year 24.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Parse a cell as a full calendar date using the profile's formats.
///
/// Handles formats like:
/// - "2024-11-01", "2024/11/01"
/// - "01/11/2024", "01-11-2024", "01.11.2024" (day first)
/// - "2024-11-01 00:00:00" (spreadsheet datetime rendering)
///
/// Bare integers never parse as dates.
pub fn parse_date(s: &str, profile: &Profile) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() || s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    profile
        .date_formats
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(s, fmt)
                .ok()
                .or_else(|| NaiveDateTime::parse_from_str(s, fmt).ok().map(|dt| dt.date()))
        })
        .filter(|d| YEAR_RANGE.contains(&d.year()))
}

/// Parse a line as a day-of-month marker (an integer in 1..=31).
pub fn parse_day_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

/// True for integer or decimal text ("5", "5.0", "2,5", "-3").
pub fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    Decimal::from_str(&s.replace(',', ".")).is_ok()
}

/// Number of days in the given month, or None for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
