//! Date parsing and calendar arithmetic for voter-file values.
//!
//! Birth dates are parsed strictly: exactly eight ASCII digits laid out as
//! `YYYYMMDD`. Election dates come from hand-entered metadata and are parsed
//! permissively, trying a list of formats and falling back to detecting the
//! format from the string's shape.

use chrono::{Datelike, Months, NaiveDate};

use crate::config::{DEFAULT_BIRTH_DATE_FORMAT, DateFormatConfig};
use crate::error::{Result, VoterFileError};

/// Years below this come from a two-digit year read by a four-digit field
const MIN_ELECTION_YEAR: i32 = 1000;

/// Parse a `YYYYMMDD` birth date
pub fn parse_birth_date(s: &str) -> Result<NaiveDate> {
    parse_birth_date_with(s, DEFAULT_BIRTH_DATE_FORMAT)
}

/// Parse a birth date with an explicit format.
///
/// The compact `%Y%m%d` format additionally requires exactly eight ASCII
/// digits, so values like `"2000011"` or `"+2000101"` are rejected rather
/// than read with a shifted field.
pub fn parse_birth_date_with(s: &str, format: &str) -> Result<NaiveDate> {
    if format == DEFAULT_BIRTH_DATE_FORMAT {
        if s.len() != 8 {
            return Err(VoterFileError::invalid_birth_date(
                s,
                format!("expected 8 characters, found {}", s.len()),
            ));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VoterFileError::invalid_birth_date(s, "expected only digits"));
        }
    }

    NaiveDate::parse_from_str(s, format)
        .map_err(|e| VoterFileError::invalid_birth_date(s, e.to_string()))
}

/// Parse an election date using the default format list
pub fn parse_election_date(s: &str) -> Result<NaiveDate> {
    parse_election_date_with(s, &DateFormatConfig::default())
}

/// Parse an election date with multiple format attempts.
///
/// Any time of day present in the value is dropped; elections are compared
/// by calendar date.
pub fn parse_election_date_with(s: &str, config: &DateFormatConfig) -> Result<NaiveDate> {
    let s = s.trim();

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            if date.year() >= MIN_ELECTION_YEAR {
                return Ok(date);
            }
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok((date, rest)) = NaiveDate::parse_and_remainder(s, detected_format) {
                if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
                    return Ok(date);
                }
            }
        }
    }

    Err(VoterFileError::InvalidElectionDate(s.to_string()))
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    let bytes = s.as_bytes();

    // ISO-like prefix (YYYY-MM-DD), possibly followed by a time
    if bytes.len() >= 10 && bytes[4] == b'-' && bytes[7] == b'-' {
        return Some("%Y-%m-%d");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            }
            let first = parts[0].parse::<u8>().ok()?;
            // A leading field above 12 cannot be a month
            let day_first = first > 12;
            return match (parts[2].len(), day_first) {
                (4, false) => Some("%m/%d/%Y"),
                (4, true) => Some("%d/%m/%Y"),
                (2, false) => Some("%m/%d/%y"),
                (2, true) => Some("%d/%m/%y"),
                _ => None,
            };
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y");
        }
    }

    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}

/// Add whole calendar years to a date.
///
/// February 29 moves to February 28 when the target year is not a leap year.
/// Returns `None` on overflow of the supported date range.
#[must_use]
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Number of completed years from `start` to `end`.
///
/// This is the largest `n` with `add_years(start, n) <= end`, so partial
/// years are truncated. Returns `None` when `end` precedes `start`.
#[must_use]
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    if end < start {
        return None;
    }

    let mut years = u32::try_from(end.year() - start.year()).ok()?;
    // Birthday not yet reached in the end year
    if years > 0 && add_years(start, years)? > end {
        years -= 1;
    }
    Some(years)
}
