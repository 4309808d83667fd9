//! Date utility functions

use chrono::NaiveDate;
use std::fmt::Write;
use thiserror::Error;

/// Default date format for display and for date input fields
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons typed date text could not be turned into a date
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateInputError {
    #[error("date is empty")]
    Empty,
    #[error("'{input}' does not match format '{format}'")]
    Malformed { input: String, format: String },
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Format a date with a chrono format string
pub fn format_with(d: NaiveDate, format: &str) -> String {
    d.format(format).to_string()
}

/// Parse date text typed into a filter field.
///
/// Surrounding whitespace is ignored.
pub fn parse_date_input(input: &str, format: &str) -> Result<NaiveDate, DateInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateInputError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, format).map_err(|_| DateInputError::Malformed {
        input: trimmed.to_string(),
        format: format.to_string(),
    })
}

/// Check that a chrono format string can round-trip a known date.
///
/// Formats with time-only or unknown specifiers fail here instead of
/// panicking later in [`format_with`].
pub fn is_valid_date_format(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2025, 1, 31) else {
        return false;
    };
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(format)).is_err() {
        return false;
    }
    NaiveDate::parse_from_str(&rendered, format)
        .map(|d| d == sample)
        .unwrap_or(false)
}
