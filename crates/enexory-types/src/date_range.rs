//! Date ranges for series data requests.

use chrono::{NaiveDate, TimeDelta};
use std::borrow::Cow;

use crate::DateRangeError;

/// Calendar date format used by the API and the CLI.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One end of a requested date range.
///
/// Pre-formatted strings are sent to the API verbatim; dates are rendered
/// with [`DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    /// A calendar date.
    Date(NaiveDate),
    /// A caller-supplied string passed through untouched.
    Verbatim(String),
}

impl DateBound {
    /// Returns the value of the bound as sent in a request body.
    #[must_use]
    pub fn as_param(&self) -> Cow<'_, str> {
        match self {
            Self::Date(date) => Cow::Owned(date.format(DATE_FORMAT).to_string()),
            Self::Verbatim(s) => Cow::Borrowed(s),
        }
    }

    /// Returns the calendar date, if this bound holds one.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Verbatim(_) => None,
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateBound {
    fn from(s: &str) -> Self {
        Self::Verbatim(s.to_string())
    }
}

impl From<String> for DateBound {
    fn from(s: String) -> Self {
        Self::Verbatim(s)
    }
}

impl std::fmt::Display for DateBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_param())
    }
}

/// An inclusive range of dates for data retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Start of the interval (inclusive).
    pub start: DateBound,
    /// End of the interval (inclusive).
    pub end: DateBound,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self {
            start: DateBound::Date(start),
            end: DateBound::Date(end),
        })
    }

    /// Creates a range from pre-formatted strings that are sent as-is.
    ///
    /// No validation is performed; the API decides what it accepts.
    #[must_use]
    pub fn verbatim(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: DateBound::Verbatim(start.into()),
            end: DateBound::Verbatim(end.into()),
        }
    }

    /// The default request window: `today` through ten days later.
    #[must_use]
    pub fn default_window(today: NaiveDate) -> Self {
        Self {
            start: DateBound::Date(today),
            end: DateBound::Date(today + TimeDelta::days(10)),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`DateRangeError::InvalidDate`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateRangeError::InvalidDate(s.to_string()))
}
