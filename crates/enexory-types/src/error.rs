//! Error types for enexory.

use chrono::NaiveDate;
use thiserror::Error;

use crate::SeriesId;

/// A requested series id is not part of the catalog.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown series id: {0}")]
pub struct UnknownSeriesError(pub SeriesId);

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Not a valid date: '{0}'")]
    InvalidDate(String),
}

/// Error for rows that do not match the table's column layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Row has a different number of value slots than the table has columns.
    #[error("Row has {found} values but the table has {expected} columns")]
    RowWidth {
        /// Number of columns in the table.
        expected: usize,
        /// Number of values in the rejected row.
        found: usize,
    },

    /// Column name is not part of the table.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
