//! Parsing of semicolon-delimited series data into a [`TimeTable`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use enexory_types::{Row, TableError, TimeTable};
use thiserror::Error;

const SEPARATOR: char = ';';

/// Timestamp layouts accepted in the first field of a data row.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Cell spellings treated as a missing value.
const MISSING_MARKERS: &[&str] = &["", "nan", "na", "null", "none"];

/// Errors that can occur while parsing series data.
///
/// Line numbers are 1-based and count the header line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first field of a row is not a recognizable timestamp.
    #[error("line {line}: invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// Line number.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// A value cell is neither empty nor a number.
    #[error("line {line}: invalid number '{value}' in column '{column}'")]
    InvalidNumber {
        /// Line number.
        line: usize,
        /// Column name.
        column: String,
        /// The offending text.
        value: String,
    },

    /// A row has more value fields than there are columns.
    #[error("line {line}: {found} value fields but only {expected} columns")]
    TooManyFields {
        /// Line number.
        line: usize,
        /// Number of columns.
        expected: usize,
        /// Number of value fields on the line.
        found: usize,
    },

    /// A parsed row did not fit the table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Parses a data timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS[.fff]]` with a space or `T` separator,
/// RFC 3339 timestamps with an offset (converted to UTC) and bare dates
/// (midnight).
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parses one value cell; `Ok(None)` for a missing value.
fn parse_cell(raw: Option<&str>) -> Result<Option<f64>, ()> {
    let Some(cell) = raw.map(str::trim) else {
        return Ok(None);
    };
    if MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| ())
}

/// Parses `getdata` output into a table with the given column names.
///
/// The first line is a header and is skipped; the caller supplies column
/// names (usually the catalog names of the requested series, in request
/// order). Each following line is `timestamp;value;value;...`, optionally
/// ending in a trailing `;`. Empty cells are missing values; rows that end
/// early are padded with missing values. Blank lines are ignored.
///
/// # Errors
///
/// Fails on the first malformed row: an unparseable timestamp, a non-numeric
/// value, or more value fields than columns.
pub fn parse_table(text: &str, columns: &[String]) -> Result<TimeTable, ParseError> {
    let width = columns.len();
    let mut table = TimeTable::new(columns.to_vec());

    for (offset, line) in text.lines().enumerate().skip(1) {
        let line_no = offset + 1;
        let line = line.strip_suffix(SEPARATOR).unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(SEPARATOR);
        let raw_ts = fields.next().unwrap_or_default();
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| ParseError::InvalidTimestamp {
            line: line_no,
            value: raw_ts.to_string(),
        })?;

        let cells: Vec<&str> = fields.collect();
        if cells.len() > width {
            return Err(ParseError::TooManyFields {
                line: line_no,
                expected: width,
                found: cells.len(),
            });
        }

        let values = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let raw = cells.get(i).copied();
                parse_cell(raw).map_err(|()| ParseError::InvalidNumber {
                    line: line_no,
                    column: column.clone(),
                    value: raw.unwrap_or_default().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        table.push(Row::new(timestamp, values))?;
    }

    Ok(table)
}
