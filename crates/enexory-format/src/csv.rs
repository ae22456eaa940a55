//! CSV output format.

use enexory_types::TimeTable;
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter, TIMESTAMP_FORMAT};

/// CSV formatter.
///
/// Writes a `timestamp` column followed by one column per series. Missing
/// values are empty cells.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Quotes a header field if it contains the delimiter, a quote or a newline.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_table<W: Write>(&self, table: &TimeTable, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            write!(writer, "timestamp")?;
            for column in table.columns() {
                write!(writer, "{d}{}", self.escape(column))?;
            }
            writeln!(writer)?;
        }

        for row in table.rows() {
            write!(writer, "{}", row.timestamp.format(TIMESTAMP_FORMAT))?;
            for value in &row.values {
                match value {
                    Some(v) => write!(writer, "{d}{v}")?,
                    None => write!(writer, "{d}")?,
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
