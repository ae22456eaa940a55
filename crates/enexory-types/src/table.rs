//! Timestamp-indexed table of optional series values.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::TableError;

/// One table row: a timestamp and one optional value per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Row key.
    pub timestamp: NaiveDateTime,
    /// Values aligned with the table's columns. `None` marks a missing value.
    pub values: Vec<Option<f64>>,
}

impl Row {
    /// Creates a new row.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, values: Vec<Option<f64>>) -> Self {
        Self { timestamp, values }
    }

    /// Returns the value in the given column, or `None` if missing.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<f64> {
        self.values.get(column).copied().flatten()
    }
}

/// Rows keyed by timestamp, one column per requested series.
///
/// Rows keep the order they were pushed in; duplicate timestamps are allowed.
/// Every row has exactly [`TimeTable::width`] value slots.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TimeTable {
    /// Creates an empty table with the given column names.
    #[must_use]
    pub const fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from rows, checking every row's width.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowWidth`] if a row does not have one value per column.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, TableError> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowWidth`] if the row does not have one value per column.
    pub fn push(&mut self, row: Row) -> Result<(), TableError> {
        if row.values.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                expected: self.columns.len(),
                found: row.values.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the position of a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] if no column has that name.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Iterates over one column's cells, missing values included.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.rows.iter().map(move |row| row.get(column))
    }

    /// Iterates over one column's present values.
    pub fn present(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.column(column).flatten()
    }

    /// Mutable access to one column's cells, in row order.
    pub fn column_mut(&mut self, column: usize) -> impl Iterator<Item = &mut Option<f64>> + '_ {
        self.rows
            .iter_mut()
            .filter_map(move |row| row.values.get_mut(column))
    }

    /// Keeps only the rows for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&Row) -> bool) {
        self.rows.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn two_columns() -> TimeTable {
        TimeTable::with_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Row::new(ts(0), vec![Some(1.0), None]),
                Row::new(ts(1), vec![Some(2.0), Some(5.0)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_push_rejects_wrong_width() {
        let mut table = two_columns();
        let err = table.push(Row::new(ts(2), vec![Some(1.0)])).unwrap_err();
        assert_eq!(err, TableError::RowWidth { expected: 2, found: 1 });
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_column_access() {
        let table = two_columns();
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec![None, Some(5.0)]);
        assert_eq!(table.present(1).collect::<Vec<_>>(), vec![5.0]);
        assert_eq!(table.column_index("b").unwrap(), 1);
        assert!(table.column_index("c").is_err());
    }

    #[test]
    fn test_column_mut_and_retain() {
        let mut table = two_columns();
        for cell in table.column_mut(1) {
            cell.get_or_insert(0.0);
        }
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec![Some(0.0), Some(5.0)]);

        table.retain(|row| row.get(0) != Some(1.0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].timestamp, ts(1));
    }
}
