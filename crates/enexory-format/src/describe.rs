//! Per-column summary of a table.

use chrono::NaiveDateTime;
use enexory_pipeline::ColumnStats;
use enexory_types::TimeTable;
use serde::Serialize;
use std::fmt;

use crate::TIMESTAMP_FORMAT;

/// Summary of one column's present values.
///
/// Statistics other than `count` are `None` when the column has no present
/// values; `std_dev` is also `None` with a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std_dev: Option<f64>,
    /// Smallest value.
    pub min: Option<f64>,
    /// First quartile.
    pub q25: Option<f64>,
    /// Median.
    pub median: Option<f64>,
    /// Third quartile.
    pub q75: Option<f64>,
    /// Largest value.
    pub max: Option<f64>,
}

impl ColumnSummary {
    fn new(name: &str, mut values: Vec<f64>) -> Self {
        let stats = ColumnStats::from_values(values.iter().copied());
        values.sort_by(f64::total_cmp);
        Self {
            name: name.to_string(),
            count: values.len(),
            mean: stats.map(|s| s.mean),
            std_dev: stats.and_then(|s| s.std_dev),
            min: stats.map(|s| s.min),
            q25: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: stats.map(|s| s.max),
        }
    }
}

/// Summary of a whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    /// Number of rows.
    pub rows: usize,
    /// First row timestamp.
    pub first: Option<NaiveDateTime>,
    /// Last row timestamp.
    pub last: Option<NaiveDateTime>,
    /// One summary per column, in column order.
    pub columns: Vec<ColumnSummary>,
}

/// Summarizes every column of `table`.
#[must_use]
pub fn describe(table: &TimeTable) -> TableSummary {
    let columns = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| ColumnSummary::new(name, table.present(i).collect()))
        .collect();

    TableSummary {
        rows: table.len(),
        first: table.rows().first().map(|r| r.timestamp),
        last: table.rows().last().map(|r| r.timestamp),
        columns,
    }
}

/// Quantile of sorted values with linear interpolation between ranks.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

const LABEL_WIDTH: usize = 6;
const MIN_COLUMN_WIDTH: usize = 12;

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows", self.rows)?;
        if let (Some(first), Some(last)) = (self.first, self.last) {
            write!(
                f,
                ", {} to {}",
                first.format(TIMESTAMP_FORMAT),
                last.format(TIMESTAMP_FORMAT)
            )?;
        }
        writeln!(f)?;
        if self.columns.is_empty() {
            return Ok(());
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.name.chars().count().max(MIN_COLUMN_WIDTH))
            .collect();

        write!(f, "{:LABEL_WIDTH$}", "")?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.name)?;
        }
        writeln!(f)?;

        write!(f, "{:<LABEL_WIDTH$}", "count")?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.count)?;
        }
        writeln!(f)?;

        let stats: [(&str, fn(&ColumnSummary) -> Option<f64>); 7] = [
            ("mean", |c| c.mean),
            ("std", |c| c.std_dev),
            ("min", |c| c.min),
            ("25%", |c| c.q25),
            ("50%", |c| c.median),
            ("75%", |c| c.q75),
            ("max", |c| c.max),
        ];
        for (label, get) in stats {
            write!(f, "{label:<LABEL_WIDTH$}")?;
            for (column, width) in self.columns.iter().zip(&widths) {
                match get(column) {
                    Some(v) => write!(f, "  {v:>width$.4}")?,
                    None => write!(f, "  {:>width$}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
