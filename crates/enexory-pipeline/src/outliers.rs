//! Column-by-column outlier removal.

use enexory_types::{TableError, TimeTable};
use tracing::debug;

use crate::ColumnStats;

/// What outlier removal did to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOutcome {
    /// This many rows were dropped because of the column's values.
    Removed(usize),
    /// No value in the column crossed the threshold.
    NoneFound,
}

/// Per-column outcomes of one outlier pass, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlierReport {
    columns: Vec<(String, ColumnOutcome)>,
}

impl OutlierReport {
    /// Outcomes in the order the columns were processed.
    #[must_use]
    pub fn columns(&self) -> &[(String, ColumnOutcome)] {
        &self.columns
    }

    /// Returns the outcome for a column.
    #[must_use]
    pub fn outcome(&self, column: &str) -> Option<ColumnOutcome> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, outcome)| *outcome)
    }

    /// Total number of rows dropped across all columns.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, outcome)| match outcome {
                ColumnOutcome::Removed(n) => *n,
                ColumnOutcome::NoneFound => 0,
            })
            .sum()
    }
}

impl std::fmt::Display for OutlierReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, outcome) in &self.columns {
            match outcome {
                ColumnOutcome::Removed(n) => {
                    writeln!(f, "Removed {n} anomalies from column '{name}'")?;
                }
                ColumnOutcome::NoneFound => {
                    writeln!(f, "Could not find any anomalies on column '{name}'")?;
                }
            }
        }
        Ok(())
    }
}

/// Drops rows holding values at least `sigmas` standard deviations away
/// from their column's mean.
///
/// Columns are handled one after another and each sees the table as left by
/// the previous one, so the column order changes the result. A row is dropped
/// from the whole table when its value in the current column is present and
/// `|value − mean| >= sigmas · std_dev`. Missing values never cause a drop,
/// and a column with zero or undefined spread drops nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierFilter {
    sigmas: f64,
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self {
            sigmas: Self::DEFAULT_SIGMAS,
        }
    }
}

impl OutlierFilter {
    /// Default threshold in standard deviations.
    pub const DEFAULT_SIGMAS: f64 = 10.0;

    /// Creates a filter with the given threshold in standard deviations.
    ///
    /// Returns `None` unless `sigmas` is finite and positive; any other
    /// threshold would flag every present value.
    #[must_use]
    pub fn new(sigmas: f64) -> Option<Self> {
        (sigmas.is_finite() && sigmas > 0.0).then_some(Self { sigmas })
    }

    /// Returns the threshold in standard deviations.
    #[must_use]
    pub const fn sigmas(&self) -> f64 {
        self.sigmas
    }

    /// Filters every column, left to right.
    #[must_use]
    pub fn apply(&self, table: TimeTable) -> (TimeTable, OutlierReport) {
        let order: Vec<usize> = (0..table.width()).collect();
        self.fold_columns(table, &order)
    }

    /// Filters the named columns in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] if a name is not a column of the
    /// table.
    pub fn apply_in_order(
        &self,
        table: TimeTable,
        columns: &[&str],
    ) -> Result<(TimeTable, OutlierReport), TableError> {
        let order = columns
            .iter()
            .map(|name| table.column_index(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.fold_columns(table, &order))
    }

    fn fold_columns(&self, table: TimeTable, order: &[usize]) -> (TimeTable, OutlierReport) {
        order.iter().fold(
            (table, OutlierReport::default()),
            |(mut table, mut report), &column| {
                let removed = self.filter_column(&mut table, column);
                let outcome = if removed > 0 {
                    ColumnOutcome::Removed(removed)
                } else {
                    ColumnOutcome::NoneFound
                };
                report
                    .columns
                    .push((table.columns()[column].clone(), outcome));
                (table, report)
            },
        )
    }

    /// Removes the outlier rows of one column, returning how many went.
    fn filter_column(&self, table: &mut TimeTable, column: usize) -> usize {
        let Some(stats) = ColumnStats::from_values(table.present(column)) else {
            return 0;
        };
        let Some(std_dev) = stats.spread() else {
            return 0;
        };

        let threshold = self.sigmas * std_dev;
        let before = table.len();
        table.retain(|row| {
            row.get(column)
                .is_none_or(|value| (value - stats.mean).abs() < threshold)
        });
        let removed = before - table.len();

        debug!(
            column = %table.columns()[column],
            mean = stats.mean,
            std_dev,
            threshold,
            removed,
            "outlier pass"
        );
        removed
    }
}
