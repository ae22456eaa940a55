//! The three post-processing stages composed in order.

use enexory_types::{Step, TimeTable};
use tracing::info;

use crate::{OutlierFilter, OutlierReport, forward_fill, resample};

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The resampled, filtered and filled table.
    pub table: TimeTable,
    /// Rows in the input table.
    pub input_rows: usize,
    /// Rows after resampling.
    pub resampled_rows: usize,
    /// Per-column outlier outcomes.
    pub outliers: OutlierReport,
}

/// Resample → outlier removal → forward fill.
///
/// Each stage takes the table by value and hands a new one to the next.
///
/// # Example
///
/// ```
/// use enexory_pipeline::{OutlierFilter, Pipeline};
/// use enexory_types::{Step, TimeTable};
///
/// let filter = OutlierFilter::new(5.0).expect("positive threshold");
/// let table = TimeTable::new(vec!["Spot".to_string()]);
/// let output = Pipeline::new(Step::HOUR_1).with_filter(filter).run(table);
/// assert!(output.table.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    step: Step,
    outliers: OutlierFilter,
}

impl Pipeline {
    /// Creates a pipeline resampling to `step` with the default outlier threshold.
    #[must_use]
    pub fn new(step: Step) -> Self {
        Self {
            step,
            outliers: OutlierFilter::default(),
        }
    }

    /// Sets the outlier filter.
    #[must_use]
    pub const fn with_filter(mut self, outliers: OutlierFilter) -> Self {
        self.outliers = outliers;
        self
    }

    /// Returns the resampling step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Returns the outlier threshold in standard deviations.
    #[must_use]
    pub const fn sigmas(&self) -> f64 {
        self.outliers.sigmas()
    }

    /// Stage A: bucket-mean resampling.
    #[must_use]
    pub fn resample(&self, table: TimeTable) -> TimeTable {
        resample(table, self.step)
    }

    /// Stage B: column-by-column outlier removal.
    #[must_use]
    pub fn remove_outliers(&self, table: TimeTable) -> (TimeTable, OutlierReport) {
        self.outliers.apply(table)
    }

    /// Stage C: forward fill.
    #[must_use]
    pub fn fill(&self, table: TimeTable) -> TimeTable {
        forward_fill(table)
    }

    /// Runs all three stages.
    #[must_use]
    pub fn run(&self, table: TimeTable) -> PipelineOutput {
        let input_rows = table.len();
        let table = self.resample(table);
        let resampled_rows = table.len();
        let (table, outliers) = self.remove_outliers(table);
        let table = self.fill(table);

        info!(
            input_rows,
            resampled_rows,
            removed = outliers.total_removed(),
            output_rows = table.len(),
            "pipeline finished"
        );
        PipelineOutput {
            table,
            input_rows,
            resampled_rows,
            outliers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnOutcome;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use enexory_types::Row;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.step(), Step::HOUR_4);
        assert_relative_eq!(pipeline.sigmas(), 10.0);
    }

    #[test]
    fn test_run_all_stages() {
        // hourly rows over 10 days; "price" is missing every 5th day, "load" has one spike
        let rows = (0..240)
            .map(|h| {
                let price = (h / 24 % 5 != 4).then_some(50.0);
                let load = if h == 100 { 1.0e9 } else { 100.0 + f64::from(h % 4) };
                Row::new(start() + TimeDelta::hours(i64::from(h)), vec![price, Some(load)])
            })
            .collect();
        let table = TimeTable::with_rows(vec!["price".into(), "load".into()], rows).unwrap();

        // 60 buckets put a lone spike (n-1)/sqrt(n) ~ 7.6 std devs out
        let output = Pipeline::new(Step::HOUR_4)
            .with_filter(OutlierFilter::new(5.0).unwrap())
            .run(table);

        assert_eq!(output.input_rows, 240);
        assert_eq!(output.resampled_rows, 60);
        assert_eq!(output.outliers.outcome("price"), Some(ColumnOutcome::NoneFound));
        assert_eq!(output.outliers.outcome("load"), Some(ColumnOutcome::Removed(1)));
        assert_eq!(output.table.len(), 59);
        // day 4 had no prices; they are carried forward from day 3
        assert!(output.table.column(0).all(|v| v == Some(50.0)));
        assert!(output.table.present(1).all(|v| v < 1000.0));
    }
}
