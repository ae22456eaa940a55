//! Bucket-mean resampling.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use enexory_types::{Row, Step, TimeTable};
use std::collections::BTreeMap;
use tracing::debug;

/// Bucket-mean accumulator.
///
/// Groups rows into fixed-width buckets `[origin + k·step, origin + (k+1)·step)`
/// and emits one row per non-empty bucket holding the mean of each column's
/// present values. Rows may arrive in any order; buckets are keyed by their
/// start and emitted in ascending order.
#[derive(Debug)]
pub struct Resampler {
    step: Step,
    width: usize,
    origin: NaiveDateTime,
    buckets: BTreeMap<NaiveDateTime, BucketBuilder>,
}

impl Resampler {
    /// Creates a resampler for rows with `width` value columns and buckets
    /// aligned to `origin`.
    #[must_use]
    pub const fn new(step: Step, width: usize, origin: NaiveDateTime) -> Self {
        Self {
            step,
            width,
            origin,
            buckets: BTreeMap::new(),
        }
    }

    /// Returns the step being resampled to.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Adds a row to its bucket.
    pub fn process(&mut self, row: &Row) {
        let start = bucket_start(self.origin, self.step, row.timestamp);
        self.buckets
            .entry(start)
            .or_insert_with(|| BucketBuilder::new(start, self.width))
            .update(row);
    }

    /// Finishes resampling, returning one row per non-empty bucket in bucket order.
    #[must_use]
    pub fn finish(self) -> Vec<Row> {
        self.buckets.into_values().map(BucketBuilder::finish).collect()
    }
}

/// Returns the start of the bucket containing `timestamp`.
///
/// Buckets are `[origin + k·step, origin + (k+1)·step)` for integer `k`.
#[must_use]
pub fn bucket_start(origin: NaiveDateTime, step: Step, timestamp: NaiveDateTime) -> NaiveDateTime {
    let step_ms = step.as_delta().num_milliseconds();
    let offset_ms = (timestamp - origin).num_milliseconds();
    origin + TimeDelta::milliseconds(offset_ms.div_euclid(step_ms) * step_ms)
}

/// Resamples a whole table to `step`.
///
/// Buckets are aligned to midnight of the earliest row's day, so a 4 h step
/// always yields 00:00, 04:00, 08:00... The output has one row per non-empty
/// bucket, in bucket order, whatever the order of the input rows. A column
/// with no present values in a bucket is missing in that bucket's row.
#[must_use]
pub fn resample(table: TimeTable, step: Step) -> TimeTable {
    let Some(earliest) = table.rows().iter().map(|row| row.timestamp).min() else {
        return table;
    };
    let origin = earliest.date().and_time(NaiveTime::MIN);

    let mut resampler = Resampler::new(step, table.width(), origin);
    for row in table.rows() {
        resampler.process(row);
    }
    let rows = resampler.finish();

    debug!(input_rows = table.len(), output_rows = rows.len(), %step, "resampled table");
    TimeTable::with_rows(table.columns().to_vec(), rows)
        .expect("bucket rows have one value per column")
}

/// Running sums for one bucket.
#[derive(Debug)]
struct BucketBuilder {
    start: NaiveDateTime,
    sums: Vec<f64>,
    counts: Vec<u32>,
}

impl BucketBuilder {
    fn new(start: NaiveDateTime, width: usize) -> Self {
        Self {
            start,
            sums: vec![0.0; width],
            counts: vec![0; width],
        }
    }

    /// Adds a row's present values to the bucket.
    fn update(&mut self, row: &Row) {
        for (i, value) in row.values.iter().enumerate().take(self.sums.len()) {
            if let Some(v) = value {
                self.sums[i] += v;
                self.counts[i] += 1;
            }
        }
    }

    /// Finishes the bucket, averaging each column.
    fn finish(self) -> Row {
        let values = self
            .sums
            .iter()
            .zip(&self.counts)
            .map(|(sum, &count)| (count > 0).then(|| sum / f64::from(count)))
            .collect();
        Row::new(self.start, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, Timelike};

    fn ts(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn quarter_hour_day() -> TimeTable {
        let rows = (0..96)
            .map(|i| {
                let timestamp = ts(0, 0) + TimeDelta::minutes(15 * i);
                Row::new(timestamp, vec![Some(i as f64), Some(1.0)])
            })
            .collect();
        TimeTable::with_rows(vec!["a".into(), "b".into()], rows).unwrap()
    }

    #[test]
    fn test_quarter_hours_to_four_hours() {
        let out = resample(quarter_hour_day(), Step::HOUR_4);

        assert_eq!(out.len(), 6);
        for (k, row) in out.rows().iter().enumerate() {
            assert_eq!(row.timestamp, ts(4 * k as u32, 0));
            // mean of 16 consecutive indices 16k..16k+15
            let expected = 16.0 * k as f64 + 7.5;
            assert_relative_eq!(row.get(0).unwrap(), expected);
            assert_relative_eq!(row.get(1).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_all_missing_bucket_stays_missing() {
        let rows = vec![
            Row::new(ts(0, 0), vec![Some(2.0), None]),
            Row::new(ts(1, 0), vec![Some(4.0), None]),
            Row::new(ts(5, 0), vec![None, Some(0.0)]),
        ];
        let table = TimeTable::with_rows(vec!["a".into(), "b".into()], rows).unwrap();
        let out = resample(table, Step::HOUR_4);

        assert_eq!(out.len(), 2);
        assert_eq!(out.rows()[0].values, vec![Some(3.0), None]);
        assert_eq!(out.rows()[1].values, vec![None, Some(0.0)]);
    }

    #[test]
    fn test_buckets_align_to_midnight_of_first_day() {
        let rows = vec![
            Row::new(ts(5, 30), vec![Some(1.0)]),
            Row::new(ts(7, 59), vec![Some(3.0)]),
            Row::new(ts(8, 0), vec![Some(10.0)]),
        ];
        let table = TimeTable::with_rows(vec!["a".into()], rows).unwrap();
        let out = resample(table, Step::HOUR_4);

        assert_eq!(out.len(), 2);
        assert_eq!(out.rows()[0].timestamp.hour(), 4);
        assert_eq!(out.rows()[0].values, vec![Some(2.0)]);
        assert_eq!(out.rows()[1].timestamp.hour(), 8);
    }

    #[test]
    fn test_empty_buckets_are_not_emitted() {
        let rows = vec![
            Row::new(ts(0, 0), vec![Some(1.0)]),
            Row::new(ts(20, 0), vec![Some(2.0)]),
        ];
        let table = TimeTable::with_rows(vec!["a".into()], rows).unwrap();
        let out = resample(table, Step::HOUR_4);

        assert_eq!(out.len(), 2);
        assert_eq!(out.rows()[1].timestamp, ts(20, 0));
    }

    #[test]
    fn test_out_of_order_rows_rejoin_their_bucket() {
        let rows = vec![
            Row::new(ts(1, 0), vec![Some(1.0)]),
            Row::new(ts(2, 45), vec![Some(2.0)]),
            Row::new(ts(5, 0), vec![Some(10.0)]),
            Row::new(ts(2, 0), vec![Some(3.0)]),
        ];
        let table = TimeTable::with_rows(vec!["a".into()], rows).unwrap();
        let out = resample(table, Step::HOUR_4);

        assert_eq!(out.len(), 2);
        assert_eq!(out.rows()[0].timestamp, ts(0, 0));
        assert_eq!(out.rows()[0].values, vec![Some(2.0)]);
        assert_eq!(out.rows()[1].timestamp, ts(4, 0));
        assert_eq!(out.rows()[1].values, vec![Some(10.0)]);
    }

    #[test]
    fn test_origin_is_midnight_of_earliest_row() {
        // 7 h buckets do not divide a day, so the origin decides the edges
        let later_day = ts(3, 0) + TimeDelta::days(1);
        let rows = vec![
            Row::new(later_day, vec![Some(1.0)]),
            Row::new(ts(22, 0), vec![Some(5.0)]),
        ];
        let table = TimeTable::with_rows(vec!["a".into()], rows).unwrap();
        let out = resample(table, Step::hours(7).unwrap());

        // buckets from 2024-01-01 00:00: ..., 21:00, 04:00 next day
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0].timestamp, ts(21, 0));
        assert_eq!(out.rows()[0].values, vec![Some(3.0)]);
    }

    #[test]
    fn test_resampler_emits_in_bucket_order() {
        let mut resampler = Resampler::new(Step::HOUR_1, 1, ts(0, 0));
        assert_eq!(resampler.step(), Step::HOUR_1);

        resampler.process(&Row::new(ts(13, 0), vec![Some(9.0)]));
        resampler.process(&Row::new(ts(12, 0), vec![Some(1.0)]));
        resampler.process(&Row::new(ts(12, 30), vec![Some(2.0)]));

        let rows = resampler.finish();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].timestamp, ts(12, 0));
        assert_eq!(rows[0].values, vec![Some(1.5)]);
        assert_eq!(rows[1].values, vec![Some(9.0)]);
    }

    #[test]
    fn test_bucket_start() {
        let origin = ts(0, 0);
        assert_eq!(bucket_start(origin, Step::MINUTE_15, ts(14, 37)), ts(14, 30));
        assert_eq!(bucket_start(origin, Step::HOUR_4, ts(14, 37)), ts(12, 0));
        assert_eq!(bucket_start(origin, Step::DAY_1, ts(23, 59)), ts(0, 0));
    }

    #[test]
    fn test_empty_table() {
        let table = TimeTable::new(vec!["a".into()]);
        let out = resample(table, Step::HOUR_4);
        assert!(out.is_empty());
        assert_eq!(out.columns(), ["a"]);
    }
}
