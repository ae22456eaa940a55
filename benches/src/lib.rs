//! Synthetic inputs for the enexory benchmarks.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use enexory_lib::{Row, TimeTable};
use std::fmt::Write;

/// Shape of a generated table.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticConfig {
    /// Number of series.
    pub columns: usize,
    /// Number of days at quarter-hour resolution.
    pub days: usize,
    /// Every n-th cell is missing (0 disables gaps).
    pub gap_every: usize,
    /// Every n-th cell is a spike (0 disables spikes).
    pub spike_every: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            days: 30,
            gap_every: 37,
            spike_every: 997,
        }
    }
}

impl SyntheticConfig {
    /// Number of rows this configuration produces.
    pub const fn rows(&self) -> usize {
        self.days * 96
    }

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid start date")
    }

    fn cell(&self, row: usize, column: usize) -> Option<f64> {
        let n = row * self.columns + column;
        if self.gap_every > 0 && n % self.gap_every == 0 {
            return None;
        }
        let base = 50.0 + 20.0 * ((row as f64) / 16.0 + column as f64).sin();
        if self.spike_every > 0 && n % self.spike_every == 0 {
            Some(base * 1.0e4)
        } else {
            Some(base)
        }
    }

    fn column_names(&self) -> Vec<String> {
        (0..self.columns).map(|c| format!("series_{c}")).collect()
    }
}

/// Builds a quarter-hourly table with gaps and occasional spikes.
pub fn synthetic_table(config: &SyntheticConfig) -> TimeTable {
    let start = SyntheticConfig::start();
    let rows = (0..config.rows())
        .map(|r| {
            let values = (0..config.columns).map(|c| config.cell(r, c)).collect();
            Row::new(start + TimeDelta::minutes(15 * r as i64), values)
        })
        .collect();
    TimeTable::with_rows(config.column_names(), rows).expect("synthetic rows match the column count")
}

/// Renders the same data as the semicolon-delimited text the API returns.
///
/// Returns the text and the column names to parse it with.
pub fn synthetic_payload(config: &SyntheticConfig) -> (String, Vec<String>) {
    let start = SyntheticConfig::start();
    let mut text = String::from("date_time");
    for c in 0..config.columns {
        let _ = write!(text, ";{c}");
    }
    text.push_str(";\n");

    for r in 0..config.rows() {
        let ts = start + TimeDelta::minutes(15 * r as i64);
        let _ = write!(text, "{}", ts.format("%Y-%m-%d %H:%M:%S"));
        for c in 0..config.columns {
            match config.cell(r, c) {
                Some(v) => {
                    let _ = write!(text, ";{v}");
                }
                None => text.push(';'),
            }
        }
        text.push_str(";\n");
    }
    (text, config.column_names())
}
