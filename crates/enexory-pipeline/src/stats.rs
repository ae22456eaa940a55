//! Per-column summary statistics.

use serde::Serialize;

/// Count, mean, sample standard deviation and extremes of a column's
/// present values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    /// Number of present values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); `None` below two values.
    pub std_dev: Option<f64>,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl ColumnStats {
    /// Computes statistics over `values` in one pass (Welford's method).
    ///
    /// Returns `None` when there are no values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            let delta = value - mean;
            mean += delta / count as f64;
            m2 += delta * (value - mean);
            min = min.min(value);
            max = max.max(value);
        }

        (count > 0).then(|| Self {
            count,
            mean,
            std_dev: (count > 1).then(|| (m2 / (count - 1) as f64).sqrt()),
            min,
            max,
        })
    }

    /// Returns the standard deviation if it is defined and non-zero.
    #[must_use]
    pub fn spread(&self) -> Option<f64> {
        self.std_dev.filter(|s| *s > 0.0 && s.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_sample_std() {
        let stats = ColumnStats::from_values([10.0, 10.0, 10.0, 10.0, 1000.0]).unwrap();

        assert_eq!(stats.count, 5);
        assert_relative_eq!(stats.mean, 208.0);
        assert_relative_eq!(stats.std_dev.unwrap(), 442.741_459_544_958, epsilon = 1e-9);
        assert_relative_eq!(stats.min, 10.0);
        assert_relative_eq!(stats.max, 1000.0);
    }

    #[test]
    fn test_empty_and_single_value() {
        assert!(ColumnStats::from_values(std::iter::empty()).is_none());

        let single = ColumnStats::from_values([3.5]).unwrap();
        assert_eq!(single.std_dev, None);
        assert_eq!(single.spread(), None);
    }

    #[test]
    fn test_constant_column_has_no_spread() {
        let stats = ColumnStats::from_values([7.0; 6]).unwrap();
        assert_relative_eq!(stats.std_dev.unwrap(), 0.0);
        assert_eq!(stats.spread(), None);
    }
}
