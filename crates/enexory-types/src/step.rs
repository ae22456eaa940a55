//! Fixed resampling step.

use chrono::TimeDelta;
use std::str::FromStr;

/// A fixed, positive time step used to bucket rows when resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step(TimeDelta);

impl Step {
    /// 15-minute step.
    pub const MINUTE_15: Self = Self(TimeDelta::minutes(15));
    /// 1-hour step.
    pub const HOUR_1: Self = Self(TimeDelta::hours(1));
    /// 4-hour step.
    pub const HOUR_4: Self = Self(TimeDelta::hours(4));
    /// 1-day step.
    pub const DAY_1: Self = Self(TimeDelta::days(1));

    /// Creates a step from a duration. Returns `None` unless the duration is
    /// at least one second.
    #[must_use]
    pub fn new(delta: TimeDelta) -> Option<Self> {
        (delta >= TimeDelta::seconds(1)).then_some(Self(delta))
    }

    /// Creates a step of the given number of hours.
    #[must_use]
    pub fn hours(hours: i64) -> Option<Self> {
        Self::new(TimeDelta::hours(hours))
    }

    /// Creates a step of the given number of minutes.
    #[must_use]
    pub fn minutes(minutes: i64) -> Option<Self> {
        Self::new(TimeDelta::minutes(minutes))
    }

    /// Returns the step as a duration.
    #[must_use]
    pub const fn as_delta(&self) -> TimeDelta {
        self.0
    }

    /// Returns the step length in whole seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.0.num_seconds()
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::HOUR_4
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.seconds();
        if secs % 86_400 == 0 {
            write!(f, "{}d", secs / 86_400)
        } else if secs % 3600 == 0 {
            write!(f, "{}h", secs / 3600)
        } else if secs % 60 == 0 {
            write!(f, "{}m", secs / 60)
        } else {
            write!(f, "{secs}s")
        }
    }
}

impl FromStr for Step {
    type Err = StepParseError;

    /// Parses `4h`, `15m`, `30s`, `1d` (and the unit-first `h4`, `m15` forms).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let err = || StepParseError(s.to_string());

        let split = lower
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(err)?;
        let (count, unit) = if split == 0 {
            // unit-first form such as "h4"
            let digits = lower
                .find(|c: char| c.is_ascii_digit())
                .ok_or_else(err)?;
            let (unit, count) = lower.split_at(digits);
            (count, unit)
        } else {
            lower.split_at(split)
        };

        let count: i64 = count.parse().map_err(|_| err())?;
        let delta = match unit {
            "s" | "sec" | "second" | "seconds" => TimeDelta::try_seconds(count),
            "m" | "min" | "minute" | "minutes" => TimeDelta::try_minutes(count),
            "h" | "hour" | "hours" => TimeDelta::try_hours(count),
            "d" | "day" | "days" => TimeDelta::try_days(count),
            _ => None,
        }
        .ok_or_else(err)?;

        Self::new(delta).ok_or_else(err)
    }
}

/// Error returned when parsing an invalid step string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepParseError(String);

impl std::fmt::Display for StepParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid step '{}', expected a positive count and unit such as 15m, 4h or 1d",
            self.0
        )
    }
}

impl std::error::Error for StepParseError {}
