// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time durations as they appear in configuration.
//!
//! A configured duration keeps the unit it was written in: `"30 s"` becomes
//! `Duration { magnitude: 30, unit: Seconds }` and not 30000 milliseconds.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The units a configured duration may be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Nanoseconds
    Nanoseconds,
    /// Microseconds
    Microseconds,
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

/// Every accepted spelling of a unit, lowercased.
static UNIT_NAMES: Lazy<HashMap<&'static str, TimeUnit>> = Lazy::new(|| {
    let table: [(TimeUnit, &[&str]); 7] = [
        (
            TimeUnit::Nanoseconds,
            &["ns", "nano", "nanos", "nanosecond", "nanoseconds"],
        ),
        (
            TimeUnit::Microseconds,
            &["us", "µs", "μs", "micro", "micros", "microsecond", "microseconds"],
        ),
        (
            TimeUnit::Milliseconds,
            &["ms", "milli", "millis", "millisecond", "milliseconds"],
        ),
        (
            TimeUnit::Seconds,
            &["s", "sec", "secs", "second", "seconds"],
        ),
        (
            TimeUnit::Minutes,
            &["m", "min", "mins", "minute", "minutes"],
        ),
        (TimeUnit::Hours, &["h", "hr", "hrs", "hour", "hours"]),
        (TimeUnit::Days, &["d", "day", "days"]),
    ];

    table
        .iter()
        .flat_map(|(unit, names)| names.iter().map(move |name| (*name, *unit)))
        .collect()
});

impl TimeUnit {
    /// All units, smallest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    /// The short name used when formatting durations.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }

    /// Number of nanoseconds in one of this unit.
    pub fn nanos_per_unit(&self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 3_600 * 1_000_000_000,
            TimeUnit::Days => 86_400 * 1_000_000_000,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Returned when a string names no known time unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit \"{0}\"")]
pub struct UnknownTimeUnit(pub String);

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    /// Parses a unit name or abbreviation, ignoring ASCII case.
    ///
    /// ```
    /// use typedcfg::domain::duration::TimeUnit;
    ///
    /// assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Milliseconds);
    /// assert_eq!("Hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
    /// assert!("fortnights".parse::<TimeUnit>().is_err());
    /// ```
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        UNIT_NAMES
            .get(s.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownTimeUnit(s.to_string()))
    }
}

/// A signed amount of time in a specific unit.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::duration::{Duration, TimeUnit};
///
/// let timeout = Duration::new(5, TimeUnit::Seconds);
/// assert_eq!(timeout.to_string(), "5 s");
/// assert_eq!(timeout.to_std(), Some(std::time::Duration::from_secs(5)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    magnitude: i64,
    unit: TimeUnit,
}

impl Duration {
    /// Creates a duration of `magnitude` units.
    pub fn new(magnitude: i64, unit: TimeUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Creates a duration in milliseconds, the unit assumed for bare numbers.
    pub fn from_millis(magnitude: i64) -> Self {
        Self::new(magnitude, TimeUnit::Milliseconds)
    }

    /// The number of units.
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// The unit the magnitude counts.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Total length in nanoseconds.
    pub fn as_nanos(&self) -> i128 {
        i128::from(self.magnitude) * i128::from(self.unit.nanos_per_unit())
    }

    /// Converts to a `std::time::Duration`.
    ///
    /// Returns `None` for negative durations and for lengths that overflow.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        let nanos = u128::try_from(self.as_nanos()).ok()?;
        let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
        // remainder is always below one second
        let subsec = (nanos % 1_000_000_000) as u32;
        Some(std::time::Duration::new(secs, subsec))
    }

    /// Returns `true` if both durations span the same length of time.
    ///
    /// `==` compares magnitude and unit separately.
    pub fn same_length(&self, other: &Duration) -> bool {
        self.as_nanos() == other.as_nanos()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_abbreviations_parse_back() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.abbreviation().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_unit_long_names() {
        assert_eq!("seconds".parse::<TimeUnit>().unwrap(), TimeUnit::Seconds);
        assert_eq!("MINUTES".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("micros".parse::<TimeUnit>().unwrap(), TimeUnit::Microseconds);
        assert_eq!("day".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
    }

    #[test]
    fn test_unit_unknown() {
        let err = "seconds-unknown".parse::<TimeUnit>().unwrap_err();
        assert_eq!(err.to_string(), "unknown time unit \"seconds-unknown\"");
        assert!("".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(Duration::from_millis(250).to_string(), "250 ms");
        assert_eq!(Duration::new(-3, TimeUnit::Hours).to_string(), "-3 h");
    }

    #[test]
    fn test_duration_to_std() {
        assert_eq!(
            Duration::new(1500, TimeUnit::Microseconds).to_std(),
            Some(std::time::Duration::from_micros(1500))
        );
        assert_eq!(
            Duration::new(2, TimeUnit::Days).to_std(),
            Some(std::time::Duration::from_secs(2 * 86_400))
        );
        assert_eq!(Duration::new(-1, TimeUnit::Seconds).to_std(), None);
    }

    #[test]
    fn test_same_length_across_units() {
        let a = Duration::new(5, TimeUnit::Seconds);
        let b = Duration::from_millis(5000);
        assert!(a.same_length(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_as_nanos_does_not_overflow() {
        let d = Duration::new(i64::MAX, TimeUnit::Days);
        assert!(d.as_nanos() > 0);
        assert_eq!(d.to_std(), None);
    }
}
