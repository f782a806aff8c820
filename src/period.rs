// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Periods of Telisaran time.
//!
//! This module provides:
//! - [`Period`]: a half-open interval `[start, end)` between two [`DateTime`]s
//! - [`DayStarts`]: iterator over the first second of every day a period touches

use qtty::{Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::instant::DateTime;
use crate::units::Day;

/// An interval between two instants of the reckoning.
///
/// # Examples
///
/// ```
/// use telisaran::{DateTime, Period};
///
/// let start = DateTime::new(1, 1, 1, 1, 0, 0, 0).unwrap();
/// let end = DateTime::new(1, 1, 1, 3, 12, 0, 0).unwrap();
/// let period = Period::new(start, end);
///
/// assert!((period.duration_days().value() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: DateTime,
    pub end: DateTime,
}

impl Period {
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Period { start, end }
    }

    /// Signed length of the period.
    #[inline]
    pub fn duration(&self) -> Seconds {
        self.end - self.start
    }

    #[inline]
    pub fn duration_days(&self) -> Days {
        self.duration().to::<qtty::Day>()
    }

    /// Whole seconds between start and end, negative for a reversed period.
    pub fn duration_seconds(&self) -> i128 {
        i128::from(self.end.offset()) - i128::from(self.start.offset())
    }

    /// `true` if `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: &DateTime) -> bool {
        self.start <= *instant && *instant < self.end
    }

    /// Returns the overlapping sub-period between `self` and `other`.
    ///
    /// Periods are half-open: if one ends exactly when the other starts the
    /// intersection is empty and `None` is returned.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| Self::new(start, end))
    }

    /// Black Hour of every day the period touches, in order.
    pub fn day_starts(&self) -> DayStarts {
        DayStarts {
            next: (self.start < self.end).then(|| self.start.start_of_day()),
            end: self.end,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator returned by [`Period::day_starts`].
#[derive(Debug, Clone)]
pub struct DayStarts {
    next: Option<DateTime>,
    end: DateTime,
}

impl Iterator for DayStarts {
    type Item = DateTime;

    fn next(&mut self) -> Option<DateTime> {
        let current = self.next.take().filter(|day| *day < self.end)?;
        // Running off the end of the reckoning simply ends the iteration.
        self.next = current.add_seconds(Day::LENGTH_IN_SECONDS).ok();
        Some(current)
    }
}

// Serde support: both ends as offsets in seconds since the epoch.
#[cfg(feature = "serde")]
impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: DateTime,
            end: DateTime,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Period::new(raw.start, raw.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u8, hour: u8) -> DateTime {
        DateTime::new(1, 1, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn duration_in_seconds_and_days() {
        let period = Period::new(at(1, 0), at(3, 12));
        assert_eq!(period.duration(), Seconds::new(216_000.0));
        assert!((period.duration_days().value() - 2.5).abs() < 1e-12);
        assert_eq!(period.duration_seconds(), 216_000);
        assert_eq!(Period::new(at(3, 12), at(1, 0)).duration_seconds(), -216_000);
    }

    #[test]
    fn contains_is_half_open() {
        let period = Period::new(at(2, 0), at(4, 0));
        assert!(period.contains(&at(2, 0)));
        assert!(period.contains(&at(3, 23)));
        assert!(!period.contains(&at(4, 0)));
        assert!(!period.contains(&at(1, 23)));
    }

    #[test]
    fn intersection_overlapping() {
        let a = Period::new(at(1, 0), at(5, 0));
        let b = Period::new(at(3, 0), at(8, 0));
        assert_eq!(a.intersection(&b), Some(Period::new(at(3, 0), at(5, 0))));
        assert_eq!(b.intersection(&a), a.intersection(&b));
    }

    #[test]
    fn intersection_touching_is_empty() {
        let a = Period::new(at(1, 0), at(3, 0));
        let b = Period::new(at(3, 0), at(5, 0));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn day_starts_cover_every_touched_day() {
        let period = Period::new(at(2, 15), at(5, 1));
        let days: Vec<u8> = period.day_starts().map(|d| d.day().value()).collect();
        assert_eq!(days, vec![2, 3, 4, 5]);
        assert!(period
            .day_starts()
            .all(|d| d.hour().value() == 0 && d.minute().value() == 0));
    }

    #[test]
    fn day_starts_cross_into_the_next_season() {
        let start = DateTime::new(1, 1, 8, 44, 6, 0, 0).unwrap();
        let end = DateTime::new(1, 1, 9, 2, 0, 0, 0).unwrap();
        let days: Vec<(u8, u8)> = Period::new(start, end)
            .day_starts()
            .map(|d| (d.season().value(), d.day().value()))
            .collect();
        assert_eq!(days, vec![(8, 44), (8, 45), (9, 1)]);
    }

    #[test]
    fn empty_period_has_no_days() {
        assert_eq!(Period::new(at(2, 0), at(2, 0)).day_starts().count(), 0);
        assert_eq!(Period::new(at(3, 0), at(2, 0)).day_starts().count(), 0);
    }

    #[test]
    fn display() {
        let period = Period::new(at(1, 0), at(2, 0));
        assert_eq!(
            period.to_string(),
            "Syfdag, 1st of the Fox, 1 AE 00:00:00 to Mimdag, 2nd of the Fox, 1 AE 00:00:00"
        );
    }
}
