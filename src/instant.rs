// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A full instant of the Telisaran reckoning.
//!
//! [`DateTime`] holds one validated value for every level of the calendar
//! (era, year, season, day, hour, minute, second). It converts losslessly
//! to and from its **offset**, the number of whole seconds elapsed since
//! the first second of the Ancient Era. Ordering, arithmetic and
//! serialisation all go through the offset.

use qtty::Seconds;
use std::cmp::Ordering;
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::convert;
use crate::era::{Era, Year};
use crate::error::{Field, ReckoningError, ReckoningResult};
use crate::season::Season;
use crate::units::{Day, Hour, Minute};

// ═══════════════════════════════════════════════════════════════════════════
// DateTime
// ═══════════════════════════════════════════════════════════════════════════

/// A date and time on the Telisaran calendar.
///
/// The struct is `Copy` plain data: the day carries its season, the season
/// its year and the year its era, all by value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    season: Season,
    day: Day,
    hour: Hour,
    minute: Minute,
    second: u8,
}

impl DateTime {
    /// The first second of the reckoning: Black Hour on the 1st of the Fox,
    /// year 1 of the Ancient Era.
    pub const EPOCH: Self = {
        let season = Season::first_of(Year::first_of(Era::FIRST));
        Self {
            season,
            day: Day::of(1, season),
            hour: Hour::MIDNIGHT,
            minute: Minute::ZERO,
            second: 0,
        }
    };

    /// Largest offset that still maps to a valid date.
    pub const MAX_OFFSET: u64 = convert::MAX_OFFSET;

    // ── constructors ──────────────────────────────────────────────────

    /// Build a date from its components, validated from the era down.
    ///
    /// Returns the error of the first (coarsest) invalid component.
    pub fn new(
        era: u8,
        year: u32,
        season: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> ReckoningResult<Self> {
        let era = Era::new(era)?;
        let year = Year::new(year, era)?;
        let season = Season::new(season, year)?;
        let day = Day::in_season(day, season)?;
        Self::assemble(day, Hour::new(hour)?, Minute::new(minute)?, second)
    }

    /// Decompose an offset in seconds since the epoch.
    #[inline]
    pub fn from_offset(offset: u64) -> ReckoningResult<Self> {
        convert::decompose(offset)
    }

    /// Join already validated units. The day must know its season.
    pub(crate) fn assemble(
        day: Day,
        hour: Hour,
        minute: Minute,
        second: u8,
    ) -> ReckoningResult<Self> {
        let season = day
            .season()
            .ok_or(ReckoningError::MissingSeason { day: day.value() })?;
        if second > 59 {
            return Err(ReckoningError::out_of_range(Field::Second, second, 0, 59));
        }
        Ok(Self {
            season,
            day,
            hour,
            minute,
            second,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn era(&self) -> Era {
        self.season.year().era()
    }

    #[inline]
    pub const fn year(&self) -> Year {
        self.season.year()
    }

    #[inline]
    pub const fn season(&self) -> Season {
        self.season
    }

    #[inline]
    pub const fn day(&self) -> Day {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> Minute {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// `(era, year, season, day, hour, minute, second)` as plain integers.
    ///
    /// Tuples compare lexicographically, which is the calendar order.
    pub const fn components(&self) -> (u8, u32, u8, u8, u8, u8, u8) {
        (
            self.era().value(),
            self.year().value(),
            self.season.value(),
            self.day.value(),
            self.hour.value(),
            self.minute.value(),
            self.second,
        )
    }

    /// Seconds since the epoch.
    #[inline]
    pub fn offset(&self) -> u64 {
        convert::compose(self)
    }

    /// Time elapsed since the epoch.
    #[inline]
    pub fn elapsed(&self) -> Seconds {
        Seconds::new(self.offset() as f64)
    }

    // ── truncation ────────────────────────────────────────────────────

    /// Black Hour of the same day.
    pub const fn start_of_day(&self) -> Self {
        Self {
            hour: Hour::MIDNIGHT,
            minute: Minute::ZERO,
            second: 0,
            ..*self
        }
    }

    /// Black Hour of the first day of the same season.
    pub const fn start_of_season(&self) -> Self {
        Self {
            day: Day::of(1, self.season),
            ..self.start_of_day()
        }
    }

    // ── arithmetic ────────────────────────────────────────────────────

    pub fn add_seconds(&self, seconds: u64) -> ReckoningResult<Self> {
        let offset = self.offset();
        let shifted = offset
            .checked_add(seconds)
            .ok_or(ReckoningError::OffsetOverflow {
                offset: u128::from(offset) + u128::from(seconds),
            })?;
        Self::from_offset(shifted)
    }

    pub fn sub_seconds(&self, seconds: u64) -> ReckoningResult<Self> {
        let shifted = self
            .offset()
            .checked_sub(seconds)
            .ok_or(ReckoningError::BeforeEpoch)?;
        Self::from_offset(shifted)
    }

    /// Shift by a signed duration, rounded to the nearest whole second.
    ///
    /// Infinite durations saturate and fail; `NaN` leaves the date as is.
    pub fn checked_add(&self, delta: Seconds) -> ReckoningResult<Self> {
        let whole = delta.value().round();
        if whole >= 0.0 {
            self.add_seconds(whole as u64)
        } else {
            self.sub_seconds((-whole) as u64)
        }
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::EPOCH
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Ordering
// ═══════════════════════════════════════════════════════════════════════════

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset().cmp(&other.offset())
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.offset())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let offset = u64::deserialize(deserializer)?;
        Self::from_offset(offset).map_err(serde::de::Error::custom)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Sub for DateTime {
    type Output = Seconds;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let delta = i128::from(self.offset()) - i128::from(rhs.offset());
        Seconds::new(delta as f64)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
