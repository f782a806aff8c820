// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-length calendar units.
//!
//! Every level of the reckoning implements [`CalendarUnit`], which reports
//! how many seconds of the parent unit elapse before the unit starts.
//! Summing those offsets over a full date yields its position on the
//! linear time axis.
//!
//! | Unit | Ordinals | Length | Offset within parent |
//! |------|----------|--------|----------------------|
//! | [`Minute`] | 0–59 | 60 s | `n × 60 s` |
//! | [`Hour`] | 0–23 | 60 min | `n × 3 600 s` |
//! | [`Day`] | 1–45 (1–5 in the Festival) | 24 h | `(n − 1) × 86 400 s` |
//! | [`Span`] | 1–9 | 5 days | `(n − 1) × 432 000 s` |
//!
//! Hours and minutes count from zero while every coarser unit counts from
//! one; the offsets above follow that convention.

use qtty::Seconds;
use std::borrow::Cow;
use std::fmt;

use crate::error::{Field, ReckoningError, ReckoningResult};
use crate::format::ordinal_suffix;
use crate::instant::DateTime;
use crate::season::Season;

// ═══════════════════════════════════════════════════════════════════════════
// CalendarUnit trait
// ═══════════════════════════════════════════════════════════════════════════

/// A level of the calendar hierarchy.
pub trait CalendarUnit: Copy + fmt::Debug + PartialEq + 'static {
    /// Which field of a date this unit fills.
    const FIELD: Field;

    /// Position of the unit within its parent.
    fn ordinal(&self) -> u64;

    /// Seconds of the parent that elapse before this unit starts.
    fn offset_seconds(&self) -> u64;

    /// [`offset_seconds`](Self::offset_seconds) as a typed quantity.
    #[inline]
    fn offset(&self) -> Seconds {
        Seconds::new(self.offset_seconds() as f64)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Minute
// ═══════════════════════════════════════════════════════════════════════════

/// One minute of the Telisaran clock (0–59).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minute(u8);

impl Minute {
    pub const LENGTH_IN_SECONDS: u64 = 60;
    pub const MAX: u8 = 59;
    pub const ZERO: Self = Self(0);

    pub fn new(minute: u8) -> ReckoningResult<Self> {
        if minute > Self::MAX {
            return Err(ReckoningError::out_of_range(
                Field::Minute,
                minute,
                0,
                Self::MAX.into(),
            ));
        }
        Ok(Self(minute))
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl CalendarUnit for Minute {
    const FIELD: Field = Field::Minute;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.0.into()
    }

    #[inline]
    fn offset_seconds(&self) -> u64 {
        u64::from(self.0) * Self::LENGTH_IN_SECONDS
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Hour
// ═══════════════════════════════════════════════════════════════════════════

/// One hour of the Telisaran clock (0–23).
///
/// The four watch hours carry names; every other hour is called by its
/// ordinal ("3rd hour").
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    pub const LENGTH_IN_SECONDS: u64 = 60 * Minute::LENGTH_IN_SECONDS;
    pub const MAX: u8 = 23;
    pub const MIDNIGHT: Self = Self(0);

    /// Named watch hours.
    pub const WATCHES: [(u8, &'static str); 4] = [
        (0, "Black Hour"),
        (6, "Soul's Hour"),
        (12, "Sun's Hour"),
        (18, "Grey Hour"),
    ];

    pub fn new(hour: u8) -> ReckoningResult<Self> {
        if hour > Self::MAX {
            return Err(ReckoningError::out_of_range(
                Field::Hour,
                hour,
                0,
                Self::MAX.into(),
            ));
        }
        Ok(Self(hour))
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The watch name, if this hour has one.
    pub fn watch(&self) -> Option<&'static str> {
        Self::WATCHES
            .iter()
            .find(|(hour, _)| *hour == self.0)
            .map(|(_, name)| *name)
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self.watch() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("{}{} hour", self.0, ordinal_suffix(self.0.into()))),
        }
    }
}

impl CalendarUnit for Hour {
    const FIELD: Field = Field::Hour;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.0.into()
    }

    #[inline]
    fn offset_seconds(&self) -> u64 {
        u64::from(self.0) * Self::LENGTH_IN_SECONDS
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Span
// ═══════════════════════════════════════════════════════════════════════════

/// A five-day "week" within a season.
///
/// Spans exist for display only; a [`Day`] derives its span from its
/// ordinal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span(u8);

impl Span {
    pub const LENGTH_IN_DAYS: u8 = 5;
    pub const LENGTH_IN_SECONDS: u64 = Self::LENGTH_IN_DAYS as u64 * Day::LENGTH_IN_SECONDS;

    pub fn new(span: u8) -> ReckoningResult<Self> {
        let max = Season::REGULAR_LENGTH_IN_SPANS;
        if !(1..=max).contains(&span) {
            return Err(ReckoningError::out_of_range(
                Field::Span,
                span,
                1,
                max.into(),
            ));
        }
        Ok(Self(span))
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl CalendarUnit for Span {
    const FIELD: Field = Field::Span;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.0.into()
    }

    #[inline]
    fn offset_seconds(&self) -> u64 {
        u64::from(self.0 - 1) * Self::LENGTH_IN_SECONDS
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Day
// ═══════════════════════════════════════════════════════════════════════════

/// A day of a season.
///
/// A day built with [`Day::in_season`] knows its season and is validated
/// against that season's length. A detached day ([`Day::new`]) is only
/// checked against the longest season; asking it for anything that needs
/// the season fails with [`ReckoningError::MissingSeason`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Day {
    ordinal: u8,
    season: Option<Season>,
}

impl Day {
    pub const LENGTH_IN_SECONDS: u64 = 24 * Hour::LENGTH_IN_SECONDS;

    /// A day with no season attached.
    pub fn new(day: u8) -> ReckoningResult<Self> {
        let max = Season::REGULAR_LENGTH_IN_DAYS;
        if !(1..=max).contains(&day) {
            return Err(ReckoningError::out_of_range(Field::Day, day, 1, max.into()));
        }
        Ok(Self {
            ordinal: day,
            season: None,
        })
    }

    /// A day of `season`, validated against that season's own length.
    pub fn in_season(day: u8, season: Season) -> ReckoningResult<Self> {
        if day == 0 {
            return Err(ReckoningError::out_of_range(
                Field::Day,
                day,
                1,
                season.length_in_days().into(),
            ));
        }
        if day > season.length_in_days() {
            let err = ReckoningError::DayOutsideSeason {
                day,
                season: season.name(),
                length: season.length_in_days(),
            };
            tracing::debug!(%err, "rejected calendar component");
            return Err(err);
        }
        Ok(Self::of(day, season))
    }

    /// Attach `season` to this day.
    pub fn with_season(self, season: Season) -> ReckoningResult<Self> {
        Self::in_season(self.ordinal, season)
    }

    pub(crate) const fn of(day: u8, season: Season) -> Self {
        Self {
            ordinal: day,
            season: Some(season),
        }
    }

    /// Day of the season, starting at 1.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.ordinal
    }

    #[inline]
    pub const fn season(&self) -> Option<Season> {
        self.season
    }

    /// The span this day falls in.
    #[inline]
    pub const fn span(&self) -> Span {
        Span((self.ordinal - 1) / Span::LENGTH_IN_DAYS + 1)
    }

    /// Position of the day within its span (1–5).
    #[inline]
    pub const fn day_of_span(&self) -> u8 {
        (self.ordinal - 1) % Span::LENGTH_IN_DAYS + 1
    }

    pub fn name(&self) -> ReckoningResult<&'static str> {
        Ok(self.require_season()?.day_name(self.ordinal))
    }

    /// Midnight at the start of this day.
    pub fn to_datetime(&self) -> ReckoningResult<DateTime> {
        self.require_season()?;
        DateTime::assemble(*self, Hour::MIDNIGHT, Minute::ZERO, 0)
    }

    fn require_season(&self) -> ReckoningResult<Season> {
        self.season
            .ok_or(ReckoningError::MissingSeason { day: self.ordinal })
    }
}

impl CalendarUnit for Day {
    const FIELD: Field = Field::Day;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.ordinal.into()
    }

    #[inline]
    fn offset_seconds(&self) -> u64 {
        u64::from(self.ordinal - 1) * Self::LENGTH_IN_SECONDS
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal)
    }
}
