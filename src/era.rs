// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Eras and years.
//!
//! # The reckoning table
//!
//! | Era | Name | Abbr. | Last year | Starts after |
//! |-----|------|-------|-----------|--------------|
//! | 1 | Ancient Era | AE | 20 000 | — |
//! | 2 | Old Era | OE | 10 000 | 20 000 years |
//! | 3 | Modern Era | ME | — | 30 000 years |
//!
//! Eras differ in length, so the era level is laid out on the time axis the
//! same way seasons are laid out within a year: each era starts where the
//! previous one ends. Only the last era may be open-ended.

use qtty::Days;
use std::fmt;

use crate::error::{Field, ReckoningError, ReckoningResult};
use crate::season::Season;
use crate::units::{CalendarUnit, Day};

/// Static description of an era.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EraSpec {
    pub long_name: &'static str,
    pub short_name: &'static str,
    /// Last year of the era, or `None` for the current, open-ended era.
    pub last_year: Option<u32>,
}

/// The canonical Telisaran eras, oldest first.
pub const ERAS: [EraSpec; 3] = [
    EraSpec {
        long_name: "Ancient Era",
        short_name: "AE",
        last_year: Some(20_000),
    },
    EraSpec {
        long_name: "Old Era",
        short_name: "OE",
        last_year: Some(10_000),
    },
    EraSpec {
        long_name: "Modern Era",
        short_name: "ME",
        last_year: None,
    },
];

/// Offset at which each era starts.
const ERA_STARTS: [u64; ERAS.len()] = era_starts();

const fn era_starts() -> [u64; ERAS.len()] {
    let mut starts = [0; ERAS.len()];
    let mut i = 1;
    while i < ERAS.len() {
        starts[i] = starts[i - 1]
            + match ERAS[i - 1].last_year {
                Some(last) => last as u64 * Year::LENGTH_IN_SECONDS,
                None => panic!("only the last era may be open-ended"),
            };
        i += 1;
    }
    starts
}

// ═══════════════════════════════════════════════════════════════════════════
// Era
// ═══════════════════════════════════════════════════════════════════════════

/// An age of years.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Era(u8);

impl Era {
    pub const COUNT: u8 = ERAS.len() as u8;
    pub const FIRST: Self = Self(1);
    pub const CURRENT: Self = Self(Self::COUNT);

    pub fn new(era: u8) -> ReckoningResult<Self> {
        if !(1..=Self::COUNT).contains(&era) {
            return Err(ReckoningError::out_of_range(
                Field::Era,
                era,
                1,
                Self::COUNT.into(),
            ));
        }
        Ok(Self(era))
    }

    /// Every era, oldest first.
    pub fn all() -> impl Iterator<Item = Era> {
        (1..=Self::COUNT).map(Self)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn spec(&self) -> EraSpec {
        ERAS[(self.0 - 1) as usize]
    }

    #[inline]
    pub const fn long_name(&self) -> &'static str {
        self.spec().long_name
    }

    #[inline]
    pub const fn short_name(&self) -> &'static str {
        self.spec().short_name
    }

    #[inline]
    pub const fn last_year(&self) -> Option<u32> {
        self.spec().last_year
    }

    /// Length of a bounded era in seconds; `None` for the open-ended era.
    pub const fn length_in_seconds(&self) -> Option<u64> {
        match self.last_year() {
            Some(last) => Some(last as u64 * Year::LENGTH_IN_SECONDS),
            None => None,
        }
    }

    /// Offset of the first second of the era.
    #[inline]
    pub const fn start_seconds(&self) -> u64 {
        ERA_STARTS[(self.0 - 1) as usize]
    }

    /// Find the era containing `offset`, returning it together with the
    /// seconds elapsed since that era began.
    pub(crate) fn locate(offset: u64) -> (Era, u64) {
        let mut era = Self::FIRST;
        for candidate in Self::all() {
            era = candidate;
            match candidate.length_in_seconds() {
                Some(length) if offset >= candidate.offset_seconds() + length => continue,
                _ => break,
            }
        }
        (era, offset - era.offset_seconds())
    }
}

impl CalendarUnit for Era {
    const FIELD: Field = Field::Era;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.0.into()
    }

    #[inline]
    fn offset_seconds(&self) -> u64 {
        self.start_seconds()
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Year
// ═══════════════════════════════════════════════════════════════════════════

/// A year within an era.
///
/// Every year has the same shape: eight regular seasons followed by the
/// festival, 365 days in all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Year {
    number: u32,
    era: Era,
}

impl Year {
    pub const LENGTH_IN_SEASONS: u8 = Season::FESTIVAL;
    pub const LENGTH_IN_SPANS: u16 = Season::REGULAR_COUNT as u16
        * Season::REGULAR_LENGTH_IN_SPANS as u16
        + Season::FESTIVAL_LENGTH_IN_SPANS as u16;
    pub const LENGTH_IN_DAYS: u16 = Season::REGULAR_COUNT as u16
        * Season::REGULAR_LENGTH_IN_DAYS as u16
        + Season::FESTIVAL_LENGTH_IN_DAYS as u16;
    pub const LENGTH_IN_SECONDS: u64 = Self::LENGTH_IN_DAYS as u64 * Day::LENGTH_IN_SECONDS;

    pub fn new(year: u32, era: Era) -> ReckoningResult<Self> {
        if year == 0 {
            return Err(ReckoningError::out_of_range(
                Field::Year,
                year,
                1,
                era.last_year().unwrap_or(u32::MAX).into(),
            ));
        }
        if let Some(end) = era.last_year() {
            if year > end {
                let err = ReckoningError::EraEnded {
                    era: era.long_name(),
                    end,
                    year,
                };
                tracing::debug!(%err, "rejected calendar component");
                return Err(err);
            }
        }
        Ok(Self { number: year, era })
    }

    pub(crate) const fn first_of(era: Era) -> Self {
        Self { number: 1, era }
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.number
    }

    #[inline]
    pub const fn era(&self) -> Era {
        self.era
    }

    #[inline]
    pub fn length(&self) -> Days {
        Days::new(f64::from(Self::LENGTH_IN_DAYS))
    }

    /// Season `season` of this year.
    #[inline]
    pub fn season(&self, season: u8) -> ReckoningResult<Season> {
        Season::new(season, *self)
    }

    #[inline]
    pub const fn festival(&self) -> Season {
        Season::festival(*self)
    }

    /// The nine seasons of the year, the festival last.
    pub fn seasons(&self) -> impl Iterator<Item = Season> {
        Season::all_of(*self)
    }

    /// Find the season containing `offset` seconds into this year,
    /// returning it with the seconds elapsed since the season began.
    ///
    /// Seasons differ in length, so this walks the year's seasons instead
    /// of dividing by a single season length.
    pub(crate) fn locate_season(&self, offset: u64) -> (Season, u64) {
        let mut season = Season::first_of(*self);
        for candidate in self.seasons() {
            season = candidate;
            if offset < candidate.offset_seconds() + candidate.length_in_seconds() {
                break;
            }
        }
        (season, offset - season.offset_seconds())
    }
}

impl CalendarUnit for Year {
    const FIELD: Field = Field::Year;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.number.into()
    }

    #[inline]
    fn offset_seconds(&self) -> u64 {
        u64::from(self.number - 1) * Self::LENGTH_IN_SECONDS
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
