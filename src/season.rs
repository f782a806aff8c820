// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Seasons, the irregular level of the reckoning.
//!
//! A Telisaran year holds nine seasons. The first eight are regular
//! seasons of nine spans (45 days), named after animals. The ninth is the
//! **Festival Of The Hunt**, a single five-day span that always closes the
//! year.
//!
//! | Ordinal | Season | Days |
//! |---------|--------|------|
//! | 1 | Fox | 45 |
//! | 2 | Owl | 45 |
//! | 3 | Wolf | 45 |
//! | 4 | Eagle | 45 |
//! | 5 | Shark | 45 |
//! | 6 | Lion | 45 |
//! | 7 | Raven | 45 |
//! | 8 | Bear | 45 |
//! | 9 | Festival Of The Hunt | 5 |
//!
//! Because the festival is a [`Season`] like any other, the converter only
//! ever asks a season for its length and offset and never special-cases
//! the year boundary.

use qtty::Days;
use std::fmt;

use crate::era::Year;
use crate::error::{Field, ReckoningError, ReckoningResult};
use crate::units::{CalendarUnit, Day, Span};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum Variant {
    Regular(u8),
    Festival,
}

/// One of the nine seasons of a year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Season {
    variant: Variant,
    year: Year,
}

impl Season {
    /// Names of the eight regular seasons, in order.
    pub const NAMES: [&'static str; 8] = [
        "Fox", "Owl", "Wolf", "Eagle", "Shark", "Lion", "Raven", "Bear",
    ];
    pub const FESTIVAL_NAME: &'static str = "Festival Of The Hunt";

    /// Day names of a regular span.
    pub const DAY_NAMES: [&'static str; 5] = ["Syfdag", "Mimdag", "Wodag", "Thordag", "Freydag"];
    /// Day names of the festival.
    pub const FESTIVAL_DAY_NAMES: [&'static str; 5] = [
        "Syf's Hunt",
        "Mimir's Hunt",
        "Woden's Hunt",
        "Thorus's Hunt",
        "Freya's Hunt",
    ];

    pub const REGULAR_COUNT: u8 = Self::NAMES.len() as u8;
    /// Ordinal of the festival, the last season of every year.
    pub const FESTIVAL: u8 = Self::REGULAR_COUNT + 1;

    pub const REGULAR_LENGTH_IN_SPANS: u8 = 9;
    pub const REGULAR_LENGTH_IN_DAYS: u8 = Self::REGULAR_LENGTH_IN_SPANS * Span::LENGTH_IN_DAYS;
    pub const REGULAR_LENGTH_IN_SECONDS: u64 =
        Self::REGULAR_LENGTH_IN_DAYS as u64 * Day::LENGTH_IN_SECONDS;

    pub const FESTIVAL_LENGTH_IN_SPANS: u8 = 1;
    pub const FESTIVAL_LENGTH_IN_DAYS: u8 = Self::FESTIVAL_LENGTH_IN_SPANS * Span::LENGTH_IN_DAYS;
    pub const FESTIVAL_LENGTH_IN_SECONDS: u64 =
        Self::FESTIVAL_LENGTH_IN_DAYS as u64 * Day::LENGTH_IN_SECONDS;

    /// Season `season` of `year`. Ordinal 9 is always the festival.
    pub fn new(season: u8, year: Year) -> ReckoningResult<Self> {
        match season {
            Self::FESTIVAL => Ok(Self::festival(year)),
            1..=Self::REGULAR_COUNT => Ok(Self {
                variant: Variant::Regular(season),
                year,
            }),
            _ => Err(ReckoningError::out_of_range(
                Field::Season,
                season,
                1,
                Self::FESTIVAL.into(),
            )),
        }
    }

    /// The Festival Of The Hunt of `year`.
    #[inline]
    pub const fn festival(year: Year) -> Self {
        Self {
            variant: Variant::Festival,
            year,
        }
    }

    pub(crate) const fn first_of(year: Year) -> Self {
        Self {
            variant: Variant::Regular(1),
            year,
        }
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        match self.variant {
            Variant::Regular(n) => n,
            Variant::Festival => Self::FESTIVAL,
        }
    }

    #[inline]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[inline]
    pub const fn is_festival(&self) -> bool {
        matches!(self.variant, Variant::Festival)
    }

    pub const fn name(&self) -> &'static str {
        match self.variant {
            Variant::Regular(n) => Self::NAMES[(n - 1) as usize],
            Variant::Festival => Self::FESTIVAL_NAME,
        }
    }

    pub const fn length_in_spans(&self) -> u8 {
        match self.variant {
            Variant::Regular(_) => Self::REGULAR_LENGTH_IN_SPANS,
            Variant::Festival => Self::FESTIVAL_LENGTH_IN_SPANS,
        }
    }

    pub const fn length_in_days(&self) -> u8 {
        match self.variant {
            Variant::Regular(_) => Self::REGULAR_LENGTH_IN_DAYS,
            Variant::Festival => Self::FESTIVAL_LENGTH_IN_DAYS,
        }
    }

    pub const fn length_in_seconds(&self) -> u64 {
        match self.variant {
            Variant::Regular(_) => Self::REGULAR_LENGTH_IN_SECONDS,
            Variant::Festival => Self::FESTIVAL_LENGTH_IN_SECONDS,
        }
    }

    #[inline]
    pub fn length(&self) -> Days {
        Days::new(f64::from(self.length_in_days()))
    }

    /// Name of day `day_of_season`, taken from its position in the span.
    ///
    /// Callers pass an ordinal already validated against this season; the
    /// public path is [`Day::name`].
    pub(crate) const fn day_name(&self, day_of_season: u8) -> &'static str {
        let index = (day_of_season.saturating_sub(1) % Span::LENGTH_IN_DAYS) as usize;
        match self.variant {
            Variant::Regular(_) => Self::DAY_NAMES[index],
            Variant::Festival => Self::FESTIVAL_DAY_NAMES[index],
        }
    }

    /// Day `day` of this season.
    #[inline]
    pub fn day(&self, day: u8) -> ReckoningResult<Day> {
        Day::in_season(day, *self)
    }

    /// The nine seasons of `year`: the regular ones in order, then the
    /// festival.
    pub(crate) fn all_of(year: Year) -> impl Iterator<Item = Season> {
        (1..=Self::REGULAR_COUNT)
            .map(move |n| Self {
                variant: Variant::Regular(n),
                year,
            })
            .chain(std::iter::once(Self::festival(year)))
    }

    /// Every day of the season, in order.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        let season = *self;
        (1..=season.length_in_days()).map(move |day| Day::of(day, season))
    }
}

impl CalendarUnit for Season {
    const FIELD: Field = Field::Season;

    #[inline]
    fn ordinal(&self) -> u64 {
        self.value().into()
    }

    /// Every season before this one is regular, so the offset is uniform
    /// even for the festival.
    #[inline]
    fn offset_seconds(&self) -> u64 {
        u64::from(self.value() - 1) * Self::REGULAR_LENGTH_IN_SECONDS
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Variant::Regular(_) => write!(f, "Season of the {}", self.name()),
            Variant::Festival => f.write_str(Self::FESTIVAL_NAME),
        }
    }
}
