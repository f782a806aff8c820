// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A calendar view anchored on "today".
//!
//! [`Calendar`] keeps a current date and a period of interest, steps a day
//! at a time and renders the season the period starts in as a grid of
//! spans:
//!
//! ```text
//!      BEAR
//! Sy Mi Wo Th Fr
//! 01 02 03 04 05
//! 06 07 08 09 10
//! ...
//! ```

use std::fmt;

use crate::error::{ReckoningError, ReckoningResult};
use crate::instant::DateTime;
use crate::period::Period;
use crate::season::Season;
use crate::units::{Day, Span};

/// Era, year, season and day of the running campaign's "today".
pub const CAMPAIGN_TODAY: (u8, u32, u8, u8) = (3, 3206, 8, 11);

/// A current date together with a period of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    today: DateTime,
    period: Period,
}

impl Calendar {
    /// A calendar whose period runs from the first day of `today`'s season
    /// up to `today`.
    pub fn new(today: DateTime) -> Self {
        Self {
            today,
            period: Period::new(today.start_of_season(), today),
        }
    }

    /// A calendar on Black Hour of [`CAMPAIGN_TODAY`].
    pub fn campaign() -> ReckoningResult<Self> {
        let (era, year, season, day) = CAMPAIGN_TODAY;
        Ok(Self::new(DateTime::new(era, year, season, day, 0, 0, 0)?))
    }

    pub fn with_period(today: DateTime, period: Period) -> Self {
        Self { today, period }
    }

    #[inline]
    pub fn today(&self) -> DateTime {
        self.today
    }

    #[inline]
    pub fn period(&self) -> Period {
        self.period
    }

    /// The same time one day earlier.
    ///
    /// Fails with [`ReckoningError::BeforeEpoch`] on the first day.
    pub fn yesterday(&self) -> ReckoningResult<DateTime> {
        let yesterday = self.today.sub_seconds(Day::LENGTH_IN_SECONDS);
        if let Err(ReckoningError::BeforeEpoch) = yesterday {
            tracing::debug!(today = %self.today, "no day before the first day");
        }
        yesterday
    }

    /// The same time one day later.
    pub fn tomorrow(&self) -> ReckoningResult<DateTime> {
        self.today.add_seconds(Day::LENGTH_IN_SECONDS)
    }

    /// Grid of the season the period starts in.
    pub fn season_grid(&self) -> SeasonGrid {
        SeasonGrid {
            season: self.period.start.season(),
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DateTime::EPOCH)
    }
}

/// The days of a season laid out one span per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonGrid {
    season: Season,
}

impl SeasonGrid {
    pub fn new(season: Season) -> Self {
        Self { season }
    }

    #[inline]
    pub fn season(&self) -> Season {
        self.season
    }

    /// Day numbers grouped by span.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        let days: Vec<u8> = self.season.days().map(|day| day.value()).collect();
        days.chunks(Span::LENGTH_IN_DAYS as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }
}

impl fmt::Display for SeasonGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:^14}", self.season.name().to_uppercase())?;

        let header: Vec<&str> = (1..=Span::LENGTH_IN_DAYS)
            .map(|day| {
                let name = self.season.day_name(day);
                name.get(..2).unwrap_or(name)
            })
            .collect();
        writeln!(f, "{}", header.join(" "))?;

        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|day| format!("{day:02}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
