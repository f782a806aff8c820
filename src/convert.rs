// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Offset ↔ calendar conversion
//!
//! **Compose** sums the offset of every level within its parent:
//!
//! ```text
//! offset = era + year + season + day + hour + minute + second
//! ```
//!
//! **Decompose** walks the hierarchy from the coarsest level down, each step
//! keeping only the remainder for the next one. Years, days, hours and
//! minutes have a single length and are found by division. Eras and seasons
//! do not: the era table mixes lengths and the festival is shorter than a
//! regular season, so those two levels are found by walking their
//! cumulative offsets.
//!
//! ## Quick Example
//! ```rust
//! use telisaran::{compose, decompose, Season};
//!
//! let festival = decompose(8 * Season::REGULAR_LENGTH_IN_SECONDS).unwrap();
//! assert!(festival.season().is_festival());
//! assert_eq!(festival.day().value(), 1);
//! assert_eq!(compose(&festival), 8 * Season::REGULAR_LENGTH_IN_SECONDS);
//! ```

use crate::era::{Era, Year};
use crate::error::{ReckoningError, ReckoningResult};
use crate::instant::DateTime;
use crate::units::{CalendarUnit, Day, Hour, Minute};

/// Last second of year `u32::MAX` of the open-ended era.
pub const MAX_OFFSET: u64 =
    Era::CURRENT.start_seconds() + u32::MAX as u64 * Year::LENGTH_IN_SECONDS - 1;

/// Seconds since the epoch for `datetime`.
pub fn compose(datetime: &DateTime) -> u64 {
    datetime.era().offset_seconds()
        + datetime.year().offset_seconds()
        + datetime.season().offset_seconds()
        + datetime.day().offset_seconds()
        + datetime.hour().offset_seconds()
        + datetime.minute().offset_seconds()
        + u64::from(datetime.second())
}

/// The date `offset` seconds after the epoch.
///
/// Fails with [`ReckoningError::OffsetOverflow`] past [`MAX_OFFSET`].
pub fn decompose(offset: u64) -> ReckoningResult<DateTime> {
    if offset > MAX_OFFSET {
        return Err(ReckoningError::OffsetOverflow {
            offset: offset.into(),
        });
    }

    let (era, remaining) = Era::locate(offset);

    let (year_index, remaining) = split(remaining, Year::LENGTH_IN_SECONDS);
    let year = u32::try_from(year_index + 1)
        .map_err(|_| ReckoningError::OffsetOverflow {
            offset: offset.into(),
        })
        .and_then(|year| Year::new(year, era))?;

    let (season, remaining) = year.locate_season(remaining);

    // Each remainder is below its unit's parent length, so the narrowing
    // casts below cannot truncate.
    let (day_index, remaining) = split(remaining, Day::LENGTH_IN_SECONDS);
    let (hour, remaining) = split(remaining, Hour::LENGTH_IN_SECONDS);
    let (minute, second) = split(remaining, Minute::LENGTH_IN_SECONDS);

    let datetime = DateTime::assemble(
        Day::in_season(day_index as u8 + 1, season)?,
        Hour::new(hour as u8)?,
        Minute::new(minute as u8)?,
        second as u8,
    )?;
    tracing::trace!(offset, components = ?datetime.components(), "decomposed offset");
    Ok(datetime)
}

/// Whole units of `length` in `remaining`, and what is left over.
#[inline]
fn split(remaining: u64, length: u64) -> (u64, u64) {
    let index = remaining / length;
    (index, remaining - index * length)
}
