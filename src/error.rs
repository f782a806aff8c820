// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the Telisaran reckoning.

use std::fmt;
use thiserror::Error;

/// The calendar level an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Era,
    Year,
    Season,
    Span,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Era => "era",
            Field::Year => "year",
            Field::Season => "season",
            Field::Span => "span",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        };
        f.write_str(name)
    }
}

/// Everything that can go wrong while building or converting a date.
///
/// Validation is eager: each variant is produced by the constructor of the
/// offending component, never deferred to composition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReckoningError {
    #[error("{field} {value} must be between {min} and {max}")]
    OutOfRange {
        field: Field,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("the {era} ended in {end}; year {year} never happened")]
    EraEnded {
        era: &'static str,
        end: u32,
        year: u32,
    },

    #[error("day {day} does not fall within {season}, which lasts {length} days")]
    DayOutsideSeason {
        day: u8,
        season: &'static str,
        length: u8,
    },

    #[error("day {day} has no season; assign one before asking for its name or date")]
    MissingSeason { day: u8 },

    #[error("mortals cannot go back before the beginning of time")]
    BeforeEpoch,

    #[error("offset {offset} s lies beyond the last representable instant")]
    OffsetOverflow { offset: u128 },
}

impl ReckoningError {
    pub(crate) fn out_of_range(field: Field, value: impl Into<u64>, min: u64, max: u64) -> Self {
        let err = ReckoningError::OutOfRange {
            field,
            value: value.into(),
            min,
            max,
        };
        tracing::debug!(%err, "rejected calendar component");
        err
    }
}

/// Result type for reckoning operations.
pub type ReckoningResult<T> = std::result::Result<T, ReckoningError>;
