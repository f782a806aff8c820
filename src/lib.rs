// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Telisaran Reckoning
//!
//! This crate converts between a count of elapsed seconds and the Telisaran
//! calendar, losslessly in both directions.
//!
//! # Core types
//!
//! - [`DateTime`] — a validated instant (era, year, season, day, hour,
//!   minute, second).
//! - [`CalendarUnit`] — trait implemented by every level of the hierarchy;
//!   reports the unit's offset within its parent.
//! - [`Era`], [`Year`], [`Season`], [`Span`], [`Day`], [`Hour`], [`Minute`]
//!   — the levels themselves.
//! - [`Period`] — a half-open interval between two instants.
//! - [`Calendar`] — a "today" with a period of interest and a season grid.
//!
//! # The hierarchy
//!
//! | Level | Per parent | Counts from | Length |
//! |-------|-----------|-------------|--------|
//! | [`Era`] | 3 | 1 | 20 000 / 10 000 / unbounded years |
//! | [`Year`] | per era | 1 | 365 days |
//! | [`Season`] | 9 | 1 | 45 days; the festival 5 |
//! | [`Span`] | 9 (1 in the festival) | 1 | 5 days |
//! | [`Day`] | 45 (5 in the festival) | 1 | 24 hours |
//! | [`Hour`] | 24 | 0 | 60 minutes |
//! | [`Minute`] | 60 | 0 | 60 seconds |
//!
//! # Conversion
//!
//! [`compose`] turns a [`DateTime`] into its offset; [`decompose`] turns an
//! offset back into a [`DateTime`]. For every valid date `d`,
//! `decompose(compose(&d)) == d`, and for every offset up to
//! [`MAX_OFFSET`], `compose(&decompose(s)?) == s`.
//!
//! ```rust
//! use telisaran::DateTime;
//!
//! let dt = DateTime::new(3, 3206, 8, 11, 6, 30, 0).unwrap();
//! assert_eq!(DateTime::from_offset(dt.offset()).unwrap(), dt);
//! assert_eq!(dt.to_string(), "Syfdag, 11th of the Bear, 3206 ME 06:30:00");
//! ```

mod calendar;
mod convert;
mod era;
mod error;
mod format;
pub(crate) mod instant;
mod period;
mod season;
pub(crate) mod units;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{Calendar, SeasonGrid, CAMPAIGN_TODAY};
pub use convert::{compose, decompose, MAX_OFFSET};
pub use era::{Era, EraSpec, Year, ERAS};
pub use error::{Field, ReckoningError, ReckoningResult};
pub use format::ordinal_suffix;
pub use instant::DateTime;
pub use period::{DayStarts, Period};
pub use season::Season;
pub use units::{CalendarUnit, Day, Hour, Minute, Span};
