// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Human-readable renderings of a [`DateTime`].
//!
//! | Method | Example (the epoch) |
//! |--------|---------------------|
//! | [`time`](DateTime::time) | `00:00:00` |
//! | [`time_long`](DateTime::time_long) | `Black Hour` |
//! | [`numeric`](DateTime::numeric) | `1.1.1.01.00.00.00` |
//! | [`date`](DateTime::date) | `S1F` |
//! | [`short`](DateTime::short) | `Syfdag, 1st of the Fox, 1 AE 00:00:00` |
//! | [`long`](DateTime::long) | `Black Hour on Syfdag, the 1st day of the Season of the Fox (...)` |
//!
//! `Display` for [`DateTime`] uses the short form.

use std::fmt;

use crate::instant::DateTime;

/// English ordinal suffix for `n`: `st`, `nd`, `rd` or `th`.
///
/// ```rust
/// use telisaran::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(22), "nd");
/// ```
pub fn ordinal_suffix(n: u64) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Upper-cased first letter of a name table entry.
fn initial(name: &str) -> char {
    name.chars().next().map_or(' ', |c| c.to_ascii_uppercase())
}

impl DateTime {
    /// Name of the day, e.g. `Syfdag` or `Freya's Hunt`.
    #[inline]
    pub fn day_name(&self) -> &'static str {
        self.season().day_name(self.day().value())
    }

    /// `HH:MM:SS`.
    pub fn time(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.hour().value(),
            self.minute().value(),
            self.second()
        )
    }

    /// The time in words: `"30 past Sun's Hour"`, or the bare hour name on
    /// the hour.
    pub fn time_long(&self) -> String {
        match self.minute().value() {
            0 => self.hour().name().into_owned(),
            minute => format!("{minute} past {}", self.hour().name()),
        }
    }

    /// `era.year.season.DD.HH.MM.SS`.
    pub fn numeric(&self) -> String {
        format!(
            "{}.{}.{}.{:02}.{:02}.{:02}.{:02}",
            self.era().value(),
            self.year().value(),
            self.season().value(),
            self.day().value(),
            self.hour().value(),
            self.minute().value(),
            self.second()
        )
    }

    /// Compact date code: day initial, day of season, season initial.
    ///
    /// The festival is marked with `H` (for "Hunt").
    pub fn date(&self) -> String {
        let season = if self.season().is_festival() {
            'H'
        } else {
            initial(self.season().name())
        };
        format!("{}{}{}", initial(self.day_name()), self.day().value(), season)
    }

    pub fn short(&self) -> String {
        let day = self.day().value();
        format!(
            "{}, {}{} of the {}, {} {} {}",
            self.day_name(),
            day,
            ordinal_suffix(day.into()),
            self.season().name(),
            self.year().value(),
            self.era().short_name(),
            self.time()
        )
    }

    /// The date spelled out in full. Regular seasons also name the span.
    pub fn long(&self) -> String {
        let day = self.day();
        let head = format!(
            "{} on {}, the {}{} day of the {}",
            self.time_long(),
            self.day_name(),
            day.value(),
            ordinal_suffix(day.value().into()),
            self.season()
        );
        let tail = format!(
            "in the year {} of the {}",
            self.year().value(),
            self.era().long_name()
        );
        if self.season().is_festival() {
            return format!("{head}, {tail}");
        }
        let (span_day, span) = (day.day_of_span(), day.span().value());
        format!(
            "{head} (the {span_day}{} day of the {span}{} span) {tail}",
            ordinal_suffix(span_day.into()),
            ordinal_suffix(span.into())
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}
