use proptest::prelude::*;
use qtty::Seconds;
use telisaran::{
    compose, decompose, Calendar, DateTime, Era, Field, Period, ReckoningError, Season, Year,
    MAX_OFFSET,
};

const DAY: u64 = 86_400;
const YEAR: u64 = 365 * DAY;

#[test]
fn epoch_and_first_seconds() {
    assert_eq!(decompose(0).unwrap(), DateTime::EPOCH);
    assert_eq!(decompose(59).unwrap().components(), (1, 1, 1, 1, 0, 0, 59));
    assert_eq!(decompose(60).unwrap().components(), (1, 1, 1, 1, 0, 1, 0));
    assert_eq!(decompose(3_600).unwrap().components(), (1, 1, 1, 1, 1, 0, 0));
    assert_eq!(decompose(DAY).unwrap().components(), (1, 1, 1, 2, 0, 0, 0));
}

#[test]
fn festival_closes_every_year() {
    let festival_start = 8 * 45 * DAY;
    let first = decompose(festival_start).unwrap();
    assert_eq!(first.components(), (1, 1, 9, 1, 0, 0, 0));
    assert_eq!(first.day_name(), "Syf's Hunt");

    let bear_end = decompose(festival_start - 1).unwrap();
    assert_eq!(bear_end.components(), (1, 1, 8, 45, 23, 59, 59));

    let last = decompose(YEAR - 1).unwrap();
    assert_eq!(last.components(), (1, 1, 9, 5, 23, 59, 59));
    assert_eq!(last.day_name(), "Freya's Hunt");
}

#[test]
fn eras_follow_each_other() {
    assert_eq!(
        decompose(20_000 * YEAR).unwrap().components(),
        (2, 1, 1, 1, 0, 0, 0)
    );
    assert_eq!(
        decompose(30_000 * YEAR).unwrap().components(),
        (3, 1, 1, 1, 0, 0, 0)
    );
    assert_eq!(Era::new(2).unwrap().short_name(), "OE");
}

#[test]
fn era_bounds_are_enforced() {
    assert!(matches!(
        Year::new(20_001, Era::FIRST),
        Err(ReckoningError::EraEnded { end: 20_000, .. })
    ));
    assert!(matches!(
        DateTime::new(2, 10_001, 1, 1, 0, 0, 0),
        Err(ReckoningError::EraEnded { end: 10_000, .. })
    ));
    assert!(DateTime::new(3, 1_000_000, 1, 1, 0, 0, 0).is_ok());
    assert!(matches!(
        DateTime::new(4, 1, 1, 1, 0, 0, 0),
        Err(ReckoningError::OutOfRange {
            field: Field::Era,
            ..
        })
    ));
}

#[test]
fn festival_has_five_days() {
    assert!(DateTime::new(1, 1, 9, 5, 0, 0, 0).is_ok());
    assert!(matches!(
        DateTime::new(1, 1, 9, 6, 0, 0, 0),
        Err(ReckoningError::DayOutsideSeason { length: 5, .. })
    ));
    assert!(DateTime::new(1, 1, 8, 45, 0, 0, 0).is_ok());
    assert!(DateTime::new(1, 1, 8, 46, 0, 0, 0).is_err());
    assert!(DateTime::new(1, 1, 10, 1, 0, 0, 0).is_err());
}

#[test]
fn campaign_date_roundtrips_and_renders() {
    let dt = DateTime::new(3, 3206, 8, 11, 18, 45, 30).unwrap();
    let offset = dt.offset();
    let expected = 30_000 * YEAR + 3_205 * YEAR + 7 * 45 * DAY + 10 * DAY + 18 * 3_600 + 45 * 60 + 30;
    assert_eq!(offset, expected);
    assert_eq!(decompose(offset).unwrap(), dt);
    assert_eq!(dt.numeric(), "3.3206.8.11.18.45.30");
    assert_eq!(
        dt.long(),
        "45 past Grey Hour on Syfdag, the 11th day of the Season of the Bear \
         (the 1st day of the 3rd span) in the year 3206 of the Modern Era"
    );
}

#[test]
fn overflow_is_reported() {
    assert!(decompose(MAX_OFFSET).is_ok());
    assert!(matches!(
        decompose(MAX_OFFSET + 1),
        Err(ReckoningError::OffsetOverflow { .. })
    ));
    assert!(matches!(
        decompose(u64::MAX),
        Err(ReckoningError::OffsetOverflow { .. })
    ));
}

#[test]
fn arithmetic_with_quantities() {
    let start = DateTime::new(1, 1, 1, 45, 23, 0, 0).unwrap();
    let later = start.checked_add(Seconds::new(3_600.0)).unwrap();
    assert_eq!(later.components(), (1, 1, 2, 1, 0, 0, 0));
    assert_eq!(later - start, Seconds::new(3_600.0));
    assert_eq!(
        start.checked_add(Seconds::new(f64::NAN)).unwrap(),
        start
    );
    assert!(start.checked_add(Seconds::new(f64::INFINITY)).is_err());
}

#[test]
fn calendar_steps_across_the_year_boundary() {
    let today = DateTime::new(1, 7, 9, 5, 12, 0, 0).unwrap();
    let calendar = Calendar::new(today);
    assert_eq!(
        calendar.tomorrow().unwrap().components(),
        (1, 8, 1, 1, 12, 0, 0)
    );
    assert_eq!(calendar.period().start.components(), (1, 7, 9, 1, 0, 0, 0));
    assert_eq!(calendar.season_grid().rows(), vec![vec![1, 2, 3, 4, 5]]);
}

#[test]
fn calendar_period_overlaps_and_days() {
    let at = |day: u8| DateTime::new(1, 1, 1, day, 0, 0, 0).unwrap();
    let calendar = Calendar::new(DateTime::new(1, 1, 1, 6, 12, 0, 0).unwrap());
    let period = calendar.period();
    assert_eq!(period.day_starts().count(), 6);
    assert!(period.contains(&at(6)));
    assert!(!period.contains(&calendar.today()));

    let week = Period::new(at(4), at(9));
    let overlap = period.intersection(&week).unwrap();
    assert_eq!(overlap, Period::new(at(4), calendar.today()));
    assert_eq!(overlap.duration(), Seconds::new(2.5 * DAY as f64));
    assert_eq!(period.intersection(&Period::new(at(7), at(9))), None);
}

#[test]
fn every_season_starts_where_the_previous_ends() {
    let year = Year::new(12, Era::new(2).unwrap()).unwrap();
    let mut previous_end: Option<u64> = None;
    for season in year.seasons() {
        let start = DateTime::new(2, 12, season.value(), 1, 0, 0, 0).unwrap().offset();
        if let Some(end) = previous_end {
            assert_eq!(start, end);
        }
        previous_end = Some(start + season.length_in_seconds());
    }
    assert_eq!(
        previous_end,
        Some(DateTime::new(2, 13, 1, 1, 0, 0, 0).unwrap().offset())
    );
    assert_eq!(year.seasons().count(), Season::FESTIVAL as usize);
}

// ── Property tests ────────────────────────────────────────────────────────

/// Offsets across the whole axis, with half the draws inside the bounded
/// eras so the era changeovers get exercised.
fn offsets() -> impl Strategy<Value = u64> {
    prop_oneof![0..30_000 * YEAR, 0..=MAX_OFFSET]
}

fn valid_components() -> impl Strategy<Value = (u8, u32, u8, u8, u8, u8, u8)> {
    (1u8..=3, any::<u32>(), 1u8..=9, 1u8..=45, 0u8..24, 0u8..60, 0u8..60).prop_map(
        |(era, year, season, day, hour, minute, second)| {
            let year = match era {
                1 => year % 20_000 + 1,
                2 => year % 10_000 + 1,
                _ => year.max(1),
            };
            let day = if season == 9 { (day - 1) % 5 + 1 } else { day };
            (era, year, season, day, hour, minute, second)
        },
    )
}

proptest! {
    #[test]
    fn prop_offset_roundtrip(offset in offsets()) {
        let dt = decompose(offset).unwrap();
        prop_assert_eq!(compose(&dt), offset);
    }

    #[test]
    fn prop_components_roundtrip(c in valid_components()) {
        let dt = DateTime::new(c.0, c.1, c.2, c.3, c.4, c.5, c.6).unwrap();
        prop_assert_eq!(dt.components(), c);
        prop_assert_eq!(decompose(dt.offset()).unwrap(), dt);
    }

    #[test]
    fn prop_calendar_order_matches_offset_order(a in valid_components(), b in valid_components()) {
        let da = DateTime::new(a.0, a.1, a.2, a.3, a.4, a.5, a.6).unwrap();
        let db = DateTime::new(b.0, b.1, b.2, b.3, b.4, b.5, b.6).unwrap();
        prop_assert_eq!(a.cmp(&b), da.offset().cmp(&db.offset()));
    }

    #[test]
    fn prop_next_second_is_one_later(offset in offsets()) {
        prop_assume!(offset < MAX_OFFSET);
        let dt = decompose(offset).unwrap();
        let next = decompose(offset + 1).unwrap();
        prop_assert!(dt < next);
        prop_assert!(dt.components() < next.components());
    }

    #[test]
    fn prop_era_changeovers_roundtrip(
        (era_start, era_before) in prop_oneof![Just((20_000 * YEAR, 1u8)), Just((30_000 * YEAR, 2u8))],
        delta in 0..2 * DAY
    ) {
        let offset = era_start - DAY + delta;
        let dt = decompose(offset).unwrap();
        prop_assert_eq!(compose(&dt), offset);
        let era = if offset < era_start { era_before } else { era_before + 1 };
        prop_assert_eq!(dt.era().value(), era);
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn serde_datetime_is_its_offset() {
    let dt = DateTime::new(1, 1, 1, 2, 0, 0, 1).unwrap();
    let json = serde_json::to_string(&dt).unwrap();
    assert_eq!(json, "86401");
    let back: DateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dt);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_offsets_past_the_end() {
    let json = (u128::from(MAX_OFFSET) + 1).to_string();
    assert!(serde_json::from_str::<DateTime>(&json).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_period_uses_offsets() {
    let period = Period::new(DateTime::EPOCH, DateTime::new(1, 1, 1, 2, 0, 0, 0).unwrap());
    let json = serde_json::to_string(&period).unwrap();
    assert_eq!(json, r#"{"start":0,"end":86400}"#);
    let back: Period = serde_json::from_str(&json).unwrap();
    assert_eq!(back, period);
}
