//! Tier 1: hand-checked reference scenarios

use crate::test_utils::{context, instant, sunday_context, DAY_MS};
use tempora::{divide, next, period_of, stable_month, Unit, WeekStartDay};

#[test]
fn scenario_year_2024_divides_into_leap_months() {
    let ctx = sunday_context();
    let year = period_of(&ctx, &Unit::Year, instant(2024, 6, 15)).unwrap();
    assert_eq!(year.start(), instant(2024, 1, 1));
    assert_eq!(year.end(), instant(2025, 1, 1));

    let months = divide(&ctx, &year, &Unit::Month).unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[1].start(), instant(2024, 2, 1));
    assert_eq!(months[1].end(), instant(2024, 3, 1));
    assert_eq!(months[1].duration_millis(), 29 * DAY_MS, "leap February");
}

#[test]
fn scenario_non_leap_february_has_28_days() {
    let ctx = sunday_context();
    let month = period_of(&ctx, &Unit::Month, instant(2023, 2, 10)).unwrap();
    let days = divide(&ctx, &month, &Unit::Day).unwrap();
    assert_eq!(days.len(), 28);
}

#[test]
fn scenario_stable_month_feb_2021_monday_start() {
    let ctx = context(WeekStartDay::MONDAY);
    let sm = stable_month(&ctx, instant(2021, 2, 1)).unwrap();
    assert_eq!(sm.grid().start(), instant(2021, 1, 25));
    assert_eq!(sm.grid().end(), instant(2021, 3, 8));
    assert_eq!(sm.grid().duration_millis(), 42 * DAY_MS);
}

#[test]
fn scenario_next_quarter() {
    let ctx = sunday_context();
    let q2 = period_of(&ctx, &Unit::Quarter, instant(2024, 5, 1)).unwrap();
    let q3 = period_of(&ctx, &Unit::Quarter, instant(2024, 7, 1)).unwrap();
    assert_eq!(next(&ctx, &q2).unwrap(), q3);
}
