//! Tier 4: the 42-day grid under every configuration

use crate::test_utils::{context, instant, DAY_MS};
use tempora::{next, period_of, previous, stable_month, Unit, WeekStartDay};

#[test]
fn stable_month_always_spans_42_days() {
    let probes = [
        instant(2021, 2, 1),  // shortest possible month
        instant(2024, 2, 29), // leap February
        instant(2023, 12, 31),
        instant(2024, 10, 1), // 31-day month
        instant(1970, 1, 1),
    ];
    for week_start in WeekStartDay::ALL {
        let ctx = context(week_start);
        for probe in probes {
            let sm = stable_month(&ctx, probe).unwrap();
            assert_eq!(
                sm.grid().duration_millis(),
                42 * DAY_MS,
                "week_start {} probe {}",
                week_start,
                probe
            );
            assert!(sm.grid().contains(sm.month()));
            assert!(sm.grid().start() <= sm.month().start());
            assert!(sm.month().end() <= sm.grid().end());
        }
    }
}

#[test]
fn stable_month_rows_and_cells() {
    let ctx = context(WeekStartDay::MONDAY);
    let sm = stable_month(&ctx, instant(2021, 2, 1)).unwrap();

    let weeks = sm.weeks(&ctx).unwrap();
    assert_eq!(weeks.len(), 6);
    for week in &weeks {
        assert_eq!(week.duration_millis(), 7 * DAY_MS);
    }

    let days = sm.days(&ctx).unwrap();
    assert_eq!(days.len(), 42);
    let real_days = days.iter().filter(|d| sm.in_month(d.start())).count();
    assert_eq!(real_days, 28);
}

#[test]
fn stable_month_navigation_steps_by_calendar_month() {
    let ctx = context(WeekStartDay::MONDAY);
    let feb = period_of(&ctx, &Unit::StableMonth, instant(2021, 2, 10)).unwrap();

    let mar = next(&ctx, &feb).unwrap();
    assert!(mar.is_same(&period_of(&ctx, &Unit::StableMonth, instant(2021, 3, 10)).unwrap()));

    let back = previous(&ctx, &mar).unwrap();
    assert!(back.is_same(&feb));
}

#[test]
fn stable_month_grids_of_adjacent_months_may_overlap() {
    // With a Sunday week start, 2021-05-31 (Monday) sits both in May's
    // trailing row and inside June's grid; adjacent grids are not a
    // tiling, unlike every backend unit.
    let ctx = context(WeekStartDay::SUNDAY);
    let may = period_of(&ctx, &Unit::StableMonth, instant(2021, 5, 15)).unwrap();
    let june = period_of(&ctx, &Unit::StableMonth, instant(2021, 6, 15)).unwrap();

    assert!(may.overlaps(&june));
    assert!(may.contains_instant(instant(2021, 5, 31)));
    assert!(june.contains_instant(instant(2021, 5, 31)));
}
