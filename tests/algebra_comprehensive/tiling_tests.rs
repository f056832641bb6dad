//! Tier 2: divide results exactly tile their parent

use crate::test_utils::{instant, sunday_context};
use tempora::{divide, merge, period_of, Error, Period, Unit};

/// Every sanctioned division in the base hierarchy
const DIVISIONS: &[(Unit, Unit)] = &[
    (Unit::Millennium, Unit::Century),
    (Unit::Millennium, Unit::Decade),
    (Unit::Millennium, Unit::Year),
    (Unit::Century, Unit::Decade),
    (Unit::Century, Unit::Year),
    (Unit::Decade, Unit::Year),
    (Unit::Year, Unit::Quarter),
    (Unit::Year, Unit::Month),
    (Unit::Year, Unit::Day),
    (Unit::Quarter, Unit::Month),
    (Unit::Quarter, Unit::Day),
    (Unit::Month, Unit::Day),
    (Unit::Week, Unit::Day),
    (Unit::Day, Unit::Hour),
    (Unit::Hour, Unit::Minute),
    (Unit::Minute, Unit::Second),
    (Unit::StableMonth, Unit::Week),
    (Unit::StableMonth, Unit::Day),
];

fn assert_tiles(parent: &Period, children: &[Period]) {
    assert!(!children.is_empty());
    assert_eq!(children[0].start(), parent.start(), "first child start");
    assert_eq!(
        children.last().unwrap().end(),
        parent.end(),
        "last child end"
    );
    for pair in children.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start(), "gap or overlap");
    }
    // merge is the inverse of divide, modulo the unit tag
    let merged = merge(children).unwrap();
    assert_eq!(merged.start(), parent.start());
    assert_eq!(merged.end(), parent.end());
}

#[test]
fn tiling_holds_for_every_sanctioned_division() {
    let ctx = sunday_context();
    for (source, target) in DIVISIONS {
        let parent = period_of(&ctx, source, instant(2024, 2, 15)).unwrap();
        let children = divide(&ctx, &parent, target).unwrap();
        assert_tiles(&parent, &children);
        for child in &children {
            assert_eq!(child.unit(), target);
            assert!(parent.contains(child), "{} in {}", child, parent);
        }
    }
}

#[test]
fn tiling_expected_child_counts() {
    let ctx = sunday_context();
    let cases: &[(Unit, Unit, usize)] = &[
        (Unit::Year, Unit::Quarter, 4),
        (Unit::Year, Unit::Month, 12),
        (Unit::Year, Unit::Day, 366), // 2024 is leap
        (Unit::Quarter, Unit::Month, 3),
        (Unit::Week, Unit::Day, 7),
        (Unit::Day, Unit::Hour, 24),
        (Unit::Hour, Unit::Minute, 60),
        (Unit::Minute, Unit::Second, 60),
        (Unit::Decade, Unit::Year, 10),
        (Unit::Century, Unit::Decade, 10),
        (Unit::StableMonth, Unit::Week, 6),
        (Unit::StableMonth, Unit::Day, 42),
    ];
    for (source, target, expected) in cases {
        let parent = period_of(&ctx, source, instant(2024, 2, 15)).unwrap();
        let children = divide(&ctx, &parent, target).unwrap();
        assert_eq!(
            children.len(),
            *expected,
            "{} -> {}",
            source.id(),
            target.id()
        );
    }
}

#[test]
fn tiling_rejects_unsanctioned_divisions() {
    let ctx = sunday_context();
    let cases: &[(Unit, Unit)] = &[
        (Unit::Month, Unit::Week),
        (Unit::Year, Unit::Week),
        (Unit::Week, Unit::Month),
        (Unit::Day, Unit::Month),
        (Unit::StableMonth, Unit::Month),
        (Unit::Second, Unit::Day),
    ];
    for (source, target) in cases {
        let parent = period_of(&ctx, source, instant(2024, 2, 15)).unwrap();
        let err = divide(&ctx, &parent, target).unwrap_err();
        assert!(
            matches!(err, Error::InvalidDivision { .. }),
            "{} -> {}",
            source.id(),
            target.id()
        );
    }
}

#[test]
fn tiling_children_anchor_on_their_own_start() {
    let ctx = sunday_context();
    let year = period_of(&ctx, &Unit::Year, instant(2024, 6, 15)).unwrap();
    for month in divide(&ctx, &year, &Unit::Month).unwrap() {
        assert_eq!(month.date(), month.start());
    }
}

#[test]
fn tiling_february_length_tracks_leap_years() {
    let ctx = sunday_context();
    for (year, expected) in [(2023, 28), (2024, 29), (1900, 28), (2000, 29)] {
        let feb = period_of(&ctx, &Unit::Month, instant(year, 2, 10)).unwrap();
        let days = divide(&ctx, &feb, &Unit::Day).unwrap();
        assert_eq!(days.len(), expected, "February {}", year);
    }
}
