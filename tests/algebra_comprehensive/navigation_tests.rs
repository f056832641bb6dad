//! Tier 3: navigation and structural recombination

use crate::test_utils::{instant, sunday_context};
use tempora::{divide, go, merge, next, period_of, previous, split, Unit};

#[test]
fn navigation_next_is_contiguous() {
    let ctx = sunday_context();
    for unit in [Unit::Year, Unit::Quarter, Unit::Month, Unit::Week, Unit::Day] {
        let p = period_of(&ctx, &unit, instant(2024, 6, 15)).unwrap();
        let n = next(&ctx, &p).unwrap();
        assert_eq!(p.end(), n.start(), "{}", unit.id());
        assert!(!p.overlaps(&n), "{}", unit.id());
    }
}

#[test]
fn navigation_previous_then_next_is_identity() {
    let ctx = sunday_context();
    for unit in [Unit::Year, Unit::Quarter, Unit::Month, Unit::Week, Unit::Day] {
        let p = period_of(&ctx, &unit, instant(2021, 3, 1)).unwrap();
        let round = next(&ctx, &previous(&ctx, &p).unwrap()).unwrap();
        assert!(round.is_same(&p), "{}", unit.id());
    }
}

#[test]
fn navigation_go_crosses_many_year_boundaries() {
    let ctx = sunday_context();
    let jan = period_of(&ctx, &Unit::Month, instant(2024, 1, 10)).unwrap();

    let far = go(&ctx, &jan, 120).unwrap();
    assert_eq!(far.start(), instant(2034, 1, 1));

    let back = go(&ctx, &far, -120).unwrap();
    assert!(back.is_same(&jan));
}

#[test]
fn navigation_go_equals_iterated_next() {
    let ctx = sunday_context();
    let start = period_of(&ctx, &Unit::Week, instant(2024, 1, 10)).unwrap();
    let mut stepped = start.clone();
    for _ in 0..8 {
        stepped = next(&ctx, &stepped).unwrap();
    }
    let jumped = go(&ctx, &start, 8).unwrap();
    assert!(jumped.is_same(&stepped));
}

#[test]
fn navigation_divide_then_merge_restores_the_year_span() {
    let ctx = sunday_context();
    let year = period_of(&ctx, &Unit::Year, instant(2024, 6, 15)).unwrap();
    let months = divide(&ctx, &year, &Unit::Month).unwrap();
    let merged = merge(&months).unwrap();

    assert_eq!(merged.start(), year.start());
    assert_eq!(merged.end(), year.end());
    assert_eq!(merged.unit(), &Unit::Month, "merge keeps the child unit");
}

#[test]
fn navigation_split_on_a_month_boundary() {
    let ctx = sunday_context();
    let year = period_of(&ctx, &Unit::Year, instant(2024, 6, 15)).unwrap();
    let (h1, h2) = split(&year, instant(2024, 7, 1)).unwrap();

    assert_eq!(h1.start(), instant(2024, 1, 1));
    assert_eq!(h1.end(), instant(2024, 7, 1));
    assert_eq!(h2.start(), instant(2024, 7, 1));
    assert_eq!(h2.end(), instant(2025, 1, 1));

    // the year's anchor (June 15) lives in the first half
    assert_eq!(h1.date(), instant(2024, 6, 15));

    let merged = merge(&[h1, h2]).unwrap();
    assert!(merged.is_same(&year));
}

#[test]
fn navigation_comparison_predicates() {
    let ctx = sunday_context();
    let june = period_of(&ctx, &Unit::Month, instant(2024, 6, 15)).unwrap();
    let year = period_of(&ctx, &Unit::Year, instant(2024, 6, 15)).unwrap();
    let july = next(&ctx, &june).unwrap();

    assert!(year.contains(&june));
    assert!(!june.contains(&year));
    assert!(year.overlaps(&june));
    assert!(june.overlaps(&year));
    assert!(!june.overlaps(&july));
    assert!(june.is_same(&june));
    assert!(!june.is_same(&july));

    let also_june = period_of(&ctx, &Unit::Month, instant(2024, 6, 1)).unwrap();
    assert!(june.is_same(&also_june), "anchor does not affect identity");
}
