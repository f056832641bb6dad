//! Merging and splitting periods
//!
//! Pure structural operations: no adapter involved, only the tiling
//! invariants of the period values themselves.

use tempora_core::{Error, Instant, Period, Result};

/// Merge a tiling run of same-unit periods into one spanning period
///
/// The input must be non-empty, all of one unit, sorted ascending and
/// exactly tiling (each period's end is the next one's start). The
/// result keeps the shared unit tag and the first period's `date`
/// even though its span covers several unit lengths.
///
/// # Errors
///
/// `MalformedPeriod` for an empty input, mixed units, or any gap or
/// overlap between neighbors.
pub fn merge(periods: &[Period]) -> Result<Period> {
    let first = periods
        .first()
        .ok_or_else(|| Error::MalformedPeriod("cannot merge an empty sequence".to_string()))?;
    let unit = first.unit();

    for pair in periods.windows(2) {
        if pair[1].unit() != unit {
            return Err(Error::MalformedPeriod(format!(
                "cannot merge mixed units {} and {}",
                unit,
                pair[1].unit()
            )));
        }
        if pair[0].end() != pair[1].start() {
            return Err(Error::MalformedPeriod(format!(
                "periods do not tile: {} then {}",
                pair[0], pair[1]
            )));
        }
    }

    let last = periods.last().unwrap_or(first);
    Period::new(unit.clone(), first.start(), last.end(), first.date())
}

/// Split a period into two halves at an interior instant
///
/// Produces `[start, at)` and `[at, end)`, both tagged with the
/// source unit. The source's `date` anchor lands in whichever half
/// contains it; the other half is anchored on its own start.
///
/// # Errors
///
/// `MalformedPeriod` when `at` is not strictly inside the period.
pub fn split(period: &Period, at: Instant) -> Result<(Period, Period)> {
    if at <= period.start() || at >= period.end() {
        return Err(Error::MalformedPeriod(format!(
            "split point {} is not strictly inside {}",
            at, period
        )));
    }

    let unit = period.unit().clone();
    let (left_date, right_date) = if period.date() < at {
        (period.date(), at)
    } else {
        (period.start(), period.date())
    };

    let left = Period::new(unit.clone(), period.start(), at, left_date)?;
    let right = Period::new(unit, at, period.end(), right_date)?;
    Ok((left, right))
}
