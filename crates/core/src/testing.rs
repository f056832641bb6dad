//! Test-only helpers shared across the crate's unit tests

use crate::adapter::CalendarAdapter;
use crate::config::CalendarConfig;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::unit::Unit;

/// Mock backend where every supported unit is a fixed millisecond grid
///
/// Second = 1000 ms, minute = 60 s, hour = 60 min, day = 24 h. All
/// other units are unknown, which makes the mock handy for exercising
/// `UnknownUnit` paths and registry strategies without a real
/// calendar.
pub(crate) struct FixedGridAdapter;

pub(crate) fn grid_len(unit: &Unit) -> Result<i64> {
    match unit {
        Unit::Second => Ok(1_000),
        Unit::Minute => Ok(60_000),
        Unit::Hour => Ok(3_600_000),
        Unit::Day => Ok(86_400_000),
        other => Err(Error::UnknownUnit(other.id().to_string())),
    }
}

impl CalendarAdapter for FixedGridAdapter {
    fn start_of(&self, instant: Instant, unit: &Unit, _: &CalendarConfig) -> Result<Instant> {
        let len = grid_len(unit)?;
        let ms = instant.as_millis();
        Ok(Instant::from_millis(ms - ms.rem_euclid(len)))
    }

    fn end_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant> {
        let len = grid_len(unit)?;
        let start = self.start_of(instant, unit, config)?;
        Ok(Instant::from_millis(start.as_millis() + len))
    }

    fn add(&self, instant: Instant, amount: i64, unit: &Unit, _: &CalendarConfig) -> Result<Instant> {
        let len = grid_len(unit)?;
        Ok(Instant::from_millis(instant.as_millis() + amount * len))
    }

    fn diff(&self, a: Instant, b: Instant, unit: &Unit, _: &CalendarConfig) -> Result<i64> {
        let len = grid_len(unit)?;
        Ok(b.as_millis().div_euclid(len) - a.as_millis().div_euclid(len))
    }
}
