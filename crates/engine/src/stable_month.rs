//! Stable month derivation
//!
//! A stable month is a fixed 42-day, week-aligned span that fully
//! contains a calendar month: six whole rows of seven days, so a
//! month grid renders at a constant height no matter where the month
//! starts or how long it is.

use crate::context::TemporalContext;
use crate::divide::divide;
use crate::factory::period_of;
use serde::{Deserialize, Serialize};
use tempora_core::{Error, Instant, Period, Result, Unit};

/// A 42-day rendering grid plus the real month it frames
///
/// The grid is the `StableMonth`-unit period (six whole weeks under
/// the configured week start); the month is the ordinary calendar
/// month. Keeping both lets callers distinguish padding days from
/// real days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StableMonth {
    grid: Period,
    month: Period,
}

/// Derive the stable month containing `instant`
///
/// The grid starts on the week boundary at or before the month's
/// first instant and spans exactly 42 days, which always covers the
/// month: the week offset is at most 6 days and no month exceeds 31.
///
/// # Errors
///
/// Propagates adapter failures; `MalformedPeriod` if the backend's
/// week arithmetic produces a grid that fails to cover the month.
pub fn stable_month(ctx: &TemporalContext, instant: Instant) -> Result<StableMonth> {
    let month = period_of(ctx, &Unit::Month, instant)?;
    let grid = period_of(ctx, &Unit::StableMonth, instant)?;
    if !grid.contains(&month) {
        return Err(Error::MalformedPeriod(format!(
            "stable month grid {} does not cover month {}",
            grid, month
        )));
    }
    Ok(StableMonth { grid, month })
}

impl StableMonth {
    /// The 42-day rendering grid
    pub fn grid(&self) -> &Period {
        &self.grid
    }

    /// The calendar month the grid frames
    pub fn month(&self) -> &Period {
        &self.month
    }

    /// Whether `instant` belongs to the real month rather than the
    /// leading or trailing padding
    pub fn in_month(&self, instant: Instant) -> bool {
        self.month.contains_instant(instant)
    }

    /// The six week rows of the grid
    ///
    /// # Errors
    ///
    /// Propagates divide failures.
    pub fn weeks(&self, ctx: &TemporalContext) -> Result<Vec<Period>> {
        divide(ctx, &self.grid, &Unit::Week)
    }

    /// The 42 day cells of the grid
    ///
    /// # Errors
    ///
    /// Propagates divide failures.
    pub fn days(&self, ctx: &TemporalContext) -> Result<Vec<Period>> {
        divide(ctx, &self.grid, &Unit::Day)
    }
}
