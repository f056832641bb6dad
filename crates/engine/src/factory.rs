//! Period factory
//!
//! Builds a period for a unit and reference instant by resolving
//! boundaries through the registry (and, transitively, the adapter).
//! Periods are cheap to recompute; nothing is cached here.

use crate::context::TemporalContext;
use tempora_core::{Instant, Period, Result, Unit};

/// Build the `unit`-period containing `instant`
///
/// `start`/`end` come from the registry's boundary resolution; `date`
/// is the reference instant itself. The `Period` constructor's
/// `start <= date < end` check doubles as a defensive guard against a
/// backend returning boundaries that do not bracket the instant.
///
/// # Errors
///
/// `UnknownUnit` for unregistered units, `MalformedPeriod` when the
/// resolved boundaries do not contain `instant`; adapter failures
/// propagate.
pub fn period_of(ctx: &TemporalContext, unit: &Unit, instant: Instant) -> Result<Period> {
    let start = ctx
        .registry()
        .resolve_start(ctx.adapter(), ctx.config(), unit, instant)?;
    let end = ctx
        .registry()
        .resolve_end(ctx.adapter(), ctx.config(), unit, instant)?;
    Period::new(unit.clone(), start, end, instant)
}
