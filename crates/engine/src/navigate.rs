//! Period navigation
//!
//! `next`, `previous` and `go` produce new periods of the same unit;
//! nothing is mutated. All three run in O(1) adapter calls.

use crate::context::TemporalContext;
use crate::factory::period_of;
use tempora_core::{Error, Instant, Period, Result, Unit};

/// The period immediately after `period`
///
/// `period.end` is exclusive, so it is the first instant of the
/// successor; resolving its start boundary re-anchors derived units
/// (a stable month's end always falls inside the following month).
///
/// # Errors
///
/// Propagates registry and adapter failures.
pub fn next(ctx: &TemporalContext, period: &Period) -> Result<Period> {
    let anchor = ctx
        .registry()
        .resolve_start(ctx.adapter(), ctx.config(), period.unit(), period.end())?;
    period_of(ctx, period.unit(), anchor)
}

/// The period immediately before `period`
///
/// Anchors on the last instant before `period.start`. For tiling
/// units this is exactly `add(start, -1, unit)`; for derived units
/// with overlapping spans (stable months) it still lands in the
/// correct predecessor, which plain unit arithmetic on the grid start
/// would not.
///
/// # Errors
///
/// `AdapterUnavailable` when `period.start` is the earliest
/// representable instant; registry and adapter failures propagate.
pub fn previous(ctx: &TemporalContext, period: &Period) -> Result<Period> {
    let before = period.start().checked_add_millis(-1).ok_or_else(|| {
        Error::AdapterUnavailable("no instant exists before the earliest representable period".to_string())
    })?;
    let anchor = ctx
        .registry()
        .resolve_start(ctx.adapter(), ctx.config(), period.unit(), before)?;
    period_of(ctx, period.unit(), anchor)
}

/// The period a signed number of units away from `period`
///
/// Offsets the anchor date directly (`add(period.date, amount,
/// unit)`) rather than stepping `amount` times, so a thousand-month
/// jump costs the same as one.
///
/// Round-trip caveat: with a clamping backend, anchors on an unstable
/// day of month lose their day (Jan 31 + 1 month = Feb 28/29, and
/// going back lands on Jan 28/29). The resulting periods still
/// satisfy `is_same`; only the `date` anchor drifts. This follows
/// from the backend's overflow policy and is deliberately not
/// patched.
///
/// # Errors
///
/// Propagates registry and adapter failures.
pub fn go(ctx: &TemporalContext, period: &Period, amount: i64) -> Result<Period> {
    let anchor = calendar_add(ctx, period.date(), amount, period.unit())?;
    period_of(ctx, period.unit(), anchor)
}

/// Offset an instant by whole units, falling back to the unit's
/// registered parent for units the backend does not know
///
/// A derived unit anchors its arithmetic on the unit it derives from:
/// jumping a stable month by `n` is jumping its month by `n`.
fn calendar_add(ctx: &TemporalContext, instant: Instant, amount: i64, unit: &Unit) -> Result<Instant> {
    let mut current = unit.clone();
    loop {
        match ctx.adapter().add(instant, amount, &current, ctx.config()) {
            Err(Error::UnknownUnit(_)) => match ctx.registry().get(&current)?.parent() {
                Some(parent) => current = parent.clone(),
                None => return Err(Error::UnknownUnit(unit.id().to_string())),
            },
            other => return other,
        }
    }
}
