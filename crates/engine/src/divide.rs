//! Period subdivision
//!
//! The signature operation of the algebra: decompose a period into
//! the ascending, gap-free sequence of smaller-unit periods covering
//! it.

use crate::context::TemporalContext;
use crate::factory::period_of;
use tempora_core::{Error, Instant, Period, Result, Unit};

/// Hard ceiling on the number of children a single divide may emit
///
/// A year of seconds is ~31.5 million, far beyond any sane rendering
/// request; the sanctioned divisions all stay well under this bound.
pub const MAX_DIVIDE_STEPS: usize = 100_000;

/// Divide `period` into consecutive `target`-unit periods
///
/// The cursor starts at the target-unit boundary containing
/// `period.start` and advances boundary by boundary until it reaches
/// `period.end`. For backend-resolved units the successor is
/// `start_of(add(cursor, 1, target))` as the adapter closure property
/// prescribes; strategy-resolved units advance through their own
/// exclusive end.
///
/// For every registry-sanctioned division the output is ascending by
/// start with no duplicate starts, the first start equals
/// `period.start`, and the last end equals `period.end` whenever the
/// target tiles the source exactly. Where the source span is not an
/// exact multiple of the target span the final child is not clipped.
///
/// # Errors
///
/// `InvalidDivision` when the target is not in the source's
/// divisibility set, `NonAdvancingIteration` when the cursor stalls
/// or the ceiling is hit, `UnknownUnit`/adapter failures propagate.
/// On any failure no partial output is returned.
pub fn divide(ctx: &TemporalContext, period: &Period, target: &Unit) -> Result<Vec<Period>> {
    ctx.registry().validate_division(period.unit(), target)?;
    let has_strategy = ctx.registry().get(target)?.strategy().is_some();

    let mut children: Vec<Period> = Vec::new();
    let mut cursor = ctx
        .registry()
        .resolve_start(ctx.adapter(), ctx.config(), target, period.start())?;

    while cursor < period.end() {
        if children.len() >= MAX_DIVIDE_STEPS {
            return Err(non_advancing(target, cursor));
        }
        children.push(period_of(ctx, target, cursor)?);

        let next_cursor = advance(ctx, target, has_strategy, cursor)?;
        if next_cursor <= cursor {
            return Err(non_advancing(target, cursor));
        }
        cursor = next_cursor;
    }

    tracing::debug!(
        source = %period,
        target = %target,
        children = children.len(),
        "divide"
    );
    Ok(children)
}

fn advance(
    ctx: &TemporalContext,
    target: &Unit,
    has_strategy: bool,
    cursor: Instant,
) -> Result<Instant> {
    if has_strategy {
        return ctx
            .registry()
            .resolve_end(ctx.adapter(), ctx.config(), target, cursor);
    }
    let stepped = ctx.adapter().add(cursor, 1, target, ctx.config())?;
    ctx.adapter().start_of(stepped, target, ctx.config())
}

fn non_advancing(target: &Unit, cursor: Instant) -> Error {
    Error::NonAdvancingIteration {
        unit: target.id().to_string(),
        at: cursor,
    }
}
