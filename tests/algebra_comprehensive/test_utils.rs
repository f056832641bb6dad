//! Shared helpers for the algebra suite

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tempora::{ChronoAdapter, Instant, TemporalContext, Unit, WeekStartDay};

pub const DAY_MS: i64 = 86_400_000;

pub fn instant(y: i32, m: u32, d: u32) -> Instant {
    let dt = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
    Instant::from_millis(dt.timestamp_millis())
}

pub fn context(week_start: WeekStartDay) -> TemporalContext {
    TemporalContext::new(
        Arc::new(ChronoAdapter::new()),
        week_start,
        &Unit::Day,
        Instant::EPOCH,
    )
    .unwrap()
}

pub fn sunday_context() -> TemporalContext {
    context(WeekStartDay::SUNDAY)
}
