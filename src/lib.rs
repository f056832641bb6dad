//! Tempora - calendar period computation engine
//!
//! Tempora models spans of time as immutable [`Period`] values and
//! provides a pure algebra over them: subdivision, navigation,
//! comparison, merging, splitting and a fixed 42-day "stable month"
//! grid for calendar rendering.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use tempora::{
//!     divide, next, period_of, ChronoAdapter, Instant, TemporalContext, Unit, WeekStartDay,
//! };
//!
//! # fn main() -> tempora::Result<()> {
//! let ctx = TemporalContext::new(
//!     Arc::new(ChronoAdapter::new()),
//!     WeekStartDay::MONDAY,
//!     &Unit::Month,
//!     Instant::EPOCH,
//! )?;
//!
//! // The month containing the epoch, and its days
//! let month = period_of(&ctx, &Unit::Month, Instant::EPOCH)?;
//! let days = divide(&ctx, &month, &Unit::Day)?;
//! assert_eq!(days.len(), 31);
//!
//! // February 1970 follows
//! let february = next(&ctx, &month)?;
//! assert_eq!(days[30].end(), february.start());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The workspace splits along the dependency seam:
//!
//! - `tempora-core`: the value types ([`Instant`], [`Period`],
//!   [`Unit`]), the [`CalendarAdapter`] contract, the unit registry
//!   and the adapter conformance checks. No calendar arithmetic.
//! - `tempora-engine`: the algebra itself, written entirely against
//!   the adapter contract.
//! - `tempora-chrono`: the default proleptic Gregorian backend.
//!
//! Any calendar backend satisfying the four adapter primitives can
//! replace [`ChronoAdapter`]; the engine never interprets instants
//! on its own.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use tempora_chrono::ChronoAdapter;
pub use tempora_core::{
    conformance, BoundaryStrategy, CalendarAdapter, CalendarConfig, Error, Instant,
    InvalidWeekStartDay, Period, RegistryError, Result, UnitDefinition, UnitRegistry, Unit,
    WeekStartDay,
};
pub use tempora_engine::{
    divide, go, merge, next, period_of, previous, split, stable_month, StableMonth,
    TemporalContext, MAX_DIVIDE_STEPS,
};
