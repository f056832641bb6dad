//! Calendar adapter contract
//!
//! This module defines the `CalendarAdapter` trait that isolates all
//! calendar math behind four primitives, enabling swapping backends
//! without touching the period algebra.

use crate::config::CalendarConfig;
use crate::error::Result;
use crate::instant::Instant;
use crate::unit::Unit;

/// Calendar arithmetic abstraction
///
/// Any backend supplying these four primitives can drive the whole
/// engine. A conforming implementation must satisfy, for every
/// supported unit `u` and instant `x`:
///
/// - idempotence: `start_of(start_of(x, u), u) == start_of(x, u)`
/// - closure: `end_of(x, u) == start_of(add(x, 1, u), u)`
/// - `diff(a, a, u) == 0`
///
/// The checks live in [`crate::conformance`]; backend crates run them
/// in their test suites.
///
/// Unsupported units must surface [`crate::Error::UnknownUnit`] and
/// never silently no-op. Instants a backend cannot represent surface
/// [`crate::Error::AdapterUnavailable`].
///
/// Thread safety: adapters are shared behind `Arc` by the temporal
/// context (requires Send + Sync).
pub trait CalendarAdapter: Send + Sync {
    /// Earliest instant of the `unit`-period containing `instant`
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is unsupported or the instant is
    /// out of the backend's range.
    fn start_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant>;

    /// Instant immediately after the period's last instant
    ///
    /// The end is exclusive: `end_of(x, u)` is the start of the next
    /// `u`-period.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is unsupported or the instant is
    /// out of the backend's range.
    fn end_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant>;

    /// Calendar-aware signed offset by `amount` units
    ///
    /// Must handle variable-length units deterministically: the
    /// backend picks one day-of-month overflow policy (for example
    /// clamping Jan 31 + 1 month to the last day of February) and
    /// applies it consistently.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is unsupported or the result is
    /// out of the backend's range.
    fn add(&self, instant: Instant, amount: i64, unit: &Unit, config: &CalendarConfig)
        -> Result<Instant>;

    /// Signed count of whole `unit` boundaries crossed from `a` to `b`
    ///
    /// Positive when `b` is later than `a`; `diff(a, a, u) == 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is unsupported or an instant is
    /// out of the backend's range.
    fn diff(&self, a: Instant, b: Instant, unit: &Unit, config: &CalendarConfig) -> Result<i64>;
}
