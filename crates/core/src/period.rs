//! The period value type
//!
//! A period is an immutable half-open interval `[start, end)` tagged
//! with a unit and anchored on the instant it was derived from.
//! Periods are plain values: cheap to clone, compared structurally,
//! never mutated in place. Navigation and division produce new
//! periods.

use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable half-open time interval tagged with a unit
///
/// ## Invariants
///
/// - `start <= date < end` (checked at construction)
/// - `[start, end)` is half-open; adjacent same-unit periods tile with
///   no gap or overlap because `end` is exclusive
/// - Boundary alignment to the unit's calendar rules is the factory's
///   responsibility; the type itself only defends the ordering
///   invariant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: Instant,
    end: Instant,
    unit: Unit,
    date: Instant,
}

impl Period {
    /// Construct a period, enforcing `start <= date < end`
    ///
    /// # Errors
    /// Returns `MalformedPeriod` when the ordering invariant does not
    /// hold.
    pub fn new(unit: Unit, start: Instant, end: Instant, date: Instant) -> Result<Self> {
        if start > date {
            return Err(Error::MalformedPeriod(format!(
                "date {} precedes start {} for unit {}",
                date, start, unit
            )));
        }
        if date >= end {
            return Err(Error::MalformedPeriod(format!(
                "date {} is not before end {} for unit {}",
                date, end, unit
            )));
        }
        Ok(Period {
            start,
            end,
            unit,
            date,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Inclusive start of the interval
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Exclusive end of the interval
    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Unit this period is aligned to
    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Reference instant this period was derived from
    #[inline]
    pub fn date(&self) -> Instant {
        self.date
    }

    /// Length of the interval in milliseconds
    ///
    /// Saturates at `i64::MAX` for spans wider than the millisecond
    /// range can express.
    #[inline]
    pub fn duration_millis(&self) -> i64 {
        self.end.millis_since(self.start)
    }

    // =========================================================================
    // Comparison algebra (pure, no adapter required)
    // =========================================================================

    /// Whether `instant` falls inside `[start, end)`
    #[inline]
    pub fn contains_instant(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether `inner` lies entirely inside this period
    ///
    /// A period contains itself.
    #[inline]
    pub fn contains(&self, inner: &Period) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }

    /// Whether two periods denote the same interval of the same unit
    ///
    /// Same unit and same start suffice: equal-unit periods sharing a
    /// start share an end under any consistent backend.
    #[inline]
    pub fn is_same(&self, other: &Period) -> bool {
        self.unit == other.unit && self.start == other.start
    }

    /// Whether two intervals intersect in at least one instant
    #[inline]
    pub fn overlaps(&self, other: &Period) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}, {})", self.unit, self.start, self.end)
    }
}
