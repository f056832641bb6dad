//! Millisecond-precision instant type
//!
//! The engine never interprets an instant as a calendar date itself;
//! that is the adapter's job. The core only needs a totally ordered,
//! cheap-to-copy point on the time line.
//!
//! ## Precision
//!
//! Instants are stored as signed milliseconds since the Unix epoch
//! (1970-01-01 00:00:00 UTC). Negative values are valid and denote
//! instants before the epoch.
//!
//! ## Usage
//!
//! Never expose raw arithmetic. Use explicit constructors:
//!
//! ```
//! use tempora_core::Instant;
//!
//! let epoch = Instant::EPOCH;
//! let from_secs = Instant::from_secs(1000);
//! let from_millis = Instant::from_millis(1_000_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Millisecond-precision point on the time line
///
/// Represents signed milliseconds since the Unix epoch. This is the
/// canonical instant representation threaded through the adapter
/// contract and the period algebra.
///
/// ## Invariants
///
/// - Instants are always in milliseconds
/// - Instants are comparable and orderable
/// - The zero instant is the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant(i64);

impl Instant {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Instant = Instant(0);

    /// Earliest representable instant
    pub const MIN: Instant = Instant(i64::MIN);

    /// Latest representable instant
    pub const MAX: Instant = Instant(i64::MAX);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an instant from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Instant(millis)
    }

    /// Create an instant from seconds since epoch
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Instant(secs.saturating_mul(1_000))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get signed milliseconds since the Unix epoch
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Get signed seconds since the Unix epoch (floors toward the past)
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0.div_euclid(1_000)
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Add a signed millisecond offset
    ///
    /// Returns `None` on overflow in either direction.
    #[inline]
    pub const fn checked_add_millis(&self, millis: i64) -> Option<Instant> {
        match self.0.checked_add(millis) {
            Some(v) => Some(Instant(v)),
            None => None,
        }
    }

    /// Add a signed millisecond offset, saturating at `MIN`/`MAX`
    #[inline]
    pub const fn saturating_add_millis(&self, millis: i64) -> Instant {
        Instant(self.0.saturating_add(millis))
    }

    /// Signed millisecond distance from `earlier` to `self`
    ///
    /// Negative when `earlier` is actually later than `self`.
    /// Saturates at `i64::MIN`/`i64::MAX` when the endpoints are far
    /// enough apart that the distance is not representable.
    #[inline]
    pub const fn millis_since(&self, earlier: Instant) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Check if this instant is before another
    #[inline]
    pub fn is_before(&self, other: Instant) -> bool {
        self.0 < other.0
    }

    /// Check if this instant is after another
    #[inline]
    pub fn is_after(&self, other: Instant) -> bool {
        self.0 > other.0
    }
}

impl Default for Instant {
    fn default() -> Self {
        Instant::EPOCH
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format as "seconds.milliseconds"; euclidean split keeps the
        // fractional part non-negative for pre-epoch instants.
        let secs = self.0.div_euclid(1_000);
        let millis = self.0.rem_euclid(1_000);
        write!(f, "{}.{:03}", secs, millis)
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl From<i64> for Instant {
    /// Create from raw milliseconds
    fn from(millis: i64) -> Self {
        Instant::from_millis(millis)
    }
}

impl From<Instant> for i64 {
    /// Extract raw milliseconds
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

// ============================================================================
// Tests
// ============================================================================
