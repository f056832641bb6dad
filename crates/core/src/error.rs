//! Error types for the period engine
//!
//! This module defines the error taxonomy used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! All errors are raised synchronously at detection and never retried
//! or silently recovered internally; the caller decides what to do.

use crate::instant::Instant;
use thiserror::Error;

/// Result type alias for period engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the period engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unit id not known to the registry or the calendar backend
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Division target is not in the source unit's divisibility set
    #[error("cannot divide {source_unit} into {target_unit}")]
    InvalidDivision {
        /// Unit of the period being divided
        source_unit: String,
        /// Requested child unit
        target_unit: String,
    },

    /// Calendar backend cannot service the request
    ///
    /// Raised when an instant falls outside the backend's representable
    /// range or an intermediate computation overflows.
    #[error("calendar adapter unavailable: {0}")]
    AdapterUnavailable(String),

    /// The divide cursor failed to advance
    ///
    /// Guards the interval-generation loop against a misbehaving
    /// backend; divide fails loud instead of looping forever.
    #[error("divide cursor failed to advance for unit {unit} at {at}")]
    NonAdvancingIteration {
        /// Unit the cursor was stepping through
        unit: String,
        /// Cursor position at the time of the failure
        at: Instant,
    },

    /// Period invariant `start <= date < end` violated
    #[error("malformed period: {0}")]
    MalformedPeriod(String),
}
