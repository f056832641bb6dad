//! Core types and contracts for the Tempora period engine
//!
//! This crate defines the foundational pieces shared by every layer:
//! - Instant: millisecond point on the time line
//! - Unit: time granularity discriminator (built-ins + custom ids)
//! - Period: immutable half-open interval tagged with a unit
//! - WeekStartDay / CalendarConfig: construction-time configuration
//! - Error: the engine's error taxonomy
//! - CalendarAdapter: the four-primitive backend contract
//! - UnitRegistry: unit metadata, divisibility, boundary strategies
//! - conformance: checks every backend must pass

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod config;
pub mod conformance;
pub mod error;
pub mod instant;
pub mod period;
pub mod registry;
pub mod unit;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types and traits
pub use adapter::CalendarAdapter;
pub use config::{CalendarConfig, InvalidWeekStartDay, WeekStartDay};
pub use error::{Error, Result};
pub use instant::Instant;
pub use period::Period;
pub use registry::{BoundaryStrategy, RegistryError, UnitDefinition, UnitRegistry};
pub use unit::Unit;
