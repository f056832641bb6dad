//! Period algebra over a calendar adapter
//!
//! This crate implements the operations of the Tempora engine:
//! - TemporalContext: adapter + configuration + session periods
//! - period_of: the period factory
//! - divide: subdivision into tiling child periods
//! - next / previous / go: navigation
//! - merge / split: structural recombination
//! - stable_month: the fixed 42-day calendar grid derivation
//!
//! Everything is synchronous and pure given `(context, inputs)`;
//! there is no I/O, no blocking and no internal caching.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod divide;
pub mod factory;
pub mod navigate;
pub mod ops;
pub mod stable_month;

// Re-export the operation surface
pub use context::TemporalContext;
pub use divide::{divide, MAX_DIVIDE_STEPS};
pub use factory::period_of;
pub use navigate::{go, next, previous};
pub use ops::{merge, split};
pub use stable_month::{stable_month, StableMonth};
