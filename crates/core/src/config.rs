//! Calendar configuration
//!
//! Configuration is consumed once at context construction and threaded
//! explicitly through every adapter call. There is no ambient or
//! global configuration state.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error for out-of-range week start days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid week start day: {0} (must be 0..=6, 0 = Sunday)")]
pub struct InvalidWeekStartDay(pub u8);

/// First day of the week, `0 = Sunday` through `6 = Saturday`
///
/// The numbering follows the convention of the date backends this
/// engine is designed to sit on (JavaScript `getDay`, chrono's
/// `num_days_from_sunday`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStartDay(u8);

impl WeekStartDay {
    /// Sunday (0)
    pub const SUNDAY: WeekStartDay = WeekStartDay(0);
    /// Monday (1)
    pub const MONDAY: WeekStartDay = WeekStartDay(1);
    /// Tuesday (2)
    pub const TUESDAY: WeekStartDay = WeekStartDay(2);
    /// Wednesday (3)
    pub const WEDNESDAY: WeekStartDay = WeekStartDay(3);
    /// Thursday (4)
    pub const THURSDAY: WeekStartDay = WeekStartDay(4);
    /// Friday (5)
    pub const FRIDAY: WeekStartDay = WeekStartDay(5);
    /// Saturday (6)
    pub const SATURDAY: WeekStartDay = WeekStartDay(6);

    /// All seven week start days, Sunday first
    pub const ALL: [WeekStartDay; 7] = [
        WeekStartDay::SUNDAY,
        WeekStartDay::MONDAY,
        WeekStartDay::TUESDAY,
        WeekStartDay::WEDNESDAY,
        WeekStartDay::THURSDAY,
        WeekStartDay::FRIDAY,
        WeekStartDay::SATURDAY,
    ];

    /// Validate a raw day number
    ///
    /// # Errors
    /// Returns `InvalidWeekStartDay` when `day > 6`.
    pub const fn new(day: u8) -> std::result::Result<Self, InvalidWeekStartDay> {
        if day <= 6 {
            Ok(WeekStartDay(day))
        } else {
            Err(InvalidWeekStartDay(day))
        }
    }

    /// Raw day number, `0 = Sunday`
    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for WeekStartDay {
    fn default() -> Self {
        WeekStartDay::SUNDAY
    }
}

impl TryFrom<u8> for WeekStartDay {
    type Error = InvalidWeekStartDay;

    fn try_from(day: u8) -> std::result::Result<Self, Self::Error> {
        WeekStartDay::new(day)
    }
}

impl From<WeekStartDay> for u8 {
    fn from(day: WeekStartDay) -> Self {
        day.0
    }
}

impl fmt::Display for WeekStartDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
            [self.0 as usize % 7];
        f.write_str(name)
    }
}

/// Configuration consumed by the adapter primitives
///
/// Owned by the temporal context and passed by reference into every
/// boundary computation, so week-dependent units resolve without
/// stateful backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First day of the week for week-aligned units
    pub week_start: WeekStartDay,
}

impl CalendarConfig {
    /// Create a config with the given week start day
    pub const fn new(week_start: WeekStartDay) -> Self {
        CalendarConfig { week_start }
    }
}
