//! Unit identifiers
//!
//! This module defines the `Unit` discriminator: a closed enum for the
//! built-in granularities plus an open string-keyed variant for units
//! registered at runtime. The enum carries no behavior of its own;
//! boundary math lives in the registry and the calendar adapter.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A named time granularity
///
/// The twelve built-in units cover the base hierarchy (millennium down
/// to second) plus the derived stable month. `Custom` carries the id
/// of a caller-registered unit; the registry holds its metadata and
/// boundary strategy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// 1000-year span, floored
    Millennium,
    /// 100-year span, floored
    Century,
    /// 10-year span, floored
    Decade,
    /// Calendar year
    Year,
    /// 3-month block aligned to January/April/July/October
    Quarter,
    /// Calendar month
    Month,
    /// 7-day span starting on the configured week start day
    Week,
    /// Calendar day
    Day,
    /// Clock hour
    Hour,
    /// Clock minute
    Minute,
    /// Clock second
    Second,
    /// Derived 42-day week-aligned superset of a month
    StableMonth,
    /// Caller-registered unit, keyed by id
    Custom(String),
}

impl Unit {
    /// The built-in units, largest first
    pub const BUILT_IN: [Unit; 12] = [
        Unit::Millennium,
        Unit::Century,
        Unit::Decade,
        Unit::Year,
        Unit::Quarter,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::StableMonth,
    ];

    /// String id of this unit
    pub fn id(&self) -> &str {
        match self {
            Unit::Millennium => "millennium",
            Unit::Century => "century",
            Unit::Decade => "decade",
            Unit::Year => "year",
            Unit::Quarter => "quarter",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::StableMonth => "stableMonth",
            Unit::Custom(id) => id,
        }
    }

    /// Plural id, used by list-shaped consumer APIs
    pub fn plural_id(&self) -> Cow<'static, str> {
        match self {
            Unit::Millennium => Cow::Borrowed("millennia"),
            Unit::Century => Cow::Borrowed("centuries"),
            Unit::Decade => Cow::Borrowed("decades"),
            Unit::Year => Cow::Borrowed("years"),
            Unit::Quarter => Cow::Borrowed("quarters"),
            Unit::Month => Cow::Borrowed("months"),
            Unit::Week => Cow::Borrowed("weeks"),
            Unit::Day => Cow::Borrowed("days"),
            Unit::Hour => Cow::Borrowed("hours"),
            Unit::Minute => Cow::Borrowed("minutes"),
            Unit::Second => Cow::Borrowed("seconds"),
            Unit::StableMonth => Cow::Borrowed("stableMonths"),
            Unit::Custom(id) => Cow::Owned(format!("{}s", id)),
        }
    }

    /// Whether this is one of the twelve built-in units
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Unit::Custom(_))
    }
}

impl From<&str> for Unit {
    /// Map a string id to a unit; unrecognized ids become `Custom`
    fn from(id: &str) -> Self {
        match id {
            "millennium" => Unit::Millennium,
            "century" => Unit::Century,
            "decade" => Unit::Decade,
            "year" => Unit::Year,
            "quarter" => Unit::Quarter,
            "month" => Unit::Month,
            "week" => Unit::Week,
            "day" => Unit::Day,
            "hour" => Unit::Hour,
            "minute" => Unit::Minute,
            "second" => Unit::Second,
            "stableMonth" => Unit::StableMonth,
            other => Unit::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = std::convert::Infallible;

    /// Parse a unit id; unrecognized ids become `Custom`, so parsing
    /// never fails
    fn from_str(id: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Unit::from(id))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Serde: units serialize as their string id
// ============================================================================

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct UnitVisitor;

        impl Visitor<'_> for UnitVisitor {
            type Value = Unit;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a unit id string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Unit, E> {
                Ok(Unit::from(value))
            }
        }

        deserializer.deserialize_str(UnitVisitor)
    }
}
