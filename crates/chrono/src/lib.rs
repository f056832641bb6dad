//! Proleptic Gregorian calendar backend
//!
//! `ChronoAdapter` implements the four adapter primitives on top of
//! the `chrono` crate, interpreting instants as UTC wall-clock time on
//! the proleptic Gregorian calendar. There are no time zones and no
//! leap seconds: a day is exactly 86,400,000 milliseconds.
//!
//! ## Overflow policy
//!
//! Month-granular arithmetic clamps to the last valid day of the
//! target month (`Jan 31 + 1 month = Feb 28`, or `Feb 29` in a leap
//! year). Instants outside chrono's representable year range surface
//! as `AdapterUnavailable`, never as a panic.

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use tempora_core::{CalendarAdapter, CalendarConfig, Error, Instant, Result, Unit};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// Calendar adapter backed by `chrono`'s proleptic Gregorian calendar
///
/// Stateless and trivially cloneable; the week start day and any other
/// calendar configuration arrive by reference on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoAdapter;

impl ChronoAdapter {
    /// Create a new adapter
    pub const fn new() -> Self {
        ChronoAdapter
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_datetime(instant: Instant) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(instant.as_millis()).ok_or_else(|| {
        Error::AdapterUnavailable(format!(
            "instant {} is outside the representable calendar range",
            instant
        ))
    })
}

fn midnight(year: i32, month: u32, day: u32) -> Result<Instant> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::AdapterUnavailable(format!(
            "date {:04}-{:02}-{:02} is outside the representable calendar range",
            year, month, day
        ))
    })?;
    let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    Ok(Instant::from_millis(millis))
}

/// Millisecond length of a unit with calendar-independent duration
fn fixed_millis(unit: &Unit) -> Option<i64> {
    match unit {
        Unit::Second => Some(MILLIS_PER_SECOND),
        Unit::Minute => Some(MILLIS_PER_MINUTE),
        Unit::Hour => Some(MILLIS_PER_HOUR),
        Unit::Day => Some(MILLIS_PER_DAY),
        Unit::Week => Some(MILLIS_PER_WEEK),
        _ => None,
    }
}

/// Floor an instant to a multiple of `len` milliseconds
///
/// Euclidean remainder keeps pre-epoch instants flooring toward the
/// past rather than toward zero.
fn floor_to(instant: Instant, len: i64) -> Result<Instant> {
    let millis = instant.as_millis();
    millis
        .checked_sub(millis.rem_euclid(len))
        .map(Instant::from_millis)
        .ok_or_else(|| {
            Error::AdapterUnavailable(format!(
                "instant {} cannot be floored within the representable range",
                instant
            ))
        })
}

fn floor_year_span(year: i32, span: i32) -> Result<Instant> {
    midnight(year - year.rem_euclid(span), 1, 1)
}

fn add_months(instant: Instant, months: i64) -> Result<Instant> {
    let dt = to_datetime(instant)?;
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| {
        Error::AdapterUnavailable(format!("month offset {} exceeds the calendar range", months))
    })?;
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(magnitude))
    } else {
        dt.checked_sub_months(Months::new(magnitude))
    }
    .ok_or_else(|| {
        Error::AdapterUnavailable(format!(
            "adding {} months to {} leaves the representable calendar range",
            months, instant
        ))
    })?;
    Ok(Instant::from_millis(shifted.timestamp_millis()))
}

/// Months in one step of a month-granular unit
fn months_per(unit: &Unit) -> Option<i64> {
    match unit {
        Unit::Month => Some(1),
        Unit::Quarter => Some(3),
        Unit::Year => Some(12),
        Unit::Decade => Some(120),
        Unit::Century => Some(1_200),
        Unit::Millennium => Some(12_000),
        _ => None,
    }
}

fn unknown(unit: &Unit) -> Error {
    Error::UnknownUnit(unit.id().to_string())
}

// ============================================================================
// Adapter implementation
// ============================================================================

impl CalendarAdapter for ChronoAdapter {
    fn start_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant> {
        match unit {
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => {
                // Unwrap is avoided: fixed_millis covers these four.
                match fixed_millis(unit) {
                    Some(len) => floor_to(instant, len),
                    None => Err(unknown(unit)),
                }
            }
            Unit::Week => {
                let day = floor_to(instant, MILLIS_PER_DAY)?;
                let dow = i64::from(to_datetime(day)?.weekday().num_days_from_sunday());
                let offset = (dow + 7 - i64::from(config.week_start.as_u8())) % 7;
                day.checked_add_millis(-offset * MILLIS_PER_DAY).ok_or_else(|| {
                    Error::AdapterUnavailable(format!(
                        "week containing {} starts before the representable range",
                        instant
                    ))
                })
            }
            Unit::Month => {
                let dt = to_datetime(instant)?;
                midnight(dt.year(), dt.month(), 1)
            }
            Unit::Quarter => {
                let dt = to_datetime(instant)?;
                midnight(dt.year(), dt.month0() / 3 * 3 + 1, 1)
            }
            Unit::Year => {
                let dt = to_datetime(instant)?;
                midnight(dt.year(), 1, 1)
            }
            Unit::Decade => floor_year_span(to_datetime(instant)?.year(), 10),
            Unit::Century => floor_year_span(to_datetime(instant)?.year(), 100),
            Unit::Millennium => floor_year_span(to_datetime(instant)?.year(), 1_000),
            Unit::StableMonth | Unit::Custom(_) => Err(unknown(unit)),
        }
    }

    fn end_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant> {
        // From an aligned start, one unit step is always exact: no
        // clamping can occur when the day of month is 1.
        let start = self.start_of(instant, unit, config)?;
        self.add(start, 1, unit, config)
    }

    fn add(
        &self,
        instant: Instant,
        amount: i64,
        unit: &Unit,
        _config: &CalendarConfig,
    ) -> Result<Instant> {
        if let Some(len) = fixed_millis(unit) {
            return amount
                .checked_mul(len)
                .and_then(|offset| instant.checked_add_millis(offset))
                .ok_or_else(|| {
                    Error::AdapterUnavailable(format!(
                        "adding {} {} to {} overflows the time line",
                        amount,
                        unit.id(),
                        instant
                    ))
                });
        }
        match months_per(unit) {
            Some(step) => {
                let months = amount.checked_mul(step).ok_or_else(|| {
                    Error::AdapterUnavailable(format!(
                        "offset of {} {} exceeds the calendar range",
                        amount,
                        unit.id()
                    ))
                })?;
                add_months(instant, months)
            }
            None => Err(unknown(unit)),
        }
    }

    fn diff(&self, a: Instant, b: Instant, unit: &Unit, config: &CalendarConfig) -> Result<i64> {
        match unit {
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => match fixed_millis(unit) {
                Some(len) => {
                    Ok(b.as_millis().div_euclid(len) - a.as_millis().div_euclid(len))
                }
                None => Err(unknown(unit)),
            },
            Unit::Week => {
                let wa = self.start_of(a, unit, config)?;
                let wb = self.start_of(b, unit, config)?;
                Ok(wb.millis_since(wa) / MILLIS_PER_WEEK)
            }
            Unit::Month => Ok(month_index(b)? - month_index(a)?),
            Unit::Quarter => Ok(quarter_index(b)? - quarter_index(a)?),
            Unit::Year => Ok(i64::from(to_datetime(b)?.year()) - i64::from(to_datetime(a)?.year())),
            Unit::Decade => year_span_diff(a, b, 10),
            Unit::Century => year_span_diff(a, b, 100),
            Unit::Millennium => year_span_diff(a, b, 1_000),
            Unit::StableMonth | Unit::Custom(_) => Err(unknown(unit)),
        }
    }
}

/// Absolute month index (year * 12 + zero-based month)
fn month_index(instant: Instant) -> Result<i64> {
    let dt = to_datetime(instant)?;
    Ok(i64::from(dt.year()) * 12 + i64::from(dt.month0()))
}

fn quarter_index(instant: Instant) -> Result<i64> {
    let dt = to_datetime(instant)?;
    Ok(i64::from(dt.year()) * 4 + i64::from(dt.month0() / 3))
}

fn year_span_diff(a: Instant, b: Instant, span: i64) -> Result<i64> {
    let ya = i64::from(to_datetime(a)?.year());
    let yb = i64::from(to_datetime(b)?.year());
    Ok(yb.div_euclid(span) - ya.div_euclid(span))
}

// ============================================================================
// Tests
// ============================================================================
