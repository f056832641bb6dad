//! Adapter conformance checks
//!
//! Any calendar backend must pass these checks before the algebra's
//! guarantees hold. They are shipped as library code (not test-only)
//! so backend crates can run them from their own suites against
//! whatever probe instants exercise their edge cases.
//!
//! Checks never panic; every failed expectation, including an adapter
//! error where success was required, is reported as a violation.

use crate::adapter::CalendarAdapter;
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::instant::Instant;
use crate::unit::Unit;
use std::fmt;

/// One failed conformance expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Unit under check
    pub unit: Unit,
    /// Probe instant that exposed the failure
    pub probe: Instant,
    /// Name of the violated property
    pub check: &'static str,
    /// Human-readable detail
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violated for {} at {}: {}",
            self.check, self.unit, self.probe, self.detail
        )
    }
}

/// The base-hierarchy units a backend must support directly
///
/// `StableMonth` is excluded: its boundaries are derived by the
/// registry, not supplied by the backend.
pub const ADAPTER_UNITS: [Unit; 11] = [
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
];

/// Run the full conformance suite over the given probe instants
///
/// Returns all violations found; an empty vector means the backend is
/// conformant for these probes.
pub fn verify(
    adapter: &dyn CalendarAdapter,
    config: &CalendarConfig,
    probes: &[Instant],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for &probe in probes {
        for unit in &ADAPTER_UNITS {
            check_unit(adapter, config, unit, probe, &mut violations);
        }
    }
    violations
}

/// Whether the backend passes the full suite for these probes
pub fn is_conformant(
    adapter: &dyn CalendarAdapter,
    config: &CalendarConfig,
    probes: &[Instant],
) -> bool {
    verify(adapter, config, probes).is_empty()
}

fn check_unit(
    adapter: &dyn CalendarAdapter,
    config: &CalendarConfig,
    unit: &Unit,
    probe: Instant,
    violations: &mut Vec<Violation>,
) {
    let record = |violations: &mut Vec<Violation>, check: &'static str, detail: String| {
        violations.push(Violation {
            unit: unit.clone(),
            probe,
            check,
            detail,
        });
    };

    let start = match adapter.start_of(probe, unit, config) {
        Ok(v) => v,
        Err(e) => {
            record(violations, "start_of", format!("adapter error: {}", e));
            return;
        }
    };
    let end = match adapter.end_of(probe, unit, config) {
        Ok(v) => v,
        Err(e) => {
            record(violations, "end_of", format!("adapter error: {}", e));
            return;
        }
    };

    // The probe must fall inside its own period
    if !(start <= probe && probe < end) {
        record(
            violations,
            "containment",
            format!("expected {} <= {} < {}", start, probe, end),
        );
    }

    // Idempotence: start_of(start_of(x, u), u) == start_of(x, u)
    match adapter.start_of(start, unit, config) {
        Ok(again) if again == start => {}
        Ok(again) => record(
            violations,
            "idempotence",
            format!("start_of(start_of(x)) = {}, start_of(x) = {}", again, start),
        ),
        Err(e) => record(violations, "idempotence", format!("adapter error: {}", e)),
    }

    // Closure: end_of(x, u) == start_of(add(x, 1, u), u)
    match step_start(adapter, config, unit, probe) {
        Ok(next_start) if next_start == end => {}
        Ok(next_start) => record(
            violations,
            "closure",
            format!("end_of(x) = {}, start_of(add(x, 1)) = {}", end, next_start),
        ),
        Err(e) => record(violations, "closure", format!("adapter error: {}", e)),
    }

    // diff(a, a, u) == 0
    match adapter.diff(probe, probe, unit, config) {
        Ok(0) => {}
        Ok(n) => record(violations, "diff_zero", format!("diff(x, x) = {}", n)),
        Err(e) => record(violations, "diff_zero", format!("adapter error: {}", e)),
    }
}

fn step_start(
    adapter: &dyn CalendarAdapter,
    config: &CalendarConfig,
    unit: &Unit,
    probe: Instant,
) -> Result<Instant> {
    let stepped = adapter.add(probe, 1, unit, config)?;
    adapter.start_of(stepped, unit, config)
}

// ============================================================================
// Leap-year chain checks
// ============================================================================

/// Proleptic Gregorian leap-year rule
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Verify leap-year correctness of year -> month -> day chains
///
/// For each `(year, probe)` pair the probe must lie inside the given
/// year; the check walks to February via month arithmetic and counts
/// its days via `diff`, expecting 29 exactly when the year is leap.
pub fn verify_leap_years(
    adapter: &dyn CalendarAdapter,
    config: &CalendarConfig,
    years: &[(i64, Instant)],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for &(year, probe) in years {
        if let Err(detail) = check_february(adapter, config, year, probe) {
            violations.push(Violation {
                unit: Unit::Month,
                probe,
                check: "leap_february",
                detail,
            });
        }
    }
    violations
}

fn check_february(
    adapter: &dyn CalendarAdapter,
    config: &CalendarConfig,
    year: i64,
    probe: Instant,
) -> std::result::Result<(), String> {
    let year_start = adapter
        .start_of(probe, &Unit::Year, config)
        .map_err(|e| format!("start_of(year): {}", e))?;
    let feb_start = adapter
        .add(year_start, 1, &Unit::Month, config)
        .map_err(|e| format!("add(1 month): {}", e))?;
    let feb_end = adapter
        .end_of(feb_start, &Unit::Month, config)
        .map_err(|e| format!("end_of(month): {}", e))?;
    let days = adapter
        .diff(feb_start, feb_end, &Unit::Day, config)
        .map_err(|e| format!("diff(day): {}", e))?;

    let expected = if is_leap_year(year) { 29 } else { 28 };
    if days != expected {
        return Err(format!(
            "February of {} has {} days, expected {}",
            year, days, expected
        ));
    }
    Ok(())
}
