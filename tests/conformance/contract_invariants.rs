//! Tier 1: the four contract invariants over every backend unit
//!
//! The shipped `conformance::verify` suite must come back empty for
//! the chrono backend, and must actually catch a broken backend.

use crate::test_utils::probes;
use tempora::conformance::{self, ADAPTER_UNITS};
use tempora::{
    CalendarAdapter, CalendarConfig, ChronoAdapter, Error, Instant, Result, Unit, WeekStartDay,
};

#[test]
fn contract_chrono_backend_is_conformant_for_every_week_start() {
    let adapter = ChronoAdapter::new();
    let probes = probes();
    for week_start in WeekStartDay::ALL {
        let config = CalendarConfig::new(week_start);
        let violations = conformance::verify(&adapter, &config, &probes);
        assert!(
            violations.is_empty(),
            "week_start {}: {:?}",
            week_start,
            violations
        );
    }
}

#[test]
fn contract_is_conformant_helper_agrees() {
    let adapter = ChronoAdapter::new();
    let config = CalendarConfig::default();
    assert!(conformance::is_conformant(&adapter, &config, &probes()));
}

#[test]
fn contract_covers_all_backend_units() {
    // StableMonth is registry-derived, everything else is checked
    assert_eq!(ADAPTER_UNITS.len(), 11);
    assert!(!ADAPTER_UNITS.contains(&Unit::StableMonth));
    for unit in Unit::BUILT_IN {
        if unit != Unit::StableMonth {
            assert!(ADAPTER_UNITS.contains(&unit), "missing {}", unit.id());
        }
    }
}

/// Delegates to chrono but reports every period end one millisecond
/// late, breaking the closure invariant.
struct SkewedAdapter(ChronoAdapter);

impl CalendarAdapter for SkewedAdapter {
    fn start_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant> {
        self.0.start_of(instant, unit, config)
    }

    fn end_of(&self, instant: Instant, unit: &Unit, config: &CalendarConfig) -> Result<Instant> {
        let end = self.0.end_of(instant, unit, config)?;
        end.checked_add_millis(1)
            .ok_or_else(|| Error::AdapterUnavailable("skew overflow".to_string()))
    }

    fn add(
        &self,
        instant: Instant,
        amount: i64,
        unit: &Unit,
        config: &CalendarConfig,
    ) -> Result<Instant> {
        self.0.add(instant, amount, unit, config)
    }

    fn diff(&self, a: Instant, b: Instant, unit: &Unit, config: &CalendarConfig) -> Result<i64> {
        self.0.diff(a, b, unit, config)
    }
}

#[test]
fn contract_suite_catches_a_skewed_backend() {
    let adapter = SkewedAdapter(ChronoAdapter::new());
    let config = CalendarConfig::default();
    let violations = conformance::verify(&adapter, &config, &[Instant::EPOCH]);

    assert!(!violations.is_empty());
    assert!(violations.iter().all(|v| v.check == "closure"));
    // every unit's closure breaks, not just one
    assert_eq!(violations.len(), ADAPTER_UNITS.len());
}
