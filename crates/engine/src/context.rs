//! Temporal context
//!
//! The single object threaded through all engine operations: the
//! injected calendar adapter, the construction-time configuration,
//! the unit registry, and the two session periods (`browsing` and
//! `now`).
//!
//! One context per session. The only mutable state is `browsing` and
//! `now`, owned by a single logical writer; every other field is set
//! once at construction. Period values handed out are immutable
//! copies.

use crate::factory::period_of;
use crate::navigate::{go, next, previous};
use std::fmt;
use std::sync::Arc;
use tempora_core::{
    CalendarAdapter, CalendarConfig, Instant, Period, RegistryError, Result, Unit, UnitDefinition,
    UnitRegistry, WeekStartDay,
};

/// Aggregate of adapter, configuration, registry and session periods
pub struct TemporalContext {
    adapter: Arc<dyn CalendarAdapter>,
    config: CalendarConfig,
    registry: UnitRegistry,
    browsing: Period,
    now: Period,
}

impl TemporalContext {
    /// Create a context with an explicitly injected adapter
    ///
    /// Seeds the registry with the base hierarchy and sets both `now`
    /// and `browsing` to the `unit`-period containing `now_instant`.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures; `UnknownUnit` if `unit` is not a
    /// base unit.
    pub fn new(
        adapter: Arc<dyn CalendarAdapter>,
        week_start: WeekStartDay,
        unit: &Unit,
        now_instant: Instant,
    ) -> Result<Self> {
        let config = CalendarConfig::new(week_start);
        let registry = UnitRegistry::with_base_units();
        let start = registry.resolve_start(adapter.as_ref(), &config, unit, now_instant)?;
        let end = registry.resolve_end(adapter.as_ref(), &config, unit, now_instant)?;
        let now = Period::new(unit.clone(), start, end, now_instant)?;
        Ok(TemporalContext {
            adapter,
            config,
            registry,
            browsing: now.clone(),
            now,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The injected calendar backend
    pub fn adapter(&self) -> &dyn CalendarAdapter {
        self.adapter.as_ref()
    }

    /// Construction-time configuration
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The unit registry
    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// The period currently being browsed
    pub fn browsing(&self) -> &Period {
        &self.browsing
    }

    /// The period containing "now"
    pub fn now(&self) -> &Period {
        &self.now
    }

    // =========================================================================
    // Registry extension
    // =========================================================================

    /// Register a caller-defined unit
    ///
    /// # Errors
    /// Returns a [`RegistryError`] when the definition violates a
    /// registration rule.
    pub fn register_unit(
        &mut self,
        definition: UnitDefinition,
    ) -> std::result::Result<(), RegistryError> {
        self.registry.register(definition)
    }

    // =========================================================================
    // Session mutators (single writer)
    // =========================================================================

    /// Replace the browsing period
    pub fn set_browsing(&mut self, period: Period) {
        self.browsing = period;
    }

    /// Browse to the `unit`-period containing `instant`
    ///
    /// # Errors
    ///
    /// Propagates factory failures; `browsing` is left untouched on
    /// error.
    pub fn browse_to(&mut self, unit: &Unit, instant: Instant) -> Result<&Period> {
        let period = period_of(self, unit, instant)?;
        tracing::debug!(period = %period, "browse_to");
        self.browsing = period;
        Ok(&self.browsing)
    }

    /// Advance the browsing period to its successor
    ///
    /// # Errors
    ///
    /// Propagates navigation failures; `browsing` is left untouched
    /// on error.
    pub fn browse_next(&mut self) -> Result<&Period> {
        let current = self.browsing.clone();
        let period = next(self, &current)?;
        self.browsing = period;
        Ok(&self.browsing)
    }

    /// Move the browsing period to its predecessor
    ///
    /// # Errors
    ///
    /// Propagates navigation failures; `browsing` is left untouched
    /// on error.
    pub fn browse_previous(&mut self) -> Result<&Period> {
        let current = self.browsing.clone();
        let period = previous(self, &current)?;
        self.browsing = period;
        Ok(&self.browsing)
    }

    /// Jump the browsing period by a signed number of its own units
    ///
    /// # Errors
    ///
    /// Propagates navigation failures; `browsing` is left untouched
    /// on error.
    pub fn browse_by(&mut self, amount: i64) -> Result<&Period> {
        let current = self.browsing.clone();
        let period = go(self, &current, amount)?;
        self.browsing = period;
        Ok(&self.browsing)
    }

    /// Recompute `now` from a fresh instant, keeping its unit
    ///
    /// # Errors
    ///
    /// Propagates factory failures; `now` is left untouched on error.
    pub fn update_now(&mut self, instant: Instant) -> Result<&Period> {
        let unit = self.now.unit().clone();
        let period = period_of(self, &unit, instant)?;
        self.now = period;
        Ok(&self.now)
    }
}

impl fmt::Debug for TemporalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalContext")
            .field("config", &self.config)
            .field("browsing", &self.browsing)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
