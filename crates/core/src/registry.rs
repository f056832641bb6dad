//! Unit registry
//!
//! Maps unit ids to their metadata: parent in the base hierarchy, the
//! set of units they may be divided into, and an optional boundary
//! strategy for units whose boundaries derive from other units instead
//! of coming straight from the calendar backend.
//!
//! The registry is a pure data/function table consulted at divide
//! time. Callers extend it with new unit ids without modifying the
//! core algebra.

use crate::adapter::CalendarAdapter;
use crate::config::CalendarConfig;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::unit::Unit;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Errors raised when registering a unit definition
///
/// Registration problems are caller bugs, distinct from the runtime
/// taxonomy in [`crate::Error`], so they get their own type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A unit id was registered twice
    #[error("unit {0} is already registered")]
    DuplicateUnit(String),

    /// A definition listed itself in its divisibility set
    #[error("unit {0} cannot be divisible into itself")]
    SelfDivision(String),

    /// A divisibility target is not registered yet
    ///
    /// Targets must pre-exist, which also makes divisibility cycles
    /// unrepresentable: a new unit can never already appear in an
    /// existing unit's set.
    #[error("unit {unit} lists unregistered division target {target}")]
    UnknownTarget {
        /// Unit being registered
        unit: String,
        /// Missing divisibility target
        target: String,
    },

    /// A parent reference points at an unregistered unit
    #[error("unit {unit} lists unregistered parent {parent}")]
    UnknownParent {
        /// Unit being registered
        unit: String,
        /// Missing parent
        parent: String,
    },
}

/// Boundary computation for units the backend does not know
///
/// Derived and caller-registered units express their boundaries in
/// terms of the adapter primitives. The registry stores the strategy
/// as data and consults it whenever such a unit's boundaries are
/// resolved.
pub trait BoundaryStrategy: Send + Sync {
    /// Earliest instant of the unit-period containing `instant`
    ///
    /// # Errors
    ///
    /// Propagates adapter failures.
    fn start_of(
        &self,
        adapter: &dyn CalendarAdapter,
        config: &CalendarConfig,
        instant: Instant,
    ) -> Result<Instant>;

    /// Exclusive end of the unit-period containing `instant`
    ///
    /// # Errors
    ///
    /// Propagates adapter failures.
    fn end_of(
        &self,
        adapter: &dyn CalendarAdapter,
        config: &CalendarConfig,
        instant: Instant,
    ) -> Result<Instant>;
}

/// Metadata for one registered unit
#[derive(Clone)]
pub struct UnitDefinition {
    unit: Unit,
    parent: Option<Unit>,
    divisible_into: BTreeSet<Unit>,
    strategy: Option<Arc<dyn BoundaryStrategy>>,
}

impl UnitDefinition {
    /// Create a definition with no boundary strategy (backend-resolved)
    pub fn new(
        unit: Unit,
        parent: Option<Unit>,
        divisible_into: impl IntoIterator<Item = Unit>,
    ) -> Self {
        UnitDefinition {
            unit,
            parent,
            divisible_into: divisible_into.into_iter().collect(),
            strategy: None,
        }
    }

    /// Attach a boundary strategy
    pub fn with_strategy(mut self, strategy: Arc<dyn BoundaryStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// The unit this definition describes
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Parent unit in the hierarchy, if any
    pub fn parent(&self) -> Option<&Unit> {
        self.parent.as_ref()
    }

    /// Units this unit may be divided into
    pub fn divisible_into(&self) -> &BTreeSet<Unit> {
        &self.divisible_into
    }

    /// Boundary strategy, if boundaries are derived
    pub fn strategy(&self) -> Option<&Arc<dyn BoundaryStrategy>> {
        self.strategy.as_ref()
    }
}

impl fmt::Debug for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitDefinition")
            .field("unit", &self.unit)
            .field("parent", &self.parent)
            .field("divisible_into", &self.divisible_into)
            .field("strategy", &self.strategy.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ============================================================================
// Stable month boundary strategy
// ============================================================================

/// Week-aligned 42-day grid fully containing the calendar month
///
/// The grid starts on the configured week start day at or before the
/// first instant of the month and always spans exactly 6 whole weeks,
/// so month grids render at a fixed height.
struct StableMonthStrategy;

impl BoundaryStrategy for StableMonthStrategy {
    fn start_of(
        &self,
        adapter: &dyn CalendarAdapter,
        config: &CalendarConfig,
        instant: Instant,
    ) -> Result<Instant> {
        let month_start = adapter.start_of(instant, &Unit::Month, config)?;
        adapter.start_of(month_start, &Unit::Week, config)
    }

    fn end_of(
        &self,
        adapter: &dyn CalendarAdapter,
        config: &CalendarConfig,
        instant: Instant,
    ) -> Result<Instant> {
        let grid_start = self.start_of(adapter, config, instant)?;
        adapter.add(grid_start, 42, &Unit::Day, config)
    }
}

// ============================================================================
// Base hierarchy
// ============================================================================

/// The fixed base hierarchy shipped with every registry
///
/// Divisibility sets admit only targets whose boundaries nest cleanly:
/// weeks cross month and year boundaries, so nothing lists `week`
/// except the week-aligned stable month.
static BASE_DEFINITIONS: Lazy<Vec<UnitDefinition>> = Lazy::new(|| {
    vec![
        UnitDefinition::new(
            Unit::Millennium,
            None,
            [Unit::Century, Unit::Decade, Unit::Year],
        ),
        UnitDefinition::new(
            Unit::Century,
            Some(Unit::Millennium),
            [Unit::Decade, Unit::Year],
        ),
        UnitDefinition::new(Unit::Decade, Some(Unit::Century), [Unit::Year]),
        UnitDefinition::new(
            Unit::Year,
            Some(Unit::Decade),
            [Unit::Quarter, Unit::Month, Unit::Day],
        ),
        UnitDefinition::new(Unit::Quarter, Some(Unit::Year), [Unit::Month, Unit::Day]),
        UnitDefinition::new(Unit::Month, Some(Unit::Year), [Unit::Day]),
        UnitDefinition::new(Unit::Week, Some(Unit::Year), [Unit::Day]),
        UnitDefinition::new(Unit::Day, Some(Unit::Month), [Unit::Hour]),
        UnitDefinition::new(Unit::Hour, Some(Unit::Day), [Unit::Minute]),
        UnitDefinition::new(Unit::Minute, Some(Unit::Hour), [Unit::Second]),
        UnitDefinition::new(Unit::Second, Some(Unit::Minute), []),
        UnitDefinition::new(
            Unit::StableMonth,
            Some(Unit::Month),
            [Unit::Week, Unit::Day],
        )
        .with_strategy(Arc::new(StableMonthStrategy)),
    ]
});

// ============================================================================
// Registry
// ============================================================================

/// Catalogue of unit definitions, open for extension
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: HashMap<Unit, UnitDefinition>,
}

impl UnitRegistry {
    /// Create a registry seeded with the base hierarchy
    pub fn with_base_units() -> Self {
        let units = BASE_DEFINITIONS
            .iter()
            .map(|def| (def.unit.clone(), def.clone()))
            .collect();
        UnitRegistry { units }
    }

    /// Register a caller-defined unit
    ///
    /// Validation: ids are unique (built-ins cannot be shadowed), a
    /// unit never divides into itself, and every divisibility target
    /// and parent must already be registered.
    ///
    /// # Errors
    /// Returns a [`RegistryError`] describing the violated rule.
    pub fn register(
        &mut self,
        definition: UnitDefinition,
    ) -> std::result::Result<(), RegistryError> {
        let id = definition.unit.id().to_string();
        if self.units.contains_key(&definition.unit) {
            return Err(RegistryError::DuplicateUnit(id));
        }
        if definition.divisible_into.contains(&definition.unit) {
            return Err(RegistryError::SelfDivision(id));
        }
        for target in &definition.divisible_into {
            if !self.units.contains_key(target) {
                return Err(RegistryError::UnknownTarget {
                    unit: id,
                    target: target.id().to_string(),
                });
            }
        }
        if let Some(parent) = &definition.parent {
            if !self.units.contains_key(parent) {
                return Err(RegistryError::UnknownParent {
                    unit: id,
                    parent: parent.id().to_string(),
                });
            }
        }
        self.units.insert(definition.unit.clone(), definition);
        Ok(())
    }

    /// Look up a unit definition
    ///
    /// # Errors
    /// Returns `UnknownUnit` for unregistered ids.
    pub fn get(&self, unit: &Unit) -> Result<&UnitDefinition> {
        self.units
            .get(unit)
            .ok_or_else(|| Error::UnknownUnit(unit.id().to_string()))
    }

    /// Whether a unit is registered
    pub fn contains(&self, unit: &Unit) -> bool {
        self.units.contains_key(unit)
    }

    /// Iterate over all registered units
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.keys()
    }

    /// Validate that `source` may be divided into `target`
    ///
    /// # Errors
    /// `UnknownUnit` when either unit is unregistered,
    /// `InvalidDivision` when the target is not in the source's
    /// divisibility set.
    pub fn validate_division(&self, source: &Unit, target: &Unit) -> Result<()> {
        let def = self.get(source)?;
        self.get(target)?;
        if !def.divisible_into.contains(target) {
            return Err(Error::InvalidDivision {
                source_unit: source.id().to_string(),
                target_unit: target.id().to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the start boundary of `unit` at `instant`
    ///
    /// Consults the unit's strategy when present, otherwise delegates
    /// to the adapter.
    ///
    /// # Errors
    /// `UnknownUnit` for unregistered units; adapter failures
    /// propagate.
    pub fn resolve_start(
        &self,
        adapter: &dyn CalendarAdapter,
        config: &CalendarConfig,
        unit: &Unit,
        instant: Instant,
    ) -> Result<Instant> {
        let def = self.get(unit)?;
        match &def.strategy {
            Some(strategy) => strategy.start_of(adapter, config, instant),
            None => adapter.start_of(instant, unit, config),
        }
    }

    /// Resolve the exclusive end boundary of `unit` at `instant`
    ///
    /// # Errors
    /// `UnknownUnit` for unregistered units; adapter failures
    /// propagate.
    pub fn resolve_end(
        &self,
        adapter: &dyn CalendarAdapter,
        config: &CalendarConfig,
        unit: &Unit,
        instant: Instant,
    ) -> Result<Instant> {
        let def = self.get(unit)?;
        match &def.strategy {
            Some(strategy) => strategy.end_of(adapter, config, instant),
            None => adapter.end_of(instant, unit, config),
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        UnitRegistry::with_base_units()
    }
}
