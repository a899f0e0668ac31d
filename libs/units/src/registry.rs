//! Unit registry.
//!
//! The registry is the single source of truth for resolving a unit symbol to
//! its quantity and base-unit factor; nothing outside it caches or recomputes
//! that mapping. Lookups are exact symbol matches with no case normalization
//! or fuzzy matching. Entries are only ever added, never replaced or removed.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::catalog;
use crate::error::{Error, Result};
use crate::unit::Unit;

/// Symbol-keyed set of known units.
///
/// Reads vastly outnumber writes (registration normally happens once at
/// startup), so the map sits behind a reader/writer lock and [`register`]
/// takes `&self`. A registry can be shared freely across threads.
///
/// [`register`]: UnitRegistry::register
#[derive(Debug, Default)]
pub struct UnitRegistry {
    units: RwLock<HashMap<String, Unit>>,
}

impl UnitRegistry {
    /// Empty registry, for isolated or experimental unit sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh registry seeded with the built-in catalog.
    pub fn with_default_units() -> Self {
        let registry = Self::new();
        {
            let mut units = registry.units.write().expect("unit registry lock poisoned");
            for unit in catalog::default_units() {
                units.insert(unit.symbol.clone(), unit);
            }
        }
        registry
    }

    /// Looks up a unit by exact symbol match.
    pub fn get(&self, symbol: &str) -> Option<Unit> {
        self.units
            .read()
            .expect("unit registry lock poisoned")
            .get(symbol)
            .cloned()
    }

    /// Like [`get`](UnitRegistry::get), but with the typed error fallible
    /// call sites report.
    pub(crate) fn resolve(&self, symbol: &str) -> Result<Unit> {
        self.get(symbol)
            .ok_or_else(|| Error::UnitNotRegistered(symbol.to_string()))
    }

    /// Adds a unit under its symbol.
    ///
    /// Fails with [`Error::AlreadyRegistered`] and leaves the registry
    /// untouched when the symbol is already taken. The unit's quantity and
    /// factor are not validated.
    pub fn register(&self, unit: Unit) -> Result<()> {
        let mut units = self.units.write().expect("unit registry lock poisoned");
        if units.contains_key(&unit.symbol) {
            return Err(Error::AlreadyRegistered(unit.symbol));
        }
        units.insert(unit.symbol.clone(), unit);
        Ok(())
    }
}
