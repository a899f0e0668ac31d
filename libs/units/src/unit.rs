use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;

/// A named unit together with the multiplicative factor that converts one of
/// it into the canonical base unit of its quantity.
///
/// Base units carry a factor of exactly 1. Conventionally each quantity has
/// one base unit, but the registry does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    /// Registry key, e.g. `"kg"` or `"Btu"`. Matched exactly, case included.
    pub symbol: String,
    /// Human-readable name, e.g. `"kilogram"`.
    pub name: String,
    pub quantity: Quantity,
    /// Factor to the base unit of `quantity`.
    pub to_base: Decimal,
}

impl Unit {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: Quantity,
        to_base: Decimal,
    ) -> Self {
        Unit {
            symbol: symbol.into(),
            name: name.into(),
            quantity,
            to_base,
        }
    }

    /// Whether this unit is the canonical base of its quantity.
    pub fn is_base(&self) -> bool {
        self.to_base == Decimal::ONE
    }
}
