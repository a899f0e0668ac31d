//! Measurements: an exact decimal value tagged with a unit.
//!
//! Conversion routes through the canonical base unit of the quantity, so
//! adding a new unit only needs its factor to the base, not a factor to
//! every other unit.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::registry::UnitRegistry;
use crate::unit::Unit;

/// A decimal value tagged with a unit symbol.
///
/// The symbol is a lookup key into the registry the measurement was created
/// against, not an owned copy of the unit: every operation re-resolves it,
/// so units registered after construction are visible to later operations on
/// existing measurements. Constructors fail with [`Error::UnitNotRegistered`]
/// when the symbol does not resolve at creation time.
///
/// Measurements are immutable; every operation returns a new value.
#[derive(Debug, Clone)]
pub struct Measurement<'r> {
    value: Decimal,
    symbol: String,
    registry: &'r UnitRegistry,
}

impl<'r> Measurement<'r> {
    /// Tags an already-built decimal value with a unit.
    pub fn new(value: Decimal, symbol: &str, registry: &'r UnitRegistry) -> Result<Self> {
        registry.resolve(symbol)?;
        Ok(Measurement {
            value,
            symbol: symbol.to_string(),
            registry,
        })
    }

    /// Parses a decimal literal, e.g. `Measurement::parse("12.5", "kg", reg)`.
    pub fn parse(literal: &str, symbol: &str, registry: &'r UnitRegistry) -> Result<Self> {
        let value = Decimal::from_str(literal)?;
        Self::new(value, symbol, registry)
    }

    /// Builds a measurement from an integer, exactly.
    pub fn from_int(value: i64, symbol: &str, registry: &'r UnitRegistry) -> Result<Self> {
        Self::new(Decimal::from(value), symbol, registry)
    }

    /// Builds a measurement from a float.
    ///
    /// Fails with [`Error::UnrepresentableFloat`] for NaN and infinities.
    pub fn from_f64(value: f64, symbol: &str, registry: &'r UnitRegistry) -> Result<Self> {
        let value = Decimal::from_f64(value).ok_or(Error::UnrepresentableFloat(value))?;
        Self::new(value, symbol, registry)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Resolves this measurement's unit metadata from the registry.
    pub fn unit(&self) -> Result<Unit> {
        self.registry.resolve(&self.symbol)
    }

    /// Converts into the unit named by `target_symbol`.
    ///
    /// Both units must belong to the same quantity; there is no implicit
    /// cross-quantity conversion. The value is taken to the quantity's base
    /// unit and divided back out by the target factor, with no rounding
    /// beyond what decimal division itself imposes.
    pub fn convert_to(&self, target_symbol: &str) -> Result<Self> {
        let source = self.registry.resolve(&self.symbol)?;
        let target = self.registry.resolve(target_symbol)?;

        if source.quantity != target.quantity {
            return Err(Error::QuantityMismatch {
                from: source.quantity,
                target: target.quantity,
            });
        }

        let value_in_base = self
            .value
            .checked_mul(source.to_base)
            .ok_or(Error::Overflow)?;
        // Registration does not validate factors, so a zero target factor
        // is representable.
        let value = value_in_base
            .checked_div(target.to_base)
            .ok_or_else(|| {
                if target.to_base.is_zero() {
                    Error::DivisionByZero
                } else {
                    Error::Overflow
                }
            })?;

        Ok(Measurement {
            value,
            symbol: target_symbol.to_string(),
            registry: self.registry,
        })
    }

    /// Adds `other` after converting it into this measurement's unit.
    ///
    /// The result carries this measurement's unit. Fails with
    /// [`Error::QuantityMismatch`] when the operands' quantities differ.
    pub fn add(&self, other: &Measurement<'_>) -> Result<Self> {
        let other = other.convert_to(&self.symbol)?;
        let value = self
            .value
            .checked_add(other.value)
            .ok_or(Error::Overflow)?;
        Ok(Measurement {
            value,
            symbol: self.symbol.clone(),
            registry: self.registry,
        })
    }

    /// Subtracts `other` after converting it into this measurement's unit.
    pub fn sub(&self, other: &Measurement<'_>) -> Result<Self> {
        let other = other.convert_to(&self.symbol)?;
        let value = self
            .value
            .checked_sub(other.value)
            .ok_or(Error::Overflow)?;
        Ok(Measurement {
            value,
            symbol: self.symbol.clone(),
            registry: self.registry,
        })
    }

    /// Multiplies by a dimensionless scalar; the unit is unchanged.
    pub fn scalar_mul(&self, scalar: Decimal) -> Result<Self> {
        let value = self.value.checked_mul(scalar).ok_or(Error::Overflow)?;
        Ok(Measurement {
            value,
            symbol: self.symbol.clone(),
            registry: self.registry,
        })
    }

    /// Divides by a dimensionless scalar; the unit is unchanged.
    ///
    /// Fails with [`Error::DivisionByZero`] when `scalar` is zero.
    pub fn scalar_div(&self, scalar: Decimal) -> Result<Self> {
        if scalar.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let value = self.value.checked_div(scalar).ok_or(Error::Overflow)?;
        Ok(Measurement {
            value,
            symbol: self.symbol.clone(),
            registry: self.registry,
        })
    }
}

/// Value equality: same symbol and numerically equal decimals, so
/// `1.000 kg == 1 kg` regardless of scale.
impl PartialEq for Measurement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.value == other.value
    }
}

impl fmt::Display for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.symbol)
    }
}
