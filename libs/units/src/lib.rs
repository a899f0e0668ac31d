#![forbid(unsafe_code)]

//! Unit-of-measure conversion with exact decimal arithmetic.
//!
//! A [`Measurement`] pairs a [`rust_decimal::Decimal`] value with a unit
//! symbol and converts between units of the same physical quantity by
//! routing through the quantity's canonical base unit. Symbols resolve
//! against a [`UnitRegistry`]; a catalog-seeded process-wide default is
//! available through [`default_registry`].
//!
//! ```
//! use mensura_units::{default_registry, Measurement};
//!
//! let grams = Measurement::parse("1000", "g", default_registry()).unwrap();
//! let kilos = grams.convert_to("kg").unwrap();
//! assert_eq!(kilos, Measurement::parse("1", "kg", default_registry()).unwrap());
//! ```

mod catalog;
mod error;
mod measurement;
mod quantity;
mod registry;
mod unit;

use once_cell::sync::Lazy;

pub use error::{Error, Result};
pub use measurement::Measurement;
pub use quantity::Quantity;
pub use registry::UnitRegistry;
pub use unit::Unit;

static DEFAULT_REGISTRY: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::with_default_units);

/// Process-wide registry seeded with the built-in catalog.
///
/// Constructed on first use and never torn down; units registered here stay
/// visible for the lifetime of the process. Construct a [`UnitRegistry`]
/// directly for an isolated unit set.
pub fn default_registry() -> &'static UnitRegistry {
    &DEFAULT_REGISTRY
}
