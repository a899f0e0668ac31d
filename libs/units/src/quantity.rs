//! Physical quantities.
//!
//! A quantity is the tag that decides convertibility: two units can be
//! converted into one another iff they share a quantity. There is no
//! derivation between quantities (mass over time does not produce a new
//! quantity here), so the set is a closed enum rather than an open string
//! tag.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The physical dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    Length,
    Mass,
    Time,
    Temperature,
    Current,
    Area,
    Volume,
    Energy,
}

impl Quantity {
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Mass => "mass",
            Quantity::Time => "time",
            Quantity::Temperature => "temperature",
            Quantity::Current => "electric current",
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::Energy => "energy",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
