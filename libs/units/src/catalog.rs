//! Built-in unit catalog.
//!
//! Mass, volume and energy carry full unit sets; length, time, temperature,
//! electric current and area ship their base units (plus minute/hour for
//! time). Pound, ounce and gallon factors are the exact international
//! definitions.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::quantity::Quantity;
use crate::unit::Unit;

// Seed factors are compile-time constants; a malformed literal here is a
// programming error, so this parse is allowed to panic. Runtime input must
// go through the fallible constructors instead.
fn dec(literal: &str) -> Decimal {
    Decimal::from_str(literal).expect("malformed built-in conversion factor")
}

pub(crate) fn default_units() -> Vec<Unit> {
    vec![
        // Length
        Unit::new("m", "meter", Quantity::Length, Decimal::ONE),
        // Mass
        Unit::new("g", "gram", Quantity::Mass, dec("0.001")),
        Unit::new("kg", "kilogram", Quantity::Mass, Decimal::ONE),
        Unit::new("t", "tonne", Quantity::Mass, dec("1000")),
        Unit::new("oz", "ounce", Quantity::Mass, dec("0.028349523125")),
        Unit::new("lb", "pound", Quantity::Mass, dec("0.45359237")),
        Unit::new("T", "short ton", Quantity::Mass, dec("907.18474")),
        Unit::new("lt", "long ton", Quantity::Mass, dec("1016.0469088")),
        // Time
        Unit::new("s", "second", Quantity::Time, Decimal::ONE),
        Unit::new("min", "minute", Quantity::Time, dec("60")),
        Unit::new("hr", "hour", Quantity::Time, dec("3600")),
        // Temperature
        Unit::new("K", "kelvin", Quantity::Temperature, Decimal::ONE),
        // Electric current
        Unit::new("A", "ampere", Quantity::Current, Decimal::ONE),
        // Area
        Unit::new("m2", "square meter", Quantity::Area, Decimal::ONE),
        // Volume
        Unit::new("m3", "cubic meter", Quantity::Volume, Decimal::ONE),
        Unit::new("L", "liter", Quantity::Volume, dec("0.001")),
        Unit::new("gal", "gallon", Quantity::Volume, dec("0.003785411784")),
        // Energy
        Unit::new("J", "joule", Quantity::Energy, Decimal::ONE),
        Unit::new("kJ", "kilojoule", Quantity::Energy, dec("1000")),
        Unit::new("MJ", "megajoule", Quantity::Energy, dec("1000000")),
        Unit::new("cal", "calorie", Quantity::Energy, dec("4.184")),
        Unit::new("kcal", "kilocalorie", Quantity::Energy, dec("4184")),
        Unit::new("Wh", "watt-hour", Quantity::Energy, dec("3600")),
        Unit::new("kWh", "kilowatt-hour", Quantity::Energy, dec("3600000")),
        Unit::new("Btu", "British thermal unit", Quantity::Energy, dec("1055.056")),
        Unit::new(
            "MMBtu",
            "million British thermal units",
            Quantity::Energy,
            dec("1055056000"),
        ),
        Unit::new("thm", "therm", Quantity::Energy, dec("105505600")),
        Unit::new("dth", "decatherm", Quantity::Energy, dec("1055056000")),
    ]
}
