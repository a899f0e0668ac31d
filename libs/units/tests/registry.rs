use mensura_units::{default_registry, Error, Measurement, Quantity, Unit, UnitRegistry};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(literal: &str) -> Decimal {
    Decimal::from_str(literal).unwrap()
}

#[test]
fn custom_registry_is_isolated_from_default() {
    let registry = UnitRegistry::new();
    registry
        .register(Unit::new("pc", "parsec", Quantity::Length, dec("30856775814913673")))
        .unwrap();

    assert!(registry.get("pc").is_some());
    assert!(default_registry().get("pc").is_none());

    // The custom registry knows nothing about the catalog either.
    assert!(registry.get("kg").is_none());
}

#[test]
fn registered_unit_is_usable_for_conversion() {
    let registry = UnitRegistry::with_default_units();
    registry
        .register(Unit::new("st", "stone", Quantity::Mass, dec("6.35029318")))
        .unwrap();

    let stones = Measurement::from_int(2, "st", &registry).unwrap();
    let pounds = stones.convert_to("lb").unwrap();
    assert_eq!(pounds.value(), dec("28"));
}

#[test]
fn late_registration_is_visible_to_existing_measurements() {
    let registry = UnitRegistry::with_default_units();
    let kilos = Measurement::parse("12.70058636", "kg", &registry).unwrap();

    assert!(matches!(
        kilos.convert_to("st").unwrap_err(),
        Error::UnitNotRegistered(_)
    ));

    registry
        .register(Unit::new("st", "stone", Quantity::Mass, dec("6.35029318")))
        .unwrap();

    // The measurement holds a symbol, not a unit snapshot, so the new unit
    // is reachable without rebuilding it.
    let stones = kilos.convert_to("st").unwrap();
    assert_eq!(stones.value(), dec("2"));
}

#[test]
fn duplicate_registration_leaves_original_intact() {
    let registry = UnitRegistry::with_default_units();
    let err = registry
        .register(Unit::new("Btu", "bogus thermal unit", Quantity::Energy, Decimal::ONE))
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyRegistered(ref s) if s == "Btu"));

    let original = registry.get("Btu").unwrap();
    assert_eq!(original.name, "British thermal unit");
    assert_eq!(original.to_base, dec("1055.056"));
}

#[test]
fn zero_factor_unit_cannot_be_converted_into() {
    // Registration does not validate factors; the failure surfaces at
    // conversion time instead of as a panic.
    let registry = UnitRegistry::with_default_units();
    registry
        .register(Unit::new("void", "voidgram", Quantity::Mass, Decimal::ZERO))
        .unwrap();

    let kilos = Measurement::from_int(1, "kg", &registry).unwrap();
    assert!(matches!(
        kilos.convert_to("void").unwrap_err(),
        Error::DivisionByZero
    ));
}

#[test]
fn measurement_resolves_unit_metadata() {
    let m = Measurement::from_int(9, "thm", default_registry()).unwrap();
    let unit = m.unit().unwrap();
    assert_eq!(unit.name, "therm");
    assert_eq!(unit.quantity, Quantity::Energy);
    assert!(!unit.is_base());
}

#[test]
fn shared_registry_handles_concurrent_lookups_and_registration() {
    let registry = UnitRegistry::with_default_units();

    std::thread::scope(|scope| {
        for i in 0..4 {
            let registry = &registry;
            scope.spawn(move || {
                let symbol = format!("x{i}");
                registry
                    .register(Unit::new(symbol.as_str(), "custom", Quantity::Mass, dec("2")))
                    .unwrap();
                for _ in 0..100 {
                    let m = Measurement::from_int(10, symbol.as_str(), registry).unwrap();
                    assert_eq!(m.convert_to("kg").unwrap().value(), dec("20"));
                }
            });
        }
    });
}
