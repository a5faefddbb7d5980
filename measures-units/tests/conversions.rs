use std::sync::Arc;
use std::thread;

use measures_units::units::*;
use measures_units::{ConversionError, ConversionRegistry, Measure, Transform, Unit, STANDARD_REGISTRY};

#[test]
fn known_conversions() {
    assert_eq!(KILOMETRE.convert_to_base_unit(1.0).unwrap().quantity(), 1000.0);
    assert_eq!(KILOMETRE.convert_from_base_unit(1000.0).unwrap().quantity(), 1.0);
    assert_eq!(NAUTICAL_MILE.convert_to_base_unit(1.0).unwrap().quantity(), 1852.0);
    assert_eq!(DEGREES_CELSIUS.convert_to_base_unit(1.0).unwrap().quantity(), 274.15);
    assert_eq!(DEGREES_CELSIUS.convert_from_base_unit(274.15).unwrap().quantity(), 1.0);
    assert_eq!(STANDARD_REGISTRY.convert(1000.0, &METRE, &KILOMETRE).unwrap().quantity(), 1.0);
}

#[test]
fn reverse_scalar_is_a_division() {
    let registry = ConversionRegistry::new();
    let k = 0.3048;
    registry.put_scalar(&FOOT, &METRE, k).unwrap();

    for q in [0.0, 1.0, -12.5, 1.0e12, 3.3e-7] {
        let m = registry.convert(q, &METRE, &FOOT).unwrap();
        assert_eq!(m.quantity(), q / k);
        assert_eq!(m.unit(), &*FOOT);
    }
}

#[test]
fn registered_function_takes_priority() {
    let registry = ConversionRegistry::new();
    registry.put_scalar(&DEGREES_CELSIUS, &DEGREES_FAHRENHEIT, 2.0).unwrap();
    registry.put_function(
        &DEGREES_CELSIUS,
        &DEGREES_FAHRENHEIT,
        Transform::custom(|c| c * 9.0 / 5.0 + 32.0),
    );

    let f = registry.convert(100.0, &DEGREES_CELSIUS, &DEGREES_FAHRENHEIT).unwrap();
    assert_eq!(f.quantity(), 212.0);
}

#[test]
fn zero_scalar_leaves_registry_unchanged() {
    let registry = ConversionRegistry::standard();
    let err = registry.put_scalar(&NAUTICAL_MILE, &METRE, 0.0).unwrap_err();
    assert_eq!(
        err,
        ConversionError::InvalidScalar { from: "NM".to_string(), to: "m".to_string(), scalar: 0.0 }
    );
    assert_eq!(registry.scalar(&NAUTICAL_MILE, &METRE), Some(1852.0));
}

#[test]
fn cross_family_conversion_fails() {
    let err = STANDARD_REGISTRY.convert(1.0, &METRE, &KELVIN).unwrap_err();
    assert!(matches!(err, ConversionError::Unsupported { ref from, ref to } if from == "m" && to == "K"));
    assert_eq!(err.to_string(), "conversion from m to K is not supported");
}

#[test]
fn overflow_is_reported() {
    let err = NAUTICAL_MILE.convert_to_base_unit(f64::MAX).unwrap_err();
    assert!(err.is_overflow());

    let err = ConversionRegistry::new()
        .convert(f64::MAX, &NAUTICAL_MILE, &FOOT)
        .unwrap_err();
    assert!(err.is_overflow());
}

#[test]
fn custom_units_join_a_family() {
    let registry = ConversionRegistry::new();
    let furlong = Unit::scaled("fur", "furlong", &YARD, 220.0);
    assert_eq!(furlong.base_unit(), &*METRE);

    let m = registry.convert(1.0, &furlong, &MILE).unwrap();
    assert!((m.quantity() - 0.125).abs() < 1e-12);

    let rankine = Unit::derived(
        "°R", "degree Rankine", &KELVIN,
        Transform::Multiply(5.0 / 9.0),
        Transform::Multiply(9.0 / 5.0),
    );
    let measure = Measure::new(491.67, rankine);
    assert!(measure.convert_to_with(&DEGREES_CELSIUS, &registry).unwrap().quantity().abs() < 1e-9);
}

#[test]
fn concurrent_registration_is_last_write_wins() {
    let registry = Arc::new(ConversionRegistry::new());

    let writers: Vec<_> = (1..=8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..100 {
                    registry.put_scalar(&MILE, &YARD, i as f64).unwrap();
                    let q = registry.convert(1.0, &MILE, &YARD).unwrap().quantity();
                    assert!((1.0..=8.0).contains(&q));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    registry.put_scalar(&MILE, &YARD, 1760.0).unwrap();
    assert_eq!(registry.convert(1.0, &MILE, &YARD).unwrap().quantity(), 1760.0);
}

#[test]
fn measures_round_trip_through_json() {
    let original = Measure::new(3.5, NAUTICAL_MILE.clone());
    let json = serde_json::to_string(&original).unwrap();
    let back: Measure = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}
