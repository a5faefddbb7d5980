//! Standard unit catalog
//!
//! Each standard unit is a lazily-created static, so the same `Unit` is
//! shared by everyone who uses it. `UNITS` looks them up by symbol or alias.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;
use measures_core::Transform;
use crate::Unit;

// ============ temperature ============

pub static KELVIN: LazyLock<Unit> = LazyLock::new(|| Unit::base("K", "kelvin"));

pub static DEGREES_CELSIUS: LazyLock<Unit> = LazyLock::new(|| Unit::derived(
    "°C", "degree Celsius", &KELVIN,
    Transform::Affine { scale: 1.0, offset: 273.15 },
    Transform::Affine { scale: 1.0, offset: -273.15 },
));

pub static DEGREES_FAHRENHEIT: LazyLock<Unit> = LazyLock::new(|| Unit::derived(
    "°F", "degree Fahrenheit", &KELVIN,
    Transform::custom(|f| (f - 32.0) * 5.0 / 9.0 + 273.15),
    Transform::custom(|k| (k - 273.15) * 9.0 / 5.0 + 32.0),
));

// ============ length ============

pub static METRE: LazyLock<Unit> = LazyLock::new(|| Unit::base("m", "metre"));

pub static CENTIMETRE: LazyLock<Unit> = LazyLock::new(|| Unit::derived(
    "cm", "centimetre", &METRE,
    Transform::Multiply(0.01),
    Transform::Multiply(100.0),
));

pub static INCH: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("in", "inch", &METRE, 0.0254));
pub static FOOT: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("ft", "foot", &METRE, 0.3048));
pub static YARD: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("yd", "yard", &METRE, 0.9144));
pub static MILE: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("mi", "mile", &METRE, 1609.344));
pub static KILOMETRE: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("km", "kilometre", &METRE, 1000.0));
pub static NAUTICAL_MILE: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("NM", "nautical mile", &METRE, 1852.0));

// ============ time ============

pub static SECOND: LazyLock<Unit> = LazyLock::new(|| Unit::base("s", "second"));

// ============ mass ============

pub static GRAM: LazyLock<Unit> = LazyLock::new(|| Unit::base("g", "gram"));
pub static POUND: LazyLock<Unit> = LazyLock::new(|| Unit::scaled("lb", "pound", &GRAM, 453.59237));

// ============ angle ============

pub static DEGREE: LazyLock<Unit> = LazyLock::new(|| Unit::base("°", "degree"));

pub static MINUTE_ANGLE: LazyLock<Unit> = LazyLock::new(|| Unit::derived(
    "'", "minute of arc", &DEGREE,
    Transform::Divide(60.0),
    Transform::Multiply(60.0),
));

pub static SECOND_ANGLE: LazyLock<Unit> = LazyLock::new(|| Unit::derived(
    "\"", "second of arc", &DEGREE,
    Transform::Divide(3600.0),
    Transform::Multiply(3600.0),
));

pub static RADIAN: LazyLock<Unit> = LazyLock::new(|| Unit::derived(
    "rad", "radian", &DEGREE,
    Transform::custom(|rad| rad * 180.0 / PI),
    Transform::custom(|deg| deg * PI / 180.0),
));

/// Global catalog of the standard units
pub static UNITS: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Lookup of standard units by symbol or alias
pub struct UnitCatalog {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        catalog.register_all_units();
        catalog
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// Get every unit of the family whose base unit is `base`
    pub fn by_base(&self, base: &Unit) -> Vec<&Unit> {
        let mut family: Vec<&Unit> = self.units.values()
            .filter(|u| u.base_unit() == base.base_unit())
            .collect();
        family.sort_by_key(|u| u.id());
        family
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.units.keys().map(|s| s.as_str()).collect();
        symbols.sort_unstable();
        symbols
    }

    fn register(&mut self, unit: &Unit) {
        self.units.insert(unit.symbol().to_string(), unit.clone());
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_temperature_units();
        self.register_length_units();
        self.register_time_units();
        self.register_mass_units();
        self.register_angle_units();
    }

    fn register_temperature_units(&mut self) {
        self.register(&KELVIN);
        self.register(&DEGREES_CELSIUS);
        self.register(&DEGREES_FAHRENHEIT);

        self.alias("kelvin", "K");
        self.alias("C", "°C");
        self.alias("degC", "°C");
        self.alias("celsius", "°C");
        self.alias("F", "°F");
        self.alias("degF", "°F");
        self.alias("fahrenheit", "°F");
    }

    fn register_length_units(&mut self) {
        self.register(&METRE);
        self.register(&CENTIMETRE);
        self.register(&INCH);
        self.register(&FOOT);
        self.register(&YARD);
        self.register(&MILE);
        self.register(&KILOMETRE);
        self.register(&NAUTICAL_MILE);

        self.alias("metre", "m");
        self.alias("metres", "m");
        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("centimetre", "cm");
        self.alias("centimetres", "cm");
        self.alias("centimeter", "cm");
        self.alias("centimeters", "cm");
        self.alias("inch", "in");
        self.alias("inches", "in");
        self.alias("foot", "ft");
        self.alias("feet", "ft");
        self.alias("yard", "yd");
        self.alias("yards", "yd");
        self.alias("mile", "mi");
        self.alias("miles", "mi");
        self.alias("kilometre", "km");
        self.alias("kilometres", "km");
        self.alias("kilometer", "km");
        self.alias("kilometers", "km");
        self.alias("nmi", "NM");
        self.alias("nautical mile", "NM");
        self.alias("nautical miles", "NM");
    }

    fn register_time_units(&mut self) {
        self.register(&SECOND);

        self.alias("second", "s");
        self.alias("seconds", "s");
        self.alias("sec", "s");
    }

    fn register_mass_units(&mut self) {
        self.register(&GRAM);
        self.register(&POUND);

        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("pound", "lb");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
    }

    fn register_angle_units(&mut self) {
        self.register(&DEGREE);
        self.register(&MINUTE_ANGLE);
        self.register(&SECOND_ANGLE);
        self.register(&RADIAN);

        self.alias("deg", "°");
        self.alias("degree", "°");
        self.alias("degrees", "°");
        self.alias("arcmin", "'");
        self.alias("arcsec", "\"");
        self.alias("radian", "rad");
        self.alias("radians", "rad");
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}
