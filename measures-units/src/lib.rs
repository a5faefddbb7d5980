//! Measures Units - Quantities bound to units, and conversion between them
//!
//! Every unit belongs to exactly one family, identified by its base unit:
//! - Temperature (K, °C, °F)
//! - Length (m, cm, in, ft, yd, mi, km, NM)
//! - Time (s)
//! - Mass (g, lb)
//! - Angle (°, ', ", rad)
//!
//! Conversions are resolved by a `ConversionRegistry`, which prefers
//! registered functions and scalars over composing through the base unit.

mod unit;
mod measure;
mod convert;
mod parse;
pub mod units;

pub use measures_core::{ConversionError, Transform};
pub use unit::{Unit, UnitId};
pub use measure::Measure;
pub use convert::{ConversionRegistry, STANDARD_REGISTRY};
pub use units::UNITS;
pub use parse::{parse_unit, parse_measure, parse_conversion};
