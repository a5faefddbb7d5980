//! Measure type - a quantity bound to a unit

use std::fmt;
use serde::{Serialize, Deserialize};
use measures_core::ConversionError;
use crate::{Unit, ConversionRegistry, STANDARD_REGISTRY};

/// A quantity of some `Unit`.
///
/// The quantity may change; the unit is fixed at construction. Converting a
/// measure produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    quantity: f64,
    unit: Unit,
}

impl Measure {
    pub fn new(quantity: f64, unit: Unit) -> Self {
        Measure { quantity, unit }
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Convert to another unit using the standard registry
    pub fn convert_to(&self, unit: &Unit) -> Result<Measure, ConversionError> {
        self.convert_to_with(unit, &STANDARD_REGISTRY)
    }

    /// Convert to another unit using the given registry
    pub fn convert_to_with(&self, unit: &Unit, registry: &ConversionRegistry) -> Result<Measure, ConversionError> {
        registry.convert_measure(self, unit)
    }

    /// Express this measure in its family's base unit
    pub fn to_base(&self) -> Result<Measure, ConversionError> {
        self.unit.convert_to_base_unit(self.quantity)
    }

    /// Compare with another measure, allowing `tolerance` difference.
    ///
    /// `other` is first converted into this measure's unit through the
    /// standard registry. Floating point results of different conversion
    /// paths rarely agree bit for bit, so this is the comparison to use.
    pub fn equals_with_tolerance(&self, other: &Measure, tolerance: f64) -> Result<bool, ConversionError> {
        self.equals_with_tolerance_with(other, tolerance, &STANDARD_REGISTRY)
    }

    pub fn equals_with_tolerance_with(
        &self,
        other: &Measure,
        tolerance: f64,
        registry: &ConversionRegistry,
    ) -> Result<bool, ConversionError> {
        let other_here = registry.convert_measure(other, &self.unit)?;
        let difference = (self.quantity - other_here.quantity).abs();
        Ok(difference <= tolerance)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}
