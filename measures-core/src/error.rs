//! Conversion errors
//!
//! Errors are values returned to the caller. Nothing here retries or
//! substitutes a default quantity.

use thiserror::Error;

/// Error type for unit conversion and registration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No function, scalar, reverse scalar or shared base unit links the pair
    #[error("conversion from {from} to {to} is not supported")]
    Unsupported { from: String, to: String },

    /// A finite quantity became infinite while being converted
    #[error("conversion of {quantity} {unit} overflowed")]
    Overflow { unit: String, quantity: f64 },

    /// A scalar of 0 makes the reverse direction a division by zero; NaN and
    /// infinite scalars make both directions meaningless
    #[error("scalar {scalar} is not accepted ({from} -> {to}): must be finite and nonzero")]
    InvalidScalar { from: String, to: String, scalar: f64 },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("invalid measure: {0}")]
    InvalidMeasure(String),
}

impl ConversionError {
    pub fn unsupported(from: impl ToString, to: impl ToString) -> Self {
        ConversionError::Unsupported {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn overflow(unit: impl ToString, quantity: f64) -> Self {
        ConversionError::Overflow {
            unit: unit.to_string(),
            quantity,
        }
    }

    /// True for the arithmetic failure, false for lookup/registration failures
    pub fn is_overflow(&self) -> bool {
        matches!(self, ConversionError::Overflow { .. })
    }
}

/// Check a converted quantity against its input.
///
/// A finite input that produced an infinite output (of either sign) is an
/// overflow. Infinite and NaN inputs are passed through untouched.
pub fn ensure_finite(input: f64, output: f64, unit: impl ToString) -> Result<f64, ConversionError> {
    if input.is_finite() && output.is_infinite() {
        return Err(ConversionError::overflow(unit, input));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_result_passes() {
        assert_eq!(ensure_finite(1.0, 1000.0, "km"), Ok(1000.0));
    }

    #[test]
    fn test_finite_to_infinite_is_overflow() {
        let err = ensure_finite(f64::MAX, f64::INFINITY, "NM").unwrap_err();
        assert!(err.is_overflow());

        let err = ensure_finite(f64::MIN, f64::NEG_INFINITY, "NM").unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_infinite_inputs_are_exempt() {
        assert_eq!(ensure_finite(f64::INFINITY, f64::INFINITY, "m"), Ok(f64::INFINITY));
        assert_eq!(
            ensure_finite(f64::NEG_INFINITY, f64::NEG_INFINITY, "m"),
            Ok(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(ensure_finite(f64::NAN, f64::NAN, "m").unwrap().is_nan());
    }

    #[test]
    fn test_display() {
        let err = ConversionError::unsupported("m", "K");
        assert_eq!(err.to_string(), "conversion from m to K is not supported");

        let err = ConversionError::InvalidScalar { from: "km".into(), to: "m".into(), scalar: 0.0 };
        assert_eq!(err.to_string(), "scalar 0 is not accepted (km -> m): must be finite and nonzero");
    }
}
