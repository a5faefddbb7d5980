//! Quantity transforms
//!
//! A `Transform` maps a quantity in one unit onto a quantity in another.
//! Linear and affine cases are plain data so they can be inspected and
//! composed; anything else is carried as a shared closure.

use std::fmt;
use std::sync::Arc;

/// Signature of a custom conversion
pub type ConversionFn = dyn Fn(f64) -> f64 + Send + Sync;

/// A conversion strategy from one quantity to another
#[derive(Clone)]
pub enum Transform {
    /// Returns the input unchanged
    Identity,
    /// `x * factor`
    Multiply(f64),
    /// `x / divisor`
    Divide(f64),
    /// `x * scale + offset` (temperature scales)
    Affine { scale: f64, offset: f64 },
    /// Arbitrary author-supplied function
    Custom(Arc<ConversionFn>),
}

impl Transform {
    /// Wrap a closure as a transform
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Transform::Custom(Arc::new(f))
    }

    /// Apply the transform to a quantity
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Transform::Identity => x,
            Transform::Multiply(factor) => x * factor,
            Transform::Divide(divisor) => x / divisor,
            Transform::Affine { scale, offset } => x * scale + offset,
            Transform::Custom(f) => f(x),
        }
    }

    /// Compose two transforms: `self` first, then `next`.
    ///
    /// Identity is absorbed; every other combination becomes a closure so
    /// that the arithmetic of each step is preserved exactly.
    pub fn then(self, next: Transform) -> Transform {
        match (self, next) {
            (Transform::Identity, t) | (t, Transform::Identity) => t,
            (first, second) => Transform::custom(move |x| second.apply(first.apply(x))),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Transform::Identity)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Identity
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => write!(f, "Identity"),
            Transform::Multiply(factor) => write!(f, "Multiply({})", factor),
            Transform::Divide(divisor) => write!(f, "Divide({})", divisor),
            Transform::Affine { scale, offset } => {
                write!(f, "Affine {{ scale: {}, offset: {} }}", scale, offset)
            }
            Transform::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
