//! Measures Core - Shared building blocks for unit conversion
//!
//! Contains the pieces every unit family needs:
//! - `Transform`: a strategy value mapping one quantity onto another
//! - `ConversionError`: everything that can go wrong while converting

pub mod error;
pub mod transform;

pub use error::{ConversionError, ensure_finite};
pub use transform::Transform;
