//! Conversion registry
//!
//! Resolves a conversion between two units through the most accurate path
//! available. Strategies are tried in order, first match wins:
//!
//! 1. Same unit: quantity returned untouched
//! 2. Registered function for the exact (from, to) pair
//! 3. Registered scalar for (from, to): multiply
//! 4. Registered scalar for (to, from): divide
//! 5. Shared base unit: from -> base -> to
//!
//! Anything else is an unsupported conversion.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};
use measures_core::{ConversionError, Transform, ensure_finite};
use crate::{Measure, Unit, UnitId};
use crate::units::{CENTIMETRE, KILOMETRE, METRE, NAUTICAL_MILE};

/// Process-wide registry seeded with the standard high-precision pairs
pub static STANDARD_REGISTRY: LazyLock<ConversionRegistry> = LazyLock::new(ConversionRegistry::standard);

type PairKey = (UnitId, UnitId);

#[derive(Debug, Default)]
struct Tables {
    functions: HashMap<PairKey, Transform>,
    scalars: HashMap<PairKey, f64>,
}

/// The path chosen for one conversion
enum Route {
    Function(Transform),
    Scalar(f64),
    Divisor(f64),
    ViaBase,
}

impl Route {
    fn name(&self) -> &'static str {
        match self {
            Route::Function(_) => "function",
            Route::Scalar(_) => "scalar",
            Route::Divisor(_) => "divisor",
            Route::ViaBase => "base unit",
        }
    }
}

/// Registry of specialised conversions plus the base-unit fallback.
///
/// Safe to share between threads: registrations take a write lock and
/// lookups a read lock, so a reader never sees half a registration and the
/// last writer of a pair wins.
#[derive(Debug, Default)]
pub struct ConversionRegistry {
    tables: RwLock<Tables>,
}

impl ConversionRegistry {
    /// An empty registry: only identity and base-unit conversions
    pub fn new() -> Self {
        ConversionRegistry {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// A registry seeded with exact factors for the nautical mile and
    /// kilometre, which lose precision when routed through the metre
    pub fn standard() -> Self {
        let mut tables = Tables::default();
        let seeds: [(&Unit, &Unit, f64); 5] = [
            (&*NAUTICAL_MILE, &*CENTIMETRE, 185200.0),
            (&*NAUTICAL_MILE, &*METRE, 1852.0),
            (&*NAUTICAL_MILE, &*KILOMETRE, 1.852),
            (&*KILOMETRE, &*METRE, 1000.0),
            (&*KILOMETRE, &*CENTIMETRE, 100000.0),
        ];
        for (from, to, scalar) in seeds {
            tables.scalars.insert((from.id(), to.id()), scalar);
        }

        ConversionRegistry {
            tables: RwLock::new(tables),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a multiplicative factor: `to = from * scalar`.
    ///
    /// The reverse direction is served by dividing, so 0 is rejected, as are
    /// NaN and infinite scalars. A rejected scalar leaves the registry as it
    /// was. Returns the scalar this replaced.
    pub fn put_scalar(&self, from: &Unit, to: &Unit, scalar: f64) -> Result<Option<f64>, ConversionError> {
        if scalar == 0.0 || !scalar.is_finite() {
            warn!(from = %from, to = %to, scalar, "rejected scalar");
            return Err(ConversionError::InvalidScalar {
                from: from.to_string(),
                to: to.to_string(),
                scalar,
            });
        }

        let previous = self.write().scalars.insert((from.id(), to.id()), scalar);
        if let Some(old) = previous {
            debug!(from = %from, to = %to, old, new = scalar, "scalar replaced");
        }
        Ok(previous)
    }

    /// Register a conversion function for the exact (from, to) pair.
    /// Returns the function this replaced.
    ///
    /// The function's results go through the same overflow check as every
    /// other route: a finite input mapped to an infinite output is returned
    /// as `ConversionError::Overflow`, not as an infinite measure.
    pub fn put_function(&self, from: &Unit, to: &Unit, function: Transform) -> Option<Transform> {
        let previous = self.write().functions.insert((from.id(), to.id()), function);
        if previous.is_some() {
            debug!(from = %from, to = %to, "function replaced");
        }
        previous
    }

    /// The scalar registered for exactly (from, to), if any
    pub fn scalar(&self, from: &Unit, to: &Unit) -> Option<f64> {
        self.read().scalars.get(&(from.id(), to.id())).copied()
    }

    pub fn has_function(&self, from: &Unit, to: &Unit) -> bool {
        self.read().functions.contains_key(&(from.id(), to.id()))
    }

    /// Convert a measure to another unit
    pub fn convert_measure(&self, measure: &Measure, to: &Unit) -> Result<Measure, ConversionError> {
        self.convert(measure.quantity(), measure.unit(), to)
    }

    /// Convert a quantity of `from` into `to`
    pub fn convert(&self, quantity: f64, from: &Unit, to: &Unit) -> Result<Measure, ConversionError> {
        if from == to {
            return Ok(Measure::new(quantity, to.clone()));
        }

        let route = self.route(from, to)
            .ok_or_else(|| ConversionError::unsupported(from, to))?;
        debug!(target: "measures::convert", from = %from, to = %to, strategy = route.name());

        let converted = match route {
            Route::Function(f) => f.apply(quantity),
            Route::Scalar(scalar) => quantity * scalar,
            Route::Divisor(scalar) => quantity / scalar,
            Route::ViaBase => {
                let in_base = from.convert_to_base_unit(quantity)
                    .inspect_err(|_| warn!(from = %from, quantity, "overflow converting to base unit"))?;
                return to.convert_from_base_unit(in_base.quantity())
                    .inspect_err(|_| warn!(to = %to, quantity, "overflow converting from base unit"));
            }
        };

        let converted = ensure_finite(quantity, converted, from)
            .inspect_err(|_| warn!(from = %from, to = %to, quantity, "conversion overflowed"))?;
        Ok(Measure::new(converted, to.clone()))
    }

    /// Pick a route without holding the lock while converting, so a custom
    /// function may itself use the registry
    fn route(&self, from: &Unit, to: &Unit) -> Option<Route> {
        let tables = self.read();
        let forward = (from.id(), to.id());

        if let Some(f) = tables.functions.get(&forward) {
            return Some(Route::Function(f.clone()));
        }
        if let Some(&scalar) = tables.scalars.get(&forward) {
            return Some(Route::Scalar(scalar));
        }
        if let Some(&scalar) = tables.scalars.get(&(to.id(), from.id())) {
            return Some(Route::Divisor(scalar));
        }
        if from.shares_base_with(to) {
            return Some(Route::ViaBase);
        }
        None
    }
}
