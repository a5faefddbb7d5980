//! Unit representation with transforms to and from its base unit

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize, Serializer, Deserializer};
use measures_core::{ConversionError, Transform, ensure_finite};
use crate::Measure;
use crate::units::UNITS;

static NEXT_UNIT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a unit. Two units are the same unit iff their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
    fn next() -> Self {
        UnitId(NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A measurement unit such as a metre or a degree Celsius.
///
/// `Unit` is a cheap shared handle: cloning it yields the same unit, and
/// equality and hashing look only at its [`UnitId`]. Every unit points
/// directly at the base unit of its family; base units point at themselves.
#[derive(Clone)]
pub struct Unit {
    inner: Arc<UnitInner>,
}

struct UnitInner {
    id: UnitId,
    symbol: String,
    name: String,
    /// `None` for base units
    base: Option<Unit>,
    to_base: Transform,
    from_base: Transform,
}

impl Unit {
    /// Create a base unit: its own base, with identity transforms
    pub fn base(symbol: &str, name: &str) -> Self {
        Unit {
            inner: Arc::new(UnitInner {
                id: UnitId::next(),
                symbol: symbol.to_string(),
                name: name.to_string(),
                base: None,
                to_base: Transform::Identity,
                from_base: Transform::Identity,
            }),
        }
    }

    /// Create a unit derived from `base`.
    ///
    /// If `base` is itself derived, the new unit is attached to `base`'s own
    /// base unit with the transforms composed, so no unit is ever more than
    /// one hop away from its base.
    pub fn derived(
        symbol: &str,
        name: &str,
        base: &Unit,
        to_base: Transform,
        from_base: Transform,
    ) -> Self {
        let (base, to_base, from_base) = match &base.inner.base {
            None => (base.clone(), to_base, from_base),
            Some(root) => (
                root.clone(),
                to_base.then(base.inner.to_base.clone()),
                base.inner.from_base.clone().then(from_base),
            ),
        };

        Unit {
            inner: Arc::new(UnitInner {
                id: UnitId::next(),
                symbol: symbol.to_string(),
                name: name.to_string(),
                base: Some(base),
                to_base,
                from_base,
            }),
        }
    }

    /// Create a unit that is `factor` base units (1 km = 1000 m)
    pub fn scaled(symbol: &str, name: &str, base: &Unit, factor: f64) -> Self {
        Unit::derived(
            symbol,
            name,
            base,
            Transform::Multiply(factor),
            Transform::Divide(factor),
        )
    }

    pub fn id(&self) -> UnitId {
        self.inner.id
    }

    pub fn symbol(&self) -> &str {
        &self.inner.symbol
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The base unit shared by every unit of this family
    pub fn base_unit(&self) -> &Unit {
        self.inner.base.as_ref().unwrap_or(self)
    }

    pub fn is_base(&self) -> bool {
        self.inner.base.is_none()
    }

    /// Check if two units belong to the same family
    pub fn shares_base_with(&self, other: &Unit) -> bool {
        self.base_unit() == other.base_unit()
    }

    pub fn to_base_transform(&self) -> &Transform {
        &self.inner.to_base
    }

    pub fn from_base_transform(&self) -> &Transform {
        &self.inner.from_base
    }

    /// Wrap a quantity of this unit in a `Measure`
    pub fn create_measure(&self, quantity: f64) -> Measure {
        Measure::new(quantity, self.clone())
    }

    /// Express a quantity of this unit in the base unit.
    ///
    /// 1 km becomes 1000 m. Fails with an overflow if a finite quantity
    /// becomes infinite.
    pub fn convert_to_base_unit(&self, quantity: f64) -> Result<Measure, ConversionError> {
        let result = ensure_finite(quantity, self.inner.to_base.apply(quantity), self)?;
        Ok(Measure::new(result, self.base_unit().clone()))
    }

    /// Express a quantity of the base unit in this unit
    pub fn convert_from_base_unit(&self, quantity: f64) -> Result<Measure, ConversionError> {
        let result = ensure_finite(quantity, self.inner.from_base.apply(quantity), self.base_unit())?;
        Ok(Measure::new(result, self.clone()))
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.symbol)
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.inner.id)
            .field("symbol", &self.inner.symbol)
            .field("base", &self.base_unit().symbol())
            .field("to_base", &self.inner.to_base)
            .field("from_base", &self.inner.from_base)
            .finish()
    }
}

/// Only catalog units serialize: a unit is written as its symbol, and a
/// custom unit sharing a catalog symbol would read back as the catalog unit.
impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if UNITS.get(self.symbol()) != Some(self) {
            return Err(serde::ser::Error::custom(format!(
                "unit {} ({}) is not a catalog unit and cannot be serialized",
                self.symbol(),
                self.name()
            )));
        }
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        UNITS.get(&symbol)
            .cloned()
            .ok_or_else(|| serde::de::Error::custom(ConversionError::UnknownUnit(symbol)))
    }
}
