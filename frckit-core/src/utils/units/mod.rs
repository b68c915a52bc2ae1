//! Units of measurement for robot telemetry and configuration.
//!
//! A `Unit` is a named scale factor relative to the base unit of its
//! dimension. `Prefix` derives new units from existing ones; see `prefix`.

pub mod prefix;

pub use prefix::Prefix;

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// Physical dimension tag carried by every unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Angle,
    Current,
    Scalar,
}

/// Immutable named unit of measurement.
///
/// Multiplying a quantity expressed in the dimension's base unit by `value`
/// expresses it in this unit: a kilometer has `value` 0.001 because one meter
/// is 0.001 kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    name: String,
    plural: String,
    symbol: String,
    value: f64,
    dim: Dimension,
}

impl Unit {
    /// Create a unit from its display names, symbol, scale, and dimension.
    pub fn new(
        name: impl Into<String>,
        plural: impl Into<String>,
        symbol: impl Into<String>,
        value: f64,
        dim: Dimension,
    ) -> Self {
        Self {
            name: name.into(),
            plural: plural.into(),
            symbol: symbol.into(),
            value,
            dim,
        }
    }

    /// Singular display name, e.g. "meter".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plural display name, e.g. "meters".
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Unit symbol, e.g. "m".
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Scale factor relative to the dimension's base unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Dimension this unit measures.
    pub fn dim(&self) -> Dimension {
        self.dim
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// One meter, the base length unit.
pub fn meter() -> Unit {
    Unit::new("meter", "meters", "m", 1.0, Dimension::Length)
}

/// One second, the base time unit.
pub fn second() -> Unit {
    Unit::new("second", "seconds", "s", 1.0, Dimension::Time)
}

/// One gram, the base mass unit.
pub fn gram() -> Unit {
    Unit::new("gram", "grams", "g", 1.0, Dimension::Mass)
}

/// One degree, the base angle unit.
pub fn degree() -> Unit {
    Unit::new("degree", "degrees", "\u{b0}", 1.0, Dimension::Angle)
}

/// One ampere, the base current unit.
pub fn amp() -> Unit {
    Unit::new("amp", "amps", "A", 1.0, Dimension::Current)
}
