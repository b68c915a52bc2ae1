//! Metric prefixes and prefix-based unit derivation.

use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use super::Unit;

/// Named scale factor combinable with a base unit to derive a new unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefix {
    name: String,
    symbol: String,
    modifier: f64,
}

impl Prefix {
    /// Create a prefix from its display name, symbol, and modifier.
    ///
    /// `modifier` is how many base units one prefixed unit represents (1000
    /// for kilo). It is taken as-is: zero or non-finite modifiers produce a
    /// zero or non-finite derived scale and are the caller's responsibility.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, modifier: f64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            modifier,
        }
    }

    /// Display name, e.g. "kilo".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbol, e.g. "k".
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of base units represented by one prefixed unit.
    pub fn modifier(&self) -> f64 {
        self.modifier
    }

    /// Derive a new unit by applying this prefix to `unit`.
    ///
    /// Names and symbol are concatenations of the prefix and unit strings,
    /// the scale is `unit.value() / modifier`, and the dimension is inherited
    /// unchanged. Pure; neither input is modified.
    pub fn of(&self, unit: &Unit) -> Unit {
        Unit::new(
            format!("{}{}", self.name, unit.name()),
            format!("{}{}", self.name, unit.plural()),
            format!("{}{}", self.symbol, unit.symbol()),
            unit.value() / self.modifier,
            unit.dim(),
        )
    }

    /// nano, `n`, 1e-9.
    pub fn nano() -> Self {
        Self::new("nano", "n", 1e-9)
    }

    /// micro, `u`, 1e-6.
    pub fn micro() -> Self {
        Self::new("micro", "u", 1e-6)
    }

    /// milli, `m`, 1e-3.
    pub fn milli() -> Self {
        Self::new("milli", "m", 1e-3)
    }

    /// centi, `c`, 1e-2.
    pub fn centi() -> Self {
        Self::new("centi", "c", 1e-2)
    }

    /// deci, `d`, 1e-1.
    pub fn deci() -> Self {
        Self::new("deci", "d", 1e-1)
    }

    /// kilo, `k`, 1e3.
    pub fn kilo() -> Self {
        Self::new("kilo", "k", 1e3)
    }

    /// mega, `M`, 1e6.
    pub fn mega() -> Self {
        Self::new("mega", "M", 1e6)
    }

    /// giga, `G`, 1e9.
    pub fn giga() -> Self {
        Self::new("giga", "G", 1e9)
    }
}
