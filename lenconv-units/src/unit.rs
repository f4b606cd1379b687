//! Unit representation with its scale factor

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::UnitSystem;

/// A length unit and how it relates to its system's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "km", "ft")
    pub symbol: String,
    /// The unit name (e.g., "meter", "kilometer", "foot")
    pub name: String,
    /// The system whose table holds this unit
    pub system: UnitSystem,
    /// Factor to convert to the system base unit (value_base = value * scale)
    pub scale: f64,
}

impl Unit {
    pub fn new(symbol: &str, name: &str, system: UnitSystem, scale: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            system,
            scale,
        }
    }

    /// Check if both units live in the same table
    pub fn same_system(&self, other: &Unit) -> bool {
        self.system == other.system
    }

    /// Convert a value from this unit to the system base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
