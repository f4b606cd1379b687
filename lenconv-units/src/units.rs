//! Unit definitions - the fixed metric and imperial scale tables

use std::collections::HashMap;
use crate::{Unit, UnitSystem};

/// Feet in one meter. The only link between the two tables.
pub const METERS_TO_FEET: f64 = 3.28084;

/// Every recognized identifier, in menu order
pub const UNIT_SYMBOLS: [&str; 9] = ["m", "km", "dm", "cm", "mm", "ft", "mi", "yd", "in"];

/// Immutable symbol -> unit map for one system
#[derive(Debug, Clone)]
pub struct UnitTable {
    system: UnitSystem,
    units: HashMap<String, Unit>,
    order: Vec<String>,
}

impl UnitTable {
    /// Build the table for a system from its literal data
    pub fn new(system: UnitSystem) -> Self {
        let mut table = UnitTable {
            system,
            units: HashMap::new(),
            order: Vec::new(),
        };
        match system {
            UnitSystem::Metric => table.register_metric_units(),
            UnitSystem::Imperial => table.register_imperial_units(),
        }
        table
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    /// Get a unit by exact symbol
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    /// Scale factor of a unit relative to the system base unit
    pub fn scale(&self, symbol: &str) -> Option<f64> {
        self.units.get(symbol).map(|u| u.scale)
    }

    /// Units in registration order
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.order.iter().filter_map(move |s| self.units.get(s))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    fn register(&mut self, symbol: &str, name: &str, scale: f64) {
        self.order.push(symbol.to_string());
        self.units.insert(symbol.to_string(), Unit::new(symbol, name, self.system, scale));
    }

    fn register_metric_units(&mut self) {
        // based on meters
        self.register("m", "meter", 1.0);
        self.register("km", "kilometer", 1000.0);
        self.register("dm", "decimeter", 0.1);
        self.register("cm", "centimeter", 0.01);
        self.register("mm", "millimeter", 0.001);
    }

    fn register_imperial_units(&mut self) {
        // based on feet
        self.register("ft", "foot", 1.0);
        self.register("mi", "mile", 5280.0);
        self.register("yd", "yard", 3.0);
        self.register("in", "inch", 0.08333);
    }
}
