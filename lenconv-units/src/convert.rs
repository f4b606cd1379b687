//! The metric/imperial length conversion engine
//!
//! Unit relation graph:
//!
//! ```text
//! km, dm, cm, mm <-> m <-> ft <-> mi, yd, in
//! ```
//!
//! Conversions inside a system go through its base unit. Conversions across
//! systems go through both base units and [`METERS_TO_FEET`].

use std::sync::LazyLock;
use lenconv_core::{ConversionError, UnitRole};
use crate::units::{UnitTable, METERS_TO_FEET, UNIT_SYMBOLS};
use crate::{Unit, UnitSystem};

/// Shared converter. The tables are read-only so one instance serves every caller.
pub static CONVERTER: LazyLock<LengthConverter> = LazyLock::new(LengthConverter::new);

/// Anything that can turn a magnitude in one unit into another unit
pub trait Convert {
    fn convert(&self, source: &str, target: &str, value: f64) -> Result<f64, ConversionError>;
}

/// Holds the two fixed scale tables. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct LengthConverter {
    metric: UnitTable,
    imperial: UnitTable,
}

impl LengthConverter {
    pub fn new() -> Self {
        LengthConverter {
            metric: UnitTable::new(UnitSystem::Metric),
            imperial: UnitTable::new(UnitSystem::Imperial),
        }
    }

    /// Table for one system
    pub fn table(&self, system: UnitSystem) -> &UnitTable {
        match system {
            UnitSystem::Metric => &self.metric,
            UnitSystem::Imperial => &self.imperial,
        }
    }

    /// Look a unit up in either table
    pub fn unit(&self, symbol: &str) -> Option<&Unit> {
        self.metric.get(symbol).or_else(|| self.imperial.get(symbol))
    }

    pub fn system_of(&self, symbol: &str) -> Option<UnitSystem> {
        self.unit(symbol).map(|u| u.system)
    }

    /// All recognized identifiers in menu order
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        UNIT_SYMBOLS.into_iter()
    }

    /// Express `value` in the base unit of its own system (meters or feet)
    pub fn to_base(&self, symbol: &str, value: f64) -> Result<(f64, UnitSystem), ConversionError> {
        let unit = self.resolve(symbol, UnitRole::Source)?;
        Ok((unit.to_base(value), unit.system))
    }

    /// Convert `value` from `source` units to `target` units.
    ///
    /// Within one system the base value is divided by the target scale only
    /// when the source scale is strictly smaller; otherwise it is multiplied.
    /// That makes e.g. `mi -> yd` yield `5280 * 3` per mile and any
    /// non-base unit converted to itself not round-trip.
    pub fn convert(&self, source: &str, target: &str, value: f64) -> Result<f64, ConversionError> {
        let from = self.resolve(source, UnitRole::Source)?;
        let to = self.resolve(target, UnitRole::Target)?;

        if from.same_system(to) {
            return Ok(within_system(value, from.scale, to.scale));
        }

        let result = match from.system {
            UnitSystem::Imperial => {
                let to_feet = value * from.scale;
                let to_meters = to_feet * (1.0 / METERS_TO_FEET);
                to_meters / to.scale
            }
            UnitSystem::Metric => {
                let to_meters = value * from.scale;
                let to_feet = to_meters * METERS_TO_FEET;
                to_feet / to.scale
            }
        };

        Ok(result)
    }

    fn resolve(&self, symbol: &str, role: UnitRole) -> Result<&Unit, ConversionError> {
        self.unit(symbol)
            .ok_or_else(|| ConversionError::unknown_unit(symbol, role))
    }
}

impl Default for LengthConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Convert for LengthConverter {
    fn convert(&self, source: &str, target: &str, value: f64) -> Result<f64, ConversionError> {
        LengthConverter::convert(self, source, target, value)
    }
}

fn within_system(value: f64, start_factor: f64, end_factor: f64) -> f64 {
    let to_base = value * start_factor;
    if start_factor < end_factor {
        to_base / end_factor
    } else {
        to_base * end_factor
    }
}
