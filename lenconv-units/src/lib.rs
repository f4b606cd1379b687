//! lenconv Units - Length Unit Conversion
//!
//! Converts lengths between nine units in two disjoint systems:
//! - Metric, based on the meter (m, km, dm, cm, mm)
//! - Imperial, based on the foot (ft, mi, yd, in)
//!
//! The systems are bridged by a single constant, [`METERS_TO_FEET`].
//! Conversion is a pure function of (source, target, value).

mod system;
mod unit;
mod units;
mod convert;

pub use system::UnitSystem;
pub use unit::Unit;
pub use units::{UnitTable, METERS_TO_FEET, UNIT_SYMBOLS};
pub use convert::{Convert, LengthConverter, CONVERTER};
pub use lenconv_core::{ConversionError, UnitRole};

/// Convert with the shared converter
pub fn convert(source: &str, target: &str, value: f64) -> Result<f64, ConversionError> {
    CONVERTER.convert(source, target, value)
}
