//! Structured errors for the converter and its callers
//!
//! Errors never crash the system. The engine surfaces them unchanged and the
//! caller decides how to recover (the form resets itself).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
}

/// Which side of a conversion a unit identifier was given for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRole {
    Source,
    Target,
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRole::Source => write!(f, "source"),
            UnitRole::Target => write!(f, "target"),
        }
    }
}

/// Errors raised by the conversion engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The identifier is in neither the metric nor the imperial table
    #[error("unknown {role} unit: {unit}")]
    UnknownUnit { unit: String, role: UnitRole },
}

impl ConversionError {
    pub fn unknown_unit(unit: impl Into<String>, role: UnitRole) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.into(),
            role,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
        }
    }

    /// The identifier that could not be resolved
    pub fn unit(&self) -> &str {
        match self {
            ConversionError::UnknownUnit { unit, .. } => unit,
        }
    }
}

/// Caller-side validation of the numeric text field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid length. Input is empty.")]
    Empty,

    /// Only the first character is checked, so "-0" lands here and "0-" does not.
    #[error("Invalid lengths. Cannot have negatives.")]
    Negative,

    #[error("Invalid length: '{0}' is not a decimal number")]
    Malformed(String),

    #[error("Invalid length: '{0}' is not a finite number")]
    NotFinite(String),
}

impl InputError {
    pub fn code(&self) -> &'static str {
        codes::INVALID_INPUT
    }
}

/// Anything that can go wrong while the form runs a conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A finite input whose converted value overflowed
    #[error("Result of converting {input} {source_unit} to {target_unit} is out of range")]
    OutOfRange {
        input: String,
        source_unit: String,
        target_unit: String,
    },
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::Input(e) => e.code(),
            FormError::Conversion(e) => e.code(),
            FormError::OutOfRange { .. } => codes::OUT_OF_RANGE,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            FormError::Input(InputError::Negative) => "Enter a non-negative length",
            FormError::Input(_) => "Enter a decimal number such as 12.5",
            FormError::Conversion(_) => "Pick a unit from: m, km, dm, cm, mm, ft, mi, yd, in",
            FormError::OutOfRange { .. } => "Enter a smaller length",
        }
    }
}
