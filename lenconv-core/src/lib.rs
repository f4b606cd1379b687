//! lenconv Core - Fundamental types
//!
//! This crate provides the error types shared by the converter crates:
//! - `ConversionError`: raised by the engine for unknown unit identifiers
//! - `InputError`: raised by callers validating the numeric text field
//! - `FormError`: either of the above, or a result that overflowed

mod error;

pub use error::{codes, ConversionError, FormError, InputError, UnitRole};
