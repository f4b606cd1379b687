//! lenconv Form - headless length converter form
//!
//! The presentation side of the converter, without any widgets. A front end
//! turns user actions into [`Command`]s and renders the [`FormView`] it gets
//! back. Validation, fixed-format display and reset-on-error live here so
//! every front end behaves the same.

mod command;
mod input;
mod form;

pub use command::{Command, CommandParseError};
pub use input::{format_result, parse_input, DEFAULT_TEXT, DEFAULT_UNIT, RESULT_DECIMALS};
pub use form::{Form, FormView, ALERT_TITLE};
pub use lenconv_core::{FormError, InputError};
