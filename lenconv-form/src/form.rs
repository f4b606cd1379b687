//! Form state driven by [`Command`]s
//!
//! Holds what a front end shows: the two unit labels, the input and result
//! fields, and an alert raised by the last failed conversion. The converter
//! itself is stateless; everything mutable lives here.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lenconv_core::FormError;
use lenconv_units::{Convert, LengthConverter};

use crate::command::Command;
use crate::input::{format_result, parse_input, DEFAULT_TEXT, DEFAULT_UNIT};

/// Title of the alert shown after a failed conversion
pub const ALERT_TITLE: &str = "Alert";

/// Snapshot of everything visible on the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub source_unit: String,
    pub target_unit: String,
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl Default for FormView {
    fn default() -> Self {
        FormView {
            source_unit: DEFAULT_UNIT.to_string(),
            target_unit: DEFAULT_UNIT.to_string(),
            input: DEFAULT_TEXT.to_string(),
            output: DEFAULT_TEXT.to_string(),
            alert: None,
        }
    }
}

pub struct Form<C = LengthConverter> {
    converter: C,
    view: FormView,
}

impl Form<LengthConverter> {
    pub fn new() -> Self {
        Self::with_converter(LengthConverter::new())
    }
}

impl Default for Form<LengthConverter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Convert> Form<C> {
    pub fn with_converter(converter: C) -> Self {
        Form {
            converter,
            view: FormView::default(),
        }
    }

    /// Current on-screen state
    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn alert(&self) -> Option<&str> {
        self.view.alert.as_deref()
    }

    /// Apply one command.
    ///
    /// A failed `Convert` resets every field before the error is returned, so
    /// no result from an earlier conversion stays visible. The error message
    /// becomes the alert.
    pub fn apply(&mut self, command: Command) -> Result<(), FormError> {
        debug!(%command, "applying command");
        match command {
            Command::SelectSourceUnit(unit) => self.view.source_unit = unit,
            Command::SelectTargetUnit(unit) => self.view.target_unit = unit,
            Command::EnterValue(text) => self.view.input = text,
            Command::Reset => self.reset(),
            Command::Convert => {
                if let Err(e) = self.run_conversion() {
                    warn!(code = e.code(), error = %e, "conversion failed, resetting form");
                    self.reset();
                    self.set_alert(e.to_string());
                    return Err(e);
                }
                self.view.alert = None;
            }
        }
        Ok(())
    }

    /// Restore both units, both fields and clear the alert
    pub fn reset(&mut self) {
        self.view = FormView::default();
    }

    fn run_conversion(&mut self) -> Result<(), FormError> {
        let value = parse_input(&self.view.input)?;
        let result = self
            .converter
            .convert(&self.view.source_unit, &self.view.target_unit, value)?;
        if !result.is_finite() {
            return Err(FormError::OutOfRange {
                input: self.view.input.clone(),
                source_unit: self.view.source_unit.clone(),
                target_unit: self.view.target_unit.clone(),
            });
        }

        debug!(
            source = %self.view.source_unit,
            target = %self.view.target_unit,
            value,
            result,
            "converted"
        );
        self.view.output = format_result(result);
        Ok(())
    }

    /// Empty messages keep the previous alert
    fn set_alert(&mut self, message: String) {
        if !message.is_empty() {
            self.view.alert = Some(message);
        }
    }
}
