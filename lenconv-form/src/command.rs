//! Typed commands a front end dispatches to the form
//!
//! Each menu item, button or text edit maps to exactly one variant, so the
//! form never has to guess which widget fired.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick the unit the input value is expressed in
    SelectSourceUnit(String),
    /// Pick the unit to convert into
    SelectTargetUnit(String),
    /// Replace the text of the input field
    EnterValue(String),
    /// Run the conversion and show the result
    Convert,
    /// Restore every field to its default
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("'{0}' needs an argument")]
    MissingArgument(String),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parse one line such as `from km`, `to ft`, `value 12.5`, `convert` or `reset`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &str| -> Result<String, CommandParseError> {
            if rest.is_empty() {
                Err(CommandParseError::MissingArgument(name.to_string()))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "" => Err(CommandParseError::Empty),
            "from" | "source" => Ok(Command::SelectSourceUnit(argument(word)?)),
            "to" | "target" => Ok(Command::SelectTargetUnit(argument(word)?)),
            // The value text is passed through untouched; validation happens on convert
            "value" | "set" => Ok(Command::EnterValue(argument(word)?)),
            "convert" | "calc" => Ok(Command::Convert),
            "reset" | "clear" => Ok(Command::Reset),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SelectSourceUnit(unit) => write!(f, "from {}", unit),
            Command::SelectTargetUnit(unit) => write!(f, "to {}", unit),
            Command::EnterValue(text) => write!(f, "value {}", text),
            Command::Convert => write!(f, "convert"),
            Command::Reset => write!(f, "reset"),
        }
    }
}
