//! lenconv - terminal length converter
//!
//! Reads one command per line from stdin and applies it to a headless form.
//!
//! Form commands:
//! - from <unit>: select the start unit
//! - to <unit>: select the result unit
//! - value <text>: type into the input field
//! - convert: run the conversion
//! - reset / clear: restore defaults
//!
//! Session commands:
//! - units: list units by system
//! - state: print the form as JSON
//! - help
//! - quit / exit
//!
//! Logs go to stderr (filter with RUST_LOG); stdout carries only the form.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use lenconv_form::{Command, Form, FormView, ALERT_TITLE};
use lenconv_units::{UnitSystem, CONVERTER};

const APP_TITLE: &str = "UnitConverter";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_PROMPT: &str = "> ";

const HELP: &str = "\
Actions:      convert | reset (clear)
Start Unit:   from <unit>
Result Unit:  to <unit>
Input:        value <number>
Session:      units | state | help | quit";

/// Prompt shown when reading from a terminal
fn prompt() -> String {
    env::var("LENCONV_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug, Serialize)]
struct StateReport<'a> {
    title: &'static str,
    form: &'a FormView,
}

/// Result of one input line
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// `<input> <source> = <output> <target>`
fn render(view: &FormView) -> String {
    format!("{} {} = {} {}", view.input, view.source_unit, view.output, view.target_unit)
}

fn render_units() -> String {
    UnitSystem::ALL
        .iter()
        .map(|system| {
            let table = CONVERTER.table(*system);
            let units: Vec<String> = table
                .units()
                .map(|u| format!("{} ({})", u.symbol, u.name))
                .collect();
            format!(
                "{} (base {}): {}",
                table.system(),
                table.system().base_symbol(),
                units.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn handle_line<W: Write>(form: &mut Form, line: &str, out: &mut W) -> io::Result<Flow> {
    let line = line.trim();
    match line {
        "" => return Ok(Flow::Continue),
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => {
            writeln!(out, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        "units" => {
            writeln!(out, "{}", render_units())?;
            return Ok(Flow::Continue);
        }
        "state" => {
            let report = StateReport { title: APP_TITLE, form: form.view() };
            let json = serde_json::to_string(&report)
                .map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    let command: Command = match line.parse() {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "unrecognized input");
            writeln!(out, "{}: {} (try 'help')", ALERT_TITLE, e)?;
            return Ok(Flow::Continue);
        }
    };

    if let Err(e) = form.apply(command) {
        writeln!(out, "{}: {} (suggestion: {})", ALERT_TITLE, e, e.suggestion())?;
    }
    writeln!(out, "{}", render(form.view()))?;
    Ok(Flow::Continue)
}

/// Greeting for interactive sessions. A failed write is logged, not fatal.
fn write_banner<W: Write>(out: &mut W) -> bool {
    match writeln!(out, "{} v{}. Type 'help' for commands.", APP_TITLE, APP_VERSION) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to write banner");
            false
        }
    }
}

/// Drive the form until EOF or `quit`
fn run<R: BufRead, W: Write>(reader: R, out: &mut W, prompt: Option<&str>) -> io::Result<()> {
    let mut form = Form::new();
    let mut lines = reader.lines();

    loop {
        if let Some(p) = prompt {
            write!(out, "{}", p)?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                info!("end of input");
                break;
            }
        };

        if handle_line(&mut form, &line, out)? == Flow::Quit {
            info!("quit requested");
            break;
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    init_logging();

    info!(version = APP_VERSION, "{} started", APP_TITLE);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let prompt = prompt();

    let mut stdout = io::stdout().lock();
    if interactive {
        write_banner(&mut stdout);
    }

    if let Err(e) = run(stdin.lock(), &mut stdout, interactive.then_some(prompt.as_str())) {
        warn!(error = %e, "session ended with I/O error");
    }

    info!("{} shutting down", APP_TITLE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_convert_session() {
        let out = session("from km\nto m\nvalue 2\nconvert\n");
        assert_eq!(out.lines().last(), Some("2 km = 2000.000 m"));
    }

    #[test]
    fn test_error_prints_alert_and_defaults() {
        let out = session("from m\nto ft\nvalue 1\nconvert\nvalue -1\nconvert\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.contains(&"1 m = 3.281 ft"));
        assert!(lines.iter().any(|l| l.starts_with("Alert: Invalid lengths. Cannot have negatives.")));
        assert_eq!(lines.last(), Some(&"0.0 m = 0.0 m"));
    }

    #[test]
    fn test_unknown_unit_alert() {
        let out = session("from xyz\nconvert\n");
        assert!(out.contains("Alert: unknown source unit: xyz"));
        assert_eq!(out.lines().last(), Some("0.0 m = 0.0 m"));
    }

    #[test]
    fn test_unknown_command_keeps_running() {
        let out = session("jump\nconvert\n");
        assert!(out.contains("Alert: unknown command: jump"));
        assert_eq!(out.lines().last(), Some("0.0 m = 0.000 m"));
    }

    #[test]
    fn test_half_up_display() {
        let out = session("value 1.0005\nconvert\n");
        assert_eq!(out.lines().last(), Some("1.0005 m = 1.001 m"));
    }

    #[test]
    fn test_overflow_alert() {
        let out = session("from km\nto km\nvalue 1e306\nconvert\n");
        assert!(out.contains("Alert: Result of converting 1e306 km to km is out of range"));
        assert_eq!(out.lines().last(), Some("0.0 m = 0.0 m"));
    }

    #[test]
    fn test_banner() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut out = Vec::new();
        assert!(write_banner(&mut out));
        assert!(String::from_utf8(out).unwrap().starts_with("UnitConverter v"));

        assert!(!write_banner(&mut Closed));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = session("quit\nconvert\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_units_listing() {
        let out = session("units\n");
        assert!(out.contains("metric (base m): m (meter), km (kilometer), dm (decimeter), cm (centimeter), mm (millimeter)"));
        assert!(out.contains("imperial (base ft): ft (foot), mi (mile), yd (yard), in (inch)"));
    }

    #[test]
    fn test_state_is_json() {
        let out = session("to mi\nstate\n");
        let json: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(json["title"], "UnitConverter");
        assert_eq!(json["form"]["target_unit"], "mi");
    }

    #[test]
    fn test_prompt_written_when_interactive() {
        let mut out = Vec::new();
        run("help\n".as_bytes(), &mut out, Some("$ ")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("$ Actions:"));
    }
}
