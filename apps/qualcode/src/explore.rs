//! # Explore Session
//!
//! Line-driven interactive session. Each accepted input becomes an
//! [`Event`], the state is replaced by `update`, and the view is redrawn.

use crate::present::present;
use qualcode_core::{Catalog, CodingError, Event, ExampleKey, Glyphs, StageId, ViewState, render, update};
use std::io::{BufRead, Write};

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  1-5            expand or collapse a stage
  example <key>  show another worked example
  reset          collapse every stage
  help           show this help
  quit           leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Help,
    Quit,
    /// Blank line; nothing to do.
    Empty,
}

/// Parse one input line.
///
/// Out-of-range stage numbers fail with `InvalidStage`; anything else that is
/// not a command fails with `Format`.
pub fn parse_input(line: &str) -> Result<Input, CodingError> {
    let line = line.trim();
    let mut words = line.split_whitespace();

    match (words.next(), words.next(), words.next()) {
        (None, _, _) => Ok(Input::Empty),
        (Some("q" | "quit" | "exit"), None, _) => Ok(Input::Quit),
        (Some("help" | "?"), None, _) => Ok(Input::Help),
        (Some("reset"), None, _) => Ok(Input::Event(Event::CollapseAll)),
        (Some("example"), Some(key), None) => {
            Ok(Input::Event(Event::SelectExample(ExampleKey::new(key))))
        }
        (Some(word), None, _) => match word.parse::<u8>() {
            Ok(n) => Ok(Input::Event(Event::ToggleStage(StageId::new(n)?))),
            Err(_) => Err(unrecognized(line)),
        },
        _ => Err(unrecognized(line)),
    }
}

fn unrecognized(line: &str) -> CodingError {
    CodingError::Format(format!("Unrecognized input '{line}' (type 'help')"))
}

fn io_error(e: std::io::Error) -> CodingError {
    CodingError::Io(e.to_string())
}

/// Run a session until `quit` or end of input. Returns the final state.
///
/// Rejected input is reported on `output` and leaves the state unchanged.
pub fn run_explore<R: BufRead, W: Write>(
    catalog: &Catalog,
    glyphs: &dyn Glyphs,
    initial: ViewState,
    input: R,
    mut output: W,
) -> Result<ViewState, CodingError> {
    let mut state = initial;
    write!(output, "{}", present(&render(catalog, &state)?, glyphs)).map_err(io_error)?;
    writeln!(output, "(type 'help' for commands)").map_err(io_error)?;

    for line in input.lines() {
        let line = line.map_err(io_error)?;

        let event = match parse_input(&line) {
            Ok(Input::Event(event)) => event,
            Ok(Input::Empty) => continue,
            Ok(Input::Help) => {
                writeln!(output, "{HELP}").map_err(io_error)?;
                continue;
            }
            Ok(Input::Quit) => break,
            Err(e) => {
                tracing::debug!("Rejected input: {}", e);
                writeln!(output, "error: {e}").map_err(io_error)?;
                continue;
            }
        };

        match update(catalog, &state, event.clone()) {
            Ok(next) => {
                tracing::debug!(?event, expanded = ?next.expanded, "Applied event");
                state = next;
                write!(output, "{}", present(&render(catalog, &state)?, glyphs))
                    .map_err(io_error)?;
            }
            Err(e) => {
                tracing::warn!("Event rejected: {}", e);
                writeln!(output, "error: {e}").map_err(io_error)?;
            }
        }
    }

    output.flush().map_err(io_error)?;
    Ok(state)
}
