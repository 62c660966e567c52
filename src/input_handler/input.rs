//! Move input parsing and validation.

use std::io::{self, BufRead};
use std::str::FromStr;

use common::{Cell, CellParseError};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static CELL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8]|[0-9]{1,2})$").expect("CELL_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("invalid cell: {error}")]
    InvalidCell { error: CellParseError },
    #[error("input closed")]
    UserExit,
}

/// A line typed by a player during a game.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// Place a piece on a cell, given as `e3` or as an index `0`-`63`.
    Place { cell: Cell },
    /// Let the engine pick this move.
    UseEngine,
    NewGame,
    Exit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "engine" | "e" => return Ok(MoveInput::UseEngine),
            "new" | "n" => return Ok(MoveInput::NewGame),
            "quit" | "exit" | "q" => return Ok(MoveInput::Exit),
            _ => {}
        }

        if CELL_RE.is_match(&trimmed) {
            let cell = trimmed
                .parse::<Cell>()
                .map_err(|error| InputError::InvalidCell { error })?;
            return Ok(MoveInput::Place { cell });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from stdin and parses it. End of input counts as `UserExit`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
