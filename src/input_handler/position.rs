//! Textual board positions: 64 cells of `.`, `B` or `W` in row-major order,
//! starting at a1. Whitespace and `/` row separators are ignored.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Cell, CellState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("Wrong number of cells: 64 expected, {cell_count:?} given")]
    WrongCellCount { cell_count: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCharacter { invalid_character: char },
}

type PositionResult<T> = Result<T, PositionParseError>;

fn parse_cell_char(c: char) -> PositionResult<CellState> {
    match c {
        '.' | '-' => Ok(CellState::Empty),
        'B' | 'b' | 'X' | 'x' => Ok(CellState::Black),
        'W' | 'w' | 'O' | 'o' => Ok(CellState::White),
        _ => Err(PositionParseError::InvalidCharacter {
            invalid_character: c,
        }),
    }
}

pub fn parse_position(position: &str) -> PositionResult<Board> {
    let states = position
        .chars()
        .filter(|&c| !c.is_whitespace() && c != '/')
        .map(parse_cell_char)
        .collect::<PositionResult<Vec<CellState>>>()?;

    if states.len() != Cell::COUNT {
        return Err(PositionParseError::WrongCellCount {
            cell_count: states.len(),
        });
    }

    let mut board = Board::new();
    for (cell, &state) in Cell::all().zip(states.iter()) {
        board.put(cell, state);
    }
    Ok(board)
}

impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        parse_position(position)
    }
}
