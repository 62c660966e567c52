pub mod side;

mod capture;
mod display;

#[cfg(test)]
mod tests;

pub use capture::{CaptureMode, Captures};
pub use common::Cell;
pub use side::Side;

use crate::reversi_position;

/// Contents of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl CellState {
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Side::Black),
            CellState::White => Some(Side::White),
        }
    }

    pub fn symbol(self) -> char {
        match self.side() {
            Some(side) => side.symbol(),
            None => '.',
        }
    }
}

impl From<Side> for CellState {
    #[inline(always)]
    fn from(side: Side) -> Self {
        match side {
            Side::Black => CellState::Black,
            Side::White => CellState::White,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// The 64-cell Reversi board. It is a plain value: copying it is how the search
/// explores positions without touching the game's own board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [CellState; Cell::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [CellState::Empty; Cell::COUNT],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    /// The canonical opening: white on d4/e5, black on e4/d5.
    pub fn starting_position() -> Self {
        reversi_position! {
            ........
            ........
            ........
            ...WB...
            ...BW...
            ........
            ........
            ........
        }
    }

    #[inline(always)]
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[cell.index()]
    }

    /// Overwrites a cell without any capture logic. Used to set up positions;
    /// games mutate the board only through `probe_or_apply`.
    pub fn put(&mut self, cell: Cell, state: CellState) {
        self.cells[cell.index()] = state;
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.get(cell).is_empty()
    }

    pub fn count(&self, side: Side) -> u8 {
        let state = CellState::from(side);
        self.cells.iter().filter(|&&s| s == state).count() as u8
    }

    pub fn occupied_count(&self) -> u8 {
        self.cells.iter().filter(|s| !s.is_empty()).count() as u8
    }

    pub fn empty_count(&self) -> u8 {
        Cell::COUNT as u8 - self.occupied_count()
    }

    /// Returns true if `side` has at least one legal placement anywhere on the board.
    pub fn has_legal_move(&self, side: Side) -> bool {
        Cell::all().any(|cell| self.is_legal_move(cell, side))
    }

    pub fn is_legal_move(&self, cell: Cell, side: Side) -> bool {
        self.get(cell).is_empty() && self.adjacent_opponent(cell, side) && self.probe(cell, side)
    }

    /// The game is over once neither side can place a piece.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Side::Black) && !self.has_legal_move(Side::White)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        Cell::all().map(move |cell| (cell, self.get(cell)))
    }
}
