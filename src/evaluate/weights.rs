//! Static positional weights for every cell.
//!
//! Squares next to a corner are a liability while the corner is empty (they hand
//! the corner to the opponent) and become mildly useful once the corner is taken,
//! so their weight is looked up against the live corner on every evaluation.

use crate::board::{Board, Cell};

pub const CORNER_WEIGHT: i32 = 99;

/// Weight of a corner-dependent square once its corner is occupied by either side.
pub const SETTLED_WEIGHT: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellWeight {
    Fixed(i32),
    /// `open` applies while the cell at index `corner` is empty.
    CornerDependent { corner: u8, open: i32 },
}

use CellWeight::{CornerDependent as Near, Fixed};

const fn near(corner: u8, open: i32) -> CellWeight {
    Near { corner, open }
}

const A1: u8 = 0;
const H1: u8 = 7;
const A8: u8 = 56;
const H8: u8 = 63;

#[rustfmt::skip]
pub const CELL_WEIGHTS: [CellWeight; 64] = [
    Fixed(99),       near(A1, -8),     Fixed(8),  Fixed(6), Fixed(6), Fixed(8),  near(H1, -8),     Fixed(99),
    near(A1, -8),    near(A1, -24),    Fixed(-4), near(A1, -3), near(H1, -3), Fixed(-4), near(H1, -24), near(H1, -8),
    Fixed(8),        Fixed(-4),        Fixed(7),  Fixed(4), Fixed(4), Fixed(7),  Fixed(-4),        Fixed(8),
    Fixed(6),        near(A1, -3),     Fixed(4),  Fixed(0), Fixed(0), Fixed(4),  near(H1, -3),     Fixed(6),
    Fixed(6),        near(A8, -3),     Fixed(4),  Fixed(0), Fixed(0), Fixed(4),  near(H8, -3),     Fixed(6),
    Fixed(8),        Fixed(-4),        Fixed(7),  Fixed(4), Fixed(4), Fixed(7),  Fixed(-4),        Fixed(8),
    near(A8, -8),    near(A8, -24),    Fixed(-4), near(A8, -3), near(H8, -3), Fixed(-4), near(H8, -24), near(H8, -8),
    Fixed(99),       near(A8, -8),     Fixed(8),  Fixed(6), Fixed(6), Fixed(8),  near(H8, -8),     Fixed(99),
];

/// The weight of `cell` given the current corner occupancy of `board`.
#[inline(always)]
pub fn cell_weight(board: &Board, cell: Cell) -> i32 {
    match CELL_WEIGHTS[cell.index()] {
        Fixed(weight) => weight,
        Near { corner, open } => {
            if board.is_occupied(Cell::new(corner)) {
                SETTLED_WEIGHT
            } else {
                open
            }
        }
    }
}
