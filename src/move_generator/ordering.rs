//! Candidate cell visitation orders.
//!
//! The heuristic table lists corners and edge squares first and the squares next to
//! corners last, so strong replies are tried early and tighten the pruning bound
//! sooner. The minimizing side walks the same table backwards.
//!
//! The table covers 60 cells and leaves out the centre (d4, e4, d5, e5), which is
//! filled in any game played from the opening. Positions set up by hand can leave
//! a centre cell empty and playable, so both directions visit the centre after the
//! table.

use std::fmt;
use std::str::FromStr;

use crate::board::Cell;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOrder {
    /// Walk the priority table (reversed for the minimizing side).
    Heuristic,
    /// Walk all 64 cells in ascending index order.
    Plain,
}

impl Default for MoveOrder {
    fn default() -> Self {
        MoveOrder::Heuristic
    }
}

impl fmt::Display for MoveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveOrder::Heuristic => "heuristic",
            MoveOrder::Plain => "plain",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MoveOrder {
    type Err = &'static str;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        match order.to_ascii_lowercase().as_str() {
            "heuristic" => Ok(MoveOrder::Heuristic),
            "plain" => Ok(MoveOrder::Plain),
            _ => Err("invalid move order; options are: heuristic, plain"),
        }
    }
}

#[rustfmt::skip]
pub static HEURISTIC_ORDER: [u8; 60] = [
    0, 56, 7, 63, 16, 2, 5, 23,
    40, 58, 47, 61, 18, 42, 21, 45,
    24, 32, 3, 4, 59, 60, 31, 39,
    26, 34, 19, 20, 29, 37, 43, 44,
    25, 33, 30, 38, 51, 52, 11, 12,
    10, 17, 41, 50, 13, 22, 46, 53,
    1, 8, 6, 15, 55, 62, 48, 57,
    9, 14, 49, 54,
];

/// Visited after the priority table in both directions.
pub static CENTRE_CELLS: [u8; 4] = [27, 28, 35, 36];

type TableIter = std::slice::Iter<'static, u8>;

/// Iterator over candidate cells in the order chosen for one side of the search.
#[derive(Clone, Debug)]
pub enum CandidateCells {
    Heuristic(std::iter::Chain<TableIter, TableIter>),
    ReverseHeuristic(std::iter::Chain<std::iter::Rev<TableIter>, TableIter>),
    Plain(std::ops::Range<u8>),
}

impl CandidateCells {
    pub fn new(order: MoveOrder, maximizing: bool) -> Self {
        match (order, maximizing) {
            (MoveOrder::Heuristic, true) => {
                CandidateCells::Heuristic(HEURISTIC_ORDER.iter().chain(CENTRE_CELLS.iter()))
            }
            (MoveOrder::Heuristic, false) => CandidateCells::ReverseHeuristic(
                HEURISTIC_ORDER.iter().rev().chain(CENTRE_CELLS.iter()),
            ),
            (MoveOrder::Plain, _) => CandidateCells::Plain(0..Cell::COUNT as u8),
        }
    }
}

impl Iterator for CandidateCells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let index = match self {
            CandidateCells::Heuristic(iter) => *iter.next()?,
            CandidateCells::ReverseHeuristic(iter) => *iter.next()?,
            CandidateCells::Plain(range) => range.next()?,
        };
        Some(Cell::new(index))
    }
}
