use log::debug;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::board::{Board, Cell, Side};

use super::ordering::{CandidateCells, MoveOrder};

/// A side never has more than 32 legal placements in practice.
pub type MoveList = SmallVec<[Cell; 32]>;

/// Minimum number of moves required to justify parallelization overhead when
/// counting positions.
const PARALLEL_MOVE_THRESHOLD: usize = 6;

/// Only split work across threads while at least this much depth remains.
const PARALLEL_DEPTH_THRESHOLD: u8 = 3;

/// Produces the legal placements for a side in a fixed visitation order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator {
    order: MoveOrder,
}

impl MoveGenerator {
    pub fn new(order: MoveOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Lazily yields every legal placement for `side`. The maximizing side walks the
    /// candidate order forward, the minimizing side walks it backward. Each candidate
    /// is checked with the cheap neighbour test before the capture probe.
    pub fn legal_moves<'a>(&self, board: &'a Board, side: Side, maximizing: bool) -> LegalMoves<'a> {
        LegalMoves {
            board,
            side,
            candidates: CandidateCells::new(self.order, maximizing),
        }
    }

    /// Collects the forward-order legal moves for `side`.
    pub fn generate_moves(&self, board: &Board, side: Side) -> MoveList {
        self.legal_moves(board, side, true).collect()
    }

    /// Counts the positions reachable in exactly `depth` plies from `board` with `side`
    /// to move. A side with no placement passes, which uses up a ply. A finished game
    /// counts as a single position no matter how much depth remains. Counting always
    /// walks the cells in plain order, whatever order this generator searches in.
    pub fn count_positions(&self, depth: u8, board: &Board, side: Side) -> usize {
        let plain = MoveGenerator::new(MoveOrder::Plain);
        let count = count_positions_inner(&plain, depth, board, side);
        debug!("counted {} positions at depth {}", count, depth);
        count
    }
}

fn count_positions_inner(
    move_generator: &MoveGenerator,
    depth: u8,
    board: &Board,
    side: Side,
) -> usize {
    if depth == 0 {
        return 1;
    }

    let candidates = move_generator.generate_moves(board, side);
    let next_side = side.opposite();

    if candidates.is_empty() {
        if board.has_legal_move(next_side) {
            return count_positions_inner(move_generator, depth - 1, board, next_side);
        }
        return 1;
    }

    let count_child = |&cell: &Cell| {
        let mut child = *board;
        child.apply(cell, side);
        count_positions_inner(move_generator, depth - 1, &child, next_side)
    };

    if candidates.len() >= PARALLEL_MOVE_THRESHOLD && depth >= PARALLEL_DEPTH_THRESHOLD {
        candidates.as_slice().par_iter().map(count_child).sum()
    } else {
        candidates.iter().map(count_child).sum()
    }
}

/// Iterator returned by [`MoveGenerator::legal_moves`]. A clone resumes from the same
/// point in the candidate order.
#[derive(Clone, Debug)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    side: Side,
    candidates: CandidateCells,
}

impl<'a> Iterator for LegalMoves<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let board = self.board;
        let side = self.side;
        self.candidates.find(|&cell| board.is_legal_move(cell, side))
    }
}
