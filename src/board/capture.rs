//! The capture scan shared by legality checks, the search, and the game session.

use common::Direction;
use smallvec::SmallVec;

use super::{Board, Cell, CellState, Side};

/// A run in one direction can hold at most six opponent pieces.
type Run = SmallVec<[Cell; 6]>;
pub type Captures = SmallVec<[Cell; 24]>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaptureMode {
    /// Answer "would this capture anything" without touching the board.
    Probe,
    /// Flip every captured piece and place the mover's piece.
    Apply,
}

impl Board {
    /// Cheap pre-filter: does any in-bounds neighbour hold an opponent piece?
    pub fn adjacent_opponent(&self, cell: Cell, side: Side) -> bool {
        let opponent = CellState::from(side.opposite());
        Direction::ALL
            .iter()
            .filter_map(|direction| direction.step(cell))
            .any(|neighbour| self.get(neighbour) == opponent)
    }

    /// Scans all eight directions from `cell` for opponent runs bracketed by one of
    /// `side`'s pieces.
    ///
    /// In `Probe` mode the scan stops at the first non-empty run and returns 1; the
    /// board is never modified. In `Apply` mode every bracketed piece is flipped, the
    /// mover's piece is placed on `cell`, and the number of flipped pieces is returned.
    /// A return of 0 means the move is illegal (occupied origin or nothing captured)
    /// and the board is left exactly as it was.
    pub fn probe_or_apply(&mut self, cell: Cell, side: Side, mode: CaptureMode) -> u8 {
        match mode {
            CaptureMode::Probe => self.probe(cell, side) as u8,
            CaptureMode::Apply => self.apply(cell, side),
        }
    }

    /// Read-only form of `probe_or_apply(.., CaptureMode::Probe)`.
    pub fn probe(&self, cell: Cell, side: Side) -> bool {
        if self.is_occupied(cell) {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&direction| !self.capture_run(cell, side, direction).is_empty())
    }

    /// Shorthand for `probe_or_apply(.., CaptureMode::Apply)`.
    pub fn apply(&mut self, cell: Cell, side: Side) -> u8 {
        let captured = self.captures(cell, side);
        if captured.is_empty() {
            return 0;
        }

        let state = CellState::from(side);
        for &flipped in captured.iter() {
            self.put(flipped, state);
        }
        self.put(cell, state);

        captured.len() as u8
    }

    /// The union of every run `side` would capture by playing on `cell`.
    pub fn captures(&self, cell: Cell, side: Side) -> Captures {
        let mut captured = Captures::new();
        if self.is_occupied(cell) {
            return captured;
        }

        for &direction in Direction::ALL.iter() {
            captured.extend(self.capture_run(cell, side, direction));
        }
        captured
    }

    /// Walks outward from `origin` collecting opponent pieces. The run only counts
    /// if it ends on one of `side`'s own pieces; hitting an empty cell or the edge
    /// first discards it.
    fn capture_run(&self, origin: Cell, side: Side, direction: Direction) -> Run {
        let own = CellState::from(side);
        let opponent = CellState::from(side.opposite());
        let mut run = Run::new();

        for cell in direction.ray(origin) {
            let state = self.get(cell);
            if state == opponent {
                run.push(cell);
            } else if state == own {
                return run;
            } else {
                break;
            }
        }

        Run::new()
    }
}
