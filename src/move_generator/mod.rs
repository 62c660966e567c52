//! Legal move generation for Reversi.

pub mod generator;
mod ordering;

pub use generator::{LegalMoves, MoveGenerator, MoveList};
pub use ordering::{CandidateCells, MoveOrder, HEURISTIC_ORDER};
