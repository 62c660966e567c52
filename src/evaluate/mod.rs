//! Static evaluation of Reversi positions.
//!
//! Scores are always reported from a fixed perspective: positive favours
//! `perspective`, negative favours its opponent.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Side};

mod weights;

pub use weights::{cell_weight, CellWeight, CELL_WEIGHTS, CORNER_WEIGHT, SETTLED_WEIGHT};

/// Number of placed pieces at which evaluation switches to pure material counting.
pub const DEFAULT_PHASE_SWITCH: u8 = 58;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvaluationMode {
    /// One point per own piece, minus one per opponent piece.
    Material,
    /// Cell weights, with corner-adjacent squares judged against their corner.
    Positional,
}

impl Default for EvaluationMode {
    fn default() -> Self {
        EvaluationMode::Positional
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvaluationMode::Material => "material",
            EvaluationMode::Positional => "positional",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EvaluationMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.to_ascii_lowercase().as_str() {
            "material" => Ok(EvaluationMode::Material),
            "positional" => Ok(EvaluationMode::Positional),
            _ => Err("invalid evaluation mode; options are: material, positional"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluator {
    mode: EvaluationMode,
    phase_switch: Option<u8>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluationMode::Positional, Some(DEFAULT_PHASE_SWITCH))
    }
}

impl Evaluator {
    /// `phase_switch` of `None` keeps `mode` for the whole game.
    pub fn new(mode: EvaluationMode, phase_switch: Option<u8>) -> Self {
        Self { mode, phase_switch }
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn phase_switch(&self) -> Option<u8> {
        self.phase_switch
    }

    /// The mode actually used once `moves_played` pieces are on the board.
    pub fn effective_mode(&self, moves_played: u8) -> EvaluationMode {
        match self.phase_switch {
            Some(threshold) if moves_played >= threshold => EvaluationMode::Material,
            _ => self.mode,
        }
    }

    #[inline]
    pub fn score(&self, board: &Board, perspective: Side, moves_played: u8) -> i32 {
        match self.effective_mode(moves_played) {
            EvaluationMode::Material => material_score(board, perspective),
            EvaluationMode::Positional => positional_score(board, perspective),
        }
    }
}

pub fn material_score(board: &Board, perspective: Side) -> i32 {
    board.count(perspective) as i32 - board.count(perspective.opposite()) as i32
}

pub fn positional_score(board: &Board, perspective: Side) -> i32 {
    board
        .cells()
        .filter_map(|(cell, state)| state.side().map(|owner| (cell, owner)))
        .map(|(cell, owner)| {
            let weight = cell_weight(board, cell);
            if owner == perspective {
                weight
            } else {
                -weight
            }
        })
        .sum()
}
