use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::board::{Board, Side};
use crate::evaluate::{EvaluationMode, Evaluator, DEFAULT_PHASE_SWITCH};
use crate::move_generator::{MoveGenerator, MoveOrder};
use crate::searcher::{search_best_move, ScoreMove, SearchContext};

pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

/// Named engine configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePreset {
    /// Heuristic move ordering with the endgame switch to material counting.
    Full,
    /// Ascending cell order with a single evaluation mode for the whole game.
    Classic,
}

impl fmt::Display for EnginePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnginePreset::Full => "full",
            EnginePreset::Classic => "classic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EnginePreset {
    type Err = &'static str;

    fn from_str(preset: &str) -> Result<Self, Self::Err> {
        match preset.to_ascii_lowercase().as_str() {
            "full" => Ok(EnginePreset::Full),
            "classic" => Ok(EnginePreset::Classic),
            _ => Err("invalid preset; options are: full, classic"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    DepthTooLow,
    #[error("phase switch must be at most 64, got {threshold:?}")]
    PhaseSwitchOutOfRange { threshold: u8 },
}

/// Everything the search needs to know, passed by value to each computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub evaluation: EvaluationMode,
    pub phase_switch: Option<u8>,
    pub move_order: MoveOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(EnginePreset::Full, DEFAULT_SEARCH_DEPTH)
    }
}

impl EngineConfig {
    pub fn preset(preset: EnginePreset, search_depth: u8) -> Self {
        match preset {
            EnginePreset::Full => Self {
                search_depth,
                evaluation: EvaluationMode::Positional,
                phase_switch: Some(DEFAULT_PHASE_SWITCH),
                move_order: MoveOrder::Heuristic,
            },
            EnginePreset::Classic => Self {
                search_depth,
                evaluation: EvaluationMode::Positional,
                phase_switch: None,
                move_order: MoveOrder::Plain,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::DepthTooLow);
        }

        match self.phase_switch {
            Some(threshold) if threshold as usize > crate::board::Cell::COUNT => {
                Err(ConfigError::PhaseSwitchOutOfRange { threshold })
            }
            _ => Ok(()),
        }
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.evaluation, self.phase_switch)
    }

    pub fn move_generator(&self) -> MoveGenerator {
        MoveGenerator::new(self.move_order)
    }
}

/// Search performance statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub passes: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}

/// Picks moves for a side. The engine holds no game state of its own; callers
/// hand it the position to think about.
pub struct Engine {
    config: EngineConfig,
    search_context: SearchContext,
}

impl Engine {
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            search_context: SearchContext::new(
                config.search_depth,
                config.evaluator(),
                config.move_generator(),
            ),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs a full search for `side` on `board`.
    pub fn best_move(&mut self, board: &Board, side: Side, moves_played: u8) -> ScoreMove {
        debug!("engine config: {:?}", self.config);
        search_best_move(&mut self.search_context, board, side, moves_played)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            passes: self.search_context.pass_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}
