//! Common types re-exported for convenience.

pub use crate::board::{Board, CaptureMode, Cell, CellState, Side};
pub use crate::evaluate::{EvaluationMode, Evaluator};
pub use crate::game::engine::{Engine, EngineConfig, EnginePreset};
pub use crate::game::session::{GameSession, SessionConfig, SessionMode};
pub use crate::move_generator::{MoveGenerator, MoveOrder};
pub use crate::searcher::{search_best_move, ScoreMove, SearchContext};
