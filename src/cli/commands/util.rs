//! Shared utilities for CLI commands.

use std::process;

use log::error;
use reversi::board::{Board, Side};
use reversi::evaluate::EvaluationMode;
use reversi::game::engine::{EngineConfig, EnginePreset};
use reversi::game::input_source::InputSource;
use reversi::game::r#loop::GameLoop;
use reversi::game::renderer::GameRenderer;
use reversi::game::session::{GameSession, SessionConfig, SessionMode};

pub(crate) fn create_config(
    preset: EnginePreset,
    depth: u8,
    evaluation: Option<EvaluationMode>,
) -> EngineConfig {
    let mut config = EngineConfig::preset(preset, depth);
    if let Some(evaluation) = evaluation {
        config.evaluation = evaluation;
    }
    config
}

/// Builds the session or exits with the configuration error.
pub(crate) fn create_session(
    engine: EngineConfig,
    mode: SessionMode,
    position: Option<Board>,
    side_to_move: Side,
) -> GameSession {
    let config = SessionConfig { engine, mode };
    let board = position.unwrap_or_else(Board::starting_position);

    match GameSession::with_position(config, board, side_to_move) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

pub(crate) fn run_game_loop<I, R>(session: GameSession, input_source: I, renderer: R)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(session, input_source, renderer);
    if let Err(err) = game.run() {
        error!("game loop stopped: {}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}
