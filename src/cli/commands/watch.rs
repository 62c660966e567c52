//! Watch command - watch the computer play against itself.

use std::time::Duration;

use reversi::board::{Board, Side};
use reversi::evaluate::EvaluationMode;
use reversi::game::engine::EnginePreset;
use reversi::game::input_source::HumanInput;
use reversi::game::renderer::StatsRenderer;
use reversi::game::session::SessionMode;
use structopt::StructOpt;

use super::util::{create_config, create_session, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    /// Pause between moves, in milliseconds.
    #[structopt(long = "delay", default_value = "500")]
    pub delay: u64,
    #[structopt(short = "e", long = "evaluation")]
    pub evaluation: Option<EvaluationMode>,
    #[structopt(short = "p", long = "preset", default_value = "full")]
    pub preset: EnginePreset,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Side,
}

impl Command for WatchArgs {
    fn execute(self) {
        let engine = create_config(self.preset, self.depth, self.evaluation);
        let session = create_session(
            engine,
            SessionMode::SelfPlay,
            self.starting_position,
            self.to_move,
        );
        run_game_loop(
            session,
            HumanInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay)),
            },
        );
    }
}
