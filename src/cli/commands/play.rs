//! Play command - play a game against the computer.

use reversi::board::{Board, Side};
use reversi::evaluate::EvaluationMode;
use reversi::game::engine::EnginePreset;
use reversi::game::input_source::HumanInput;
use reversi::game::renderer::ConditionalStatsRenderer;
use reversi::game::session::SessionMode;
use structopt::StructOpt;

use super::util::{create_config, create_session, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    /// The side you play.
    #[structopt(short = "s", long = "side", default_value = "random")]
    pub side: Side,
    #[structopt(short = "e", long = "evaluation")]
    pub evaluation: Option<EvaluationMode>,
    #[structopt(short = "p", long = "preset", default_value = "full")]
    pub preset: EnginePreset,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Side,
}

impl Command for PlayArgs {
    fn execute(self) {
        let engine = create_config(self.preset, self.depth, self.evaluation);
        let mode = SessionMode::SinglePlayer {
            engine_side: self.side.opposite(),
        };
        let session = create_session(engine, mode, self.starting_position, self.to_move);
        run_game_loop(
            session,
            HumanInput,
            ConditionalStatsRenderer {
                human_side: self.side,
            },
        );
    }
}
