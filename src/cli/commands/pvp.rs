//! PvP command - play against another human.

use reversi::board::{Board, Side};
use reversi::game::engine::EngineConfig;
use reversi::game::input_source::HumanInput;
use reversi::game::renderer::SimpleRenderer;
use reversi::game::session::SessionMode;
use structopt::StructOpt;

use super::util::{create_session, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Side,
}

impl Command for PvpArgs {
    fn execute(self) {
        let session = create_session(
            EngineConfig::default(),
            SessionMode::TwoPlayer,
            self.starting_position,
            self.to_move,
        );
        run_game_loop(session, HumanInput, SimpleRenderer);
    }
}
