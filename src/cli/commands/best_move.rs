//! Best move command - print the engine's choice for a given position.

use reversi::board::{Board, Side};
use reversi::evaluate::EvaluationMode;
use reversi::game::engine::{Engine, EnginePreset};
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "s", long = "side", default_value = "white")]
    pub side: Side,
    #[structopt(short = "e", long = "evaluation")]
    pub evaluation: Option<EvaluationMode>,
    #[structopt(short = "p", long = "preset", default_value = "full")]
    pub preset: EnginePreset,
    #[structopt(long = "position")]
    pub position: Board,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = create_config(self.preset, self.depth, self.evaluation);
        if let Err(err) = config.validate() {
            eprintln!("{}", err);
            return;
        }

        if !self.position.has_legal_move(self.side) {
            eprintln!("{} has no legal move in the given position.", self.side);
            return;
        }

        let mut engine = Engine::with_config(config);
        let moves_played = self.position.occupied_count();
        let result = engine.best_move(&self.position, self.side, moves_played);

        match result.cell {
            Some(cell) => println!("{}", cell),
            None => eprintln!("Failed to find a move for {}", self.side),
        }
    }
}
