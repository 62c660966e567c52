//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, play::PlayArgs, pvp::PvpArgs,
    watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "reversi", about = "A Reversi (Othello) engine implemented in Rust")]
pub enum Reversi {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches `--depth` plies ahead (default: 4). Your side is chosen at random unless you specify one with `--side`. White always moves first. Type a cell such as `e3` to move, `engine` to let the computer move for you, `new` to restart, or `quit`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the engine's move for `--side` (default: white) in the position given with `--position` (required): 64 cells of `.`, `B` or `W` from a1 to h8, with whitespace and `/` ignored."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable in 1 to `--depth` plies (default: 6) and report how long it took."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
            CountPositions(cmd),
        }
    }
}
