//! Count positions command - count reachable positions at each depth.

use std::time::{Duration, Instant};

use reversi::board::{Board, Side};
use reversi::move_generator::{MoveGenerator, MoveOrder};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
    #[structopt(long = "to-move", default_value = "white")]
    pub to_move: Side,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = self
            .starting_position
            .unwrap_or_else(Board::starting_position);
        let move_generator = MoveGenerator::new(MoveOrder::Plain);

        let mut total_positions = 0;
        let mut total_duration = Duration::from_secs(0);

        for depth in 1..=self.depth {
            let start = Instant::now();
            let count = move_generator.count_positions(depth, &board, self.to_move);
            let duration = start.elapsed();
            let positions_per_second = count as f64 / duration.as_secs_f64();

            total_positions += count;
            total_duration += duration;

            println!(
                "depth: {}, positions: {}, positions per second: {:.0}",
                depth, count, positions_per_second
            );
        }

        println!(
            "total positions: {}, total duration: {:?}, positions per second: {:.0}",
            total_positions,
            total_duration,
            total_positions as f64 / total_duration.as_secs_f64()
        );
    }
}
