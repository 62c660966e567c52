use super::{Board, Cell};
use std::fmt;

const COLUMN_LABELS: &str = "  a b c d e f g h";

impl Board {
    /// Renders the board as a grid with column letters and 1-based row numbers.
    pub fn to_ascii(&self) -> String {
        let mut output = String::with_capacity(200);
        output.push_str(COLUMN_LABELS);
        output.push('\n');

        for row in 0..8u8 {
            output.push_str(&format!("{} ", row + 1));
            for col in 0..8u8 {
                let state = self.get(Cell::from_row_col(row, col));
                output.push(state.symbol());
                if col < 7 {
                    output.push(' ');
                }
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n{}", self.to_ascii())
    }
}

#[macro_export]
macro_rules! reversi_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 cells
        assert_eq!(cells.len(), 64, "Invalid number of cells. Expected 64, got {}", cells.len());
        // Rows are written top to bottom, so the sequence is already in index order.
        for (i, &c) in cells.iter().enumerate() {
            let state = match c {
                '.' => $crate::board::CellState::Empty,
                'B' => $crate::board::CellState::Black,
                'W' => $crate::board::CellState::White,
                _ => panic!("Invalid character in reversi position"),
            };
            board.put($crate::board::Cell::new(i as u8), state);
        }
        board
    }};
}
