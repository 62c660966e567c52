//! Parsing of player input and textual board positions.

mod input;
mod position;

pub use input::{parse_move_input, InputError, MoveInput};
pub use position::{parse_position, PositionParseError};
