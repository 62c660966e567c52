pub mod cell;
pub mod direction;

pub use cell::{Cell, CellParseError};
pub use direction::Direction;
