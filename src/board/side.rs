use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two competing colors. White (side B) moves first; black (side A) holds
/// d5/e4 in the starting position and is the engine's side by default.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opposite(&self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::Black)
    }

    pub fn symbol(&self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Black => "black",
            Side::White => "white",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Side::Black),
            "white" | "w" => Ok(Side::White),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: black, white, random"),
        }
    }
}
