//! Cell indices for the 8x8 board. Indices are row-major, so `index = row * 8 + col`,
//! and the algebraic name pairs a column letter with a 1-based row number (`e3` is
//! row 2, column 4, index 20).

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});
static INDEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([0-9]{1,2})$").expect("INDEX_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CellParseError {
    #[error("invalid cell: {input:?} (expected a1-h8 or 0-63)")]
    InvalidCell { input: String },
    #[error("cell index out of range: {index}")]
    IndexOutOfRange { index: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell(u8);

impl Cell {
    pub const COUNT: usize = 64;

    /// Panics on indices outside 0-63; callers are expected to pass well-formed indices.
    pub fn new(index: u8) -> Self {
        assert!(
            (index as usize) < Self::COUNT,
            "cell index out of range: {}",
            index
        );
        Cell(index)
    }

    pub fn try_new(index: usize) -> Result<Self, CellParseError> {
        if index < Self::COUNT {
            Ok(Cell(index as u8))
        } else {
            Err(CellParseError::IndexOutOfRange { index })
        }
    }

    pub fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "row/col out of range: {}/{}", row, col);
        Cell(row * 8 + col)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline(always)]
    pub fn col(self) -> u8 {
        self.0 % 8
    }

    pub fn is_corner(self) -> bool {
        matches!(self.0, 0 | 7 | 56 | 63)
    }

    pub fn to_algebraic(self) -> &'static str {
        tables::ALGEBRAIC[self.index()]
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, CellParseError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic)
            .ok_or_else(|| CellParseError::InvalidCell {
                input: algebraic.to_string(),
            })?;
        let col = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let row = caps[2].as_bytes()[0] - b'1';
        Ok(Self::from_row_col(row, col))
    }

    /// Iterates over all 64 cells in ascending index order.
    pub fn all() -> impl Iterator<Item = Cell> + Clone {
        (0..Self::COUNT as u8).map(Cell)
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(caps) = INDEX_RE.captures(trimmed) {
            let index: usize = caps[1].parse().map_err(|_| CellParseError::InvalidCell {
                input: input.to_string(),
            })?;
            return Cell::try_new(index);
        }
        Cell::from_algebraic(trimmed)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

pub const A1: Cell = Cell(0);
pub const B1: Cell = Cell(1);
pub const C1: Cell = Cell(2);
pub const D1: Cell = Cell(3);
pub const E1: Cell = Cell(4);
pub const F1: Cell = Cell(5);
pub const G1: Cell = Cell(6);
pub const H1: Cell = Cell(7);
pub const A2: Cell = Cell(8);
pub const B2: Cell = Cell(9);
pub const C2: Cell = Cell(10);
pub const D2: Cell = Cell(11);
pub const E2: Cell = Cell(12);
pub const F2: Cell = Cell(13);
pub const G2: Cell = Cell(14);
pub const H2: Cell = Cell(15);
pub const A3: Cell = Cell(16);
pub const B3: Cell = Cell(17);
pub const C3: Cell = Cell(18);
pub const D3: Cell = Cell(19);
pub const E3: Cell = Cell(20);
pub const F3: Cell = Cell(21);
pub const G3: Cell = Cell(22);
pub const H3: Cell = Cell(23);
pub const A4: Cell = Cell(24);
pub const B4: Cell = Cell(25);
pub const C4: Cell = Cell(26);
pub const D4: Cell = Cell(27);
pub const E4: Cell = Cell(28);
pub const F4: Cell = Cell(29);
pub const G4: Cell = Cell(30);
pub const H4: Cell = Cell(31);
pub const A5: Cell = Cell(32);
pub const B5: Cell = Cell(33);
pub const C5: Cell = Cell(34);
pub const D5: Cell = Cell(35);
pub const E5: Cell = Cell(36);
pub const F5: Cell = Cell(37);
pub const G5: Cell = Cell(38);
pub const H5: Cell = Cell(39);
pub const A6: Cell = Cell(40);
pub const B6: Cell = Cell(41);
pub const C6: Cell = Cell(42);
pub const D6: Cell = Cell(43);
pub const E6: Cell = Cell(44);
pub const F6: Cell = Cell(45);
pub const G6: Cell = Cell(46);
pub const H6: Cell = Cell(47);
pub const A7: Cell = Cell(48);
pub const B7: Cell = Cell(49);
pub const C7: Cell = Cell(50);
pub const D7: Cell = Cell(51);
pub const E7: Cell = Cell(52);
pub const F7: Cell = Cell(53);
pub const G7: Cell = Cell(54);
pub const H7: Cell = Cell(55);
pub const A8: Cell = Cell(56);
pub const B8: Cell = Cell(57);
pub const C8: Cell = Cell(58);
pub const D8: Cell = Cell(59);
pub const E8: Cell = Cell(60);
pub const F8: Cell = Cell(61);
pub const G8: Cell = Cell(62);
pub const H8: Cell = Cell(63);

#[rustfmt::skip]
mod tables {
    pub const ALGEBRAIC: [&str; 64] = [
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_col() {
        assert_eq!(A1, Cell::from_row_col(0, 0));
        assert_eq!(E3, Cell::from_row_col(2, 4));
        assert_eq!(H8, Cell::from_row_col(7, 7));
        assert_eq!(20, E3.index());
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((2, 4), (E3.row(), E3.col()));
        assert_eq!((7, 0), (A8.row(), A8.col()));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Ok(A1), Cell::from_algebraic("a1"));
        assert_eq!(Ok(E3), Cell::from_algebraic("E3"));
        assert!(Cell::from_algebraic("i9").is_err());
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("e3", E3.to_algebraic());
        assert_eq!("h8", H8.to_algebraic());
    }

    #[test]
    fn test_parse_index_or_algebraic() {
        assert_eq!(Ok(E3), "20".parse::<Cell>());
        assert_eq!(Ok(E3), " e3 ".parse::<Cell>());
        assert_eq!(
            Err(CellParseError::IndexOutOfRange { index: 64 }),
            "64".parse::<Cell>()
        );
        assert!("zz".parse::<Cell>().is_err());
    }

    #[test]
    fn test_corners() {
        let corners: Vec<Cell> = Cell::all().filter(|cell| cell.is_corner()).collect();
        assert_eq!(vec![A1, H1, A8, H8], corners);
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_out_of_range() {
        Cell::new(64);
    }
}
