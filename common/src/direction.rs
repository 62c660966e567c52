//! The eight compass directions a capture can run in, each with the boundary guard
//! that keeps a single step from wrapping across a row edge or off the board.

use crate::cell::Cell;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    West,
    East,
    North,
    South,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Index offset of one step: +-1 along a row, +-8 along a column, +-7/+-9 diagonally.
    pub fn offset(self) -> i8 {
        match self {
            Direction::West => -1,
            Direction::East => 1,
            Direction::North => -8,
            Direction::South => 8,
            Direction::NorthWest => -9,
            Direction::NorthEast => -7,
            Direction::SouthWest => 7,
            Direction::SouthEast => 9,
        }
    }

    fn moves_left(self) -> bool {
        matches!(
            self,
            Direction::West | Direction::NorthWest | Direction::SouthWest
        )
    }

    fn moves_right(self) -> bool {
        matches!(
            self,
            Direction::East | Direction::NorthEast | Direction::SouthEast
        )
    }

    fn moves_up(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::NorthWest | Direction::NorthEast
        )
    }

    fn moves_down(self) -> bool {
        matches!(
            self,
            Direction::South | Direction::SouthWest | Direction::SouthEast
        )
    }

    /// Returns the neighbouring cell in this direction, or `None` at the board edge.
    /// Column guards use `cell % 8`; row guards keep the result inside 0-63.
    #[inline]
    pub fn step(self, cell: Cell) -> Option<Cell> {
        let index = cell.index();
        let col = index % 8;

        if self.moves_left() && col == 0 {
            return None;
        }
        if self.moves_right() && col == 7 {
            return None;
        }
        if self.moves_up() && index < 8 {
            return None;
        }
        if self.moves_down() && index >= 56 {
            return None;
        }

        let next = index as i8 + self.offset();
        Some(Cell::new(next as u8))
    }

    /// Walks outward from `origin` (exclusive) until the edge of the board.
    pub fn ray(self, origin: Cell) -> Ray {
        Ray {
            direction: self,
            current: origin,
        }
    }
}

/// Iterator over the cells reached by repeatedly stepping in one direction.
#[derive(Clone, Debug)]
pub struct Ray {
    direction: Direction,
    current: Cell,
}

impl Iterator for Ray {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let next = self.direction.step(self.current)?;
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::*;

    fn expected_delta(direction: Direction) -> (i8, i8) {
        match direction {
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    #[test]
    fn test_step_never_wraps_across_rows() {
        for cell in Cell::all() {
            for &direction in Direction::ALL.iter() {
                let (d_row, d_col) = expected_delta(direction);
                let row = cell.row() as i8 + d_row;
                let col = cell.col() as i8 + d_col;
                let on_board = (0..8).contains(&row) && (0..8).contains(&col);

                match direction.step(cell) {
                    Some(next) => {
                        assert!(on_board, "{:?} from {} should be off board", direction, cell);
                        assert_eq!((row as u8, col as u8), (next.row(), next.col()));
                    }
                    None => assert!(!on_board, "{:?} from {} was guarded", direction, cell),
                }
            }
        }
    }

    #[test]
    fn test_edge_columns_do_not_leak() {
        assert_eq!(None, Direction::West.step(A2));
        assert_eq!(None, Direction::NorthWest.step(A5));
        assert_eq!(None, Direction::SouthWest.step(A5));
        assert_eq!(None, Direction::East.step(H2));
        assert_eq!(None, Direction::NorthEast.step(H5));
        assert_eq!(None, Direction::SouthEast.step(H5));
        assert_eq!(Some(A3), Direction::South.step(A2));
    }

    #[test]
    fn test_ray() {
        let ray: Vec<Cell> = Direction::South.ray(E3).collect();
        assert_eq!(vec![E4, E5, E6, E7, E8], ray);

        let ray: Vec<Cell> = Direction::NorthEast.ray(A8).collect();
        assert_eq!(vec![B7, C6, D5, E4, F3, G2, H1], ray);

        assert_eq!(0, Direction::West.ray(A1).count());
    }
}
