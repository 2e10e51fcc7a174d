use std::fmt::{Display, Formatter};

/// Side length of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A `(row, col)` position on the board, both 0-indexed from the top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Range-checked constructor for positions coming from outside the engine.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then_some(Self { row, col })
    }

    pub fn index(self) -> usize {
        to_index(self.row, self.col)
    }
}

/// Map a flat row-major index to its board position.
///
/// Panics if `index` is not on the board.
pub fn to_row_col(index: usize) -> Coord {
    assert!(index < CELLS, "cell index {index} is off the board");
    Coord { row: index / SIDE, col: index % SIDE }
}

/// Map a board position to its flat row-major index.
///
/// Panics if either axis is not on the board.
pub fn to_index(row: usize, col: usize) -> usize {
    assert!(row < SIDE && col < SIDE, "({row},{col}) is off the board");
    row * SIDE + col
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_row_major() {
        assert_eq!(to_row_col(0), Coord { row: 0, col: 0 });
        assert_eq!(to_row_col(2), Coord { row: 0, col: 2 });
        assert_eq!(to_row_col(6), Coord { row: 2, col: 0 });
        assert_eq!(to_row_col(8), Coord { row: 2, col: 2 });
    }

    #[test]
    fn index_and_coord_are_inverse() {
        for i in 0..CELLS {
            let c = to_row_col(i);
            assert_eq!(to_index(c.row, c.col), i);
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn new_rejects_off_board() {
        assert_eq!(Coord::new(1, 2), Some(Coord { row: 1, col: 2 }));
        assert_eq!(Coord::new(3, 0), None);
        assert_eq!(Coord::new(0, 3), None);
    }

    #[test]
    fn displays_as_row_then_col() {
        assert_eq!(to_row_col(5).to_string(), "(1,2)");
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn out_of_range_index_panics() {
        to_row_col(9);
    }
}
