use std::fmt::{Display, Formatter};

use crate::game::coord::{CELLS, Coord, to_row_col};

// ---------------------------------------------------------------------------
// Marker / Cell
// ---------------------------------------------------------------------------

/// A player's symbol. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::X => "X",
            Self::O => "O",
        };
        write!(f, "{}", s)
    }
}

/// The occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Marker),
}

impl Cell {
    pub fn marker(self) -> Option<Marker> {
        match self {
            Self::Empty => None,
            Self::Taken(m) => Some(m),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The eight winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// One board position in the history, together with the move that produced it.
///
/// Snapshots are plain `Copy` values. The history never edits one in place:
/// playing a move copies the current snapshot and changes the copy (see
/// [`Snapshot::with_move`]).
///
/// # Layout
///
/// `cells` is row-major, `cells[row * 3 + col]`:
///
/// ```text
///          col
///        0  1  2
/// row 0  0  1  2
///     1  3  4  5
///     2  6  7  8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub cells: [Cell; CELLS],

    /// Position of the move that produced this snapshot. `None` only for the
    /// empty starting board.
    pub last_move: Option<Coord>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// A copy of this snapshot with `marker` placed at `index`.
    ///
    /// No legality checks happen here; see [`crate::game::apply_move`].
    pub fn with_move(&self, index: usize, marker: Marker) -> Self {
        let mut next = *self;
        next.cells[index] = Cell::Taken(marker);
        next.last_move = Some(to_row_col(index));
        next
    }

    /// The first line in [`LINES`] order whose three cells hold the same marker.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            !self.cells[a].is_empty() && self.cells[a] == self.cells[b] && self.cells[b] == self.cells[c]
        })
    }

    /// The winning marker, if any.
    ///
    /// A full board without a line is `None` as well; telling a draw apart
    /// from a game in progress is left to [`crate::game::Status`].
    pub fn winner(&self) -> Option<Marker> {
        let [a, _, _] = self.winning_line()?;
        self.cells[a].marker()
    }
}

/// Free-function form of [`Snapshot::winner`].
pub fn winner(snapshot: &Snapshot) -> Option<Marker> {
    snapshot.winner()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Snapshot {
        let mut snapshot = Snapshot::empty();
        for (i, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            snapshot.cells[i] = match ch {
                'X' => Cell::Taken(Marker::X),
                'O' => Cell::Taken(Marker::O),
                _ => Cell::Empty,
            };
        }
        snapshot
    }

    #[test]
    fn empty_board_has_no_winner() {
        let snapshot = Snapshot::empty();
        assert_eq!(snapshot.winner(), None);
        assert_eq!(snapshot.last_move, None);
        assert!(!snapshot.is_full());
    }

    #[test]
    fn detects_row_column_and_diagonal() {
        assert_eq!(board("XXX ... ...").winner(), Some(Marker::X));
        assert_eq!(board("O.. O.. O..").winner(), Some(Marker::O));
        assert_eq!(board("..X .X. X..").winner(), Some(Marker::X));
        assert_eq!(board("..X .X. X..").winning_line(), Some([2, 4, 6]));
    }

    #[test]
    fn mixed_line_does_not_win() {
        assert_eq!(board("XXO ... ...").winner(), None);
    }

    #[test]
    fn full_board_without_line_is_none() {
        let snapshot = board("XOX OXO OXO");
        assert!(snapshot.is_full());
        assert_eq!(winner(&snapshot), None);
    }

    #[test]
    fn first_line_in_order_decides() {
        // Row 0 and column 0 both complete; row 0 comes first.
        let snapshot = board("XXX X.. X..");
        assert_eq!(snapshot.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn with_move_copies_and_records_coordinate() {
        let before = Snapshot::empty();
        let after = before.with_move(5, Marker::O);
        assert_eq!(before.cell(5), Cell::Empty);
        assert_eq!(after.cell(5), Cell::Taken(Marker::O));
        assert_eq!(after.last_move, Coord::new(1, 2));
    }
}
