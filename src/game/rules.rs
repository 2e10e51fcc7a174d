use thiserror::Error;

use crate::game::{
    board::Marker,
    coord::{CELLS, Coord, to_row_col},
    history::{History, Step},
    status::next_marker,
};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game was already won by {0}")]
    GameOver(Marker),

    #[error("cell {0} is already taken")]
    Occupied(Coord),
}

/// Play `index` from the position at `step`.
///
/// Checks, in order, that the position is not already won and that the cell
/// is empty. On success returns the new history (truncated after `step`, with
/// the new snapshot appended) and the new step, `step + 1`.
///
/// Panics if `step` or `index` is out of range.
pub fn apply_move(history: &History, step: Step, index: usize) -> Result<(History, Step), MoveError> {
    assert!(index < CELLS, "cell index {index} is off the board");
    let current = history.snapshot(step);

    if let Some(marker) = current.winner() {
        return Err(MoveError::GameOver(marker));
    }
    if !current.cell(index).is_empty() {
        return Err(MoveError::Occupied(to_row_col(index)));
    }

    let next = current.with_move(index, next_marker(step));
    Ok((history.branch_from(step, next), step + 1))
}
