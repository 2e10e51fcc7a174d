use std::fmt::{Display, Formatter};

use crate::game::{
    board::{Marker, Snapshot},
    coord::Coord,
    history::Step,
};

/// Whose turn it is at `step`. `X` moves on even steps.
pub fn next_marker(step: Step) -> Marker {
    if step % 2 == 0 { Marker::X } else { Marker::O }
}

/// What the status line says about a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Marker),
    Draw,
    NextPlayer(Marker),
}

impl Status {
    pub fn resolve(snapshot: &Snapshot, step: Step) -> Self {
        match snapshot.winner() {
            Some(marker) => Self::Winner(marker),
            None if snapshot.is_full() => Self::Draw,
            None => Self::NextPlayer(next_marker(step)),
        }
    }

    pub fn is_over(self) -> bool {
        !matches!(self, Self::NextPlayer(_))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(m) => write!(f, "Winner: {}", m),
            Self::Draw => write!(f, "Draw"),
            Self::NextPlayer(m) => write!(f, "Next player: {}", m),
        }
    }
}

/// Label for the move-list entry at `step`.
pub fn move_label(step: Step, last_move: Option<Coord>) -> String {
    match (step, last_move) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (n, Some(coord)) => format!("Go to move #{} {}", n, coord),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::coord::to_row_col;

    #[test]
    fn turn_alternates_with_parity() {
        assert_eq!(next_marker(0), Marker::X);
        assert_eq!(next_marker(1), Marker::O);
        assert_eq!(next_marker(6), Marker::X);
    }

    #[test]
    fn fresh_board_says_next_player_x() {
        let status = Status::resolve(&Snapshot::empty(), 0);
        assert_eq!(status.to_string(), "Next player: X");
        assert!(!status.is_over());
    }

    #[test]
    fn winner_takes_precedence() {
        let snapshot = Snapshot::empty()
            .with_move(0, Marker::X)
            .with_move(4, Marker::X)
            .with_move(8, Marker::X);
        assert_eq!(Status::resolve(&snapshot, 3).to_string(), "Winner: X");
    }

    #[test]
    fn labels() {
        assert_eq!(move_label(0, None), "Go to game start");
        assert_eq!(move_label(3, Some(to_row_col(7))), "Go to move #3 (2,1)");
    }
}
