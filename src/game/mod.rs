pub mod board;
pub mod coord;
pub mod history;
pub mod rules;
pub mod status;

pub use board::{Cell, LINES, Marker, Snapshot, winner};
pub use coord::{CELLS, Coord, SIDE, to_index, to_row_col};
pub use history::{History, HistoryIter, MoveEntry, Step};
pub use rules::{MoveError, apply_move};
pub use status::{Status, move_label, next_marker};
