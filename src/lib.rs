#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod game;
pub mod notation;

pub use engine::{Adapter, Engine, GameCommand, GameState, run_engine};
pub use game::{History, Marker, Snapshot, Status, apply_move, winner};
pub use notation::{parse_transcript, write_transcript};
