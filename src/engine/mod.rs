mod cursor;
pub use cursor::HistoryCursor;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use crate::{
    game::{Coord, History, MoveEntry, MoveError, Snapshot, Status, Step, apply_move, to_row_col},
    notation::parse_transcript,
};

/// The `(history, step, ascending)` triple.
///
/// Every transition returns a new `GameState`; the engine swaps it in
/// wholesale, so readers never see a half-applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub history: History,
    pub step: Step,
    pub ascending: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self { history: History::new(), step: 0, ascending: true }
    }

    pub fn current(&self) -> &Snapshot {
        self.history.snapshot(self.step)
    }

    pub fn play(&self, index: usize) -> Result<Self, MoveError> {
        let (history, step) = apply_move(&self.history, self.step, index)?;
        Ok(Self { history, step, ascending: self.ascending })
    }

    pub fn jump_to(&self, step: Step) -> Self {
        Self { step: self.history.jump_to(step), ..self.clone() }
    }

    pub fn toggled(&self) -> Self {
        Self { ascending: !self.ascending, ..self.clone() }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Play(usize),
    JumpTo(Step),
    StepBack,
    StepForward,
    ToggleOrder,
    Restart,
}

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("could not read transcript: {0}")]
    Parse(String),

    #[error("move #{number} at {coord} is illegal: {source}")]
    IllegalMove {
        number: usize,
        coord: Coord,
        source: MoveError,
    },
}

/// Owns the game state and is the only thing that changes it.
pub struct Engine {
    state: GameState,
}

impl Engine {
    pub fn new() -> Self {
        Self { state: GameState::new() }
    }

    pub fn with_order(ascending: bool) -> Self {
        Self { state: GameState { ascending, ..GameState::new() } }
    }

    /// Replay a whitespace-separated list of cells, e.g. `"0 4 8"` or `"0,0 1,1"`.
    pub fn from_transcript(transcript: &str) -> Result<Self, TranscriptError> {
        let cells = parse_transcript(transcript).map_err(|e| TranscriptError::Parse(e.to_string()))?;
        let mut state = GameState::new();
        for (n, index) in cells.into_iter().enumerate() {
            state = state.play(index).map_err(|source| TranscriptError::IllegalMove {
                number: n + 1,
                coord: to_row_col(index),
                source,
            })?;
        }
        Ok(Self { state })
    }

    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::Play(index) => {
                self.apply_move(index);
            }
            GameCommand::JumpTo(step) => self.jump_to_step(step),
            GameCommand::StepBack => {
                let mut cursor = HistoryCursor::new(&self.state.history, self.state.step);
                if cursor.retreat() {
                    self.jump_to_step(cursor.step());
                }
            }
            GameCommand::StepForward => {
                let mut cursor = HistoryCursor::new(&self.state.history, self.state.step);
                if cursor.advance() {
                    self.jump_to_step(cursor.step());
                }
            }
            GameCommand::ToggleOrder => self.toggle_order(),
            GameCommand::Restart => {
                debug!("restarting game");
                self.state = GameState { ascending: self.state.ascending, ..GameState::new() };
            }
        }
    }

    /// Play `index` for whoever is next. Illegal moves leave the state alone
    /// and return `false`.
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.state.play(index) {
            Ok(next) => {
                debug!(index, step = next.step, "move applied");
                self.state = next;
                true
            }
            Err(e) => {
                debug!(index, step = self.state.step, error = %e, "move rejected");
                false
            }
        }
    }

    pub fn jump_to_step(&mut self, step: Step) {
        debug!(from = self.state.step, to = step, "jump");
        self.state = self.state.jump_to(step);
    }

    pub fn toggle_order(&mut self) {
        self.state = self.state.toggled();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        self.state.current()
    }

    pub fn status(&self) -> Status {
        Status::resolve(self.current_snapshot(), self.state.step)
    }

    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    pub fn ordered_move_list(&self) -> Vec<MoveEntry> {
        self.state.history.reorder(self.state.ascending)
    }

    pub fn is_ascending(&self) -> bool {
        self.state.ascending
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// A front end that paints the engine and feeds it commands.
pub trait Adapter {
    fn render(&mut self, engine: &Engine) -> Result<()>;

    /// The next command, or `None` when the user is done.
    fn next_command(&mut self, engine: &Engine) -> Result<Option<GameCommand>>;
}

/// Render, read a command, apply it; until the adapter returns `None`.
pub fn run_engine(mut engine: Engine, adapter: &mut impl Adapter) -> Result<()> {
    loop {
        adapter.render(&engine)?;
        match adapter.next_command(&engine)? {
            Some(command) => engine.apply(command),
            None => return Ok(()),
        }
    }
}
