use crate::game::{History, Snapshot, Step};

pub struct HistoryCursor<'a> {
    history: &'a History,
    current: Step,
}

impl<'a> HistoryCursor<'a> {
    pub fn new(history: &'a History, start: Step) -> Self {
        Self { history, current: history.jump_to(start) }
    }

    pub fn step(&self) -> Step {
        self.current
    }

    pub fn current(&self) -> &'a Snapshot {
        self.history.snapshot(self.current)
    }

    /// Move one step forward. Returns `false` if already at the latest move.
    pub fn advance(&mut self) -> bool {
        if self.current < self.history.last_step() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move one step back. Returns `false` if already at the game start.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Move to `step`. Returns `false` if it is not in the history.
    pub fn jump(&mut self, step: Step) -> bool {
        if step < self.history.len() {
            self.current = step;
            true
        } else {
            false
        }
    }
}
