use crate::game::{board::Snapshot, coord::Coord, status::move_label};

/// Index into a [`History`]. Step 0 is the empty board.
pub type Step = usize;

/// The live line of play: one snapshot per move, starting from the empty board.
///
/// There is only ever one branch. Playing from an earlier step drops every
/// later snapshot before the new one is appended (see [`History::branch_from`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// Chronological step number, also the jump target.
    pub step: Step,
    pub last_move: Option<Coord>,
}

impl MoveEntry {
    pub fn label(&self) -> String {
        move_label(self.step, self.last_move)
    }
}

impl History {
    pub fn new() -> Self {
        Self { snapshots: vec![Snapshot::empty()] }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last_step(&self) -> Step {
        self.snapshots.len() - 1
    }

    pub fn snapshot(&self, step: Step) -> &Snapshot {
        &self.snapshots[step]
    }

    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter { inner: self.snapshots.iter().enumerate() }
    }

    /// A new history holding `[0..=step]` of this one followed by `next`.
    pub fn branch_from(&self, step: Step, next: Snapshot) -> Self {
        debug_assert_eq!(
            self.snapshots[step]
                .cells
                .iter()
                .zip(next.cells.iter())
                .filter(|(a, b)| a != b)
                .count(),
            1,
            "each snapshot must differ from its parent by exactly one cell"
        );
        let mut snapshots = Vec::with_capacity(step + 2);
        snapshots.extend_from_slice(&self.snapshots[..=step]);
        snapshots.push(next);
        Self { snapshots }
    }

    /// Validate a time-travel target. History itself is untouched.
    ///
    /// Panics if `requested` is past the end of the history.
    pub fn jump_to(&self, requested: Step) -> Step {
        assert!(
            requested < self.snapshots.len(),
            "step {requested} is outside a history of {} snapshots",
            self.snapshots.len()
        );
        requested
    }

    /// The move list, oldest first when `ascending`, newest first otherwise.
    ///
    /// Entries keep their chronological step either way.
    pub fn reorder(&self, ascending: bool) -> Vec<MoveEntry> {
        let entries = self.iter().map(|(step, snapshot)| MoveEntry {
            step,
            last_move: snapshot.last_move,
        });
        if ascending { entries.collect() } else { entries.rev().collect() }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the history from the starting board, yielding `(step, snapshot)`.
pub struct HistoryIter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Snapshot>>,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = (Step, &'a Snapshot);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for HistoryIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for HistoryIter<'_> {}
