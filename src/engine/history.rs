//! Linear undo/redo history of positions.

use crate::board::{Movement, Position};

/// Position after a ply, with the movement that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub last_move: Option<Movement>,
}

/// Snapshots plus a cursor; never empty.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new(initial: Position) -> Self {
        History {
            snapshots: vec![Snapshot {
                position: initial,
                last_move: None,
            }],
            cursor: 0,
        }
    }

    /// Append after the cursor, discarding any redo branch.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Replace the position of the current snapshot.
    pub fn amend(&mut self, position: Position) {
        self.snapshots[self.cursor].position = position;
    }

    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; there is at least the initial snapshot.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Dimensions, PositionBuilder};

    fn snapshot(clock: u32) -> Snapshot {
        Snapshot {
            position: PositionBuilder::new(Dimensions::STANDARD)
                .halfmove_clock(clock)
                .build(),
            last_move: None,
        }
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new(snapshot(0).position);
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.len(), 1);
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_discards_redo_branch() {
        let mut history = History::new(snapshot(0).position);
        history.push(snapshot(1));
        history.push(snapshot(2));
        assert_eq!(history.undo().map(|s| s.position.halfmove_clock()), Some(1));
        history.push(snapshot(7));
        assert_eq!(history.len(), 3);
        assert!(history.redo().is_none());
        assert_eq!(history.current().position.halfmove_clock(), 7);
    }

    #[test]
    fn test_amend_replaces_current() {
        let mut history = History::new(snapshot(0).position);
        history.push(snapshot(1));
        history.amend(snapshot(5).position);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().position.halfmove_clock(), 5);
    }
}
