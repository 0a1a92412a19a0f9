//! Notifications for renderers and other observers.

use std::fmt;

use crate::board::{Cell, Movement, PieceKind};

/// Something that happened to a [`Game`](super::Game).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    NewGame,
    AfterMove { movement: Movement },
    Promoted { cell: Cell, kind: PieceKind },
    /// Undo or redo moved the history cursor.
    HistoryMoved { cursor: usize },
}

/// Handle returned by [`Game::subscribe`](super::Game::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&GameEvent)>;

#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, Callback)>,
    next: u64,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &GameEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
