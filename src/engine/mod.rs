//! Game controller for driving a variant from a user interface or an AI.
//!
//! [`Game`] owns the live [`Position`], the undo/redo history and the event
//! listeners. Everything below it in [`crate::board`] is pure and can be used
//! directly for analysis.

mod controller;
mod events;
mod history;
mod suggestion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{has_legal_move, king_in_check, Color, Position};
use crate::variants::Variant;

pub use controller::{Game, Selection};
pub use events::{GameEvent, ListenerId};
pub use history::{History, Snapshot};
pub use suggestion::{parse_suggestion, Suggestion};

/// Outcome of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    #[default]
    Active,
    LightWins,
    DarkWins,
    Stalemate,
}

impl GameState {
    /// Win for `color`; a neutral "winner" is a draw.
    #[must_use]
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::Light => GameState::LightWins,
            Color::Dark => GameState::DarkWins,
            Color::Neutral => GameState::Stalemate,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameState::Active
    }
}

/// Evaluate `position` under `variant`.
///
/// The variant's own verdict wins. Otherwise a side without a king loses
/// (both without, or anyone with several, is a draw) unless kings are
/// optional; a side with no legal move is mated or stalemated; and the
/// no-progress limit draws.
#[must_use]
pub fn evaluate(position: &Position, variant: &dyn Variant) -> GameState {
    if let Some(state) = variant.game_state(position) {
        return state;
    }

    if !variant.kings_optional() {
        let light = position.kings(Color::Light).len();
        let dark = position.kings(Color::Dark).len();
        match (light, dark) {
            (1, 1) => {}
            (0, 0) => return GameState::Stalemate,
            (0, _) => return GameState::DarkWins,
            (_, 0) => return GameState::LightWins,
            _ => return GameState::Stalemate,
        }
    }

    let turn = position.turn();
    if !has_legal_move(position, variant) {
        return if king_in_check(position, variant, turn) {
            GameState::win_for(turn.opponent())
        } else {
            GameState::Stalemate
        };
    }

    match variant.no_progress_limit() {
        Some(limit) if position.halfmove_clock() >= limit => GameState::Stalemate,
        _ => GameState::Active,
    }
}
