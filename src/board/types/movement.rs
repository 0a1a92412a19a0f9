//! Movement candidates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Cell, Piece, PieceId, PieceKind};

/// One `{cell, piece}` assignment of a movement.
///
/// `from` is `None` for pieces that enter the board (drops, rebirths,
/// defecting captures).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Destination {
    pub piece: Piece,
    pub from: Option<Cell>,
    pub to: Cell,
}

/// A proposed change to the board prior to (or after) legality filtering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Movement {
    /// Cell a user would click to choose this movement.
    pub target: Cell,
    pub destinations: Vec<Destination>,
    /// Cells vacated after the destinations are placed.
    pub captures: Vec<Cell>,
    /// Pawn that becomes capturable in passing.
    pub en_passant: Option<PieceId>,
    pub is_castle: bool,
    pub breaks_king_side: bool,
    pub breaks_queen_side: bool,
    pub is_drop: bool,
}

impl Movement {
    /// Single-piece relocation.
    #[must_use]
    pub fn step(piece: Piece, from: Cell, to: Cell) -> Self {
        Movement {
            target: to,
            destinations: vec![Destination {
                piece,
                from: Some(from),
                to,
            }],
            captures: Vec::new(),
            en_passant: None,
            is_castle: false,
            breaks_king_side: false,
            breaks_queen_side: false,
            is_drop: false,
        }
    }

    /// A piece entering the board from outside it.
    #[must_use]
    pub fn placement(piece: Piece, to: Cell) -> Self {
        Movement {
            destinations: vec![Destination {
                piece,
                from: None,
                to,
            }],
            ..Movement::step(piece, to, to)
        }
    }

    /// The relocation of `id`, if this movement moves it.
    #[must_use]
    pub fn destination_of(&self, id: PieceId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.piece.id == id)
    }

    /// Cell the moving piece left: the king's for a castle, otherwise the
    /// piece landing on `target`. `None` for drops.
    #[must_use]
    pub fn origin(&self) -> Option<Cell> {
        if self.is_castle {
            return self
                .destinations
                .iter()
                .find(|d| d.piece.kind == PieceKind::King)
                .and_then(|d| d.from);
        }
        self.destinations
            .iter()
            .find(|d| d.to == self.target && d.from.is_some())
            .or_else(|| self.destinations.first())
            .and_then(|d| d.from)
    }
}

/// Whether a generator produces playable moves or the set of threatened cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveMode {
    #[default]
    Normal,
    /// No double steps, no castling, unconditional pawn diagonals.
    Attacks,
}
