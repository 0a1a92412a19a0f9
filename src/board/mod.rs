//! Board representation and movement rules.
//!
//! A [`Position`] is a grid of optional pieces plus the per-game counters
//! (active side, plies left in the turn, en-passant marker, check counters,
//! captured-piece reserve). Movement generation is a set of pure functions
//! keyed by [`PieceKind`]; the legality filter trims their output and hands
//! the survivors to the variant's own filter.
//!
//! # Example
//! ```
//! use chess_variants::board::{legal_moves, Cell, MoveMode};
//! use chess_variants::variants::Vanilla;
//! use chess_variants::board::PositionBuilder;
//!
//! let position = PositionBuilder::standard().build();
//! let knight = *position.piece_at(Cell::new(7, 1)).unwrap();
//! let moves = legal_moves(&position, &Vanilla, &knight, Some(Cell::new(7, 1)), MoveMode::Normal);
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod legality;
mod make_unmake;
pub mod movegen;
mod perft;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{CellError, SuggestionError};
pub use legality::{
    all_legal_moves, checked_kings, core_legal_moves, has_core_legal_move, has_legal_move,
    king_in_check, legal_moves, movable_pieces,
};
pub use make_unmake::Unmake;
pub use movegen::{is_attacked, pseudo_moves};
pub use perft::{divide, perft};
pub use state::{Layout, Position};
pub use types::{
    Aura, CastleInsets, Cell, Color, Destination, Dimensions, MoveMode, Movement, PawnRule, Piece,
    PieceId, PieceKind, Reserve,
};
