//! Core value types.
//!
//! - `Piece`, `PieceKind` and `Color` - pieces and sides
//! - `Cell`, `Dimensions` - coordinates and board extent
//! - `Movement`, `Destination` - movement candidates
//! - `Reserve` - captured-piece tally

mod cell;
mod movement;
mod piece;
mod reserve;

pub use cell::{CastleInsets, Cell, Dimensions};
pub use movement::{Destination, MoveMode, Movement};
pub use piece::{Aura, Color, PawnRule, Piece, PieceId, PieceKind};
pub use reserve::Reserve;
