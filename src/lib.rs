pub mod board;
pub mod engine;
pub mod variants;

pub use board::{Cell, Color, Movement, Piece, PieceKind, Position};
pub use engine::{Game, GameEvent, GameState};
pub use variants::Variant;
