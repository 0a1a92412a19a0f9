//! Fluent builder for constructing positions.
//!
//! Allows setting up arbitrary boards piece by piece, including on
//! non-standard extents.
//!
//! # Example
//! ```
//! use chess_variants::board::{Cell, Color, Dimensions, PieceKind, PositionBuilder};
//!
//! let position = PositionBuilder::new(Dimensions::STANDARD)
//!     .piece(Cell::new(7, 4), Color::Light, PieceKind::King)
//!     .piece(Cell::new(0, 4), Color::Dark, PieceKind::King)
//!     .piece(Cell::new(6, 0), Color::Light, PieceKind::Pawn)
//!     .side_to_move(Color::Light)
//!     .build();
//! assert_eq!(position.piece_count(), 3);
//! ```

use super::{Cell, Color, Dimensions, Piece, PieceKind, Position, Reserve};

/// A fluent builder for [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    dims: Dimensions,
    pieces: Vec<(Cell, Piece)>,
    side_to_move: Color,
    plies_remaining: u32,
    en_passant: Option<Cell>,
    halfmove_clock: u32,
    whole_moves: u32,
    reserve: Reserve,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new(Dimensions::STANDARD)
    }
}

impl PositionBuilder {
    /// Create an empty builder for a board of the given size.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        PositionBuilder {
            dims,
            pieces: Vec::new(),
            side_to_move: Color::Light,
            plies_remaining: 1,
            en_passant: None,
            halfmove_clock: 0,
            whole_moves: 0,
            reserve: Reserve::new(),
        }
    }

    /// Create a builder starting from the standard 8x8 setup.
    #[must_use]
    pub fn standard() -> Self {
        let mut builder = Self::new(Dimensions::STANDARD);
        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (column, &kind) in back_row.iter().enumerate() {
            let column = column as i16;
            builder = builder
                .piece(Cell::new(0, column), Color::Dark, kind)
                .piece(Cell::new(1, column), Color::Dark, PieceKind::Pawn)
                .piece(Cell::new(6, column), Color::Light, PieceKind::Pawn)
                .piece(Cell::new(7, column), Color::Light, kind);
        }
        builder
    }

    /// Place a plain, unmoved piece.
    #[must_use]
    pub fn piece(self, cell: Cell, color: Color, kind: PieceKind) -> Self {
        self.custom(cell, Piece::new(color, kind))
    }

    /// Place a fully specified piece. Its id is replaced on build.
    #[must_use]
    pub fn custom(mut self, cell: Cell, piece: Piece) -> Self {
        self.pieces.retain(|(c, _)| *c != cell);
        self.pieces.push((cell, piece));
        self
    }

    /// Remove any piece from a cell.
    #[must_use]
    pub fn clear(mut self, cell: Cell) -> Self {
        self.pieces.retain(|(c, _)| *c != cell);
        self
    }

    /// Mark the piece on `cell` as having moved `moves` times.
    #[must_use]
    pub fn moved(mut self, cell: Cell, moves: u32) -> Self {
        if let Some((_, piece)) = self.pieces.iter_mut().find(|(c, _)| *c == cell) {
            piece.moves = moves;
        }
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn plies_remaining(mut self, plies: u32) -> Self {
        self.plies_remaining = plies.max(1);
        self
    }

    /// The pawn on `cell` may be captured in passing on the next ply.
    #[must_use]
    pub fn en_passant(mut self, cell: Cell) -> Self {
        self.en_passant = Some(cell);
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn whole_moves(mut self, moves: u32) -> Self {
        self.whole_moves = moves;
        self
    }

    /// Put `count` captured pieces of `kind` in `color`'s reserve.
    #[must_use]
    pub fn reserve(mut self, color: Color, kind: PieceKind, count: u32) -> Self {
        self.reserve.set(color, kind, count);
        self
    }

    /// Build the position. Pieces outside the board are dropped.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty(self.dims);
        for (cell, piece) in self.pieces {
            if self.dims.contains(cell) {
                position.place_new(cell, piece);
            }
        }
        position.turn = self.side_to_move;
        position.plies_remaining = self.plies_remaining;
        position.halfmove_clock = self.halfmove_clock;
        position.whole_moves = self.whole_moves;
        position.reserve = self.reserve;
        position.en_passant = self
            .en_passant
            .and_then(|cell| position.piece_at(cell))
            .map(|p| p.id);
        position
    }
}
