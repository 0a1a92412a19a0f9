//! Position state record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Cell, Color, Dimensions, Piece, PieceId, PieceKind, Reserve};

/// Rows of optional pieces, top row first.
pub type Layout = Vec<Vec<Option<Piece>>>;

/// Board and game counters for a single game.
///
/// Every piece's location is its grid slot; pieces do not carry their own
/// coordinates, so the two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) dims: Dimensions,
    pub(crate) tiles: Vec<Option<Piece>>,
    pub(crate) turn: Color,
    /// Plies left in the current turn, including the one about to be played.
    pub(crate) plies_remaining: u32,
    /// Pawn capturable in passing on the next ply.
    pub(crate) en_passant: Option<PieceId>,
    /// Plies since the last capture or pawn move.
    pub(crate) halfmove_clock: u32,
    /// Completed turns since the start of the game.
    pub(crate) whole_moves: u32,
    pub(crate) checks: [u32; 2],
    pub(crate) reserve: Reserve,
    pub(crate) next_id: u32,
}

impl Position {
    /// An empty board with light to move.
    #[must_use]
    pub fn empty(dims: Dimensions) -> Self {
        Position {
            dims,
            tiles: vec![None; dims.area()],
            turn: Color::Light,
            plies_remaining: 1,
            en_passant: None,
            halfmove_clock: 0,
            whole_moves: 0,
            checks: [0; 2],
            reserve: Reserve::new(),
            next_id: 1,
        }
    }

    /// Build a position from a layout, assigning fresh ids in reading order.
    ///
    /// Rows or cells beyond `dims` are ignored.
    #[must_use]
    pub fn from_layout(dims: Dimensions, layout: &Layout, plies: u32) -> Self {
        let mut position = Position::empty(dims);
        position.plies_remaining = plies.max(1);
        for (row, line) in layout.iter().enumerate().take(dims.rows as usize) {
            for (column, slot) in line.iter().enumerate().take(dims.columns as usize) {
                if let Some(piece) = slot {
                    let cell = Cell::new(row as i16, column as i16);
                    position.place_new(cell, *piece);
                }
            }
        }
        position
    }

    /// Put a piece on the board under a fresh id.
    pub(crate) fn place_new(&mut self, cell: Cell, piece: Piece) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.put(cell, Some(Piece { id, ..piece }));
        id
    }

    /// Replace the pawn on `cell` by a promoted `choice` under a fresh id.
    pub(crate) fn promote_pawn(&mut self, cell: Cell, choice: Piece) -> Option<PieceId> {
        let pawn = *self.piece_at(cell)?;
        Some(self.place_new(
            cell,
            Piece {
                moves: pawn.moves,
                promoted: true,
                ..choice
            },
        ))
    }

    #[inline]
    pub(crate) fn put(&mut self, cell: Cell, piece: Option<Piece>) -> Option<Piece> {
        let idx = self.dims.index(cell);
        std::mem::replace(&mut self.tiles[idx], piece)
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Occupant of `cell`, `None` when empty or off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        if !self.dims.contains(cell) {
            return None;
        }
        self.tiles[self.dims.index(cell)].as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.dims.contains(cell) && self.tiles[self.dims.index(cell)].is_none()
    }

    /// All pieces in reading order.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (self.dims.cell(i), p)))
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().flatten().count()
    }

    /// Cells of `color`'s kings.
    #[must_use]
    pub fn kings(&self, color: Color) -> Vec<Cell> {
        self.pieces()
            .filter(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(cell, _)| cell)
            .collect()
    }

    #[must_use]
    pub fn find(&self, id: PieceId) -> Option<(Cell, &Piece)> {
        self.pieces().find(|(_, p)| p.id == id)
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn plies_remaining(&self) -> u32 {
        self.plies_remaining
    }

    /// True when the next ply ends the current turn.
    #[inline]
    #[must_use]
    pub fn is_final_ply(&self) -> bool {
        self.plies_remaining <= 1
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<PieceId> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn whole_moves(&self) -> u32 {
        self.whole_moves
    }

    /// Turns that ended with `color`'s king under attack.
    #[must_use]
    pub fn checks(&self, color: Color) -> u32 {
        color.side_index().map_or(0, |side| self.checks[side])
    }

    pub(crate) fn record_check(&mut self, color: Color) {
        if let Some(side) = color.side_index() {
            self.checks[side] += 1;
        }
    }

    #[inline]
    #[must_use]
    pub fn reserve(&self) -> &Reserve {
        &self.reserve
    }

    pub(crate) fn reserve_mut(&mut self) -> &mut Reserve {
        &mut self.reserve
    }

    /// Id the next piece to enter the board will receive.
    #[inline]
    #[must_use]
    pub fn next_piece_id(&self) -> PieceId {
        PieceId(self.next_id)
    }

    /// A pawn standing on its far row, waiting to be promoted.
    #[must_use]
    pub fn promotable_pawn(&self) -> Option<Cell> {
        let last = self.dims.rows - 1;
        self.pieces()
            .find(|(cell, p)| {
                p.kind == PieceKind::Pawn
                    && ((p.color == Color::Light && cell.row == 0)
                        || (p.color == Color::Dark && cell.row == last))
            })
            .map(|(cell, _)| cell)
    }
}
