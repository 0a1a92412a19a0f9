//! Pseudo-legal movement generation.
//!
//! Every generator is a pure function of the position and the acting piece.
//! Candidates may leave the board or land on friendly pieces; the legality
//! filter removes those.

mod decorators;
mod drops;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Cell, Color, MoveMode, Movement, Piece, PieceKind, Position};
use crate::variants::Variant;

/// All pseudo-legal candidates for `piece`.
///
/// `at` is the piece's cell, or `None` for a piece that is not on the
/// board yet (a reserve piece or a fresh duck).
#[must_use]
pub fn pseudo_moves(
    position: &Position,
    variant: &dyn Variant,
    piece: &Piece,
    at: Option<Cell>,
    mode: MoveMode,
) -> Vec<Movement> {
    let mut moves = Vec::new();
    let Some(from) = at else {
        if piece.kind == PieceKind::Duck {
            drops::duck_moves(position, piece, None, &mut moves);
        } else {
            drops::reserve_drops(position, piece, &mut moves);
        }
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawns::pawn_moves(position, piece, from, mode, &mut moves),
        PieceKind::Knight => knights::knight_moves(piece, from, &mut moves),
        PieceKind::Bishop => sliders::slide(position, piece, from, &sliders::DIAGONAL, None, &mut moves),
        PieceKind::Rook => sliders::rook_moves(position, piece, from, &mut moves),
        PieceKind::Queen => {
            sliders::slide(position, piece, from, &sliders::ORTHOGONAL, None, &mut moves);
            sliders::slide(position, piece, from, &sliders::DIAGONAL, None, &mut moves);
        }
        PieceKind::King => kings::king_moves(position, variant, piece, from, mode, &mut moves),
        PieceKind::Archbishop => {
            sliders::slide(position, piece, from, &sliders::DIAGONAL, None, &mut moves);
            knights::knight_moves(piece, from, &mut moves);
        }
        PieceKind::Chancellor => {
            sliders::slide(position, piece, from, &sliders::ORTHOGONAL, None, &mut moves);
            knights::knight_moves(piece, from, &mut moves);
        }
        PieceKind::Duck => drops::duck_moves(position, piece, Some(from), &mut moves),
    }

    if mode == MoveMode::Normal {
        decorators::decorate(position, piece, &mut moves);
    }
    moves
}

/// True if any piece of `by` threatens `cell`.
#[must_use]
pub fn is_attacked(position: &Position, variant: &dyn Variant, cell: Cell, by: Color) -> bool {
    position
        .pieces()
        .filter(|(_, p)| p.color == by)
        .any(|(from, attacker)| {
            pseudo_moves(position, variant, attacker, Some(from), MoveMode::Attacks)
                .iter()
                .any(|mv| mv.destination_of(attacker.id).is_some_and(|d| d.to == cell))
        })
}
