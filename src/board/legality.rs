//! Legality filter and check queries.

use log::trace;

use super::movegen::{is_attacked, pseudo_moves};
use super::{Cell, Color, MoveMode, Movement, Piece, Position};
use crate::variants::Variant;

/// Legal movements for `piece`, including the variant's own filtering.
///
/// Ordering of the result is unspecified.
#[must_use]
pub fn legal_moves(
    position: &Position,
    variant: &dyn Variant,
    piece: &Piece,
    at: Option<Cell>,
    mode: MoveMode,
) -> Vec<Movement> {
    let moves = core_legal_moves(position, variant, piece, at, mode);
    if mode == MoveMode::Attacks {
        return moves;
    }
    variant.filter_moves(position, moves)
}

/// Legal movements before the variant filter runs.
///
/// Drops destinations off the board and onto friendly pieces, then (on the
/// last ply of a turn, in variants with check) every movement that leaves
/// one of the mover's kings attacked or loses the last of them.
#[must_use]
pub fn core_legal_moves(
    position: &Position,
    variant: &dyn Variant,
    piece: &Piece,
    at: Option<Cell>,
    mode: MoveMode,
) -> Vec<Movement> {
    let mut moves: Vec<Movement> = pseudo_moves(position, variant, piece, at, mode)
        .into_iter()
        .filter_map(|mv| trim(position, piece, mv))
        .collect();

    let simulate = mode == MoveMode::Normal
        && variant.has_check()
        && position.is_final_ply()
        && piece.color != Color::Neutral;
    if !simulate || moves.is_empty() {
        return moves;
    }

    let before = moves.len();
    let mut probe = position.clone();
    moves.retain(|mv| keeps_king_safe(&mut probe, variant, mv, piece.color));
    trace!(
        "{:?} {:?}: {} of {} candidates survive self-check",
        piece.color,
        piece.kind,
        moves.len(),
        before
    );
    moves
}

/// Bounds and self-capture trimming of a single candidate.
fn trim(position: &Position, mover: &Piece, mut mv: Movement) -> Option<Movement> {
    let dims = position.dimensions();
    mv.destinations.retain(|d| dims.contains(d.to));
    mv.captures.retain(|&c| dims.contains(c));

    if !mv.is_castle && !mv.is_drop {
        mv.destinations.retain(|d| {
            position
                .piece_at(d.to)
                .map_or(true, |occupant| occupant.id == d.piece.id || occupant.color != d.piece.color)
        });
    }

    mv.destination_of(mover.id)?;
    Some(mv)
}

fn keeps_king_safe(probe: &mut Position, variant: &dyn Variant, mv: &Movement, color: Color) -> bool {
    let had_king = !probe.kings(color).is_empty();
    let undo = probe.make_movement(mv, variant);
    let kings = probe.kings(color);
    let safe = if kings.is_empty() {
        !had_king
    } else {
        kings
            .iter()
            .all(|&king| !is_attacked(probe, variant, king, color.opponent()))
    };
    probe.unmake_movement(undo);
    safe
}

/// True if any king of `color` is attacked.
#[must_use]
pub fn king_in_check(position: &Position, variant: &dyn Variant, color: Color) -> bool {
    position
        .kings(color)
        .into_iter()
        .any(|king| is_attacked(position, variant, king, color.opponent()))
}

/// Cells of every king currently under attack.
#[must_use]
pub fn checked_kings(position: &Position, variant: &dyn Variant) -> Vec<Cell> {
    Color::SIDES
        .into_iter()
        .flat_map(|color| {
            position
                .kings(color)
                .into_iter()
                .filter(move |&king| is_attacked(position, variant, king, color.opponent()))
        })
        .collect()
}

/// Pieces the side to move may act with: a forced piece if the variant
/// names one, otherwise its board pieces plus any droppable reserve pieces.
#[must_use]
pub fn movable_pieces(position: &Position, variant: &dyn Variant) -> Vec<(Option<Cell>, Piece)> {
    if let Some(forced) = variant.forced_piece(position) {
        return vec![forced];
    }
    let turn = position.turn();
    let mut pieces: Vec<_> = position
        .pieces()
        .filter(|(_, p)| p.color == turn)
        .map(|(cell, p)| (Some(cell), *p))
        .collect();
    pieces.extend(
        variant
            .reserve_kinds()
            .iter()
            .filter_map(|&kind| variant.select_reserve(position, kind))
            .map(|p| (None, p)),
    );
    pieces
}

/// Every legal movement of the side to move.
#[must_use]
pub fn all_legal_moves(position: &Position, variant: &dyn Variant) -> Vec<Movement> {
    movable_pieces(position, variant)
        .iter()
        .flat_map(|(at, piece)| legal_moves(position, variant, piece, *at, MoveMode::Normal))
        .collect()
}

/// True if the side to move has at least one legal movement.
#[must_use]
pub fn has_legal_move(position: &Position, variant: &dyn Variant) -> bool {
    movable_pieces(position, variant)
        .iter()
        .any(|(at, piece)| !legal_moves(position, variant, piece, *at, MoveMode::Normal).is_empty())
}

/// Like [`has_legal_move`] but ignoring the variant filter.
#[must_use]
pub fn has_core_legal_move(position: &Position, variant: &dyn Variant) -> bool {
    movable_pieces(position, variant).iter().any(|(at, piece)| {
        !core_legal_moves(position, variant, piece, *at, MoveMode::Normal).is_empty()
    })
}
