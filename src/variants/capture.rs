//! Variants that change what a capture does, or when it is allowed.

use rand::RngCore;

use super::{layouts, promoted, Variant, PROMOTION_KINDS};
use crate::board::{
    core_legal_moves, has_core_legal_move, has_legal_move, king_in_check, movable_pieces, Aura,
    Color, Layout, MoveMode, Movement, Piece, PieceKind, Position,
};
use crate::engine::GameState;

const ATOMIC: Aura = Aura::Atomic { spare_pawns: true };

/// Every capture explodes, taking out all non-pawn neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Atomic;

impl Variant for Atomic {
    fn name(&self) -> &'static str {
        "Atomic"
    }

    fn slug(&self) -> &'static str {
        "atomic"
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::standard(|piece| piece.with_aura(ATOMIC))
    }

    fn promotions(&self, _position: &Position, color: Color) -> Vec<Piece> {
        promoted(color, &PROMOTION_KINDS)
            .into_iter()
            .map(|piece| piece.with_aura(ATOMIC))
            .collect()
    }
}

/// Captured pieces go back to their starting cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Circe;

impl Variant for Circe {
    fn name(&self) -> &'static str {
        "Circe"
    }

    fn slug(&self) -> &'static str {
        "circe"
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::standard(|piece| piece.with_aura(Aura::Circe))
    }

    fn promotions(&self, _position: &Position, color: Color) -> Vec<Piece> {
        promoted(color, &PROMOTION_KINDS)
            .into_iter()
            .map(|piece| piece.with_aura(Aura::Circe))
            .collect()
    }
}

/// Pawns turn the pieces they capture, at the cost of themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Traitor;

impl Variant for Traitor {
    fn name(&self) -> &'static str {
        "Traitor"
    }

    fn slug(&self) -> &'static str {
        "traitor"
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::standard(|piece| {
            if piece.kind == PieceKind::Pawn {
                piece.with_aura(Aura::Traitor)
            } else {
                piece
            }
        })
    }
}

/// Whether `mv` removes an opposing piece.
fn is_capture(position: &Position, mv: &Movement) -> bool {
    let lands_on_enemy = mv.destinations.iter().any(|d| {
        position
            .piece_at(d.to)
            .is_some_and(|p| d.piece.color.is_opponent(p.color))
    });
    lands_on_enemy || mv.captures.iter().any(|&c| position.piece_at(c).is_some())
}

/// Losing chess: captures are compulsory and running out of moves wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Antichess;

impl Variant for Antichess {
    fn name(&self) -> &'static str {
        "Antichess"
    }

    fn slug(&self) -> &'static str {
        "anti"
    }

    fn has_check(&self) -> bool {
        false
    }

    fn kings_optional(&self) -> bool {
        true
    }

    fn promotions(&self, _position: &Position, color: Color) -> Vec<Piece> {
        promoted(
            color,
            &[
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ],
        )
    }

    fn filter_moves(&self, position: &Position, mut moves: Vec<Movement>) -> Vec<Movement> {
        moves.retain(|mv| !mv.is_castle);
        let must_capture = movable_pieces(position, self).iter().any(|(at, piece)| {
            core_legal_moves(position, self, piece, *at, MoveMode::Normal)
                .iter()
                .any(|mv| is_capture(position, mv))
        });
        if must_capture {
            moves.retain(|mv| is_capture(position, mv));
        }
        moves
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        (!has_legal_move(position, self)).then(|| GameState::win_for(position.turn()))
    }
}

/// A move may give check only if it is mate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkless;

impl Variant for Checkless {
    fn name(&self) -> &'static str {
        "Checkless"
    }

    fn slug(&self) -> &'static str {
        "checkless"
    }

    /// Promotion choices that do not give a plain check.
    fn promotions(&self, position: &Position, color: Color) -> Vec<Piece> {
        let choices = promoted(color, &PROMOTION_KINDS);
        let Some(cell) = position.promotable_pawn() else {
            return choices;
        };
        choices
            .into_iter()
            .filter(|&choice| {
                let mut branch = position.clone();
                branch.promote_pawn(cell, choice);
                self.quiet_or_mate(&branch, color.opponent())
            })
            .collect()
    }

    fn filter_moves(&self, position: &Position, mut moves: Vec<Movement>) -> Vec<Movement> {
        let mover = position.turn();
        let mut probe = position.clone();
        moves.retain(|mv| {
            let undo = probe.make_movement(mv, self);
            let allowed = if probe.promotable_pawn().is_some() {
                !self.promotions(&probe, mover).is_empty()
            } else {
                self.quiet_or_mate(&probe, mover.opponent())
            };
            probe.unmake_movement(undo);
            allowed
        });
        moves
    }
}

impl Checkless {
    /// `defender` is either not in check or checkmated.
    fn quiet_or_mate(&self, position: &Position, defender: Color) -> bool {
        !king_in_check(position, self, defender)
            || (position.turn() == defender && !has_core_legal_move(position, self))
    }
}
