//! Variants where captured pieces change sides and come back as drops.

use rand::RngCore;

use super::{layouts, promoted, Variant};
use crate::board::{
    CastleInsets, Color, Dimensions, Layout, Movement, Piece, PieceKind, Position,
};

/// Captured pieces join the capturer's reserve and may be dropped later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crazyhouse;

impl Crazyhouse {
    const DROPS: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];
}

impl Variant for Crazyhouse {
    fn name(&self) -> &'static str {
        "Crazyhouse"
    }

    fn slug(&self) -> &'static str {
        "crazy"
    }

    fn reserve_kinds(&self) -> &'static [PieceKind] {
        &Self::DROPS
    }
}

/// 7x7 drop chess without double steps; pawns promote only to pieces
/// their side has captured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dragonfly;

impl Dragonfly {
    const PIECES: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];
}

impl Variant for Dragonfly {
    fn name(&self) -> &'static str {
        "Dragonfly"
    }

    fn slug(&self) -> &'static str {
        "dragonfly"
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(7, 7)
    }

    fn castle_insets(&self) -> CastleInsets {
        CastleInsets { left: 1, right: 1 }
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::dragonfly()
    }

    fn reserve_kinds(&self) -> &'static [PieceKind] {
        &Self::PIECES
    }

    fn promotions(&self, position: &Position, color: Color) -> Vec<Piece> {
        let kinds: Vec<PieceKind> = Self::PIECES
            .into_iter()
            .filter(|&kind| position.reserve().count(color, kind) > 0)
            .collect();
        promoted(color, &kinds)
    }

    fn on_promote(&self, position: &mut Position, color: Color, kind: PieceKind) {
        position.reserve_mut().take(color, kind);
    }

    /// A pawn may only reach the far row if something is in the reserve
    /// to promote to once it gets there.
    fn filter_moves(&self, position: &Position, mut moves: Vec<Movement>) -> Vec<Movement> {
        let last = position.dimensions().rows - 1;
        let mut probe = position.clone();
        moves.retain(|mv| {
            let Some(pawn) = mv
                .destinations
                .iter()
                .find(|d| d.piece.kind == PieceKind::Pawn && (d.to.row == 0 || d.to.row == last))
            else {
                return true;
            };
            let color = pawn.piece.color;
            let undo = probe.make_movement(mv, self);
            let allowed = !self.promotions(&probe, color).is_empty();
            probe.unmake_movement(undo);
            allowed
        });
        moves
    }
}
