//! Variants of the game, and the hooks through which they differ.
//!
//! Every variant is a value implementing [`Variant`]. The default method
//! bodies describe standard chess; a variant overrides only what it changes.
//! Hooks always see movements that already passed the built-in bounds,
//! self-capture and self-check checks, so they can only narrow the legal set.

use std::fmt;
use std::rc::Rc;

use rand::RngCore;

use crate::board::{
    CastleInsets, Cell, Color, Dimensions, Layout, Movement, Piece, PieceKind, Position,
};
use crate::engine::GameState;

mod capture;
mod classic;
mod layouts;
mod reserve;
mod special;
mod tempo;

pub use capture::{Antichess, Atomic, Checkless, Circe, Traitor};
pub use classic::{Capablanca, Chess960, Gothic, Horde, KingOfTheHill, ThreeCheck, Vanilla};
pub use reserve::{Crazyhouse, Dragonfly};
pub use special::{AllQueens, DuckChess, RacingKings};
pub use tempo::{DoubleMove, Progressive, TripleMove};

/// Kinds a pawn may normally promote to.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// The details handled differently by each game mode.
pub trait Variant: fmt::Debug {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Short unique identifier.
    fn slug(&self) -> &'static str;

    fn dimensions(&self) -> Dimensions {
        Dimensions::STANDARD
    }

    fn castle_insets(&self) -> CastleInsets {
        CastleInsets::default()
    }

    /// Whether moves exposing the mover's own king are illegal.
    fn has_check(&self) -> bool {
        true
    }

    /// Whether a side may legitimately have zero or several kings.
    fn kings_optional(&self) -> bool {
        false
    }

    /// Plies without capture or pawn move after which the game is drawn.
    fn no_progress_limit(&self) -> Option<u32> {
        Some(100)
    }

    /// Rows of the starting position, top row first.
    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::standard(|piece| piece)
    }

    /// Plies in the turn that starts after `whole_moves` completed turns.
    fn plies_per_turn(&self, _whole_moves: u32) -> u32 {
        1
    }

    /// Pieces a pawn of `color` may become.
    fn promotions(&self, _position: &Position, color: Color) -> Vec<Piece> {
        promoted(color, &PROMOTION_KINDS)
    }

    /// Narrow the legal set. Only called for playable moves, never for
    /// attack detection.
    fn filter_moves(&self, _position: &Position, moves: Vec<Movement>) -> Vec<Movement> {
        moves
    }

    /// Special result checked before the built-in ones.
    fn game_state(&self, _position: &Position) -> Option<GameState> {
        None
    }

    /// Side effects after a movement has been applied.
    fn on_execute(&self, _position: &mut Position, _movement: &Movement) {}

    /// Side effects after a pawn has been promoted.
    fn on_promote(&self, _position: &mut Position, _color: Color, _kind: PieceKind) {}

    /// Kinds that can be dropped from the reserve.
    fn reserve_kinds(&self) -> &'static [PieceKind] {
        &[]
    }

    /// Materialise a reserve piece for the side to move, if it has one.
    fn select_reserve(&self, position: &Position, kind: PieceKind) -> Option<Piece> {
        let turn = position.turn();
        if !self.reserve_kinds().contains(&kind) || position.reserve().count(turn, kind) == 0 {
            return None;
        }
        Some(Piece {
            id: position.next_piece_id(),
            ..Piece::new(turn, kind)
        })
    }

    /// A piece the side to move must act with this ply.
    fn forced_piece(&self, _position: &Position) -> Option<(Option<Cell>, Piece)> {
        None
    }
}

/// Promotion pieces of `kinds` for `color`.
pub(crate) fn promoted(color: Color, kinds: &[PieceKind]) -> Vec<Piece> {
    kinds
        .iter()
        .map(|&kind| Piece {
            promoted: true,
            ..Piece::new(color, kind)
        })
        .collect()
}

/// Every shipped variant, in menu order.
#[must_use]
pub fn all() -> Vec<Rc<dyn Variant>> {
    vec![
        Rc::new(Vanilla),
        Rc::new(KingOfTheHill),
        Rc::new(Horde),
        Rc::new(Chess960),
        Rc::new(Atomic),
        Rc::new(DoubleMove),
        Rc::new(TripleMove),
        Rc::new(ThreeCheck),
        Rc::new(RacingKings),
        Rc::new(Antichess),
        Rc::new(Crazyhouse),
        Rc::new(DuckChess),
        Rc::new(Circe),
        Rc::new(AllQueens),
        Rc::new(Progressive),
        Rc::new(Gothic),
        Rc::new(Traitor),
        Rc::new(Checkless),
        Rc::new(Dragonfly),
        Rc::new(Capablanca),
    ]
}

/// Look a variant up by slug.
#[must_use]
pub fn by_slug(slug: &str) -> Option<Rc<dyn Variant>> {
    all().into_iter().find(|v| v.slug() == slug)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_registry_has_unique_slugs() {
        let variants = all();
        assert_eq!(variants.len(), 20);
        let slugs: HashSet<_> = variants.iter().map(|v| v.slug()).collect();
        assert_eq!(slugs.len(), 20);
    }

    #[test]
    fn test_by_slug() {
        assert_eq!(by_slug("atomic").map(|v| v.name()), Some("Atomic"));
        assert!(by_slug("nonexistent").is_none());
    }

    #[test]
    fn test_layouts_fit_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        for variant in all() {
            let dims = variant.dimensions();
            let layout = variant.initial_layout(&mut rng);
            assert_eq!(layout.len(), dims.rows as usize, "{}", variant.slug());
            for row in &layout {
                assert_eq!(row.len(), dims.columns as usize, "{}", variant.slug());
            }
        }
    }

    #[test]
    fn test_layouts_respect_king_rule() {
        let mut rng = StdRng::seed_from_u64(11);
        for variant in all() {
            if variant.kings_optional() {
                continue;
            }
            let layout = variant.initial_layout(&mut rng);
            for color in Color::SIDES {
                let kings = layout
                    .iter()
                    .flatten()
                    .flatten()
                    .filter(|p| p.color == color && p.kind == PieceKind::King)
                    .count();
                assert_eq!(kings, 1, "{} {color}", variant.slug());
            }
        }
    }
}
