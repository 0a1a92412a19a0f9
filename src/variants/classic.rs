//! Standard chess and variants that only change the setup or the goal.

use rand::RngCore;

use super::layouts;
use super::Variant;
use crate::board::{Cell, Color, Dimensions, Layout, PieceKind, Position};
use crate::engine::GameState;

/// Standard chess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vanilla;

impl Variant for Vanilla {
    fn name(&self) -> &'static str {
        "Vanilla"
    }

    fn slug(&self) -> &'static str {
        "vanilla"
    }
}

/// Bringing a king to one of the four centre cells wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KingOfTheHill;

impl Variant for KingOfTheHill {
    fn name(&self) -> &'static str {
        "King of the Hill"
    }

    fn slug(&self) -> &'static str {
        "koth"
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        let dims = position.dimensions();
        let (mid_row, mid_column) = (dims.rows / 2, dims.columns / 2);
        let hill = [
            Cell::new(mid_row - 1, mid_column - 1),
            Cell::new(mid_row - 1, mid_column),
            Cell::new(mid_row, mid_column - 1),
            Cell::new(mid_row, mid_column),
        ];
        hill.iter()
            .filter_map(|&cell| position.piece_at(cell))
            .find(|p| p.kind == PieceKind::King)
            .map(|king| GameState::win_for(king.color))
    }
}

/// Light plays thirty-six pawns and no king against a full army.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Horde;

impl Variant for Horde {
    fn name(&self) -> &'static str {
        "Horde"
    }

    fn slug(&self) -> &'static str {
        "horde"
    }

    fn kings_optional(&self) -> bool {
        true
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::horde()
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        let light_left = position.pieces().any(|(_, p)| p.color == Color::Light);
        (!light_left).then_some(GameState::DarkWins)
    }
}

/// Fischer random chess: shuffled, mirrored back rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chess960;

impl Variant for Chess960 {
    fn name(&self) -> &'static str {
        "960"
    }

    fn slug(&self) -> &'static str {
        "960"
    }

    fn initial_layout(&self, rng: &mut dyn RngCore) -> Layout {
        let back = layouts::random_back_row(rng);
        layouts::mirrored(&back, 8, |piece| piece)
    }
}

/// Losing on the third check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThreeCheck;

impl ThreeCheck {
    pub const LIMIT: u32 = 3;
}

impl Variant for ThreeCheck {
    fn name(&self) -> &'static str {
        "Three Check"
    }

    fn slug(&self) -> &'static str {
        "three"
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        Color::SIDES
            .into_iter()
            .find(|&color| position.checks(color) >= Self::LIMIT)
            .map(|checked| GameState::win_for(checked.opponent()))
    }
}

/// 10x8 board with chancellor and archbishop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gothic;

impl Variant for Gothic {
    fn name(&self) -> &'static str {
        "Gothic"
    }

    fn slug(&self) -> &'static str {
        "gothic"
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(8, 10)
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::mirrored(&layouts::GOTHIC_BACK_ROW, 8, |piece| piece)
    }
}

/// 10x8 board, Capablanca's arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capablanca;

impl Variant for Capablanca {
    fn name(&self) -> &'static str {
        "Capablanca"
    }

    fn slug(&self) -> &'static str {
        "capablanca"
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(8, 10)
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::mirrored(&layouts::CAPABLANCA_BACK_ROW, 8, |piece| piece)
    }
}
