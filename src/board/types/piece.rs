//! Piece, color and piece-behaviour types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side a piece belongs to.
///
/// `Neutral` pieces (the duck) belong to neither player and are never
/// captured or attacked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Light,
    Dark,
    Neutral,
}

impl Color {
    /// The two playing sides in turn order.
    pub const SIDES: [Color; 2] = [Color::Light, Color::Dark];

    /// The adversary of this side. Neutral has no adversary.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
            Color::Neutral => Color::Neutral,
        }
    }

    /// True if `other` is the opposing playing side.
    #[inline]
    #[must_use]
    pub fn is_opponent(self, other: Color) -> bool {
        matches!(
            (self, other),
            (Color::Light, Color::Dark) | (Color::Dark, Color::Light)
        )
    }

    /// Index into per-side tables, `None` for neutral.
    #[inline]
    #[must_use]
    pub const fn side_index(self) -> Option<usize> {
        match self {
            Color::Light => Some(0),
            Color::Dark => Some(1),
            Color::Neutral => None,
        }
    }

    /// Row delta of a forward pawn step. Light starts at the bottom rows.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i16 {
        match self {
            Color::Light => -1,
            _ => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Light => "light",
            Color::Dark => "dark",
            Color::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

/// Piece type tag. Movement generation dispatches on this.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    /// Bishop + knight.
    Archbishop,
    /// Rook + knight.
    Chancellor,
    Duck,
}

impl PieceKind {
    pub const COUNT: usize = 9;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Archbishop,
        PieceKind::Chancellor,
        PieceKind::Duck,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
            PieceKind::Archbishop => 6,
            PieceKind::Chancellor => 7,
            PieceKind::Duck => 8,
        }
    }

    /// Parse a kind from its lowercase letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            'a' => Some(PieceKind::Archbishop),
            'c' => Some(PieceKind::Chancellor),
            '*' => Some(PieceKind::Duck),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Archbishop => 'a',
            PieceKind::Chancellor => 'c',
            PieceKind::Duck => '*',
        }
    }
}

/// Stable identity of a piece across moves and history snapshots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub u32);

/// When a pawn may take its two-cell opening step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PawnRule {
    /// From its starting band row, whatever the board size.
    #[default]
    Standard,
    /// While the pawn has moved at most once.
    Horde,
    /// Never.
    Soldier,
}

/// Extra capture behaviour layered over a piece's base movement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Aura {
    #[default]
    Plain,
    /// Captured pieces defect to the capturer's side.
    Traitor,
    /// Captures blow up the surrounding 3x3 block.
    Atomic { spare_pawns: bool },
    /// Captured pieces are reborn on their home cell.
    Circe,
}

/// A piece on (or destined for) the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    /// Number of times this piece has been relocated.
    pub moves: u32,
    pub promoted: bool,
    pub pawn_rule: PawnRule,
    pub aura: Aura,
}

impl Piece {
    /// A fresh, unplaced piece. The id is assigned when it enters a position.
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            id: PieceId(0),
            color,
            kind,
            moves: 0,
            promoted: false,
            pawn_rule: PawnRule::Standard,
            aura: Aura::Plain,
        }
    }

    #[must_use]
    pub const fn with_pawn_rule(mut self, rule: PawnRule) -> Self {
        self.pawn_rule = rule;
        self
    }

    #[must_use]
    pub const fn with_aura(mut self, aura: Aura) -> Self {
        self.aura = aura;
        self
    }

    /// Re-colored copy under a new identity.
    #[must_use]
    pub const fn recolored(self, color: Color, id: PieceId) -> Self {
        Piece {
            id,
            color,
            ..self
        }
    }

    /// Kind this piece counts as once captured. Promoted pieces revert to pawns.
    #[inline]
    #[must_use]
    pub const fn tally_kind(&self) -> PieceKind {
        if self.promoted {
            PieceKind::Pawn
        } else {
            self.kind
        }
    }

    /// Board-export letter, uppercase for light.
    #[must_use]
    pub fn to_fen_char(&self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::Light {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
