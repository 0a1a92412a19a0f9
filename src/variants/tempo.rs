//! Variants with several plies per turn.
//!
//! Only the last ply of a turn has to leave the mover's king safe, so a
//! king can be captured outright; losing it ends the game.

use super::Variant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DoubleMove;

impl Variant for DoubleMove {
    fn name(&self) -> &'static str {
        "Double Move Chess"
    }

    fn slug(&self) -> &'static str {
        "double"
    }

    fn plies_per_turn(&self, _whole_moves: u32) -> u32 {
        2
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TripleMove;

impl Variant for TripleMove {
    fn name(&self) -> &'static str {
        "Triple Move Chess"
    }

    fn slug(&self) -> &'static str {
        "triple"
    }

    fn plies_per_turn(&self, _whole_moves: u32) -> u32 {
        3
    }
}

/// Turn `n` (counting from one) has `n` plies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progressive;

impl Variant for Progressive {
    fn name(&self) -> &'static str {
        "Progressive"
    }

    fn slug(&self) -> &'static str {
        "progressive"
    }

    fn plies_per_turn(&self, whole_moves: u32) -> u32 {
        whole_moves + 1
    }
}
