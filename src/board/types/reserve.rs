//! Captured-piece tally.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, PieceKind};

/// Per-side counts of captured piece kinds, keyed by the capturing side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reserve {
    counts: [[u32; PieceKind::COUNT]; 2],
}

impl Reserve {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `color`. Neutral holds nothing.
    #[inline]
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        color
            .side_index()
            .map_or(0, |side| self.counts[side][kind.index()])
    }

    pub fn add(&mut self, color: Color, kind: PieceKind) {
        if let Some(side) = color.side_index() {
            self.counts[side][kind.index()] += 1;
        }
    }

    /// Remove one; returns false if there was nothing to take.
    pub fn take(&mut self, color: Color, kind: PieceKind) -> bool {
        let Some(side) = color.side_index() else {
            return false;
        };
        let slot = &mut self.counts[side][kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn set(&mut self, color: Color, kind: PieceKind, count: u32) {
        if let Some(side) = color.side_index() {
            self.counts[side][kind.index()] = count;
        }
    }

    /// Kinds with a non-zero count for `color`.
    pub fn available(&self, color: Color) -> impl Iterator<Item = (PieceKind, u32)> + '_ {
        PieceKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.count(color, kind)))
            .filter(|&(_, n)| n > 0)
    }
}
