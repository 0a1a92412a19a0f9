use log::trace;

use super::{Color, Movement, Piece, PieceId, PieceKind, Position, Reserve};
use crate::variants::Variant;

/// Everything needed to take back one ply.
#[derive(Clone, Debug)]
pub struct Unmake {
    journal: Vec<(usize, Option<Piece>)>,
    turn: Color,
    plies_remaining: u32,
    en_passant: Option<PieceId>,
    halfmove_clock: u32,
    whole_moves: u32,
    checks: [u32; 2],
    reserve: Reserve,
    next_id: u32,
    turn_ended: bool,
}

impl Unmake {
    /// True if the ply handed the move to the other side.
    #[inline]
    #[must_use]
    pub fn turn_ended(&self) -> bool {
        self.turn_ended
    }
}

impl Position {
    fn journaled_put(
        &mut self,
        journal: &mut Vec<(usize, Option<Piece>)>,
        idx: usize,
        piece: Option<Piece>,
    ) -> Option<Piece> {
        let previous = std::mem::replace(&mut self.tiles[idx], piece);
        journal.push((idx, previous));
        previous
    }

    /// Apply one ply.
    ///
    /// Pieces are lifted from their origins, then every destination is
    /// placed (an occupant it lands on is captured), then the capture cells
    /// are vacated. The movement must come from the legal set of this
    /// position; nothing is re-validated here.
    pub fn make_movement(&mut self, mv: &Movement, variant: &dyn Variant) -> Unmake {
        let mut undo = Unmake {
            journal: Vec::with_capacity(mv.destinations.len() * 2 + mv.captures.len()),
            turn: self.turn,
            plies_remaining: self.plies_remaining,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            whole_moves: self.whole_moves,
            checks: self.checks,
            reserve: self.reserve,
            next_id: self.next_id,
            turn_ended: false,
        };
        let mover = self.turn;
        let mut progress = false;

        for dest in &mv.destinations {
            let Some(from) = dest.from else { continue };
            if !self.dims.contains(from) {
                continue;
            }
            let idx = self.dims.index(from);
            if self.tiles[idx].is_some_and(|p| p.id == dest.piece.id) {
                self.journaled_put(&mut undo.journal, idx, None);
            }
        }

        for dest in &mv.destinations {
            if !self.dims.contains(dest.to) {
                continue;
            }
            let mut piece = dest.piece;
            if dest.from.is_some() {
                piece.moves += 1;
                if piece.kind == PieceKind::Pawn {
                    progress = true;
                }
            }
            if piece.id.0 >= self.next_id {
                self.next_id = piece.id.0 + 1;
            }
            let idx = self.dims.index(dest.to);
            if let Some(taken) = self.journaled_put(&mut undo.journal, idx, Some(piece)) {
                if taken.id != piece.id {
                    progress = true;
                    if mover.is_opponent(taken.color) {
                        self.reserve.add(mover, taken.tally_kind());
                    }
                }
            }
        }

        for &cell in &mv.captures {
            if !self.dims.contains(cell) {
                continue;
            }
            let idx = self.dims.index(cell);
            if let Some(taken) = self.journaled_put(&mut undo.journal, idx, None) {
                progress = true;
                if mover.is_opponent(taken.color) {
                    self.reserve.add(mover, taken.tally_kind());
                }
            }
        }

        if mv.is_drop {
            if let Some(dest) = mv.destinations.first() {
                self.reserve.take(mover, dest.piece.kind);
            }
        }

        self.en_passant = mv.en_passant;
        self.halfmove_clock = if progress {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.plies_remaining = self.plies_remaining.saturating_sub(1);
        if self.plies_remaining == 0 {
            self.turn = self.turn.opponent();
            self.whole_moves += 1;
            self.plies_remaining = variant.plies_per_turn(self.whole_moves).max(1);
            undo.turn_ended = true;
        }
        trace!(
            "made movement to {} ({} tiles touched)",
            mv.target,
            undo.journal.len()
        );
        undo
    }

    /// Reverse a ply made with [`Position::make_movement`].
    pub fn unmake_movement(&mut self, undo: Unmake) {
        for (idx, previous) in undo.journal.into_iter().rev() {
            self.tiles[idx] = previous;
        }
        self.turn = undo.turn;
        self.plies_remaining = undo.plies_remaining;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.whole_moves = undo.whole_moves;
        self.checks = undo.checks;
        self.reserve = undo.reserve;
        self.next_id = undo.next_id;
    }
}
