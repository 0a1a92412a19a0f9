//! Game controller implementation.

use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::events::Listeners;
use super::history::{History, Snapshot};
use super::suggestion::parse_suggestion;
use super::{evaluate, GameEvent, GameState, ListenerId};
use crate::board::{
    all_legal_moves, checked_kings, king_in_check, legal_moves, Cell, Color, MoveMode, Movement,
    Piece, PieceKind, Position, Reserve, SuggestionError,
};
use crate::variants::{self, Variant};

/// The piece the user is currently handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub piece: Piece,
    /// `None` for a piece coming from outside the board.
    pub at: Option<Cell>,
    pub moves: Vec<Movement>,
}

/// A running game of one variant.
pub struct Game {
    variant: Rc<dyn Variant>,
    position: Position,
    history: History,
    selection: Option<Selection>,
    listeners: Listeners,
    rng: StdRng,
}

impl Game {
    /// Start a new game of `variant`.
    #[must_use]
    pub fn new(variant: Rc<dyn Variant>) -> Self {
        Self::with_rng(variant, StdRng::from_entropy())
    }

    /// Like [`Game::new`], with reproducible random setups.
    #[must_use]
    pub fn with_seed(variant: Rc<dyn Variant>, seed: u64) -> Self {
        Self::with_rng(variant, StdRng::seed_from_u64(seed))
    }

    /// Start a game of the registered variant called `slug`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        variants::by_slug(slug).map(Self::new)
    }

    /// Continue from an arbitrary position. The history starts here.
    #[must_use]
    pub fn from_position(variant: Rc<dyn Variant>, position: Position) -> Self {
        Game {
            variant,
            history: History::new(position.clone()),
            position,
            selection: None,
            listeners: Listeners::default(),
            rng: StdRng::from_entropy(),
        }
    }

    fn with_rng(variant: Rc<dyn Variant>, rng: StdRng) -> Self {
        let dims = variant.dimensions();
        let mut game = Game {
            variant,
            position: Position::empty(dims),
            history: History::new(Position::empty(dims)),
            selection: None,
            listeners: Listeners::default(),
            rng,
        };
        game.new_game();
        game
    }

    /// Reset to the variant's starting layout with a fresh history.
    pub fn new_game(&mut self) {
        let layout = self.variant.initial_layout(&mut self.rng);
        let plies = self.variant.plies_per_turn(0);
        self.position = Position::from_layout(self.variant.dimensions(), &layout, plies);
        self.history = History::new(self.position.clone());
        self.selection = None;
        debug!(
            "New {} game: {}",
            self.variant.name(),
            self.position.to_fen()
        );
        self.listeners.emit(&GameEvent::NewGame);
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> &dyn Variant {
        &*self.variant
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.position.piece_at(cell)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> + '_ {
        self.position.pieces()
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        evaluate(&self.position, &*self.variant)
    }

    /// Kings of either side that are under attack.
    #[must_use]
    pub fn checked_kings(&self) -> Vec<Cell> {
        checked_kings(&self.position, &*self.variant)
    }

    #[inline]
    #[must_use]
    pub fn reserve(&self) -> &Reserve {
        self.position.reserve()
    }

    /// The movement that led to the current position.
    #[must_use]
    pub fn last_move(&self) -> Option<&Movement> {
        self.history.current().last_move.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Legal movements of the piece on `cell`.
    ///
    /// Empty while a promotion is pending, for pieces of the side not to
    /// move, and for anything but the forced piece when there is one.
    #[must_use]
    pub fn legal_moves_for(&self, cell: Cell) -> Vec<Movement> {
        let Some(piece) = self.position.piece_at(cell) else {
            return Vec::new();
        };
        if !self.may_move(piece) {
            return Vec::new();
        }
        legal_moves(
            &self.position,
            &*self.variant,
            piece,
            Some(cell),
            MoveMode::Normal,
        )
    }

    /// Drops of a reserve piece of `kind` for the side to move.
    #[must_use]
    pub fn legal_moves_for_reserve(&self, kind: PieceKind) -> Vec<Movement> {
        if self.pending_promotion().is_some() || self.variant.forced_piece(&self.position).is_some() {
            return Vec::new();
        }
        self.variant
            .select_reserve(&self.position, kind)
            .map(|piece| {
                legal_moves(&self.position, &*self.variant, &piece, None, MoveMode::Normal)
            })
            .unwrap_or_default()
    }

    /// Movements of the forced piece, if the variant names one.
    #[must_use]
    pub fn forced_moves(&self) -> Vec<Movement> {
        if self.pending_promotion().is_some() {
            return Vec::new();
        }
        self.variant
            .forced_piece(&self.position)
            .map(|(at, piece)| {
                legal_moves(&self.position, &*self.variant, &piece, at, MoveMode::Normal)
            })
            .unwrap_or_default()
    }

    /// Every legal movement of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Movement> {
        if self.pending_promotion().is_some() {
            return Vec::new();
        }
        all_legal_moves(&self.position, &*self.variant)
    }

    fn may_move(&self, piece: &Piece) -> bool {
        if self.pending_promotion().is_some() {
            return false;
        }
        match self.variant.forced_piece(&self.position) {
            Some((_, forced)) => forced.id == piece.id,
            None => piece.color == self.position.turn(),
        }
    }

    /// Select the piece on `cell`. Pieces without legal moves are ignored.
    pub fn select_piece(&mut self, cell: Cell) -> bool {
        let moves = self.legal_moves_for(cell);
        match self.position.piece_at(cell) {
            Some(&piece) if !moves.is_empty() => {
                self.selection = Some(Selection {
                    piece,
                    at: Some(cell),
                    moves,
                });
                true
            }
            _ => false,
        }
    }

    /// Select a reserve piece of `kind`, or the forced off-board piece.
    pub fn select_reserve(&mut self, kind: PieceKind) -> bool {
        let candidate = match self.variant.forced_piece(&self.position) {
            Some((None, forced)) if forced.kind == kind => Some((forced, self.forced_moves())),
            Some(_) => None,
            None => self
                .variant
                .select_reserve(&self.position, kind)
                .map(|piece| (piece, self.legal_moves_for_reserve(kind))),
        };
        match candidate {
            Some((piece, moves)) if !moves.is_empty() => {
                self.selection = Some(Selection {
                    piece,
                    at: None,
                    moves,
                });
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Play `movement`, which must come from a legal set of the current
    /// position.
    pub fn execute_move(&mut self, movement: &Movement) {
        let mover = self.position.turn();
        let undo = self.position.make_movement(movement, &*self.variant);
        self.variant.on_execute(&mut self.position, movement);

        if undo.turn_ended() && self.variant.has_check() {
            let defender = self.position.turn();
            if king_in_check(&self.position, &*self.variant, defender) {
                self.position.record_check(defender);
            }
        }

        self.selection = None;
        self.history.push(Snapshot {
            position: self.position.clone(),
            last_move: Some(movement.clone()),
        });
        debug!(
            "{mover} played to {}; {} plies left",
            movement.target.to_algebraic(self.position.dimensions()),
            self.position.plies_remaining()
        );
        self.listeners.emit(&GameEvent::AfterMove {
            movement: movement.clone(),
        });
    }

    /// Cell of a pawn waiting to be promoted.
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Cell> {
        self.position.promotable_pawn()
    }

    /// Choices for the pending promotion; empty if there is none.
    #[must_use]
    pub fn promotions(&self) -> Vec<Piece> {
        self.pending_promotion()
            .and_then(|cell| self.position.piece_at(cell))
            .map(|pawn| self.variant.promotions(&self.position, pawn.color))
            .unwrap_or_default()
    }

    /// Promote the pending pawn to `kind`. Returns false if nothing is
    /// pending or `kind` is not on offer.
    pub fn promote(&mut self, kind: PieceKind) -> bool {
        let Some(cell) = self.pending_promotion() else {
            return false;
        };
        let Some(&pawn) = self.position.piece_at(cell) else {
            return false;
        };
        let Some(choice) = self
            .variant
            .promotions(&self.position, pawn.color)
            .into_iter()
            .find(|p| p.kind == kind)
        else {
            return false;
        };

        let defender = pawn.color.opponent();
        let counted = self.variant.has_check()
            && self.position.turn() == defender
            && king_in_check(&self.position, &*self.variant, defender);
        self.position.promote_pawn(cell, choice);
        self.variant.on_promote(&mut self.position, pawn.color, kind);

        // The check counter was settled with the pawn still on the board.
        if self.variant.has_check()
            && !counted
            && self.position.turn() == defender
            && king_in_check(&self.position, &*self.variant, defender)
        {
            self.position.record_check(defender);
        }
        self.history.amend(self.position.clone());
        debug!(
            "{} pawn on {} promoted to {kind:?}",
            pawn.color,
            cell.to_algebraic(self.position.dimensions())
        );
        self.listeners.emit(&GameEvent::Promoted { cell, kind });
        true
    }

    /// Step back one snapshot. No-op at the start of the history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.position = snapshot.position.clone();
        self.after_history_move("Undo");
        true
    }

    /// Step forward one snapshot. No-op at the end of the history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.position = snapshot.position.clone();
        self.after_history_move("Redo");
        true
    }

    fn after_history_move(&mut self, what: &str) {
        self.selection = None;
        let cursor = self.history.cursor();
        debug!("{what} to snapshot {cursor} of {}", self.history.len());
        self.listeners.emit(&GameEvent::HistoryMoved { cursor });
    }

    /// Board export for external move suggesters.
    #[must_use]
    pub fn export_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Apply a reply from an external move suggester, such as
    /// `"bestmove e2e4 ponder e7e5"` or `"e7e8q"`.
    ///
    /// A reply that cannot be matched against the legal set is logged and
    /// dropped; the game is left untouched.
    pub fn apply_suggestion(&mut self, reply: &str) -> Result<Movement, SuggestionError> {
        let result = self.try_apply_suggestion(reply);
        if let Err(e) = &result {
            warn!("Dropping move suggestion '{}': {e}", reply.trim());
        }
        result
    }

    fn try_apply_suggestion(&mut self, reply: &str) -> Result<Movement, SuggestionError> {
        let dims = self.position.dimensions();
        let suggestion = parse_suggestion(reply, dims)?;
        let mover = match self.position.piece_at(suggestion.from) {
            Some(piece) if self.may_move(piece) => *piece,
            _ => {
                return Err(SuggestionError::NoPiece {
                    cell: suggestion.from.to_algebraic(dims),
                })
            }
        };

        let movement = self
            .legal_moves_for(suggestion.from)
            .into_iter()
            .find(|mv| {
                mv.target == suggestion.to
                    || mv
                        .destination_of(mover.id)
                        .is_some_and(|d| d.to == suggestion.to)
            })
            .ok_or_else(|| SuggestionError::NoMatchingMove {
                notation: suggestion.notation(dims),
            })?;

        if let Some(kind) = suggestion.promotion {
            let mut probe = self.position.clone();
            probe.make_movement(&movement, &*self.variant);
            let offered = probe
                .promotable_pawn()
                .and_then(|cell| probe.piece_at(cell))
                .is_some_and(|pawn| {
                    self.variant
                        .promotions(&probe, pawn.color)
                        .iter()
                        .any(|p| p.kind == kind)
                });
            if !offered {
                return Err(SuggestionError::InvalidPromotion {
                    char: kind.to_char(),
                });
            }
        }

        self.execute_move(&movement);
        if let Some(kind) = suggestion.promotion {
            self.promote(kind);
        }
        Ok(movement)
    }

    /// Register a callback for every [`GameEvent`].
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

/// Copies the game state; listeners stay with the original.
impl Clone for Game {
    fn clone(&self) -> Self {
        Game {
            variant: Rc::clone(&self.variant),
            position: self.position.clone(),
            history: self.history.clone(),
            selection: self.selection.clone(),
            listeners: Listeners::default(),
            rng: self.rng.clone(),
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("variant", &self.variant.slug())
            .field("fen", &self.position.to_fen())
            .field("history", &self.history.len())
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::variants::{Crazyhouse, Vanilla};

    fn vanilla() -> Game {
        Game::with_seed(Rc::new(Vanilla), 1)
    }

    fn play(game: &mut Game, from: &str, to: &str) {
        let dims = game.position().dimensions();
        let from = Cell::from_algebraic(from, dims).unwrap();
        let to = Cell::from_algebraic(to, dims).unwrap();
        let mv = game
            .legal_moves_for(from)
            .into_iter()
            .find(|mv| mv.target == to)
            .unwrap();
        game.execute_move(&mv);
    }

    #[test]
    fn test_new_game_then_undo_is_noop() {
        let mut game = vanilla();
        let before = game.position().clone();
        assert!(!game.undo());
        assert_eq!(game.position(), &before);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history().cursor(), 0);
    }

    #[test]
    fn test_wrong_side_has_no_moves() {
        let game = vanilla();
        assert!(game.legal_moves_for(Cell::new(1, 4)).is_empty());
        assert_eq!(game.legal_moves_for(Cell::new(6, 4)).len(), 2);
        assert_eq!(game.all_legal_moves().len(), 20);
    }

    #[test]
    fn test_select_without_moves_is_noop() {
        let mut game = vanilla();
        assert!(!game.select_piece(Cell::new(7, 0)));
        assert!(game.selection().is_none());
        assert!(game.select_piece(Cell::new(7, 1)));
        assert_eq!(game.selection().map(|s| s.moves.len()), Some(2));
        game.clear_selection();
        assert!(game.selection().is_none());
    }

    #[test]
    fn test_undo_redo_and_last_move() {
        let mut game = vanilla();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        let after = game.position().clone();
        assert_eq!(game.last_move().map(|m| m.target), Some(Cell::new(3, 4)));

        assert!(game.undo());
        assert!(game.undo());
        assert_eq!(game.turn(), Color::Light);
        assert!(game.last_move().is_none());
        assert!(game.redo());
        assert!(game.redo());
        assert!(!game.redo());
        assert_eq!(game.position(), &after);
    }

    #[test]
    fn test_listeners_receive_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = vanilla();
        let sink = Rc::clone(&seen);
        let id = game.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        play(&mut game, "d2", "d4");
        game.undo();
        assert!(game.unsubscribe(id));
        game.new_game();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], GameEvent::AfterMove { .. }));
        assert_eq!(seen[1], GameEvent::HistoryMoved { cursor: 0 });
    }

    #[test]
    fn test_promotion_blocks_until_chosen() {
        let position = crate::board::PositionBuilder::new(crate::board::Dimensions::STANDARD)
            .piece(Cell::new(7, 4), Color::Light, PieceKind::King)
            .piece(Cell::new(0, 7), Color::Dark, PieceKind::King)
            .piece(Cell::new(1, 0), Color::Light, PieceKind::Pawn)
            .build();
        let mut game = Game::from_position(Rc::new(Vanilla), position);
        play(&mut game, "a7", "a8");

        let pawn_cell = Cell::new(0, 0);
        assert_eq!(game.pending_promotion(), Some(pawn_cell));
        assert!(game.all_legal_moves().is_empty());
        assert_eq!(game.promotions().len(), 4);
        assert!(!game.promote(PieceKind::King));
        assert!(game.promote(PieceKind::Queen));

        let queen = game.piece_at(pawn_cell).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert!(queen.promoted);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.history().current().position, *game.position());
        assert!(!game.all_legal_moves().is_empty());
    }

    #[test]
    fn test_select_reserve() {
        let mut game = Game::with_seed(Rc::new(Crazyhouse), 3);
        assert!(!game.select_reserve(PieceKind::Knight));
        let position = crate::board::PositionBuilder::standard()
            .reserve(Color::Light, PieceKind::Knight, 1)
            .build();
        game = Game::from_position(Rc::new(Crazyhouse), position);
        assert!(game.select_reserve(PieceKind::Knight));
        assert_eq!(game.selection().map(|s| s.moves.len()), Some(32));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut game = vanilla();
        let copy = game.clone();
        play(&mut game, "g1", "f3");
        assert_ne!(game.position(), copy.position());
        assert_eq!(copy.history().len(), 1);
    }
}
