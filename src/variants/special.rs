//! Variants with their own goals or their own kind of turn.

use rand::RngCore;

use super::{layouts, Variant};
use crate::board::{
    has_legal_move, king_in_check, Cell, Color, Dimensions, Layout, Movement, Piece, PieceKind,
    Position,
};
use crate::engine::GameState;

/// Each turn is a normal ply followed by moving the neutral duck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DuckChess;

fn find_duck(position: &Position) -> Option<(Cell, &Piece)> {
    position.pieces().find(|(_, p)| p.kind == PieceKind::Duck)
}

impl Variant for DuckChess {
    fn name(&self) -> &'static str {
        "Duck Chess"
    }

    fn slug(&self) -> &'static str {
        "duck"
    }

    fn has_check(&self) -> bool {
        false
    }

    fn plies_per_turn(&self, _whole_moves: u32) -> u32 {
        2
    }

    fn forced_piece(&self, position: &Position) -> Option<(Option<Cell>, Piece)> {
        if !position.is_final_ply() {
            return None;
        }
        let forced = match find_duck(position) {
            Some((cell, duck)) => (Some(cell), *duck),
            None => (
                None,
                Piece {
                    id: position.next_piece_id(),
                    ..Piece::new(Color::Neutral, PieceKind::Duck)
                },
            ),
        };
        Some(forced)
    }

    fn filter_moves(&self, position: &Position, mut moves: Vec<Movement>) -> Vec<Movement> {
        if let Some((cell, _)) = find_duck(position) {
            moves.retain(|mv| mv.destinations.iter().all(|d| d.to != cell));
        }
        moves
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        (!has_legal_move(position, self)).then(|| GameState::win_for(position.turn()))
    }
}

/// Both kings race to the top row; nobody may give check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RacingKings;

impl Variant for RacingKings {
    fn name(&self) -> &'static str {
        "Racing Kings"
    }

    fn slug(&self) -> &'static str {
        "race"
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::racing_kings()
    }

    fn filter_moves(&self, position: &Position, mut moves: Vec<Movement>) -> Vec<Movement> {
        let mut probe = position.clone();
        moves.retain(|mv| {
            let undo = probe.make_movement(mv, self);
            let quiet = Color::SIDES
                .into_iter()
                .all(|color| !king_in_check(&probe, self, color));
            probe.unmake_movement(undo);
            quiet
        });
        moves
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        let finished: Vec<Color> = position
            .pieces()
            .filter(|(cell, p)| cell.row == 0 && p.kind == PieceKind::King)
            .map(|(_, p)| p.color)
            .collect();
        match finished.as_slice() {
            [] => None,
            [color] => Some(GameState::win_for(*color)),
            _ => Some(GameState::Stalemate),
        }
    }
}

/// Queens only on a 5x5 board; no captures, four in a line wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllQueens;

impl AllQueens {
    const LINE: i16 = 4;
    const DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    fn line_from(position: &Position, start: Cell, (dr, dc): (i16, i16)) -> Option<Color> {
        let color = position.piece_at(start)?.color;
        (1..Self::LINE)
            .all(|step| {
                position
                    .piece_at(start.offset(dr * step, dc * step))
                    .is_some_and(|p| p.color == color)
            })
            .then_some(color)
    }
}

impl Variant for AllQueens {
    fn name(&self) -> &'static str {
        "All Queens"
    }

    fn slug(&self) -> &'static str {
        "queens"
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(5, 5)
    }

    fn has_check(&self) -> bool {
        false
    }

    fn kings_optional(&self) -> bool {
        true
    }

    fn initial_layout(&self, _rng: &mut dyn RngCore) -> Layout {
        layouts::all_queens()
    }

    fn filter_moves(&self, position: &Position, mut moves: Vec<Movement>) -> Vec<Movement> {
        moves.retain(|mv| mv.destinations.iter().all(|d| position.is_empty(d.to)));
        moves
    }

    fn game_state(&self, position: &Position) -> Option<GameState> {
        position
            .dimensions()
            .cells()
            .flat_map(|cell| Self::DIRECTIONS.map(|dir| (cell, dir)))
            .find_map(|(cell, dir)| Self::line_from(position, cell, dir))
            .map(GameState::win_for)
    }
}
