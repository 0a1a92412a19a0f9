use super::super::{Cell, Movement, Piece};

const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Knight jumps. Off-board and friendly cells are left for the legality filter.
pub(crate) fn knight_moves(piece: &Piece, from: Cell, moves: &mut Vec<Movement>) {
    moves.extend(
        KNIGHT_OFFSETS
            .iter()
            .map(|&(d_row, d_column)| Movement::step(*piece, from, from.offset(d_row, d_column))),
    );
}
