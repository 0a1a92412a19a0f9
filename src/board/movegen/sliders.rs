use super::super::{Cell, Movement, Piece, Position};

pub(crate) const ORTHOGONAL: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i16, i16); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Walk each direction until the edge or a blocker, at most `limit` steps.
///
/// The blocker's cell is included only when it holds an opposing piece.
pub(crate) fn slide(
    position: &Position,
    piece: &Piece,
    from: Cell,
    directions: &[(i16, i16)],
    limit: Option<i16>,
    moves: &mut Vec<Movement>,
) {
    let dims = position.dimensions();
    let max = limit.unwrap_or(dims.rows.max(dims.columns));
    for &(d_row, d_column) in directions {
        for step in 1..=max {
            let to = from.offset(d_row * step, d_column * step);
            if !dims.contains(to) {
                break;
            }
            match position.piece_at(to) {
                None => moves.push(Movement::step(*piece, from, to)),
                Some(blocker) => {
                    if piece.color.is_opponent(blocker.color) {
                        moves.push(Movement::step(*piece, from, to));
                    }
                    break;
                }
            }
        }
    }
}

/// Rook slides; leaving a home corner gives up castling on that side.
pub(crate) fn rook_moves(position: &Position, piece: &Piece, from: Cell, moves: &mut Vec<Movement>) {
    let start = moves.len();
    slide(position, piece, from, &ORTHOGONAL, None, moves);

    let dims = position.dimensions();
    let on_back_row = from.row == 0 || from.row == dims.rows - 1;
    let queen_side = on_back_row && from.column == 0;
    let king_side = on_back_row && from.column == dims.columns - 1;
    for mv in &mut moves[start..] {
        mv.breaks_queen_side = queen_side;
        mv.breaks_king_side = king_side;
    }
}
