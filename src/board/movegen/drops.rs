use super::super::{Cell, Movement, Piece, PieceKind, Position};

/// A reserve piece may enter on any empty cell. Pawns never enter on the
/// first or last row.
pub(crate) fn reserve_drops(position: &Position, piece: &Piece, moves: &mut Vec<Movement>) {
    let dims = position.dimensions();
    let entering = Piece { moves: 0, ..*piece };
    for cell in dims.cells() {
        if !position.is_empty(cell) {
            continue;
        }
        if piece.kind == PieceKind::Pawn && (cell.row == 0 || cell.row == dims.rows - 1) {
            continue;
        }
        let mut mv = Movement::placement(entering, cell);
        mv.is_drop = true;
        moves.push(mv);
    }
}

/// Neutral blockers go to any empty cell.
pub(crate) fn duck_moves(
    position: &Position,
    duck: &Piece,
    from: Option<Cell>,
    moves: &mut Vec<Movement>,
) {
    for cell in position.dimensions().cells() {
        if position.is_empty(cell) {
            moves.push(match from {
                Some(from) => Movement::step(*duck, from, cell),
                None => Movement::placement(*duck, cell),
            });
        }
    }
}
