use super::super::{Cell, Color, Destination, MoveMode, Movement, Piece, PieceKind, Position};
use super::is_attacked;
use super::sliders::{slide, DIAGONAL, ORTHOGONAL};
use crate::variants::Variant;

pub(crate) fn king_moves(
    position: &Position,
    variant: &dyn Variant,
    king: &Piece,
    from: Cell,
    mode: MoveMode,
    moves: &mut Vec<Movement>,
) {
    let home_row = position
        .dimensions()
        .back_row(king.color == Color::Light);
    if mode == MoveMode::Normal && king.moves == 0 && from.row == home_row {
        moves.extend(castle(position, variant, king, from, -1));
        moves.extend(castle(position, variant, king, from, 1));
    }

    let start = moves.len();
    slide(position, king, from, &ORTHOGONAL, Some(1), moves);
    slide(position, king, from, &DIAGONAL, Some(1), moves);
    for mv in &mut moves[start..] {
        mv.breaks_king_side = true;
        mv.breaks_queen_side = true;
    }
}

/// Castling towards `direction` (-1 queen side, 1 king side).
///
/// The first piece met scanning outward must be an unmoved friendly rook.
/// King and rook may both pass through each other's cells, but nothing
/// else may stand anywhere in the span they cover.
fn castle(
    position: &Position,
    variant: &dyn Variant,
    king: &Piece,
    from: Cell,
    direction: i16,
) -> Option<Movement> {
    let dims = position.dimensions();
    let insets = variant.castle_insets();

    let mut column = from.column + direction;
    let (rook_cell, rook) = loop {
        let cell = Cell::new(from.row, column);
        if !dims.contains(cell) {
            return None;
        }
        if let Some(blocker) = position.piece_at(cell) {
            break (cell, *blocker);
        }
        column += direction;
    };
    if rook.kind != PieceKind::Rook || rook.moves != 0 || rook.color != king.color {
        return None;
    }

    let (king_to, rook_to) = if direction < 0 {
        (insets.left, insets.left + 1)
    } else {
        (dims.columns - insets.right - 1, dims.columns - insets.right - 2)
    };

    let columns = [from.column, rook_cell.column, king_to, rook_to];
    let low = columns.iter().copied().min().unwrap_or(from.column);
    let high = columns.iter().copied().max().unwrap_or(from.column);
    let clear = (low..=high).all(|c| {
        position
            .piece_at(Cell::new(from.row, c))
            .map_or(true, |p| p.id == king.id || p.id == rook.id)
    });
    if !clear {
        return None;
    }

    if variant.has_check() {
        let step = (king_to - from.column).signum();
        let mut c = from.column;
        loop {
            if is_attacked(position, variant, Cell::new(from.row, c), king.color.opponent()) {
                return None;
            }
            if c == king_to {
                break;
            }
            c += step;
        }
    }

    let target_column = if direction > 0 {
        (from.column + 2).min(rook_cell.column)
    } else {
        (from.column - 2).max(rook_cell.column)
    };
    Some(Movement {
        target: Cell::new(from.row, target_column),
        destinations: vec![
            Destination {
                piece: rook,
                from: Some(rook_cell),
                to: Cell::new(from.row, rook_to),
            },
            Destination {
                piece: *king,
                from: Some(from),
                to: Cell::new(from.row, king_to),
            },
        ],
        captures: Vec::new(),
        en_passant: None,
        is_castle: true,
        breaks_king_side: true,
        breaks_queen_side: true,
        is_drop: false,
    })
}
