use super::super::{Cell, Color, MoveMode, Movement, PawnRule, Piece, PieceKind, Position};

/// Whether `pawn` standing on `from` may take its two-cell step.
fn may_double_step(position: &Position, pawn: &Piece, from: Cell) -> bool {
    match pawn.pawn_rule {
        PawnRule::Standard => {
            let start_row = match pawn.color {
                Color::Light => position.dimensions().rows - 2,
                _ => 1,
            };
            from.row == start_row
        }
        PawnRule::Horde => pawn.moves <= 1,
        PawnRule::Soldier => false,
    }
}

pub(crate) fn pawn_moves(
    position: &Position,
    pawn: &Piece,
    from: Cell,
    mode: MoveMode,
    moves: &mut Vec<Movement>,
) {
    let dir = pawn.color.forward();

    if mode == MoveMode::Normal {
        let one = from.offset(dir, 0);
        if position.is_empty(one) {
            moves.push(Movement::step(*pawn, from, one));
            let two = from.offset(2 * dir, 0);
            if may_double_step(position, pawn, from) && position.is_empty(two) {
                let mut mv = Movement::step(*pawn, from, two);
                mv.en_passant = Some(pawn.id);
                moves.push(mv);
            }
        }
    }

    for d_column in [-1, 1] {
        let diagonal = from.offset(dir, d_column);
        let enemy_there = position
            .piece_at(diagonal)
            .is_some_and(|p| pawn.color.is_opponent(p.color));
        if mode == MoveMode::Attacks || enemy_there {
            moves.push(Movement::step(*pawn, from, diagonal));
        }

        if mode == MoveMode::Attacks {
            continue;
        }
        // The marker names a pawn that double-stepped on the previous ply.
        let beside = from.offset(0, d_column);
        let passing = position.piece_at(beside).is_some_and(|p| {
            p.kind == PieceKind::Pawn
                && pawn.color.is_opponent(p.color)
                && position.en_passant() == Some(p.id)
        });
        if passing {
            let mut mv = Movement::step(*pawn, from, diagonal);
            mv.captures.push(beside);
            moves.push(mv);
        }
    }
}
