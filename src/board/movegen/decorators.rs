//! Capture side effects layered over the base generators.

use super::super::{Aura, Cell, Color, Destination, Dimensions, Movement, Piece, PieceKind, Position};

pub(crate) fn decorate(position: &Position, piece: &Piece, moves: &mut [Movement]) {
    match piece.aura {
        Aura::Plain => {}
        Aura::Traitor => moves.iter_mut().for_each(|mv| defect(position, piece, mv)),
        Aura::Atomic { spare_pawns } => moves
            .iter_mut()
            .for_each(|mv| explode(position, mv, spare_pawns)),
        Aura::Circe => moves.iter_mut().for_each(|mv| rebirth(position, mv)),
    }
}

/// The opposing piece a single-destination movement takes, if any.
fn victim(position: &Position, mover: &Piece, mv: &Movement) -> Option<(Cell, Piece)> {
    let dest = mv.destinations.first()?;
    std::iter::once(dest.to)
        .chain(mv.captures.first().copied())
        .find_map(|cell| {
            position
                .piece_at(cell)
                .filter(|p| mover.color.is_opponent(p.color))
                .map(|p| (cell, *p))
        })
}

/// The captured piece switches sides and takes the capturer's place.
fn defect(position: &Position, traitor: &Piece, mv: &mut Movement) {
    if mv.destinations.len() != 1 {
        return;
    }
    let Some((_, captured)) = victim(position, traitor, mv) else {
        return;
    };
    let to = mv.destinations[0].to;
    mv.destinations.push(Destination {
        piece: captured.recolored(traitor.color, position.next_piece_id()),
        from: None,
        to,
    });
}

/// Any capture also clears the 3x3 block around the landing cell.
fn explode(position: &Position, mv: &mut Movement, spare_pawns: bool) {
    if mv.destinations.len() != 1 {
        return;
    }
    let mover = mv.destinations[0].piece;
    if mv.captures.is_empty() && victim(position, &mover, mv).is_none() {
        return;
    }
    let centre = mv.destinations[0].to;
    let dims = position.dimensions();
    for d_row in -1..=1 {
        for d_column in -1..=1 {
            let cell = centre.offset(d_row, d_column);
            if !dims.contains(cell) || mv.captures.contains(&cell) {
                continue;
            }
            let is_centre = d_row == 0 && d_column == 0;
            let pawn_there = position
                .piece_at(cell)
                .is_some_and(|p| p.kind == PieceKind::Pawn);
            if spare_pawns && pawn_there && !is_centre {
                continue;
            }
            mv.captures.push(cell);
        }
    }
}

/// A captured piece reappears on its home cell if that cell is free.
fn rebirth(position: &Position, mv: &mut Movement) {
    let Some(mover) = mv.destinations.first().map(|d| d.piece) else {
        return;
    };
    let Some((at, captured)) = victim(position, &mover, mv) else {
        return;
    };
    let Some(home) = circe_home(position.dimensions(), &captured, at) else {
        return;
    };
    if position.is_empty(home) || Some(home) == mv.origin() {
        mv.destinations.insert(
            0,
            Destination {
                piece: Piece {
                    moves: 0,
                    ..captured
                },
                from: None,
                to: home,
            },
        );
    }
}

/// Starting cell a captured piece returns to. Kings and fairy pieces have none.
///
/// Pawns go back to their own file; rooks, bishops and knights pick the home
/// cell whose tile shade matches the cell they were taken on.
fn circe_home(dims: Dimensions, piece: &Piece, taken_on: Cell) -> Option<Cell> {
    let light = piece.color == Color::Light;
    let back = dims.back_row(light);
    let last = dims.columns - 1;
    let pair = match piece.kind {
        PieceKind::Pawn => {
            let row = if light { dims.rows - 2 } else { 1 };
            return Some(Cell::new(row, taken_on.column));
        }
        PieceKind::Queen => return Some(Cell::new(back, 3)),
        PieceKind::Rook => [0, last],
        PieceKind::Bishop => [2, last - 2],
        PieceKind::Knight => [last - 1, 1],
        _ => return None,
    };
    let light_tile = (taken_on.column + taken_on.row % 2) % 2 == 0;
    let index = (usize::from(light_tile) + usize::from(!light)) % 2;
    Some(Cell::new(back, pair[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circe_home_standard_pieces() {
        let dims = Dimensions::STANDARD;
        let rook = Piece::new(Color::Light, PieceKind::Rook);
        // taken on a light tile, so it goes home to h1
        assert_eq!(circe_home(dims, &rook, Cell::new(3, 7)), Some(Cell::new(7, 7)));
        let queen = Piece::new(Color::Dark, PieceKind::Queen);
        assert_eq!(circe_home(dims, &queen, Cell::new(5, 5)), Some(Cell::new(0, 3)));
        let pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        assert_eq!(circe_home(dims, &pawn, Cell::new(5, 6)), Some(Cell::new(1, 6)));
        let king = Piece::new(Color::Dark, PieceKind::King);
        assert_eq!(circe_home(dims, &king, Cell::new(5, 6)), None);
    }

    #[test]
    fn test_circe_home_bishops_keep_tile_shade() {
        let dims = Dimensions::STANDARD;
        let bishop = Piece::new(Color::Light, PieceKind::Bishop);
        for cell in dims.cells() {
            let home = circe_home(dims, &bishop, cell).map(|h| h.is_dark_tile());
            assert_eq!(home, Some(cell.is_dark_tile()), "taken on {cell}");
        }
    }
}
