//! Board export in FEN form, for external move-suggestion services.

use super::{Cell, Color, PieceKind, Position};

impl Position {
    /// Castling letters derived from unmoved kings and rooks on the home rows.
    fn castling_field(&self) -> String {
        let mut field = String::new();
        for color in Color::SIDES {
            let row = self.dims.back_row(color == Color::Light);
            let unmoved = |kind: PieceKind| {
                (0..self.dims.columns).filter(move |&column| {
                    self.piece_at(Cell::new(row, column))
                        .is_some_and(|p| p.color == color && p.kind == kind && p.moves == 0)
                })
            };
            let Some(king) = unmoved(PieceKind::King).next() else {
                continue;
            };
            let mut letters = String::new();
            if unmoved(PieceKind::Rook).any(|c| c > king) {
                letters.push('K');
            }
            if unmoved(PieceKind::Rook).any(|c| c < king) {
                letters.push('Q');
            }
            if color == Color::Dark {
                letters = letters.to_ascii_lowercase();
            }
            field.push_str(&letters);
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    /// Cell the marked pawn skipped over, in algebraic form.
    fn en_passant_field(&self) -> String {
        self.en_passant
            .and_then(|id| self.find(id))
            .map(|(cell, pawn)| cell.offset(-pawn.color.forward(), 0))
            .map_or_else(|| "-".to_string(), |cell| cell.to_algebraic(self.dims))
    }

    /// Export the position as a FEN string.
    ///
    /// Rows are written from the top; light pieces are uppercase. Fairy
    /// pieces use `a` (archbishop), `c` (chancellor) and `*` (duck).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(self.dims.rows as usize);
        for row in 0..self.dims.rows {
            let mut line = String::new();
            let mut empty = 0;
            for column in 0..self.dims.columns {
                if let Some(piece) = self.piece_at(Cell::new(row, column)) {
                    if empty > 0 {
                        line.push_str(&empty.to_string());
                        empty = 0;
                    }
                    line.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                line.push_str(&empty.to_string());
            }
            rows.push(line);
        }

        let active = if self.turn == Color::Dark { "b" } else { "w" };
        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_field(),
            self.en_passant_field(),
            self.halfmove_clock,
            self.whole_moves / 2 + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Cell, Color, Dimensions, PieceKind, PositionBuilder};

    #[test]
    fn test_standard_start_fen() {
        let position = PositionBuilder::standard().build();
        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_castling_derived_from_move_counters() {
        let position = PositionBuilder::standard()
            .moved(Cell::new(7, 7), 2)
            .moved(Cell::new(0, 4), 1)
            .build();
        let fen = position.to_fen();
        assert!(fen.contains(" Q "), "{fen}");
    }

    #[test]
    fn test_en_passant_target_behind_pawn() {
        let position = PositionBuilder::standard()
            .clear(Cell::new(6, 4))
            .piece(Cell::new(4, 4), Color::Light, PieceKind::Pawn)
            .moved(Cell::new(4, 4), 1)
            .side_to_move(Color::Dark)
            .en_passant(Cell::new(4, 4))
            .build();
        let fen = position.to_fen();
        assert!(fen.contains(" b KQkq e3 "), "{fen}");
    }

    #[test]
    fn test_small_board_fen() {
        let position = PositionBuilder::new(Dimensions::new(5, 5))
            .piece(Cell::new(0, 0), Color::Dark, PieceKind::Queen)
            .piece(Cell::new(4, 4), Color::Light, PieceKind::Queen)
            .build();
        assert_eq!(position.to_fen(), "q4/5/5/5/4Q w - - 0 1");
    }
}
