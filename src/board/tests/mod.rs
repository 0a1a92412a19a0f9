//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Legal-move tree node counts
//! - `make_unmake.rs` - Ply execution and exact reversal
//! - `edge_cases.rs` - Castling, en passant and capture decorators
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod perft;

use super::{Cell, Color, Dimensions, PieceKind, PositionBuilder};

/// Builder from FEN-style placement rows, top row first, uppercase light.
pub(super) fn placement(rows: &[&str]) -> PositionBuilder {
    let width: i16 = rows[0]
        .chars()
        .map(|c| c.to_digit(10).map_or(1, |n| n as i16))
        .sum();
    let mut builder = PositionBuilder::new(Dimensions::new(rows.len() as i16, width));
    for (row, line) in rows.iter().enumerate() {
        let mut column = 0;
        for c in line.chars() {
            if let Some(skip) = c.to_digit(10) {
                column += skip as i16;
                continue;
            }
            let kind = PieceKind::from_char(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            builder = builder.piece(Cell::new(row as i16, column), color, kind);
            column += 1;
        }
    }
    builder
}
