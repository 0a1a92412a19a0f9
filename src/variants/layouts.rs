//! Starting layouts.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::board::{Color, Layout, PawnRule, Piece, PieceKind};

use PieceKind::{Archbishop, Bishop, Chancellor, King, Knight, Pawn, Queen, Rook};

pub(crate) const BACK_ROW: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

pub(crate) const GOTHIC_BACK_ROW: [PieceKind; 10] = [
    Rook, Knight, Bishop, Queen, Chancellor, King, Archbishop, Bishop, Knight, Rook,
];

pub(crate) const CAPABLANCA_BACK_ROW: [PieceKind; 10] = [
    Rook, Knight, Archbishop, Bishop, Queen, King, Bishop, Chancellor, Knight, Rook,
];

pub(crate) const DRAGONFLY_BACK_ROW: [PieceKind; 7] = [Rook, Bishop, Bishop, King, Knight, Knight, Rook];

fn row_of(color: Color, kinds: &[PieceKind], style: &impl Fn(Piece) -> Piece) -> Vec<Option<Piece>> {
    kinds
        .iter()
        .map(|&kind| Some(style(Piece::new(color, kind))))
        .collect()
}

fn empty_row(columns: usize) -> Vec<Option<Piece>> {
    vec![None; columns]
}

/// Back rows on the outside, a row of pawns in front of each, empty middle.
///
/// `style` decorates every piece, e.g. to give it an aura or pawn rule.
pub(crate) fn mirrored(back: &[PieceKind], rows: usize, style: impl Fn(Piece) -> Piece) -> Layout {
    let columns = back.len();
    let pawns = vec![Pawn; columns];
    let mut layout = Vec::with_capacity(rows);
    layout.push(row_of(Color::Dark, back, &style));
    layout.push(row_of(Color::Dark, &pawns, &style));
    for _ in 0..rows.saturating_sub(4) {
        layout.push(empty_row(columns));
    }
    layout.push(row_of(Color::Light, &pawns, &style));
    layout.push(row_of(Color::Light, back, &style));
    layout
}

/// The standard setup.
pub(crate) fn standard(style: impl Fn(Piece) -> Piece) -> Layout {
    mirrored(&BACK_ROW, 8, style)
}

/// Random back row with the king between the rooks and bishops on
/// opposite tile shades.
pub(crate) fn random_back_row(rng: &mut dyn RngCore) -> Vec<PieceKind> {
    let mut row: [Option<PieceKind>; 8] = [None; 8];
    let king = rng.gen_range(1..7);
    row[king] = Some(King);
    row[rng.gen_range(0..king)] = Some(Rook);
    row[rng.gen_range(king + 1..8)] = Some(Rook);

    for parity in [0, 1] {
        let free: Vec<usize> = (0..8).filter(|&i| i % 2 == parity && row[i].is_none()).collect();
        if let Some(&column) = free.choose(rng) {
            row[column] = Some(Bishop);
        }
    }

    let mut rest = [Queen, Knight, Knight];
    rest.shuffle(rng);
    let mut rest = rest.into_iter();
    for slot in row.iter_mut().filter(|slot| slot.is_none()) {
        *slot = rest.next();
    }
    row.into_iter().flatten().collect()
}

pub(crate) fn horde() -> Layout {
    let light = |kind| Some(Piece::new(Color::Light, kind));
    let mut layout = Vec::with_capacity(8);
    layout.push(row_of(Color::Dark, &BACK_ROW, &|p| p));
    layout.push(row_of(Color::Dark, &[Pawn; 8], &|p| p));
    layout.push(empty_row(8));
    layout.push(vec![
        None,
        light(Pawn),
        light(Pawn),
        None,
        None,
        light(Pawn),
        light(Pawn),
        None,
    ]);
    for _ in 0..3 {
        layout.push(row_of(Color::Light, &[Pawn; 8], &|p| p));
    }
    layout.push(row_of(Color::Light, &[Pawn; 8], &|p| {
        p.with_pawn_rule(PawnRule::Horde)
    }));
    layout
}

pub(crate) fn racing_kings() -> Layout {
    let race = |outer: PieceKind| {
        let dark = |kind| Some(Piece::new(Color::Dark, kind));
        let light = |kind| Some(Piece::new(Color::Light, kind));
        vec![
            dark(outer),
            dark(Rook),
            dark(Bishop),
            dark(Knight),
            light(Knight),
            light(Bishop),
            light(Rook),
            light(outer),
        ]
    };
    let mut layout: Layout = (0..6).map(|_| empty_row(8)).collect();
    layout.push(race(King));
    layout.push(race(Queen));
    layout
}

pub(crate) fn all_queens() -> Layout {
    let q = |color| Some(Piece::new(color, Queen));
    let (d, l) = (Color::Dark, Color::Light);
    vec![
        vec![q(d), q(l), q(d), q(l), q(d)],
        empty_row(5),
        vec![q(l), None, None, None, q(d)],
        empty_row(5),
        vec![q(l), q(d), q(l), q(d), q(l)],
    ]
}

pub(crate) fn dragonfly() -> Layout {
    mirrored(&DRAGONFLY_BACK_ROW, 7, |p| {
        if p.kind == Pawn {
            p.with_pawn_rule(PawnRule::Soldier)
        } else {
            p
        }
    })
}
