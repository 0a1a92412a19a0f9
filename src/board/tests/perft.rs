//! Perft (legal-move tree) counts for the standard rules.

use super::placement;
use crate::board::{divide, perft, Cell, Color, PositionBuilder};
use crate::variants::Vanilla;

fn check(mut builder: PositionBuilder, side: Color, depths: &[(u32, u64)], name: &str) {
    builder = builder.side_to_move(side);
    let mut position = builder.build();
    for &(depth, expected) in depths {
        let nodes = perft(&mut position, &Vanilla, depth);
        assert_eq!(
            nodes, expected,
            "Perft failed for '{name}' at depth {depth}. Expected: {expected}, Got: {nodes}"
        );
    }
}

#[test]
fn test_initial_position() {
    check(
        PositionBuilder::standard(),
        Color::Light,
        &[(1, 20), (2, 400), (3, 8902)],
        "Initial Position",
    );
}

#[test]
#[ignore = "slow without optimisations"]
fn test_initial_position_depth_four() {
    check(PositionBuilder::standard(), Color::Light, &[(4, 197_281)], "Initial Position");
}

#[test]
fn test_castling_position() {
    let builder = placement(&[
        "r3k2r", "8", "8", "8", "8", "8", "8", "R3K2R",
    ]);
    check(builder, Color::Light, &[(1, 26), (2, 568)], "Castling");
}

#[test]
fn test_en_passant_and_pins() {
    let builder = placement(&[
        "8", "2p5", "3p4", "KP5r", "1R3p1k", "8", "4P1P1", "8",
    ]);
    check(builder, Color::Light, &[(1, 14), (2, 191), (3, 2812)], "Position 3");
}

#[test]
fn test_promotion_branches() {
    let builder = placement(&[
        "n1n5", "PPPk4", "8", "8", "8", "8", "4Kppp", "5N1N",
    ])
    .moved(Cell::new(6, 4), 1)
    .moved(Cell::new(1, 3), 1);
    check(builder, Color::Dark, &[(1, 24), (2, 496)], "Promotion");
}

#[test]
fn test_divide_sums_to_perft() {
    let mut position = PositionBuilder::standard().build();
    let split = divide(&mut position, &Vanilla, 2);
    assert_eq!(split.len(), 20);
    assert!(split.iter().all(|(_, nodes)| *nodes == 20));
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), perft(&mut position, &Vanilla, 2));
}
