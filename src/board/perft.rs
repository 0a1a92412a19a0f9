//! Legal-move tree walking for move generation checks.

use super::{all_legal_moves, Movement, Position};
use crate::variants::Variant;

/// Count the leaves of the legal-move tree `depth` plies deep.
///
/// A ply that leaves a pawn waiting for promotion branches once per
/// promotion choice.
pub fn perft(position: &mut Position, variant: &dyn Variant, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    all_legal_moves(position, variant)
        .iter()
        .map(|mv| child_nodes(position, variant, mv, depth - 1))
        .sum()
}

/// Node counts below each legal movement of the root.
pub fn divide(position: &mut Position, variant: &dyn Variant, depth: u32) -> Vec<(Movement, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    all_legal_moves(position, variant)
        .into_iter()
        .map(|mv| {
            let nodes = child_nodes(position, variant, &mv, depth - 1);
            (mv, nodes)
        })
        .collect()
}

fn child_nodes(position: &mut Position, variant: &dyn Variant, mv: &Movement, depth: u32) -> u64 {
    let undo = position.make_movement(mv, variant);
    let pending = position
        .promotable_pawn()
        .and_then(|cell| position.piece_at(cell).map(|pawn| (cell, pawn.color)));
    let nodes = match pending {
        Some((cell, color)) => variant
            .promotions(position, color)
            .into_iter()
            .map(|choice| {
                let mut branch = position.clone();
                branch.promote_pawn(cell, choice);
                variant.on_promote(&mut branch, color, choice.kind);
                perft(&mut branch, variant, depth)
            })
            .sum(),
        None => perft(position, variant, depth),
    };
    position.unmake_movement(undo);
    nodes
}
