//! Edge case tests for special moves and capture decorators.

use super::placement;
use crate::board::{
    all_legal_moves, legal_moves, Aura, Cell, Color, Dimensions, MoveMode, Movement, PawnRule,
    Piece, PieceKind, Position, PositionBuilder,
};
use crate::variants::{Chess960, Circe, DuckChess, Traitor, Vanilla, Variant};

fn moves_from(position: &Position, variant: &dyn Variant, from: Cell) -> Vec<Movement> {
    let piece = *position.piece_at(from).expect("piece on origin");
    legal_moves(position, variant, &piece, Some(from), MoveMode::Normal)
}

fn castles(position: &Position, from: Cell) -> Vec<Cell> {
    moves_from(position, &Vanilla, from)
        .into_iter()
        .filter(|mv| mv.is_castle)
        .map(|mv| mv.target)
        .collect()
}

#[test]
fn test_stalemate_position() {
    let position = placement(&["7k", "5Q2", "6K1", "8", "8", "8", "8", "8"])
        .side_to_move(Color::Dark)
        .build();
    assert!(all_legal_moves(&position, &Vanilla).is_empty());
}

#[test]
fn test_castling_lost_after_rook_moves() {
    let king = Cell::new(7, 4);
    let mut position = placement(&["r3k2r", "8", "8", "8", "8", "8", "8", "R3K2R"]).build();
    assert_eq!(castles(&position, king), vec![Cell::new(7, 2), Cell::new(7, 6)]);

    let rook_out = moves_from(&position, &Vanilla, Cell::new(7, 7))
        .into_iter()
        .find(|mv| mv.target == Cell::new(6, 7))
        .unwrap();
    position.make_movement(&rook_out, &Vanilla);
    let rook_back = moves_from(&position, &Vanilla, Cell::new(0, 7))
        .into_iter()
        .find(|mv| mv.target == Cell::new(1, 7))
        .unwrap();
    position.make_movement(&rook_back, &Vanilla);
    let rook_home = moves_from(&position, &Vanilla, Cell::new(6, 7))
        .into_iter()
        .find(|mv| mv.target == Cell::new(7, 7))
        .unwrap();
    position.make_movement(&rook_home, &Vanilla);
    position.turn = Color::Light;

    assert_eq!(castles(&position, king), vec![Cell::new(7, 2)]);
}

#[test]
fn test_no_castling_through_attacked_cell() {
    let position = placement(&["4k3", "8", "8", "8", "8", "8", "5r2", "R3K2R"]).build();
    assert_eq!(castles(&position, Cell::new(7, 4)), vec![Cell::new(7, 2)]);
}

#[test]
fn test_no_castling_out_of_check() {
    let position = placement(&["4k3", "8", "8", "8", "4r3", "8", "8", "R3K2R"]).build();
    assert!(castles(&position, Cell::new(7, 4)).is_empty());
}

#[test]
fn test_moved_king_cannot_castle() {
    let position = placement(&["4k3", "8", "8", "8", "8", "8", "8", "R3K2R"])
        .moved(Cell::new(7, 4), 2)
        .build();
    assert!(castles(&position, Cell::new(7, 4)).is_empty());
}

#[test]
fn test_queen_side_needs_knight_cell_empty() {
    let position = placement(&["4k3", "8", "8", "8", "8", "8", "8", "RN2K2R"]).build();
    assert_eq!(castles(&position, Cell::new(7, 4)), vec![Cell::new(7, 6)]);
}

#[test]
fn test_shuffled_castle_swaps_cells() {
    // King on b1 next to its rook on a1: the two trade places past each other.
    let mut position = placement(&["1k6", "8", "8", "8", "8", "8", "8", "RK6"]).build();
    let castle = moves_from(&position, &Chess960, Cell::new(7, 1))
        .into_iter()
        .find(|mv| mv.is_castle)
        .expect("queen side castle");
    assert_eq!(castle.target, Cell::new(7, 0));
    position.make_movement(&castle, &Chess960);
    assert_eq!(position.piece_at(Cell::new(7, 2)).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(position.piece_at(Cell::new(7, 3)).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(position.is_empty(Cell::new(7, 0)));
    assert!(position.is_empty(Cell::new(7, 1)));
}

#[test]
fn test_en_passant_marker_lasts_one_ply() {
    let mut position = PositionBuilder::standard().build();
    let double = moves_from(&position, &Vanilla, Cell::new(6, 4))
        .into_iter()
        .find(|mv| mv.target == Cell::new(4, 4))
        .unwrap();
    let pawn = position.piece_at(Cell::new(6, 4)).unwrap().id;
    position.make_movement(&double, &Vanilla);
    assert_eq!(position.en_passant(), Some(pawn));

    let reply = moves_from(&position, &Vanilla, Cell::new(0, 6))
        .into_iter()
        .next()
        .unwrap();
    position.make_movement(&reply, &Vanilla);
    assert_eq!(position.en_passant(), None);
}

#[test]
fn test_en_passant_blocked_by_pin() {
    // Taking in passing would clear the fifth rank between king and rook.
    let mut position = placement(&["8", "2p5", "8", "KP5r", "8", "8", "8", "7k"]).build();
    position.turn = Color::Dark;
    let double = moves_from(&position, &Vanilla, Cell::new(1, 2))
        .into_iter()
        .find(|mv| mv.target == Cell::new(3, 2))
        .unwrap();
    position.make_movement(&double, &Vanilla);

    let captures: Vec<_> = moves_from(&position, &Vanilla, Cell::new(3, 1))
        .into_iter()
        .filter(|mv| !mv.captures.is_empty())
        .collect();
    assert!(captures.is_empty());
}

fn circe_capture(bishop_at: Cell, victim_at: Cell, builder: PositionBuilder) -> Position {
    let mut position = builder
        .custom(
            bishop_at,
            Piece::new(Color::Light, PieceKind::Bishop).with_aura(Aura::Circe),
        )
        .piece(victim_at, Color::Dark, PieceKind::Knight)
        .build();
    let taking = moves_from(&position, &Circe, bishop_at)
        .into_iter()
        .find(|mv| mv.target == victim_at)
        .expect("bishop takes the knight");
    position.make_movement(&taking, &Circe);
    position
}

#[test]
fn test_circe_rebirth_on_empty_home() {
    // Taken on a dark tile, so the knight belongs on b8.
    let position = circe_capture(
        Cell::new(4, 5),
        Cell::new(2, 3),
        PositionBuilder::standard().clear(Cell::new(0, 1)),
    );
    assert_eq!(position.piece_at(Cell::new(2, 3)).map(|p| p.kind), Some(PieceKind::Bishop));
    let reborn = position.piece_at(Cell::new(0, 1)).expect("knight back on b8");
    assert_eq!((reborn.kind, reborn.color, reborn.moves), (PieceKind::Knight, Color::Dark, 0));
}

#[test]
fn test_circe_no_rebirth_on_occupied_home() {
    // Taken on a light tile; g8 is still occupied.
    let position = circe_capture(Cell::new(4, 4), Cell::new(2, 2), PositionBuilder::standard());
    let dark = position.pieces().filter(|(_, p)| p.color == Color::Dark).count();
    assert_eq!(dark, 16);
    assert_eq!(position.reserve().count(Color::Light, PieceKind::Knight), 1);
}

#[test]
fn test_origin_is_the_moving_piece() {
    let position = PositionBuilder::standard()
        .clear(Cell::new(0, 1))
        .custom(
            Cell::new(4, 5),
            Piece::new(Color::Light, PieceKind::Bishop).with_aura(Aura::Circe),
        )
        .piece(Cell::new(2, 3), Color::Dark, PieceKind::Knight)
        .build();
    let taking = moves_from(&position, &Circe, Cell::new(4, 5))
        .into_iter()
        .find(|mv| mv.target == Cell::new(2, 3))
        .expect("bishop takes the knight");
    assert_eq!(taking.destinations[0].from, None);
    assert_eq!(taking.origin(), Some(Cell::new(4, 5)));

    let position = placement(&["r3k2r", "8", "8", "8", "8", "8", "8", "R3K2R"]).build();
    for castle in moves_from(&position, &Vanilla, Cell::new(7, 4))
        .into_iter()
        .filter(|mv| mv.is_castle)
    {
        assert_eq!(castle.origin(), Some(Cell::new(7, 4)));
    }

    let drop = Movement::placement(Piece::new(Color::Light, PieceKind::Knight), Cell::new(4, 4));
    assert_eq!(drop.origin(), None);
}

#[test]
fn test_horde_pawn_double_steps_after_one_move() {
    let doubles = |moves: u32| {
        let position = PositionBuilder::new(Dimensions::STANDARD)
            .custom(
                Cell::new(5, 0),
                Piece::new(Color::Light, PieceKind::Pawn).with_pawn_rule(PawnRule::Horde),
            )
            .moved(Cell::new(5, 0), moves)
            .piece(Cell::new(7, 7), Color::Light, PieceKind::King)
            .piece(Cell::new(0, 7), Color::Dark, PieceKind::King)
            .side_to_move(Color::Light)
            .build();
        moves_from(&position, &Vanilla, Cell::new(5, 0))
            .iter()
            .any(|mv| mv.target == Cell::new(3, 0))
    };
    assert!(doubles(0));
    assert!(doubles(1));
    assert!(!doubles(2));
}

#[test]
fn test_traitor_pawn_converts_victim() {
    let mut position = PositionBuilder::new(Traitor.dimensions())
        .piece(Cell::new(7, 4), Color::Light, PieceKind::King)
        .piece(Cell::new(0, 4), Color::Dark, PieceKind::King)
        .custom(
            Cell::new(4, 3),
            Piece::new(Color::Light, PieceKind::Pawn).with_aura(Aura::Traitor),
        )
        .piece(Cell::new(3, 4), Color::Dark, PieceKind::Rook)
        .build();
    let taking = moves_from(&position, &Traitor, Cell::new(4, 3))
        .into_iter()
        .find(|mv| mv.target == Cell::new(3, 4))
        .unwrap();
    position.make_movement(&taking, &Traitor);

    let turned = position.piece_at(Cell::new(3, 4)).unwrap();
    assert_eq!((turned.kind, turned.color), (PieceKind::Rook, Color::Light));
    assert!(position.is_empty(Cell::new(4, 3)));
    assert_eq!(position.piece_count(), 3);
}

#[test]
fn test_duck_placed_then_moved() {
    let mut position = PositionBuilder::standard().build();
    let (at, duck) = DuckChess.forced_piece(&position).expect("duck on the final ply");
    assert_eq!(at, None);
    let placements = legal_moves(&position, &DuckChess, &duck, None, MoveMode::Normal);
    assert_eq!(placements.len(), 32);

    let drop = placements
        .into_iter()
        .find(|mv| mv.target == Cell::new(4, 4))
        .unwrap();
    position.make_movement(&drop, &DuckChess);
    let placed = position.piece_at(Cell::new(4, 4)).unwrap();
    assert_eq!((placed.kind, placed.color), (PieceKind::Duck, Color::Neutral));
    assert_eq!(
        DuckChess.forced_piece(&position).map(|(at, _)| at),
        None,
        "the next ply is a normal move"
    );
}
