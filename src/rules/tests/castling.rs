//! Castling legality tests.

use super::{c, m, TABLES};
use crate::rules::{
    can_move, valid_moves, CastlingRights, Color, MailboxBoard, Piece, Position, PositionBuilder,
    ValidationMode,
};

fn castling_corner() -> PositionBuilder {
    PositionBuilder::new()
        .piece(c(4, 0), Color::White, Piece::King)
        .piece(c(7, 0), Color::White, Piece::Rook)
        .piece(c(0, 0), Color::White, Piece::Rook)
        .piece(c(4, 7), Color::Black, Piece::King)
        .all_castling_rights()
}

#[test]
fn both_castles_are_available_on_an_open_back_rank() {
    let mut board: MailboxBoard = castling_corner().build();
    assert!(can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
    assert!(can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(2, 0)),
        ValidationMode::STANDARD
    ));

    let mut moves = Vec::new();
    valid_moves(&*TABLES, Color::White, &mut board, &mut moves, false);
    assert!(moves.contains(&m(c(4, 0), c(6, 0))));
    assert!(moves.contains(&m(c(4, 0), c(2, 0))));
}

#[test]
fn castle_is_applied_with_the_rook_hop() {
    let mut board: MailboxBoard = castling_corner().build();
    board.make_move(m(c(4, 0), c(6, 0)));
    assert_eq!(board.piece_at(c(6, 0)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(c(5, 0)), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(c(7, 0)), None);
    assert_eq!(board.piece_at(c(4, 0)), None);
}

#[test]
fn rights_revoked_by_snapshot_survive_the_rook_returning() {
    let mut board: MailboxBoard = castling_corner().build();
    board.make_move(m(c(7, 0), c(7, 3))); // Rh1-h4
    board.make_move(m(c(7, 3), c(7, 0))); // Rh4-h1

    // Squares are exactly as before, but the carried snapshot says the
    // rook has moved.
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
    // Queenside is untouched.
    assert!(can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(2, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn king_move_revokes_both_castles() {
    let mut board: MailboxBoard = castling_corner().build();
    board.make_move(m(c(4, 0), c(4, 1)));
    board.make_move(m(c(4, 1), c(4, 0)));
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(2, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn no_castle_without_the_granted_right() {
    let mut rights = CastlingRights::none();
    rights.set(Color::White, false);
    let mut board: MailboxBoard = castling_corner().castling(rights).build();
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
    assert!(can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(2, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn castle_is_rejected_while_in_check() {
    let mut board: MailboxBoard = castling_corner()
        .piece(c(4, 5), Color::Black, Piece::Rook)
        .build();
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn castle_may_not_pass_through_an_attacked_square() {
    // Black rook on f6 covers f1, the square the king crosses.
    let mut board: MailboxBoard = castling_corner()
        .piece(c(5, 5), Color::Black, Piece::Rook)
        .build();
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
    // Queenside crosses d1, which f6 does not cover.
    assert!(can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(2, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn castle_may_not_land_on_an_attacked_square() {
    // Black rook on g6 covers g1, the destination.
    let mut board: MailboxBoard = castling_corner()
        .piece(c(6, 5), Color::Black, Piece::Rook)
        .build();
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn castle_is_blocked_by_any_piece_between_king_and_rook() {
    let mut board: MailboxBoard = castling_corner()
        .piece(c(5, 0), Color::White, Piece::Bishop)
        .build();
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD
    ));

    // Queenside: a knight on b1 blocks even though the king never
    // crosses b1.
    let mut board: MailboxBoard = castling_corner()
        .piece(c(1, 0), Color::White, Piece::Knight)
        .build();
    assert!(!can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(2, 0)),
        ValidationMode::STANDARD
    ));
}

#[test]
fn probe_slot_is_clear_after_castle_validation() {
    let mut board: MailboxBoard = castling_corner()
        .piece(c(5, 5), Color::Black, Piece::Rook)
        .build();
    let _ = can_move(
        &*TABLES,
        Color::White,
        &mut board,
        m(c(4, 0), c(6, 0)),
        ValidationMode::STANDARD,
    );
    assert!(board.probe().is_none());
}
