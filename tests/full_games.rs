//! End-to-end exercises of the public API: whole miniature games played
//! through `make_move`, with legality and evaluation checked along the
//! way.

use chess_rules::{
    can_move, eval, in_check, valid_moves, BitboardBoard, BitboardTables, Color, Coord,
    EvalContext, EvalTag, MailboxBoard, MatrixBoard, MatrixTables, Move, MoveTables, Position,
    ValidationMode, MATE_SCORE,
};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

fn m(from: (usize, usize), to: (usize, usize)) -> Move {
    Move::new(c(from.0, from.1), c(to.0, to.1))
}

/// Fool's mate: 1. f3 e5 2. g4 Qh4#.
const FOOLS_MATE: [((usize, usize), (usize, usize)); 4] = [
    ((5, 1), (5, 2)), // f2f3
    ((4, 6), (4, 4)), // e7e5
    ((6, 1), (6, 3)), // g2g4
    ((3, 7), (7, 3)), // Qd8h4
];

#[test]
fn fools_mate_is_detected_as_terminal() {
    let tables = MoveTables::generate();
    let mut board = MailboxBoard::new();
    let mut side = Color::White;

    for (from, to) in FOOLS_MATE {
        let mv = m(from, to);
        assert!(
            can_move(&tables, side, &mut board, mv, ValidationMode::STANDARD),
            "{mv} should be legal"
        );
        board.make_move(mv);
        side = side.opponent();
    }

    assert!(in_check(&tables, Color::White, &mut board, false));
    let mut moves = Vec::new();
    valid_moves(&tables, Color::White, &mut board, &mut moves, false);
    assert!(moves.is_empty(), "white is mated");

    let mut ctx = EvalContext::new();
    let outcome = eval(&tables, Color::White, &mut board, 0, &mut ctx);
    assert_eq!(outcome.tag, EvalTag::Terminal);
    assert_eq!(outcome.score, -MATE_SCORE);

    let winner = eval(&tables, Color::Black, &mut board, 0, &mut ctx);
    assert_eq!(winner.tag, EvalTag::Terminal);
    assert_eq!(winner.score, MATE_SCORE);
}

#[test]
fn fools_mate_terminates_in_every_encoding() {
    let tables = MoveTables::generate();
    let matrix_tables = MatrixTables::derive(&tables);
    let bitboard_tables = BitboardTables::derive(&tables);

    let mut matrix = MatrixBoard::new();
    let mut bitboard = BitboardBoard::new();
    for (from, to) in FOOLS_MATE {
        matrix.make_move(m(from, to));
        bitboard.make_move(m(from, to));
    }

    let mut moves = Vec::new();
    valid_moves(&matrix_tables, Color::White, &mut matrix, &mut moves, false);
    assert!(moves.is_empty());
    valid_moves(
        &bitboard_tables,
        Color::White,
        &mut bitboard,
        &mut moves,
        false,
    );
    assert!(moves.is_empty());
    assert!(in_check(&matrix_tables, Color::White, &mut matrix, false));
    assert!(in_check(&bitboard_tables, Color::White, &mut bitboard, false));
}

#[test]
fn scholars_mate_line_stays_legal_throughout() {
    let tables = MoveTables::generate();
    let mut board = BitboardBoard::new();
    let tables_bb = BitboardTables::derive(&tables);
    let mut side = Color::White;

    let line = [
        ((4, 1), (4, 3)), // e2e4
        ((4, 6), (4, 4)), // e7e5
        ((5, 0), (2, 3)), // Bf1c4
        ((1, 7), (2, 5)), // Nb8c6
        ((3, 0), (7, 4)), // Qd1h5
        ((6, 7), (5, 5)), // Ng8f6
        ((7, 4), (5, 6)), // Qh5xf7#
    ];
    for (from, to) in line {
        let mv = m(from, to);
        assert!(
            can_move(&tables_bb, side, &mut board, mv, ValidationMode::STANDARD),
            "{mv} should be legal"
        );
        board.make_move(mv);
        side = side.opponent();
    }

    let mut moves = Vec::new();
    valid_moves(&tables_bb, Color::Black, &mut board, &mut moves, false);
    assert!(moves.is_empty(), "black is mated by the scholar's attack");
}
