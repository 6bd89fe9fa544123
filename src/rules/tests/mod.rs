//! Rules module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - legal-move enumeration, promotion, en passant
//! - `castling.rs` - castling gating and attacked-square rules
//! - `check.rs` - check detection and probe-slot hygiene
//! - `eval.rs` - evaluation terms and terminal detection
//! - `equivalence.rs` - cross-encoding agreement (property-based)

mod castling;

use once_cell::sync::Lazy;

use crate::rules::{
    BitboardTables, Color, Coord, MatrixTables, Move, MoveTables, Piece, PositionBuilder,
};

pub(crate) static TABLES: Lazy<MoveTables> = Lazy::new(MoveTables::generate);
pub(crate) static MATRIX_TABLES: Lazy<MatrixTables> =
    Lazy::new(|| MatrixTables::derive(&*TABLES));
pub(crate) static BITBOARD_TABLES: Lazy<BitboardTables> =
    Lazy::new(|| BitboardTables::derive(&*TABLES));

/// Shorthand checked coordinate.
pub(crate) fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

/// Shorthand candidate move.
pub(crate) fn m(from: Coord, to: Coord) -> Move {
    Move::new(from, to)
}

/// Builder seeded with the two kings on their home squares and no
/// castling rights; tests add the pieces they care about.
pub(crate) fn kings_only() -> PositionBuilder {
    PositionBuilder::new()
        .piece(c(4, 0), Color::White, Piece::King)
        .piece(c(4, 7), Color::Black, Piece::King)
}
