//! Chess rules and evaluation core.
//!
//! Move legality, check/checkmate/stalemate detection, legal-move
//! enumeration, and heuristic evaluation over three board encodings
//! (mailbox, matrix, bitboard). All encodings share one canonical rule
//! definition: the matrix and bitboard tables are derived projections
//! of the mailbox generator's output, and the legality checker is
//! written once against the [`Position`] seam.
//!
//! # Example
//! ```
//! use chess_rules::{valid_moves, Color, MailboxBoard, MoveTables};
//!
//! let tables = MoveTables::generate();
//! let mut board = MailboxBoard::new();
//! let mut moves = Vec::new();
//! valid_moves(&tables, Color::White, &mut board, &mut moves, false);
//! assert_eq!(moves.len(), 20);
//! ```

mod bitboard;
mod builder;
mod error;
mod eval;
mod legality;
mod mailbox;
mod matrix;
mod movegen;
mod position;
mod tables;
mod types;
mod zobrist;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::CoordError;
pub use types::{CastlingRights, Color, Coord, Delta, Move, Piece};

// Public API - the three encodings and their tables
pub use bitboard::BitboardBoard;
pub use mailbox::MailboxBoard;
pub use matrix::MatrixBoard;
pub use position::{Position, Probe, RepetitionTable};
pub use tables::{BitboardTables, MatrixTables, MoveGeometry, MoveTables, Path};

// Public API - rules and evaluation entry points
pub use eval::{
    eval, eval_with_breakdown, EvalBreakdown, EvalContext, EvalTag, Evaluation, MATE_SCORE,
    STALEMATE_SCORE,
};
pub use legality::{can_move, defended, in_check, ValidationMode};
pub use movegen::valid_moves;
