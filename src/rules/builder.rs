//! Fluent builder for constructing positions.
//!
//! Builds any of the three board encodings piece by piece.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Coord, MailboxBoard, Piece, PositionBuilder};
//!
//! let board: MailboxBoard = PositionBuilder::new()
//!     .piece(Coord::new(4, 0).unwrap(), Color::White, Piece::King)
//!     .piece(Coord::new(4, 7).unwrap(), Color::Black, Piece::King)
//!     .piece(Coord::new(0, 1).unwrap(), Color::White, Piece::Pawn)
//!     .build();
//! ```

use super::position::Position;
use super::types::{CastlingRights, Color, Coord, Move, Piece};

/// A fluent builder for positions in any encoding.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Coord, Color, Piece)>,
    castling_rights: CastlingRights,
    last_move: Option<Move>,
    halfmove_clock: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            castling_rights: CastlingRights::none(),
            last_move: None,
            halfmove_clock: 0,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            builder
                .pieces
                .push((Coord::from_index(file), Color::White, piece));
            builder
                .pieces
                .push((Coord::from_index(56 + file), Color::Black, piece));
            builder
                .pieces
                .push((Coord::from_index(8 + file), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Coord::from_index(48 + file), Color::Black, Piece::Pawn));
        }

        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever occupied the square.
    #[must_use]
    pub fn piece(mut self, at: Coord, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != at);
        self.pieces.push((at, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, at: Coord) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != at);
        self
    }

    /// Set the castling rights the position starts with.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Record `mv` as the position's most recent move (for en-passant
    /// and castling-snapshot setups).
    #[must_use]
    pub const fn last_move(mut self, mv: Move) -> Self {
        self.last_move = Some(mv);
        self
    }

    /// Set the halfmove clock (for 50-move rule setups).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Build a position in the requested encoding.
    #[must_use]
    pub fn build<P: Position>(&self) -> P {
        let mut position = P::empty();

        for &(at, color, piece) in &self.pieces {
            position.raw_place(at, color, piece);
        }
        position.set_initial_rights(self.castling_rights);
        if let Some(mv) = self.last_move {
            position.record_move(mv.with_snapshot(self.castling_rights));
        }
        position.set_halfmove_clock(self.halfmove_clock);

        let hash = position.compute_hash();
        position.set_hash(hash);
        position.repetitions_mut().set(hash, 1);

        position
    }
}
