//! Castling rights snapshot.
//!
//! Every applied move carries the rights that remain *after* it, so
//! legality checks read the previous move's snapshot in O(1) instead of
//! replaying history.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::{Color, Piece};

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        let bit = Self::bit_for(color, kingside);
        self.0 & bit != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Get the raw bitmask value (for position hashing)
    #[inline]
    #[must_use]
    pub(crate) const fn as_u8(self) -> u8 {
        self.0
    }

    /// Rook home square for a color and side.
    #[inline]
    #[must_use]
    pub(crate) fn rook_home(color: Color, kingside: bool) -> Coord {
        let x = if kingside { 7 } else { 0 };
        Coord::from_index(color.back_rank() * 8 + x)
    }

    /// King home square for a color.
    #[inline]
    #[must_use]
    pub(crate) fn king_home(color: Color) -> Coord {
        Coord::from_index(color.back_rank() * 8 + 4)
    }

    /// The snapshot that remains after `side` moves `piece` from `from`
    /// to `to`: a king move drops both of the mover's rights, a rook
    /// leaving its home corner drops that side's right, and landing on
    /// any rook home corner drops the corner owner's right (rook
    /// captured).
    #[must_use]
    pub(crate) fn after_move(self, side: Color, piece: Piece, from: Coord, to: Coord) -> Self {
        let mut rights = self;
        match piece {
            Piece::King => {
                rights.remove(side, true);
                rights.remove(side, false);
            }
            Piece::Rook => {
                if from == Self::rook_home(side, true) {
                    rights.remove(side, true);
                } else if from == Self::rook_home(side, false) {
                    rights.remove(side, false);
                }
            }
            _ => {}
        }
        for color in Color::BOTH {
            if to == Self::rook_home(color, true) {
                rights.remove(color, true);
            } else if to == Self::rook_home(color, false) {
                rights.remove(color, false);
            }
        }
        rights
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
