//! Bitboard-encoding move tables.
//!
//! One 64-bit destination mask per (color, piece, from), plus a
//! between-mask per (from, to) line pair. Derived by iterating the
//! canonical tables and setting the corresponding bit for each hit, so
//! the bitboard rules can never drift from the canonical definition.

use super::{MoveGeometry, MoveTables};
use crate::rules::types::{Color, Coord, Piece};

type MaskGrid = [[[u64; 64]; 6]; 2];

/// Bit-plane projection of the canonical move tables.
pub struct BitboardTables {
    quiet: Box<MaskGrid>,
    capture: Box<MaskGrid>,
    between: Box<[[u64; 64]; 64]>,
    sliding: [bool; 6],
}

impl BitboardTables {
    /// Derive the bit masks from the canonical generator output.
    #[must_use]
    pub fn derive(canonical: &MoveTables) -> Self {
        let mut quiet: Box<MaskGrid> = vec![[[0u64; 64]; 6]; 2]
            .try_into()
            .unwrap_or_else(|_| unreachable!("fixed-size grid"));
        let mut capture: Box<MaskGrid> = vec![[[0u64; 64]; 6]; 2]
            .try_into()
            .unwrap_or_else(|_| unreachable!("fixed-size grid"));

        for color in Color::BOTH {
            for piece in Piece::ALL {
                for from in Coord::all() {
                    let mut quiet_mask = 0u64;
                    let mut capture_mask = 0u64;
                    for to in Coord::all() {
                        if canonical.quiet_hit(color, piece, from, to) {
                            quiet_mask |= 1u64 << to.index();
                        }
                        if canonical.capture_hit(color, piece, from, to) {
                            capture_mask |= 1u64 << to.index();
                        }
                    }
                    quiet[color.index()][piece.index()][from.index()] = quiet_mask;
                    capture[color.index()][piece.index()][from.index()] = capture_mask;
                }
            }
        }

        let mut between: Box<[[u64; 64]; 64]> = vec![[0u64; 64]; 64]
            .try_into()
            .unwrap_or_else(|_| unreachable!("fixed-size grid"));
        for from in Coord::all() {
            for to in Coord::all() {
                let mut mask = 0u64;
                for sq in canonical.path(from, to).iter() {
                    mask |= 1u64 << sq.index();
                }
                between[from.index()][to.index()] = mask;
            }
        }

        let mut sliding = [false; 6];
        for piece in Piece::ALL {
            sliding[piece.index()] = canonical.is_sliding(piece);
        }

        BitboardTables {
            quiet,
            capture,
            between,
            sliding,
        }
    }

    /// Destination mask for quiet moves of (color, piece) from a square.
    #[inline]
    #[must_use]
    pub fn quiet_mask(&self, color: Color, piece: Piece, from: Coord) -> u64 {
        self.quiet[color.index()][piece.index()][from.index()]
    }

    /// Destination mask for captures of (color, piece) from a square.
    #[inline]
    #[must_use]
    pub fn capture_mask(&self, color: Color, piece: Piece, from: Coord) -> u64 {
        self.capture[color.index()][piece.index()][from.index()]
    }

    /// Mask of the squares strictly between two line endpoints (zero
    /// for non-line pairs).
    #[inline]
    #[must_use]
    pub fn between(&self, from: Coord, to: Coord) -> u64 {
        self.between[from.index()][to.index()]
    }
}

impl MoveGeometry for BitboardTables {
    #[inline]
    fn quiet_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool {
        self.quiet_mask(color, piece, from) & (1u64 << to.index()) != 0
    }

    #[inline]
    fn capture_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool {
        self.capture_mask(color, piece, from) & (1u64 << to.index()) != 0
    }

    #[inline]
    fn is_sliding(&self, piece: Piece) -> bool {
        self.sliding[piece.index()]
    }
}
