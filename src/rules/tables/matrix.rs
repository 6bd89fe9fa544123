//! Matrix-encoding move tables.
//!
//! Flat arrays indexed by `((color * 6 + piece) * 64 + from) * 64 + to`,
//! derived from the canonical tables. The matrix encoding stores no
//! paths: blocking checks step the unit delta at validation time.

use super::{MoveGeometry, MoveTables};
use crate::rules::types::{Color, Coord, Piece};

const GRID: usize = 2 * 6 * 64 * 64;

/// Flat projection of the canonical move tables.
pub struct MatrixTables {
    quiet: Box<[bool]>,
    capture: Box<[bool]>,
    sliding: [bool; 6],
}

#[inline]
fn flat_index(color: Color, piece: Piece, from: Coord, to: Coord) -> usize {
    ((color.index() * 6 + piece.index()) * 64 + from.index()) * 64 + to.index()
}

impl MatrixTables {
    /// Derive the flat tables from the canonical generator output.
    #[must_use]
    pub fn derive(canonical: &MoveTables) -> Self {
        let mut quiet = vec![false; GRID].into_boxed_slice();
        let mut capture = vec![false; GRID].into_boxed_slice();

        for color in Color::BOTH {
            for piece in Piece::ALL {
                for from in Coord::all() {
                    for to in Coord::all() {
                        let idx = flat_index(color, piece, from, to);
                        quiet[idx] = canonical.quiet_hit(color, piece, from, to);
                        capture[idx] = canonical.capture_hit(color, piece, from, to);
                    }
                }
            }
        }

        let mut sliding = [false; 6];
        for piece in Piece::ALL {
            sliding[piece.index()] = canonical.is_sliding(piece);
        }

        MatrixTables {
            quiet,
            capture,
            sliding,
        }
    }
}

impl MoveGeometry for MatrixTables {
    #[inline]
    fn quiet_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool {
        self.quiet[flat_index(color, piece, from, to)]
    }

    #[inline]
    fn capture_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool {
        self.capture[flat_index(color, piece, from, to)]
    }

    #[inline]
    fn is_sliding(&self, piece: Piece) -> bool {
        self.sliding[piece.index()]
    }
}
