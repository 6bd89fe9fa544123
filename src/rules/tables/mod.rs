//! Precomputed move tables.
//!
//! The canonical generator lives here and produces `MoveTables`, the
//! mailbox-shaped tables: quiet and capture destination grids per
//! (color, piece, from, to), a sliding flag per piece type, and the
//! ordered intervening-square path for every straight or diagonal
//! (from, to) pair. The matrix and bitboard tables are derived
//! projections of this output - rule geometry is defined in exactly one
//! place, so the encodings cannot diverge.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

mod bitboard;
mod matrix;

pub use bitboard::BitboardTables;
pub use matrix::MatrixTables;

use super::types::{Color, Coord, Delta, Piece};

const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(2, 1),
    Delta::new(1, 2),
    Delta::new(-1, 2),
    Delta::new(-2, 1),
    Delta::new(-2, -1),
    Delta::new(-1, -2),
    Delta::new(1, -2),
    Delta::new(2, -1),
];

const KING_DELTAS: [Delta; 8] = [
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

const BISHOP_DELTAS: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

const ROOK_DELTAS: [Delta; 4] = [
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
];

/// Destination grid: `[color][piece][from][to] -> possible`.
type HitGrid = [[[[bool; 64]; 64]; 6]; 2];

/// Ordered intervening squares between two line endpoints.
///
/// At most six squares lie strictly between two squares of an 8x8 board.
#[derive(Clone, Copy, Debug)]
pub struct Path {
    squares: [Coord; 6],
    len: u8,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            squares: [Coord::from_index(0); 6],
            len: 0,
        }
    }
}

impl Path {
    fn push(&mut self, at: Coord) {
        self.squares[self.len as usize] = at;
        self.len += 1;
    }

    /// The intervening squares in walking order (nearest `from` first).
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Coord] {
        &self.squares[..self.len as usize]
    }

    /// Iterate the intervening squares.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.as_slice().iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Geometry queries every encoding's tables must answer.
///
/// The legality checker is written once against this trait; each
/// encoding supplies its own projection of the canonical tables.
pub trait MoveGeometry {
    /// Can `piece` of `color` make a quiet (non-capturing) move
    /// `from` -> `to` on an otherwise empty board?
    fn quiet_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool;

    /// Can `piece` of `color` capture `from` -> `to`?
    fn capture_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool;

    /// Can `piece` move more than one square (sliding piece)?
    fn is_sliding(&self, piece: Piece) -> bool;
}

/// Canonical move tables (the mailbox encoding's native shape).
pub struct MoveTables {
    quiet: Box<HitGrid>,
    capture: Box<HitGrid>,
    sliding: [bool; 6],
    paths: Box<[[Path; 64]; 64]>,
}

impl MoveTables {
    /// Generate the tables. Pure geometry over the fixed 8x8 domain;
    /// position-independent and infallible. Call once at startup.
    #[must_use]
    pub fn generate() -> Self {
        let mut quiet: Box<HitGrid> = vec![[[[false; 64]; 64]; 6]; 2]
            .try_into()
            .unwrap_or_else(|_| unreachable!("fixed-size grid"));
        let mut capture: Box<HitGrid> = vec![[[[false; 64]; 64]; 6]; 2]
            .try_into()
            .unwrap_or_else(|_| unreachable!("fixed-size grid"));

        for color in Color::BOTH {
            for piece in Piece::ALL {
                for from_idx in 0..64 {
                    let from = Coord::from_index(from_idx);
                    let quiet_row = &mut quiet[color.index()][piece.index()][from_idx];
                    let capture_row = &mut capture[color.index()][piece.index()][from_idx];
                    match piece {
                        Piece::Pawn => pawn_destinations(color, from, quiet_row, capture_row),
                        Piece::Knight => {
                            leaper_destinations(from, &KNIGHT_DELTAS, quiet_row);
                            leaper_destinations(from, &KNIGHT_DELTAS, capture_row);
                        }
                        Piece::King => {
                            leaper_destinations(from, &KING_DELTAS, quiet_row);
                            leaper_destinations(from, &KING_DELTAS, capture_row);
                        }
                        Piece::Bishop => {
                            slider_destinations(from, &BISHOP_DELTAS, quiet_row);
                            slider_destinations(from, &BISHOP_DELTAS, capture_row);
                        }
                        Piece::Rook => {
                            slider_destinations(from, &ROOK_DELTAS, quiet_row);
                            slider_destinations(from, &ROOK_DELTAS, capture_row);
                        }
                        Piece::Queen => {
                            slider_destinations(from, &BISHOP_DELTAS, quiet_row);
                            slider_destinations(from, &ROOK_DELTAS, quiet_row);
                            slider_destinations(from, &BISHOP_DELTAS, capture_row);
                            slider_destinations(from, &ROOK_DELTAS, capture_row);
                        }
                    }
                }
            }
        }

        let mut paths: Box<[[Path; 64]; 64]> = vec![[Path::default(); 64]; 64]
            .try_into()
            .unwrap_or_else(|_| unreachable!("fixed-size grid"));
        for from_idx in 0..64 {
            let from = Coord::from_index(from_idx);
            for to_idx in 0..64 {
                if from_idx == to_idx {
                    continue;
                }
                let to = Coord::from_index(to_idx);
                let delta = to - from;
                if !delta.is_line() {
                    continue;
                }
                let unit = delta.unit();
                let mut at = from.offset(unit);
                while let Some(sq) = at {
                    if sq == to {
                        break;
                    }
                    paths[from_idx][to_idx].push(sq);
                    at = sq.offset(unit);
                }
            }
        }

        let mut sliding = [false; 6];
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            sliding[piece.index()] = true;
        }

        #[cfg(feature = "logging")]
        log::debug!("generated canonical move tables");

        MoveTables {
            quiet,
            capture,
            sliding,
            paths,
        }
    }

    /// The ordered squares strictly between `from` and `to`.
    ///
    /// Empty for non-line pairs and for adjacent squares; validation
    /// walks this to find blocking pieces without recomputing a step
    /// direction.
    #[inline]
    #[must_use]
    pub fn path(&self, from: Coord, to: Coord) -> &Path {
        &self.paths[from.index()][to.index()]
    }
}

impl MoveGeometry for MoveTables {
    #[inline]
    fn quiet_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool {
        self.quiet[color.index()][piece.index()][from.index()][to.index()]
    }

    #[inline]
    fn capture_hit(&self, color: Color, piece: Piece, from: Coord, to: Coord) -> bool {
        self.capture[color.index()][piece.index()][from.index()][to.index()]
    }

    #[inline]
    fn is_sliding(&self, piece: Piece) -> bool {
        self.sliding[piece.index()]
    }
}

fn pawn_destinations(color: Color, from: Coord, quiet: &mut [bool; 64], capture: &mut [bool; 64]) {
    let forward = Delta::new(0, color.pawn_direction());
    if let Some(step) = from.offset(forward) {
        quiet[step.index()] = true;
        if from.y() == color.pawn_start_rank() {
            if let Some(double) = step.offset(forward) {
                quiet[double.index()] = true;
            }
        }
        for dx in [-1, 1] {
            if let Some(diag) = from.offset(Delta::new(dx, color.pawn_direction())) {
                capture[diag.index()] = true;
            }
        }
    }
}

fn leaper_destinations(from: Coord, deltas: &[Delta], row: &mut [bool; 64]) {
    for &delta in deltas {
        if let Some(to) = from.offset(delta) {
            row[to.index()] = true;
        }
    }
}

fn slider_destinations(from: Coord, directions: &[Delta], row: &mut [bool; 64]) {
    for &unit in directions {
        let mut at = from.offset(unit);
        while let Some(sq) = at {
            row[sq.index()] = true;
            at = sq.offset(unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn knight_destination_counts() {
        let tables = MoveTables::generate();
        // Corner knight has 2 targets, central knight has 8.
        let corner: usize = Coord::all()
            .filter(|&to| tables.quiet_hit(Color::White, Piece::Knight, c(0, 0), to))
            .count();
        let center: usize = Coord::all()
            .filter(|&to| tables.quiet_hit(Color::White, Piece::Knight, c(4, 4), to))
            .count();
        assert_eq!(corner, 2);
        assert_eq!(center, 8);
    }

    #[test]
    fn pawn_quiet_and_capture_differ() {
        let tables = MoveTables::generate();
        let e2 = c(4, 1);
        assert!(tables.quiet_hit(Color::White, Piece::Pawn, e2, c(4, 2)));
        assert!(tables.quiet_hit(Color::White, Piece::Pawn, e2, c(4, 3)));
        assert!(!tables.quiet_hit(Color::White, Piece::Pawn, e2, c(3, 2)));
        assert!(tables.capture_hit(Color::White, Piece::Pawn, e2, c(3, 2)));
        assert!(tables.capture_hit(Color::White, Piece::Pawn, e2, c(5, 2)));
        assert!(!tables.capture_hit(Color::White, Piece::Pawn, e2, c(4, 2)));
        // Double push only from the start rank.
        assert!(!tables.quiet_hit(Color::White, Piece::Pawn, c(4, 2), c(4, 4)));
        // Black pawns move toward rank 1.
        assert!(tables.quiet_hit(Color::Black, Piece::Pawn, c(4, 6), c(4, 4)));
        assert!(!tables.quiet_hit(Color::Black, Piece::Pawn, c(4, 6), c(4, 7)));
    }

    #[test]
    fn rook_path_is_ordered() {
        let tables = MoveTables::generate();
        let path: Vec<Coord> = tables.path(c(0, 0), c(0, 4)).iter().collect();
        assert_eq!(path, vec![c(0, 1), c(0, 2), c(0, 3)]);
    }

    #[test]
    fn non_line_pairs_have_no_path() {
        let tables = MoveTables::generate();
        assert!(tables.path(c(0, 0), c(1, 2)).is_empty());
        assert!(tables.path(c(0, 0), c(0, 1)).is_empty());
    }

    #[test]
    fn sliding_flags() {
        let tables = MoveTables::generate();
        assert!(tables.is_sliding(Piece::Bishop));
        assert!(tables.is_sliding(Piece::Rook));
        assert!(tables.is_sliding(Piece::Queen));
        assert!(!tables.is_sliding(Piece::Pawn));
        assert!(!tables.is_sliding(Piece::Knight));
        assert!(!tables.is_sliding(Piece::King));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let tables = MoveTables::generate();
        for to in Coord::all() {
            let queen = tables.quiet_hit(Color::White, Piece::Queen, c(3, 3), to);
            let rook = tables.quiet_hit(Color::White, Piece::Rook, c(3, 3), to);
            let bishop = tables.quiet_hit(Color::White, Piece::Bishop, c(3, 3), to);
            assert_eq!(queen, rook || bishop);
        }
    }
}
