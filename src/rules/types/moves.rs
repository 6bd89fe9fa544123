//! Move records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingRights;
use super::coord::{Coord, Delta};
use super::piece::Piece;

/// An immutable move record.
///
/// `castling` is the rights snapshot remaining after the move; it is
/// filled in when the move is recorded on a board, so a candidate move
/// built by hand carries a placeholder until then.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<Piece>,
    pub castling: CastlingRights,
}

impl Move {
    /// A plain candidate move.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move {
            from,
            to,
            promotion: None,
            castling: CastlingRights::all(),
        }
    }

    /// A candidate move with a promotion choice.
    #[must_use]
    pub const fn promoting(from: Coord, to: Coord, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            castling: CastlingRights::all(),
        }
    }

    /// Copy of this move carrying the given rights snapshot.
    #[inline]
    #[must_use]
    pub(crate) const fn with_snapshot(self, castling: CastlingRights) -> Self {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
            castling,
        }
    }

    /// Displacement from source to destination.
    #[inline]
    #[must_use]
    pub fn delta(self) -> Delta {
        self.to - self.from
    }

    /// True when the move spans two ranks on one file (a pawn double
    /// push, provided the mover is a pawn).
    #[inline]
    #[must_use]
    pub(crate) fn is_double_step(self) -> bool {
        let d = self.delta().abs();
        d.dx == 0 && d.dy == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_promotion() {
        let from = Coord::new(0, 6).unwrap();
        let to = Coord::new(0, 7).unwrap();
        assert_eq!(Move::new(from, to).to_string(), "a7a8");
        assert_eq!(
            Move::promoting(from, to, Piece::Queen).to_string(),
            "a7a8q"
        );
    }

    #[test]
    fn double_step_shape() {
        let e2 = Coord::new(4, 1).unwrap();
        let e4 = Coord::new(4, 3).unwrap();
        let e3 = Coord::new(4, 2).unwrap();
        assert!(Move::new(e2, e4).is_double_step());
        assert!(!Move::new(e2, e3).is_double_step());
    }
}
