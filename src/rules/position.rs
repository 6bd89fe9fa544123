//! The board-representation seam.
//!
//! All three encodings implement [`Position`]: raw square storage, the
//! last-move record, the transient probe slot, and a per-encoding
//! blocking-path check. Everything rule-shaped (probe-aware lookups,
//! castling snapshot resolution, move application bookkeeping, draw
//! predicates) lives in the trait's default methods so the rules are
//! defined once.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use super::tables::MoveGeometry;
use super::types::{CastlingRights, Color, Coord, Delta, Move, Piece};
use super::zobrist;

/// A hypothetical move held in a position's transient check-test slot.
///
/// While set, `piece_at` and `king_square` answer as if the move had
/// been played: the source square is empty, the destination holds the
/// moved piece, and `vacate` (the en-passant victim) is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub from: Coord,
    pub to: Coord,
    pub vacate: Option<Coord>,
}

impl Probe {
    #[must_use]
    pub(crate) const fn new(from: Coord, to: Coord) -> Self {
        Probe {
            from,
            to,
            vacate: None,
        }
    }

    #[must_use]
    pub(crate) const fn vacating(from: Coord, to: Coord, vacate: Coord) -> Self {
        Probe {
            from,
            to,
            vacate: Some(vacate),
        }
    }
}

/// Occurrence counts of position hashes, for the threefold-repetition
/// draw rule.
#[derive(Clone, Debug, Default)]
pub struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    #[must_use]
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }
}

/// A board representation the rules core can validate moves against.
///
/// The `raw_*` methods see only the stored squares and bypass both the
/// probe slot and all bookkeeping; use [`Position::piece_at`] and
/// [`Position::make_move`] everywhere outside board internals and
/// position construction.
pub trait Position {
    /// This encoding's projection of the move tables.
    type Tables: MoveGeometry;

    /// An empty board with no history and no castling rights.
    #[must_use]
    fn empty() -> Self
    where
        Self: Sized;

    /// Stored piece on a square, ignoring the probe slot.
    fn raw_piece_at(&self, at: Coord) -> Option<(Color, Piece)>;

    /// Place a piece, overwriting the square.
    fn raw_place(&mut self, at: Coord, color: Color, piece: Piece);

    /// Remove and return the piece on a square.
    fn raw_remove(&mut self, at: Coord) -> Option<(Color, Piece)>;

    /// The most recently recorded move.
    fn last_move(&self) -> Option<Move>;

    /// Append a move to this position's record.
    fn record_move(&mut self, mv: Move);

    /// Castling rights for a position with no recorded moves.
    fn initial_rights(&self) -> CastlingRights;

    fn set_initial_rights(&mut self, rights: CastlingRights);

    /// Current content of the transient check-test slot.
    fn probe(&self) -> Option<Probe>;

    fn set_probe(&mut self, probe: Probe);

    fn clear_probe(&mut self);

    /// Are all squares strictly between `from` and `to` empty?
    ///
    /// Callers guarantee a straight or diagonal pair; each encoding
    /// answers with its own machinery (precomputed path list, unit
    /// delta stepping, or a between mask against occupancy).
    fn path_clear(&self, tables: &Self::Tables, from: Coord, to: Coord) -> bool;

    /// Reversible half-moves since the last capture or pawn move.
    fn halfmove_clock(&self) -> u32;

    fn set_halfmove_clock(&mut self, clock: u32);

    /// Zobrist hash of the current placement, rights, and side parity.
    fn hash(&self) -> u64;

    fn set_hash(&mut self, hash: u64);

    fn repetitions(&self) -> &RepetitionTable;

    fn repetitions_mut(&mut self) -> &mut RepetitionTable;

    /// Piece on a square, honoring the probe slot.
    fn piece_at(&self, at: Coord) -> Option<(Color, Piece)> {
        if let Some(probe) = self.probe() {
            if at == probe.to {
                return self.raw_piece_at(probe.from);
            }
            if at == probe.from || Some(at) == probe.vacate {
                return None;
            }
        }
        self.raw_piece_at(at)
    }

    /// Square of a color's king, honoring the probe slot.
    fn king_square(&self, color: Color) -> Option<Coord> {
        Coord::all().find(|&at| self.piece_at(at) == Some((color, Piece::King)))
    }

    /// The castling snapshot in effect: the last recorded move's, or
    /// the initial rights before any move was recorded.
    fn castling_rights(&self) -> CastlingRights {
        self.last_move()
            .map_or_else(|| self.initial_rights(), |mv| mv.castling)
    }

    /// File of the en-passant target, if the last move was a double
    /// pawn push.
    fn en_passant_file(&self) -> Option<usize> {
        let last = self.last_move()?;
        if last.is_double_step() && matches!(self.raw_piece_at(last.to), Some((_, Piece::Pawn))) {
            Some(last.to.x())
        } else {
            None
        }
    }

    /// Is this position drawn (50-move rule or threefold repetition)?
    fn is_drawn(&self) -> bool {
        if self.halfmove_clock() >= 100 {
            return true;
        }
        self.repetitions().get(self.hash()) >= 3
    }

    /// Would applying `mv` produce an immediately-drawn position?
    ///
    /// Captures and pawn moves reset the clock and can never repeat an
    /// earlier placement, so only reversible moves are examined.
    fn draw_after(&self, mv: Move) -> bool {
        let Some((side, piece)) = self.piece_at(mv.from) else {
            return false;
        };
        if piece == Piece::Pawn || self.piece_at(mv.to).is_some() {
            return false;
        }
        if self.halfmove_clock() + 1 >= 100 {
            return true;
        }
        let rights = self.castling_rights();
        let next_rights = rights.after_move(side, piece, mv.from, mv.to);
        let mut next = self.hash();
        next ^= zobrist::piece_key(side, piece, mv.from);
        next ^= zobrist::piece_key(side, piece, mv.to);
        next ^= zobrist::castling_key(rights.as_u8());
        next ^= zobrist::castling_key(next_rights.as_u8());
        next ^= zobrist::side_key();
        if let Some(file) = self.en_passant_file() {
            next ^= zobrist::en_passant_key(file);
        }
        self.repetitions().get(next) >= 2
    }

    /// Hash of the stored placement, current rights, and en-passant
    /// state, from scratch.
    fn compute_hash(&self) -> u64 {
        let mut hash = 0u64;
        for at in Coord::all() {
            if let Some((color, piece)) = self.raw_piece_at(at) {
                hash ^= zobrist::piece_key(color, piece, at);
            }
        }
        hash ^= zobrist::castling_key(self.castling_rights().as_u8());
        if let Some(file) = self.en_passant_file() {
            hash ^= zobrist::en_passant_key(file);
        }
        hash
    }

    /// Apply a move: relocate the piece, remove any captured piece
    /// (including the en-passant victim), hop the rook on castling,
    /// land the promotion piece, and record the move carrying the
    /// updated castling snapshot. Updates the halfmove clock, the
    /// position hash, and the repetition counts.
    ///
    /// Calling this with an illegal move or an empty source square is a
    /// caller bug; it is debug-asserted, not validated.
    fn make_move(&mut self, mv: Move)
    where
        Self: Sized,
    {
        debug_assert!(self.probe().is_none(), "make_move during a probe");
        let Some((side, piece)) = self.raw_piece_at(mv.from) else {
            debug_assert!(false, "make_move from empty square {}", mv.from);
            return;
        };

        let rights = self.castling_rights();
        let mut hash = self.hash();
        if let Some(file) = self.en_passant_file() {
            hash ^= zobrist::en_passant_key(file);
        }

        let mut captured = self.raw_remove(mv.to);
        if let Some((color, victim)) = captured {
            hash ^= zobrist::piece_key(color, victim, mv.to);
        } else if piece == Piece::Pawn && mv.from.x() != mv.to.x() {
            // en passant: the victim sits beside the source square
            if let Some(victim_sq) = Coord::new(mv.to.x(), mv.from.y()) {
                captured = self.raw_remove(victim_sq);
                if let Some((color, victim)) = captured {
                    hash ^= zobrist::piece_key(color, victim, victim_sq);
                }
            }
        }

        self.raw_remove(mv.from);
        let landed = mv.promotion.unwrap_or(piece);
        self.raw_place(mv.to, side, landed);
        hash ^= zobrist::piece_key(side, piece, mv.from);
        hash ^= zobrist::piece_key(side, landed, mv.to);

        if piece == Piece::King && mv.delta().abs().dx == 2 {
            let kingside = mv.to.x() > mv.from.x();
            let rook_from = CastlingRights::rook_home(side, kingside);
            if let Some(rook_to) = mv.to.offset(Delta::new(if kingside { -1 } else { 1 }, 0)) {
                if self.raw_remove(rook_from).is_some() {
                    self.raw_place(rook_to, side, Piece::Rook);
                    hash ^= zobrist::piece_key(side, Piece::Rook, rook_from);
                    hash ^= zobrist::piece_key(side, Piece::Rook, rook_to);
                }
            }
        }

        let next_rights = rights.after_move(side, piece, mv.from, mv.to);
        hash ^= zobrist::castling_key(rights.as_u8());
        hash ^= zobrist::castling_key(next_rights.as_u8());
        hash ^= zobrist::side_key();
        if piece == Piece::Pawn && mv.is_double_step() {
            hash ^= zobrist::en_passant_key(mv.to.x());
        }

        self.record_move(mv.with_snapshot(next_rights));
        let clock = if piece == Piece::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock() + 1
        };
        self.set_halfmove_clock(clock);
        self.set_hash(hash);
        self.repetitions_mut().increment(hash);
    }
}

/// Scoped handle on a position's probe slot.
///
/// Sets the slot on construction and clears it when dropped, so every
/// exit path of a check test (including early legality failures)
/// releases the hypothetical move.
pub(crate) struct ProbeGuard<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> ProbeGuard<'a, P> {
    pub(crate) fn new(position: &'a mut P, probe: Probe) -> Self {
        debug_assert!(position.probe().is_none(), "nested probe");
        position.set_probe(probe);
        ProbeGuard { position }
    }
}

impl<P: Position> Deref for ProbeGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for ProbeGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for ProbeGuard<'_, P> {
    fn drop(&mut self) {
        self.position.clear_probe();
    }
}
