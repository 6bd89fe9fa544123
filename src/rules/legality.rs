//! Move legality and check detection.
//!
//! Written once against [`Position`] + [`MoveGeometry`]; the three
//! encodings plug in their own tables and blocking-path machinery.
//! `can_move` and `in_check` are mutually recursive: the self-check
//! filter records the candidate in the position's probe slot and asks
//! `in_check`, which scans with `can_move` in a mode that suppresses
//! further recursion.

use super::position::{Position, Probe, ProbeGuard};
use super::tables::MoveGeometry;
use super::types::{CastlingRights, Color, Coord, Delta, Move, Piece};

/// The three independent switches of the validation algorithm.
///
/// - `check_test`: the candidate may land on the enemy king (used while
///   scanning for checks, where "capturing" the king is the question).
/// - `into_check_test`: suppress the recursive self-check filter; set
///   on every scan initiated from inside `can_move` so the recursion
///   terminates.
/// - `defend_test`: ask whether the piece bears on the target square
///   rather than whether the move is playable - capture geometry
///   regardless of target occupancy, friendly occupancy allowed, no
///   self-check filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationMode {
    pub check_test: bool,
    pub into_check_test: bool,
    pub defend_test: bool,
}

impl ValidationMode {
    /// Ordinary legality: every rule applies.
    pub const STANDARD: ValidationMode = ValidationMode {
        check_test: false,
        into_check_test: false,
        defend_test: false,
    };

    /// Square-defense query.
    pub const DEFEND: ValidationMode = ValidationMode {
        check_test: false,
        into_check_test: false,
        defend_test: true,
    };

    /// Check-scan mode, propagating the caller's recursion flag.
    #[must_use]
    pub const fn attack(into_check_test: bool) -> ValidationMode {
        ValidationMode {
            check_test: true,
            into_check_test,
            defend_test: false,
        }
    }

    #[inline]
    const fn is_standard(self) -> bool {
        !self.check_test && !self.into_check_test && !self.defend_test
    }
}

/// Is the candidate move legal for `side`?
///
/// Pure with respect to the real board: the probe slot may be written
/// during the castling through-check and self-check steps, but is
/// guaranteed clear on return.
pub fn can_move<P: Position>(
    tables: &P::Tables,
    side: Color,
    position: &mut P,
    mv: Move,
    mode: ValidationMode,
) -> bool {
    if mv.from == mv.to {
        return false;
    }

    // Geometric pre-filter: everything a piece can do is either a
    // straight/diagonal line or a knight jump.
    let delta = mv.delta();
    let knight_jump = delta.is_knight_jump();
    if !knight_jump && !delta.is_line() {
        return false;
    }

    let Some((owner, piece)) = position.piece_at(mv.from) else {
        return false;
    };
    if owner != side {
        return false;
    }

    let target = position.piece_at(mv.to);
    match target {
        Some((color, _)) if color == side && !mode.defend_test => return false,
        Some((color, Piece::King)) if color != side && !mode.check_test => return false,
        _ => {}
    }

    let mut en_passant = false;
    let mut castle = false;
    if mode.defend_test {
        // Defense is capture geometry, whatever occupies the target.
        if !tables.capture_hit(side, piece, mv.from, mv.to) {
            return false;
        }
    } else if target.is_none() {
        if tables.quiet_hit(side, piece, mv.from, mv.to) {
            if piece == Piece::Pawn && mv.is_double_step() {
                let Some(mid) = mv.from.offset(delta.unit()) else {
                    return false;
                };
                if position.piece_at(mid).is_some() {
                    return false;
                }
            }
        } else if is_en_passant(side, piece, position, mv) {
            en_passant = true;
        } else if !mode.check_test
            && !mode.into_check_test
            && can_castle(tables, side, piece, position, mv)
        {
            castle = true;
        } else {
            return false;
        }
    } else if !tables.capture_hit(side, piece, mv.from, mv.to) {
        return false;
    }

    if tables.is_sliding(piece) && !knight_jump && !position.path_clear(tables, mv.from, mv.to) {
        return false;
    }

    if !mode.into_check_test && !mode.defend_test {
        let probe = if en_passant {
            let Some(victim) = Coord::new(mv.to.x(), mv.from.y()) else {
                return false;
            };
            Probe::vacating(mv.from, mv.to, victim)
        } else {
            Probe::new(mv.from, mv.to)
        };
        let mut guard = ProbeGuard::new(position, probe);
        if in_check(tables, side, &mut *guard, true) {
            return false;
        }
    }

    if mode.is_standard() && !castle && position.draw_after(mv) {
        return false;
    }

    true
}

/// Is `player`'s king currently attacked?
///
/// Scans every opposing source square and asks `can_move` whether a
/// move onto the king square exists, without self-check filtering of
/// the attacker when `into_check_test` propagates down.
pub fn in_check<P: Position>(
    tables: &P::Tables,
    player: Color,
    position: &mut P,
    into_check_test: bool,
) -> bool {
    let Some(king) = position.king_square(player) else {
        return false;
    };
    let attacker = player.opponent();
    for from in Coord::all() {
        match position.piece_at(from) {
            Some((color, _)) if color == attacker => {}
            _ => continue,
        }
        if can_move(
            tables,
            attacker,
            position,
            Move::new(from, king),
            ValidationMode::attack(into_check_test),
        ) {
            return true;
        }
    }
    false
}

/// Does any piece of `side` bear on `target`?
pub fn defended<P: Position>(
    tables: &P::Tables,
    side: Color,
    position: &mut P,
    target: Coord,
) -> bool {
    for from in Coord::all() {
        match position.piece_at(from) {
            Some((color, _)) if color == side => {}
            _ => continue,
        }
        if can_move(
            tables,
            side,
            position,
            Move::new(from, target),
            ValidationMode::DEFEND,
        ) {
            return true;
        }
    }
    false
}

/// En passant: the last move was an opposing pawn's double push landing
/// beside `from` on the same rank, and the capture lands one forward
/// step behind that pawn.
fn is_en_passant<P: Position>(side: Color, piece: Piece, position: &P, mv: Move) -> bool {
    if piece != Piece::Pawn {
        return false;
    }
    let Some(last) = position.last_move() else {
        return false;
    };
    if !last.is_double_step() {
        return false;
    }
    match position.piece_at(last.to) {
        Some((color, Piece::Pawn)) if color == side.opponent() => {}
        _ => return false,
    }
    if last.to.y() != mv.from.y() || last.to.x().abs_diff(mv.from.x()) != 1 {
        return false;
    }
    last.to.offset(Delta::new(0, side.pawn_direction())) == Some(mv.to)
}

/// Castling: king two squares along its back rank toward an unmoved
/// rook, with the span between king and rook empty, the king not in
/// check, and the square the king passes through not attacked. The
/// destination square's safety is the ordinary self-check filter's job.
fn can_castle<P: Position>(
    tables: &P::Tables,
    side: Color,
    piece: Piece,
    position: &mut P,
    mv: Move,
) -> bool {
    if piece != Piece::King {
        return false;
    }
    let back = side.back_rank();
    if mv.from != CastlingRights::king_home(side) || mv.to.y() != back {
        return false;
    }
    let kingside = match mv.to.x() {
        6 => true,
        2 => false,
        _ => return false,
    };
    if !position.castling_rights().has(side, kingside) {
        return false;
    }
    let rook_home = CastlingRights::rook_home(side, kingside);
    if position.piece_at(rook_home) != Some((side, Piece::Rook)) {
        return false;
    }

    // Whole span between king and rook must be empty (queenside
    // includes the b-file square the king never crosses).
    let step = Delta::new(if kingside { 1 } else { -1 }, 0);
    let mut at = mv.from.offset(step);
    while let Some(sq) = at {
        if sq == rook_home {
            break;
        }
        if position.piece_at(sq).is_some() {
            return false;
        }
        at = sq.offset(step);
    }

    if in_check(tables, side, position, true) {
        return false;
    }

    // The king may not pass through an attacked square.
    let Some(crossed) = mv.from.offset(step) else {
        return false;
    };
    let mut guard = ProbeGuard::new(position, Probe::new(mv.from, crossed));
    if in_check(tables, side, &mut *guard, true) {
        return false;
    }

    true
}
