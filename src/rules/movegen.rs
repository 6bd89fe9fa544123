//! Legal-move enumeration.

use super::eval::{eval, EvalContext};
use super::legality::{can_move, ValidationMode};
use super::position::Position;
use super::types::{Color, Coord, Move, Piece, PROMOTION_PIECES};

/// Fill `out` with every legal move for `side`, in from/to scan order.
///
/// A pawn move reaching the opponent's back rank expands into one entry
/// per promotion piece; a bare promoting move with `promotion` unset is
/// never emitted. With `sort`, the result is ordered ascending by a
/// one-ply lookahead evaluation of the position after the move, as a
/// move-ordering aid for a search driver.
pub fn valid_moves<P: Position + Clone>(
    tables: &P::Tables,
    side: Color,
    position: &mut P,
    out: &mut Vec<Move>,
    sort: bool,
) {
    out.clear();
    for from in Coord::all() {
        let piece = match position.piece_at(from) {
            Some((color, piece)) if color == side => piece,
            _ => continue,
        };
        for to in Coord::all() {
            let mv = Move::new(from, to);
            if !can_move(tables, side, position, mv, ValidationMode::STANDARD) {
                continue;
            }
            if piece == Piece::Pawn && to.y() == side.pawn_promotion_rank() {
                for promo in PROMOTION_PIECES {
                    out.push(Move::promoting(from, to, promo));
                }
            } else {
                out.push(mv);
            }
        }
    }

    if sort {
        let mut ctx = EvalContext::new();
        let mut scored: Vec<(f64, Move)> = out
            .iter()
            .map(|&mv| {
                let mut scratch = position.clone();
                scratch.make_move(mv);
                let outcome = eval(tables, side, &mut scratch, 1, &mut ctx);
                (outcome.score, mv)
            })
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        out.clear();
        out.extend(scored.into_iter().map(|(_, mv)| mv));
    }
}
