//! Heuristic position evaluation.
//!
//! Combines material balance, relative mobility, and king-zone
//! attack/defense into one scalar, with terminal positions (checkmate,
//! stalemate, draw) tagged and scored specially. Scratch move lists
//! come from a caller-owned [`EvalContext`] so concurrent evaluations
//! over distinct contexts never share state.

use super::legality::{defended, in_check};
use super::movegen::valid_moves;
use super::position::Position;
use super::types::{Color, Coord, Delta, Move, Piece};

/// Score for a mate at the root; a mate found `ply` levels down scores
/// `MATE_SCORE / 10^ply`, so a faster mate dominates a slower one.
pub const MATE_SCORE: f64 = 1.0e9;

/// Score for stalemate and drawn positions, with no sign bias.
pub const STALEMATE_SCORE: f64 = 0.0;

const MATERIAL_SCALE: f64 = 1.0;
const MOBILITY_SCALE: f64 = 2.0;
const ATTACK_SCALE: f64 = 10.0;
const DEFEND_SCALE: f64 = 4.0;
const CHECK_BONUS: f64 = 30.0;

/// Whether a score is an ordinary heuristic or a game-over verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalTag {
    Normal,
    Terminal,
}

/// Evaluation result: terminal tag plus scalar score, positive in the
/// evaluated player's favor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub tag: EvalTag,
    pub score: f64,
}

/// Per-term diagnostics for tooling and tuning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalBreakdown {
    pub material: f64,
    pub mobility: f64,
    pub attack: f64,
    pub defend: f64,
    /// Legal king moves for the evaluated player / the opponent.
    pub king_mobility: (usize, usize),
}

/// Caller-owned scratch space for evaluation.
///
/// Holds the move lists `eval` fills for both sides, so repeated calls
/// reuse their allocations. Each evaluation call stack needs its own
/// context; giving every search worker one makes parallel evaluation
/// safe by construction.
#[derive(Debug, Default)]
pub struct EvalContext {
    own_moves: Vec<Move>,
    their_moves: Vec<Move>,
}

impl EvalContext {
    #[must_use]
    pub fn new() -> Self {
        EvalContext::default()
    }
}

/// Evaluate the position for `player` at search depth `ply`.
pub fn eval<P: Position + Clone>(
    tables: &P::Tables,
    player: Color,
    position: &mut P,
    ply: u32,
    ctx: &mut EvalContext,
) -> Evaluation {
    eval_with_breakdown(tables, player, position, ply, ctx).0
}

/// Evaluate and also report the per-term breakdown.
pub fn eval_with_breakdown<P: Position + Clone>(
    tables: &P::Tables,
    player: Color,
    position: &mut P,
    ply: u32,
    ctx: &mut EvalContext,
) -> (Evaluation, EvalBreakdown) {
    let opponent = player.opponent();
    let mut breakdown = EvalBreakdown::default();

    if position.is_drawn() {
        return (
            Evaluation {
                tag: EvalTag::Terminal,
                score: STALEMATE_SCORE,
            },
            breakdown,
        );
    }

    let mut own_moves = std::mem::take(&mut ctx.own_moves);
    let mut their_moves = std::mem::take(&mut ctx.their_moves);
    valid_moves(tables, player, position, &mut own_moves, false);
    valid_moves(tables, opponent, position, &mut their_moves, false);

    let own_count = own_moves.len();
    let their_count = their_moves.len();
    breakdown.king_mobility = (
        king_move_count(position, player, &own_moves),
        king_move_count(position, opponent, &their_moves),
    );

    ctx.own_moves = own_moves;
    ctx.their_moves = their_moves;

    let own_in_check = in_check(tables, player, position, false);
    let their_in_check = in_check(tables, opponent, position, false);

    // Geometric ply scaling: mates nearer the root score more extreme.
    let scale = 10f64.powi(ply as i32);

    if own_count == 0 {
        let score = if own_in_check {
            -MATE_SCORE / scale
        } else {
            STALEMATE_SCORE
        };
        #[cfg(feature = "logging")]
        log::trace!("terminal for {player}: {}", if own_in_check { "checkmate" } else { "stalemate" });
        return (
            Evaluation {
                tag: EvalTag::Terminal,
                score,
            },
            breakdown,
        );
    }
    if their_count == 0 {
        let score = if their_in_check {
            MATE_SCORE / scale
        } else {
            STALEMATE_SCORE
        };
        #[cfg(feature = "logging")]
        log::trace!("terminal for {opponent}: {}", if their_in_check { "checkmate" } else { "stalemate" });
        return (
            Evaluation {
                tag: EvalTag::Terminal,
                score,
            },
            breakdown,
        );
    }

    breakdown.material = material_balance(position, player);
    breakdown.mobility = own_count as f64 - their_count as f64;
    breakdown.attack = king_zone_pressure(tables, player, position, opponent)
        + if their_in_check { CHECK_BONUS } else { 0.0 };
    breakdown.defend = king_zone_pressure(tables, player, position, player)
        - if own_in_check { CHECK_BONUS } else { 0.0 };

    let score = MATERIAL_SCALE * breakdown.material
        + MOBILITY_SCALE * breakdown.mobility
        + ATTACK_SCALE * breakdown.attack
        + DEFEND_SCALE * breakdown.defend;

    (
        Evaluation {
            tag: EvalTag::Normal,
            score,
        },
        breakdown,
    )
}

/// Material balance in centipawns, the player's pieces positive.
/// Kings are omitted: both are always present outside terminal nodes.
fn material_balance<P: Position>(position: &P, player: Color) -> f64 {
    let mut balance = 0i64;
    for at in Coord::all() {
        if let Some((color, piece)) = position.piece_at(at) {
            if piece == Piece::King {
                continue;
            }
            let value = i64::from(piece.value());
            balance += if color == player { value } else { -value };
        }
    }
    balance as f64
}

/// How many of `around`'s king-neighbor squares `player` bears on.
fn king_zone_pressure<P: Position>(
    tables: &P::Tables,
    player: Color,
    position: &mut P,
    around: Color,
) -> f64 {
    let Some(king) = position.king_square(around) else {
        return 0.0;
    };
    let mut covered = 0;
    for dy in -1i8..=1 {
        for dx in -1i8..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let Some(zone) = king.offset(Delta::new(dx, dy)) else {
                continue;
            };
            if defended(tables, player, position, zone) {
                covered += 1;
            }
        }
    }
    f64::from(covered)
}

fn king_move_count<P: Position>(position: &P, player: Color, moves: &[Move]) -> usize {
    match position.king_square(player) {
        Some(king) => moves.iter().filter(|mv| mv.from == king).count(),
        None => 0,
    }
}
