pub mod rules;

pub use rules::{
    can_move, defended, eval, eval_with_breakdown, in_check, valid_moves, BitboardBoard,
    BitboardTables, CastlingRights, Color, Coord, CoordError, Delta, EvalBreakdown, EvalContext,
    EvalTag, Evaluation, MailboxBoard, MatrixBoard, MatrixTables, Move, MoveGeometry, MoveTables,
    Path, Piece, Position, PositionBuilder, Probe, RepetitionTable, ValidationMode, MATE_SCORE,
    STALEMATE_SCORE,
};
