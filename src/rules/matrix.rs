//! Matrix board: a flat 64-slot array.
//!
//! Keeps only the single last move, not the full history - legality
//! never needs more than the immediately preceding move. Blocking
//! checks step the unit delta between the endpoints at validation time
//! instead of consulting stored paths.

use super::position::{Position, Probe, RepetitionTable};
use super::tables::MatrixTables;
use super::types::{CastlingRights, Color, Coord, Move, Piece};

/// Board stored as a flat array indexed by square index.
#[derive(Clone, Debug)]
pub struct MatrixBoard {
    squares: [Option<(Color, Piece)>; 64],
    last_move: Option<Move>,
    initial_rights: CastlingRights,
    probe: Option<Probe>,
    halfmove_clock: u32,
    hash: u64,
    repetitions: RepetitionTable,
}

impl MatrixBoard {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        super::builder::PositionBuilder::starting_position().build()
    }
}

impl Default for MatrixBoard {
    fn default() -> Self {
        MatrixBoard::new()
    }
}

impl Position for MatrixBoard {
    type Tables = MatrixTables;

    fn empty() -> Self {
        MatrixBoard {
            squares: [None; 64],
            last_move: None,
            initial_rights: CastlingRights::none(),
            probe: None,
            halfmove_clock: 0,
            hash: 0,
            repetitions: RepetitionTable::new(),
        }
    }

    fn raw_piece_at(&self, at: Coord) -> Option<(Color, Piece)> {
        self.squares[at.index()]
    }

    fn raw_place(&mut self, at: Coord, color: Color, piece: Piece) {
        self.squares[at.index()] = Some((color, piece));
    }

    fn raw_remove(&mut self, at: Coord) -> Option<(Color, Piece)> {
        self.squares[at.index()].take()
    }

    fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    fn record_move(&mut self, mv: Move) {
        self.last_move = Some(mv);
    }

    fn initial_rights(&self) -> CastlingRights {
        self.initial_rights
    }

    fn set_initial_rights(&mut self, rights: CastlingRights) {
        self.initial_rights = rights;
    }

    fn probe(&self) -> Option<Probe> {
        self.probe
    }

    fn set_probe(&mut self, probe: Probe) {
        self.probe = Some(probe);
    }

    fn clear_probe(&mut self) {
        self.probe = None;
    }

    fn path_clear(&self, _tables: &MatrixTables, from: Coord, to: Coord) -> bool {
        let unit = (to - from).unit();
        let mut at = from.offset(unit);
        while let Some(sq) = at {
            if sq == to {
                return true;
            }
            if self.piece_at(sq).is_some() {
                return false;
            }
            at = sq.offset(unit);
        }
        // Ran off the board without reaching `to`: not a line pair.
        debug_assert!(false, "path_clear on a non-line pair {from}->{to}");
        false
    }

    fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    fn hash(&self) -> u64 {
        self.hash
    }

    fn set_hash(&mut self, hash: u64) {
        self.hash = hash;
    }

    fn repetitions(&self) -> &RepetitionTable {
        &self.repetitions
    }

    fn repetitions_mut(&mut self) -> &mut RepetitionTable {
        &mut self.repetitions
    }
}
