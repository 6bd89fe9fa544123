//! Mailbox board: a 2-D piece grid indexed `[y][x]`.
//!
//! Retains the full move history; the "last move" the rules consult is
//! the back of that history. Blocking checks walk the canonical tables'
//! precomputed intervening-square paths.

use super::position::{Position, Probe, RepetitionTable};
use super::tables::MoveTables;
use super::types::{CastlingRights, Color, Coord, Move, Piece};

/// Board stored as an 8x8 grid of optional pieces.
#[derive(Clone, Debug)]
pub struct MailboxBoard {
    squares: [[Option<(Color, Piece)>; 8]; 8],
    history: Vec<Move>,
    initial_rights: CastlingRights,
    probe: Option<Probe>,
    halfmove_clock: u32,
    hash: u64,
    repetitions: RepetitionTable,
}

impl MailboxBoard {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        super::builder::PositionBuilder::starting_position().build()
    }

    /// The applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for MailboxBoard {
    fn default() -> Self {
        MailboxBoard::new()
    }
}

impl Position for MailboxBoard {
    type Tables = MoveTables;

    fn empty() -> Self {
        MailboxBoard {
            squares: [[None; 8]; 8],
            history: Vec::new(),
            initial_rights: CastlingRights::none(),
            probe: None,
            halfmove_clock: 0,
            hash: 0,
            repetitions: RepetitionTable::new(),
        }
    }

    fn raw_piece_at(&self, at: Coord) -> Option<(Color, Piece)> {
        self.squares[at.y()][at.x()]
    }

    fn raw_place(&mut self, at: Coord, color: Color, piece: Piece) {
        self.squares[at.y()][at.x()] = Some((color, piece));
    }

    fn raw_remove(&mut self, at: Coord) -> Option<(Color, Piece)> {
        self.squares[at.y()][at.x()].take()
    }

    fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    fn record_move(&mut self, mv: Move) {
        self.history.push(mv);
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

    fn path_clear(&self, tables: &MoveTables, from: Coord, to: Coord) -> bool {
        tables
            .path(from, to)
            .iter()
            .all(|sq| self.piece_at(sq).is_none())
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
