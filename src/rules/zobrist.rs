//! Zobrist hashing for positions.
//!
//! Provides incrementally-updatable 64-bit position hashes used by the
//! repetition-draw bookkeeping.

use once_cell::sync::Lazy;
use rand::prelude::*;

use super::types::{Color, Coord, Piece};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece_type][square_index]
    piece_keys: [[[u64; 64]; 6]; 2],
    side_key: u64,
    // castling_keys[rights_bitmask]
    castling_keys: [u64; 16],
    // en_passant_keys[file_index] (only the file matters for the target)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe_f00d_u64); // fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let side_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            side_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_key(color: Color, piece: Piece, at: Coord) -> u64 {
    ZOBRIST.piece_keys[color.index()][piece.index()][at.index()]
}

#[inline]
pub(crate) fn side_key() -> u64 {
    ZOBRIST.side_key
}

#[inline]
pub(crate) fn castling_key(rights_mask: u8) -> u64 {
    ZOBRIST.castling_keys[(rights_mask & 0x0F) as usize]
}

#[inline]
pub(crate) fn en_passant_key(file: usize) -> u64 {
    ZOBRIST.en_passant_keys[file & 7]
}
