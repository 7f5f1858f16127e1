//! Board structure and move application
//!
//! The board is the only mutable state in the engine. Confirmed game moves
//! mutate it in place through [`Board::apply_move`]; speculative search
//! moves always go on a [`Clone`] of it, so a live board is never touched
//! by lookahead.

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board for 15x15 Gomoku
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without legality checks
    /// Use `apply_move` for game moves; this is for position setup
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Apply a validated game move.
    ///
    /// Returns `true` iff the move was legal: `pos` on the grid, the target
    /// cell empty and `stone` an actual color. On `false` the board is left
    /// unchanged. Illegal moves are an expected input (mis-clicks, typos in
    /// a console front end), not an error condition.
    #[must_use]
    pub fn apply_move(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty || !pos.in_bounds() || !self.is_empty(pos) {
            return false;
        }
        self.place_stone(pos, stone);
        true
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// All empty positions in row-major order.
    ///
    /// The order is load-bearing: search breaks score ties in favor of the
    /// first move enumerated, so identical boards must always yield the
    /// same sequence.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(TOTAL_CELLS - self.stone_count() as usize);
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if self.is_empty(pos) {
                moves.push(pos);
            }
        }
        moves
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
