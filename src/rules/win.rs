//! Win condition checking for freestyle Gomoku
//!
//! A player wins with five or more consecutive stones in any row, column
//! or diagonal ("at least five", overlines count). Longer runs always
//! contain a five-cell prefix, so anchoring the scan at each stone and
//! looking five cells ahead covers them too.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5+ in a row for the given color.
///
/// Scans every stone of the color as a potential run start and checks the
/// four direction vectors. Each direction short-circuits on the first
/// mismatch; the whole board is examined before returning `false`.
#[must_use]
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            if run_of_five(board, pos, dr, dc, stone) {
                return true;
            }
        }
    }
    false
}

/// Check for exactly 5 consecutive `stone` cells starting at `pos` along
/// `(dr, dc)`, all in bounds.
fn run_of_five(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> bool {
    for i in 0..5 {
        let r = i32::from(pos.row) + dr * i;
        let c = i32::from(pos.col) + dc * i;
        if !Pos::is_valid(r, c) {
            return false;
        }
        if board.get(Pos::new(r as u8, c as u8)) != stone {
            return false;
        }
    }
    true
}
