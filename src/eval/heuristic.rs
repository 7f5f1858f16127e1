//! Heuristic evaluation function for non-terminal positions
//!
//! The heuristic is a plain material count: the number of stones the given
//! color has on the board. It ignores the opponent and all spatial
//! structure. This is the reference baseline and is kept as-is; any
//! replacement must stay "higher is better" and keep its magnitude well
//! below the search's ±[`WIN_SCORE`](crate::search::WIN_SCORE) terminal
//! scores, otherwise leaf values would masquerade as wins.

use crate::board::{Board, Stone};

/// Evaluate the board from the perspective of the given color.
///
/// Returns the stone count for `color`, in `0..=225`. Terminal detection is
/// the search's job; this function only scores non-terminal leaves.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    board.stones(color).map_or(0, |stones| stones.count() as i32)
}
