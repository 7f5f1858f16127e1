//! Plain minimax search
//!
//! Exhaustive adversarial search over every empty cell, no pruning. Each
//! candidate move is simulated on a clone of the board, so the caller's
//! board is never mutated by the search. This is the reference the
//! alpha-beta variant is checked against.

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;

use super::terminal_score;

/// Minimax search for the best move.
///
/// `maximizing` says whose score is being optimized on this ply;
/// `player` is the side the whole search works for. On a maximizing ply
/// candidate moves are simulated as `player`, on a minimizing ply as the
/// opponent. Ties break to the first move in row-major enumeration order,
/// so results are reproducible from identical boards.
///
/// # Returns
///
/// `(score, best_move)`. The move is `None` on terminal positions:
/// an existing five scores ±[`WIN_SCORE`](super::WIN_SCORE), depth
/// exhaustion and full boards fall back to the material heuristic.
#[must_use]
pub fn search_minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    player: Stone,
) -> (i32, Option<Pos>) {
    if let Some(score) = terminal_score(board, depth, player) {
        return (score, None);
    }

    let moves = board.empty_positions();
    if moves.is_empty() {
        // Unreachable given the full-board terminal check; kept as the
        // documented fallback rather than a panic path
        return (evaluate(board, player), None);
    }

    let mut best_move = None;
    if maximizing {
        let mut best_score = i32::MIN;
        for mov in moves {
            let mut child = board.clone();
            child.place_stone(mov, player);
            let (score, _) = search_minimax(&child, depth - 1, false, player);
            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }
        (best_score, best_move)
    } else {
        let opponent = player.opponent();
        let mut best_score = i32::MAX;
        for mov in moves {
            let mut child = board.clone();
            child.place_stone(mov, opponent);
            let (score, _) = search_minimax(&child, depth - 1, true, player);
            if score < best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }
        (best_score, best_move)
    }
}
