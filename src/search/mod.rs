//! Search module for the Gomoku AI
//!
//! Contains:
//! - Plain minimax search over full-board move enumeration
//! - Alpha-beta search, the pruned equivalent
//!
//! Both searches share the same terminal checks and must return identical
//! `(score, move)` pairs for the same position and depth; pruning only
//! changes how many branches get visited. There is no iterative deepening,
//! transposition table or move ordering here: moves come back in the
//! board's deterministic row-major order and ties go to the first move
//! found.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::search_alpha_beta;
pub use minimax::search_minimax;

use crate::board::{Board, Stone};
use crate::eval::evaluate;
use crate::rules::has_five_in_row;

/// Score of a won position; a lost one scores the negation.
/// Heuristic leaf values stay well below this (at most 225).
pub const WIN_SCORE: i32 = 1000;

/// Shared terminal check, in strict priority order: a five for the search
/// player, then a five for the opponent, then depth exhaustion or a full
/// board. Returns `None` when the position must be searched further.
pub(crate) fn terminal_score(board: &Board, depth: u32, player: Stone) -> Option<i32> {
    if has_five_in_row(board, player) {
        return Some(WIN_SCORE);
    }
    if has_five_in_row(board, player.opponent()) {
        return Some(-WIN_SCORE);
    }
    if depth == 0 || board.is_full() {
        return Some(evaluate(board, player));
    }
    None
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rand_pcg::Pcg64Mcg;

    /// Build a board with exactly `empty_cells` free cells and no five on
    /// it yet: fill the grid with a (row + col/2) parity tiling (runs of
    /// at most 2 in every direction), then clear random cells, alternating
    /// colors to keep the stone counts reachable. Near-full boards keep
    /// the branching factor small enough to search every depth in the
    /// battery, while refilling cleared cells during search can still
    /// complete a five.
    pub fn random_near_full_board(rng: &mut Pcg64Mcg, empty_cells: usize) -> Board {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let stone = if (pos.row as usize + pos.col as usize / 2) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(pos, stone);
        }

        let mut cells: Vec<usize> = (0..TOTAL_CELLS).collect();
        cells.shuffle(rng);

        let mut clear_color = Stone::Black;
        let mut cleared = 0;
        for &idx in &cells {
            if cleared == empty_cells {
                break;
            }
            let pos = Pos::from_index(idx);
            if board.get(pos) == clear_color {
                match clear_color {
                    Stone::Black => board.black.clear(pos),
                    Stone::White => board.white.clear(pos),
                    Stone::Empty => unreachable!(),
                }
                clear_color = clear_color.opponent();
                cleared += 1;
            }
        }
        board
    }

    /// Sparse board with a handful of randomly placed stones.
    pub fn random_sparse_board(rng: &mut Pcg64Mcg, stones: usize) -> Board {
        let mut board = Board::new();
        let mut turn = Stone::Black;
        for _ in 0..stones {
            let pos = Pos::new(rng.random_range(0..15), rng.random_range(0..15));
            if board.is_empty(pos) {
                board.place_stone(pos, turn);
                turn = turn.opponent();
            }
        }
        board
    }
}
