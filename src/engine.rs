//! Game controller: turn-based orchestration over the search engine
//!
//! [`Game`] owns the live board and a two-state machine: awaiting a move
//! from one side, or terminal. Front ends (a console loop, a canvas GUI)
//! drive it through [`Game::play_move`] for human input and
//! [`Game::play_search_move`] for AI turns, and render whatever
//! [`Game::board`] and [`Game::result`] expose. The controller holds no
//! presentation state and does no scheduling; a front end that must stay
//! responsive runs the (blocking) search call off its input path.
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, GameResult, Pos, SearchAlgorithm};
//!
//! let mut game = Game::new();
//!
//! // Human plays Black at the center
//! assert!(game.play_move(Pos::new(7, 7)));
//!
//! // AI answers as White
//! let reply = game.play_search_move(SearchAlgorithm::AlphaBeta, 1);
//! assert!(reply.is_some());
//! assert_eq!(game.result(), GameResult::InProgress);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::rules::has_five_in_row;
use crate::search::{search_alpha_beta, search_minimax};

/// Outcome of a game as seen from the outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Stone),
    Draw,
}

/// Controller state: either one side is to move, or the game is over.
/// `Terminal` is absorbing — no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Stone),
    Terminal(GameResult),
}

/// Which search selects the AI move.
///
/// Both return the same move by construction; the console front end's
/// AI-vs-AI exhibition mode runs one seat on each, which is why the
/// controller takes the algorithm per turn instead of fixing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
}

/// A running Gomoku game
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// New game on an empty board, Black to move first
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::AwaitingMove(Stone::Black),
        }
    }

    /// Reset to the initial state for a rematch
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The live board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current controller state
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Side to move, or `None` once the game is over
    #[inline]
    pub fn to_move(&self) -> Option<Stone> {
        match self.state {
            GameState::AwaitingMove(stone) => Some(stone),
            GameState::Terminal(_) => None,
        }
    }

    /// Game outcome; `InProgress` while a side is still to move
    #[inline]
    pub fn result(&self) -> GameResult {
        match self.state {
            GameState::AwaitingMove(_) => GameResult::InProgress,
            GameState::Terminal(result) => result,
        }
    }

    /// Play a validated move for the side to move.
    ///
    /// Returns `false` and changes nothing when the game is over or the
    /// move is illegal (off the grid or onto an occupied cell); the front
    /// end should re-prompt. On success the terminal check runs and the
    /// turn passes to the other side.
    pub fn play_move(&mut self, pos: Pos) -> bool {
        let GameState::AwaitingMove(stone) = self.state else {
            return false;
        };
        if !self.board.apply_move(pos, stone) {
            return false;
        }
        self.advance_turn(stone);
        true
    }

    /// Let the search engine take the current turn.
    ///
    /// Runs the chosen search maximizing for the side to move, applies the
    /// selected move and runs the same terminal check as [`Self::play_move`].
    /// Returns the applied position, or `None` when the game is already
    /// over. Blocks for the duration of the search.
    ///
    /// # Panics
    ///
    /// Panics if the search yields no move on a non-full board. The move
    /// enumerator returns every empty cell, so this indicates a defect in
    /// the engine itself, not a recoverable condition.
    pub fn play_search_move(&mut self, algorithm: SearchAlgorithm, depth: u32) -> Option<Pos> {
        let GameState::AwaitingMove(stone) = self.state else {
            return None;
        };

        let (_, best_move) = match algorithm {
            SearchAlgorithm::Minimax => search_minimax(&self.board, depth, true, stone),
            SearchAlgorithm::AlphaBeta => search_alpha_beta(&self.board, depth, true, stone),
        };

        let pos = best_move
            .expect("search returned no move on a non-full board: move enumeration is broken");
        let applied = self.board.apply_move(pos, stone);
        assert!(applied, "search selected an illegal move at {pos:?}");

        self.advance_turn(stone);
        Some(pos)
    }

    /// Terminal check after a confirmed move by `stone`, then hand the
    /// turn over. Win is checked before draw, so a five completed by the
    /// very last stone still wins.
    fn advance_turn(&mut self, stone: Stone) {
        self.state = if has_five_in_row(&self.board, stone) {
            GameState::Terminal(GameResult::Win(stone))
        } else if self.board.is_full() {
            GameState::Terminal(GameResult::Draw)
        } else {
            GameState::AwaitingMove(stone.opponent())
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
