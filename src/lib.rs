//! Gomoku minimax engine
//!
//! A two-player "five in a row" engine on a 15x15 grid, built as the pure
//! core behind interchangeable front ends: a console loop and a canvas GUI
//! drive it through the same handful of operations. Rendering, input
//! capture and turn scheduling live entirely in the front ends; the crate
//! holds no presentation state.
//!
//! # Architecture
//!
//! - [`board`]: bitboard representation, move application, move enumeration
//! - [`rules`]: five-in-a-row win detection
//! - [`eval`]: heuristic scoring for non-terminal positions
//! - [`search`]: minimax and alpha-beta move selection
//! - [`engine`]: turn-based game controller
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, GameResult, Pos, SearchAlgorithm};
//!
//! let mut game = Game::new();
//!
//! // Human move, validated by the controller
//! assert!(game.play_move(Pos::new(7, 7)));
//!
//! // AI picks its reply with alpha-beta at depth 2
//! let reply = game.play_search_move(SearchAlgorithm::AlphaBeta, 2);
//! println!("AI played {:?}", reply);
//! assert_eq!(game.result(), GameResult::InProgress);
//! ```
//!
//! # Search
//!
//! Both searches enumerate every empty cell in row-major order and
//! simulate each candidate on a clone of the board, so the live board is
//! never mutated by lookahead and results are reproducible from identical
//! positions. Alpha-beta returns exactly the same `(score, move)` pair as
//! plain minimax; pruning only reduces the number of branches visited.
//! Searches block until done and are not reentrant on a shared live board.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{Game, GameResult, GameState, SearchAlgorithm};
pub use search::{search_alpha_beta, search_minimax, WIN_SCORE};
