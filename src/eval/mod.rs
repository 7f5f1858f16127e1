//! Evaluation module for Gomoku positions

pub mod heuristic;

pub use heuristic::evaluate;
