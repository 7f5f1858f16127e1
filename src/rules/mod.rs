//! Game rules for freestyle Gomoku
//!
//! This module implements the win condition: five or more stones of one
//! color in a row, column or diagonal. There are no captures and no
//! forbidden moves in this rule set.

pub mod win;

// Re-exports for convenient access
pub use win::has_five_in_row;
