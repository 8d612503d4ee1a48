//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Win conditions (three in a row on any of the 8 lines)
//! - Draw detection and the combined terminal check

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::{check_outcome, is_draw, Outcome};
pub use win::{check_winner, detect_winner, has_winner, LineKind, WinningLine, LINES};
