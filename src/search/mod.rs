//! Search module for the tic-tac-toe AI
//!
//! Contains depth-limited minimax with scoped place/undo on one board.

pub mod minimax;

pub use minimax::{SearchResult, Searcher, Sides, MAX_SEARCH_DEPTH, WIN_SCORE};
