//! Main AI engine combining the opening heuristic with minimax
//!
//! The engine answers "where should the computer play" for a given board:
//!
//! 1. **Opening**: on the AI's first or second move (8 or 7 empty cells)
//!    with the center free, play the center without searching
//! 2. **Minimax**: otherwise run the depth-limited search over every empty cell
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Cell, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//!
//! // Human opens in a corner
//! board.place(Pos::new(0, 0), Cell::X);
//!
//! let result = engine.get_move_with_stats(&board, Cell::O).unwrap();
//! assert_eq!(result.best_move, Pos::CENTER);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Cell, Pos};
use crate::error::Result;
use crate::search::{SearchResult, Searcher};

/// Empty-cell counts on which the opening heuristic applies
const OPENING_EMPTY_COUNTS: [usize; 2] = [8, 7];

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Center taken by the opening heuristic
    Opening,
    /// Full minimax search
    Minimax,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Minimax score of the move, 0 for an opening move
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_minimax(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Minimax,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// AI engine for the computer player.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best move for `ai` on the given board.
    ///
    /// The opponent is assumed to hold the other symbol.
    ///
    /// # Errors
    ///
    /// [`Error::NoValidMoves`](crate::Error::NoValidMoves) on a full board.
    /// Callers are expected to check for a finished round first.
    pub fn best_move(&mut self, board: &Board, ai: Cell) -> Result<Pos> {
        self.get_move_with_stats(board, ai).map(|result| result.best_move)
    }

    /// Get the best move with search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, ai: Cell) -> Result<MoveResult> {
        let start = Instant::now();

        if let Some(pos) = self.get_opening_move(board) {
            return Ok(MoveResult::opening(pos, start.elapsed().as_millis() as u64));
        }

        let result = self.searcher.search(board, ai)?;
        Ok(MoveResult::from_minimax(result, start.elapsed().as_millis() as u64))
    }

    /// Center on the AI's first or second move, if it is still free.
    fn get_opening_move(&self, board: &Board) -> Option<Pos> {
        let empty = board.empty_count();
        if OPENING_EMPTY_COUNTS.contains(&empty) && board.is_empty(Pos::CENTER) {
            Some(Pos::CENTER)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use Cell::{Empty as E, O, X};

    #[test]
    fn test_opening_after_corner() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        board.place(Pos::new(0, 0), X);

        let result = engine.get_move_with_stats(&board, O).unwrap();
        assert_eq!(result.best_move, Pos::CENTER);
        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_opening_on_second_move() {
        // AI opened in a corner, human answered on an edge
        let mut engine = AIEngine::new();
        let board = Board::from_rows([[O, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(engine.best_move(&board, O), Ok(Pos::CENTER));
    }

    #[test]
    fn test_no_opening_when_center_taken() {
        let mut engine = AIEngine::new();
        let board = Board::from_rows([[E, E, E], [E, X, E], [E, E, E]]);

        let result = engine.get_move_with_stats(&board, O).unwrap();
        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.best_move, Pos::new(0, 0));
    }

    #[test]
    fn test_empty_board_searches() {
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&Board::new(), O).unwrap();
        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.best_move, Pos::new(0, 0));
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut engine = AIEngine::new();
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);

        let result = engine.get_move_with_stats(&board, O).unwrap();
        assert_eq!(result.best_move, Pos::new(1, 2));
        assert_eq!(result.search_type, SearchType::Minimax);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut engine = AIEngine::new();
        let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]);
        assert_eq!(engine.best_move(&board, O), Ok(Pos::new(0, 2)));
    }

    #[test]
    fn test_engine_full_board() {
        let mut engine = AIEngine::new();
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(engine.best_move(&board, O), Err(Error::NoValidMoves));
    }

    /// Play the AI against every possible human reply sequence.
    fn assert_never_loses(board: &mut Board, to_move: Cell, ai: Cell, engine: &mut AIEngine) {
        if let Some(winner) = crate::rules::check_winner(board) {
            assert_eq!(winner, ai, "AI lost on\n{board}");
            return;
        }
        if board.is_full() {
            return;
        }

        if to_move == ai {
            let pos = engine.best_move(board, ai).unwrap();
            board.place(pos, ai);
            assert_never_loses(board, ai.opponent(), ai, engine);
            board.remove(pos);
        } else {
            for pos in board.empty_cells() {
                board.place(pos, to_move);
                assert_never_loses(board, ai, ai, engine);
                board.remove(pos);
            }
        }
    }

    #[test]
    fn test_ai_never_loses() {
        let mut engine = AIEngine::new();
        for ai in [X, O] {
            for first in [X, O] {
                let mut board = Board::new();
                assert_never_loses(&mut board, first, ai, &mut engine);
            }
        }
    }
}
