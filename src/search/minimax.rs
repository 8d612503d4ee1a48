//! Depth-limited minimax search
//!
//! This module implements the core search algorithm for the tic-tac-toe AI.
//! It runs plain minimax (no pruning, no caching) on a single working board,
//! placing and removing marks as it walks the tree.
//!
//! # Scoring
//!
//! Scores are seen from the AI's side. A completed line found on entry to a
//! node scores `WIN_SCORE / depth`, positive when the AI made the last move and
//! negative otherwise, so quicker wins and slower losses are preferred. Draws
//! and nodes at the search horizon score 0.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Cell, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(0, 0), Cell::O);
//! board.place(Pos::new(0, 1), Cell::O);
//! board.place(Pos::new(1, 0), Cell::X);
//! board.place(Pos::new(1, 1), Cell::X);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Cell::O).unwrap();
//! assert_eq!(result.best_move, Pos::new(0, 2));
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Cell, Pos};
use crate::error::{Error, Result};
use crate::rules::has_winner;

/// Plies explored below the root before a position is scored as neutral.
///
/// On a 3x3 board this horizon sees every opponent fork before it lands.
pub const MAX_SEARCH_DEPTH: i32 = 4;

/// Magnitude of a win found one ply below the root
pub const WIN_SCORE: i32 = 100;

/// Bound larger than any reachable score
const INF: i32 = 10_000;

/// The two symbols taking part in a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    pub ai: Cell,
    pub human: Cell,
}

impl Sides {
    /// AI plays `ai`, the opponent holds the other symbol
    pub fn new(ai: Cell) -> Self {
        debug_assert!(!ai.is_empty());
        Self {
            ai,
            human: ai.opponent(),
        }
    }
}

/// Best root move and its score. Produced per search and not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Pos,
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// A mark placed for the lifetime of the guard.
///
/// Dropping the guard clears the cell again, so every path out of a
/// recursive call leaves the working board as it found it.
struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, pos: Pos, mark: Cell) -> Self {
        debug_assert!(board.is_empty(pos));
        board.place(pos, mark);
        Self { board, pos }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.remove(self.pos);
    }
}

/// Minimax searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for `ai` on `board`.
    ///
    /// Every empty cell is tried in row-major order and scored with
    /// [`Searcher::minimax`]; the first move with the strictly greatest score
    /// wins ties. The caller's board is never modified.
    ///
    /// # Errors
    ///
    /// [`Error::NoValidMoves`] when the board has no empty cell.
    pub fn search(&mut self, board: &Board, ai: Cell) -> Result<SearchResult> {
        let moves = board.empty_cells();
        let Some(&first) = moves.first() else {
            return Err(Error::NoValidMoves);
        };

        let sides = Sides::new(ai);
        let mut work = *board;
        let mut best_move = first;
        let mut best_score = -INF;
        self.nodes = 0;

        for pos in moves {
            let mut placed = Placement::new(&mut work, pos, sides.ai);
            let score = self.minimax(&mut placed, 1, true, sides);

            if score > best_score {
                best_score = score;
                best_move = pos;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        })
    }

    /// Score `board` from the AI's side.
    ///
    /// `is_maximizing` is true when the AI made the last move, i.e. the
    /// opponent moves next. At such a node the opponent places a mark and
    /// the lowest child score is kept; at the other nodes the AI places and
    /// the highest is kept. The flag flips on every ply.
    ///
    /// The board is returned unchanged.
    pub fn minimax(&mut self, board: &mut Board, depth: i32, is_maximizing: bool, sides: Sides) -> i32 {
        self.nodes += 1;

        if has_winner(board) {
            let score = if is_maximizing { WIN_SCORE } else { -WIN_SCORE };
            return score / depth;
        }

        let moves = board.empty_cells();
        if moves.is_empty() || depth >= MAX_SEARCH_DEPTH {
            return 0;
        }

        let (mut best, mark) = if is_maximizing {
            (INF, sides.human)
        } else {
            (-INF, sides.ai)
        };

        for pos in moves {
            let mut placed = Placement::new(board, pos, mark);
            let score = self.minimax(&mut placed, depth + 1, !is_maximizing, sides);

            let better = if is_maximizing { score < best } else { score > best };
            if better {
                best = score;
            }
        }

        best
    }
}
