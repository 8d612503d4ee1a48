//! Tic-tac-toe with a minimax computer opponent
//!
//! A 3x3 tic-tac-toe game for one player against the computer or two
//! players sharing the mouse:
//! - Three in a row (row, column or diagonal) wins
//! - A full board with no line is a draw
//! - The side that did not make the final move opens the next round
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation
//! - [`rules`]: Win and draw detection
//! - [`search`]: Depth-limited minimax
//! - [`engine`]: AI engine (opening heuristic over the search)
//! - [`game`]: Round state, turn driver and render events
//! - [`config`]: Command-line options
//! - [`ui`]: eframe/egui frontend
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Cell, GameState, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut state = GameState::new(Cell::X);
//!
//! state = state.play(Pos::new(0, 0)).unwrap();
//!
//! // AI responds as O
//! let pos = engine.best_move(state.board(), Cell::O).unwrap();
//! state = state.play(pos).unwrap();
//! assert_eq!(pos, Pos::CENTER);
//! assert_eq!(state.moves_left(), 7);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{Error, MoveRejection, Result};
pub use game::{GameEvent, GameMode, GameState, Session};
