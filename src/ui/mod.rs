//! GUI module for the tic-tac-toe game
//!
//! Native rendering with egui/eframe. The board view draws only what the
//! game events tell it; the app drives the session once per frame.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use board_view::{BoardInput, BoardView, Canvas};
