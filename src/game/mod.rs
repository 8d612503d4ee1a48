//! Game flow: round state, turn driver and the events they emit
//!
//! - [`state`]: `GameState` value with pure move application
//! - [`session`]: turn driver (human clicks, computer turns, round rollover)
//! - [`event`]: directives for the renderer and the driver
//! - [`layout`]: surface pixels to board cells
//! - [`selfplay`]: headless engine-vs-engine rounds

pub mod event;
pub mod layout;
pub mod selfplay;
pub mod session;
pub mod state;

pub use event::GameEvent;
pub use layout::{cell_at, cell_bounds};
pub use selfplay::self_play;
pub use session::{GameMode, PointerInput, Scoreboard, Session};
pub use state::{GameState, Status};
