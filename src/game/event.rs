//! Directives emitted by the session for the renderer and the driver

use std::time::Duration;

use crate::board::{Cell, Pos};
use crate::rules::{Outcome, WinningLine};

/// What happened, in the order it happened.
///
/// The renderer consumes these with an exhaustive `match`; the driver acts
/// on `Pause` and later asks the session for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed
    PlaceMark { pos: Pos, mark: Cell },
    /// A line was completed by `mark`
    HighlightLine { line: WinningLine, mark: Cell },
    /// The round has finished
    RoundOver { outcome: Outcome },
    /// Hold the final board on screen before the next round
    Pause { duration: Duration },
    /// A new round started with an empty board and `first` to move
    ResetBoard { first: Cell },
}
