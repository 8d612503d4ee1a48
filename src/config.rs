//! Command-line options and the game configuration they produce

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::board::Cell;
use crate::game::GameMode;

/// Tic-tac-toe against a minimax computer player, or against a friend
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Two people take turns with the mouse; no computer player
    #[arg(long)]
    pub two_player: bool,

    /// Symbol played by the computer (in two-player mode: the second seat)
    #[arg(long, value_enum, default_value_t = Symbol::O)]
    pub ai_symbol: Symbol,

    /// Who moves first in the opening round
    #[arg(long, value_enum, default_value_t = Starter::Ai)]
    pub first: Starter,

    /// Pause after a round ends, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub pause_ms: u64,

    /// Edge length of the square board area, in points
    #[arg(long, default_value_t = 600.0)]
    pub window_size: f32,

    /// Play this many computer-vs-computer rounds without a window and print the tally
    #[arg(long, value_name = "ROUNDS")]
    pub self_play: Option<u32>,
}

/// Player symbol as accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    X,
    O,
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Cell {
        match symbol {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

/// Side that opens the first round
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Starter {
    Ai,
    Human,
}

impl Starter {
    /// Symbol that opens when the computer plays `ai`
    pub fn side(self, ai: Cell) -> Cell {
        match self {
            Starter::Ai => ai,
            Starter::Human => ai.opponent(),
        }
    }
}

/// Settings for a game session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Symbol that moves first in the opening round
    pub first: Cell,
    /// Seat that `first` was derived from
    pub starter: Starter,
    /// Round-end pause before the board resets
    pub pause: Duration,
    pub window_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer { ai: Cell::O },
            first: Cell::O,
            starter: Starter::Ai,
            pause: Duration::from_secs(1),
            window_size: 600.0,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        let ai: Cell = self.ai_symbol.into();
        let mode = if self.two_player {
            GameMode::TwoPlayer
        } else {
            GameMode::SinglePlayer { ai }
        };
        GameConfig {
            mode,
            first: self.first.side(ai),
            starter: self.first,
            pause: Duration::from_millis(self.pause_ms),
            window_size: self.window_size,
        }
    }
}

impl GameConfig {
    /// Same settings under another mode.
    ///
    /// In single-player mode the opening side follows the computer's new
    /// symbol; two-player mode keeps the current opening symbol.
    pub fn with_mode(self, mode: GameMode) -> Self {
        let first = match mode {
            GameMode::SinglePlayer { ai } => self.starter.side(ai),
            GameMode::TwoPlayer => self.first,
        };
        Self { mode, first, ..self }
    }
}
