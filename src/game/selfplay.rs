//! Headless computer-vs-computer rounds

use tracing::{debug, info};

use crate::board::Cell;
use crate::engine::AIEngine;
use crate::error::Result;

use super::session::Scoreboard;
use super::state::GameState;

/// Play `rounds` rounds with the engine on both sides.
///
/// Starters alternate the way the interactive session does it: the side
/// that did not make the final move opens the next round.
pub fn self_play(rounds: u32, first: Cell) -> Result<Scoreboard> {
    let mut engine = AIEngine::new();
    let mut scores = Scoreboard::default();
    let mut starter = first;

    for round in 1..=rounds {
        let mut state = GameState::new(starter);
        while !state.is_over() {
            let pos = engine.best_move(state.board(), state.turn())?;
            state = state.play(pos)?;
        }

        if let Some(outcome) = state.outcome() {
            debug!("self-play round {round}:\n{}", state.board());
            scores.record(outcome);
        }
        starter = state.turn();
    }

    info!(
        "self-play finished: X {} - O {} - draws {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_draws_itself() {
        let scores = self_play(4, Cell::X).unwrap();
        assert_eq!(scores.draws, 4);
        assert_eq!(scores.rounds(), 4);
    }

    #[test]
    fn test_zero_rounds() {
        assert_eq!(self_play(0, Cell::O).unwrap(), Scoreboard::default());
    }
}
