//! Turn driver: who moves, when the computer plays, and how rounds roll over

use std::time::Duration;

use tracing::{debug, error, info, instrument};

use crate::board::{Cell, Pos};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::rules::Outcome;

use super::event::GameEvent;
use super::layout::cell_at;
use super::state::GameState;

/// Who sits at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the computer playing `ai`
    SinglePlayer { ai: Cell },
    /// Two humans (hotseat)
    TwoPlayer,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::SinglePlayer { ai: Cell::O }
    }
}

/// Pointer state polled once per cycle.
///
/// Positions are relative to the board surface's top-left corner.
pub trait PointerInput {
    fn pointer_position(&self) -> Option<(f32, f32)>;
    fn pointer_just_pressed(&self) -> bool;
}

/// Round results across the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win { winner: Cell::X, .. } => self.x_wins += 1,
            Outcome::Win { winner: Cell::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Win { winner: Cell::Empty, line } => {
                error!("win on {line:?} has no owner; not counted");
            }
        }
    }

    pub fn wins(&self, mark: Cell) -> u32 {
        match mark {
            Cell::X => self.x_wins,
            Cell::O => self.o_wins,
            Cell::Empty => 0,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A sequence of rounds between two sides.
///
/// The session is the only writer of the current [`GameState`]; every
/// accepted move replaces it in one step.
pub struct Session {
    mode: GameMode,
    state: GameState,
    engine: AIEngine,
    scores: Scoreboard,
    round: u32,
    next_first: Cell,
    pause: Duration,
    last_ai_result: Option<MoveResult>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            mode: config.mode,
            state: GameState::new(config.first),
            engine: AIEngine::new(),
            scores: Scoreboard::default(),
            round: 1,
            next_first: config.first,
            pause: config.pause,
            last_ai_result: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// 1-based round counter
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Symbol that will open the next round
    pub fn next_first(&self) -> Cell {
        self.next_first
    }

    /// Check if it's the computer's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::SinglePlayer { ai } => !self.state.is_over() && self.state.turn() == ai,
            GameMode::TwoPlayer => false,
        }
    }

    /// Check if a human may move now
    pub fn is_human_turn(&self) -> bool {
        !self.state.is_over() && !self.is_ai_turn()
    }

    /// Once-per-cycle hook: plays the computer's move when it is due
    pub fn step(&mut self) -> Vec<GameEvent> {
        if self.is_ai_turn() {
            self.play_ai_turn()
        } else {
            Vec::new()
        }
    }

    /// Map a pointer press to a cell and play it
    pub fn poll_pointer(&mut self, input: &impl PointerInput, width: f32, height: f32) -> Vec<GameEvent> {
        if !input.pointer_just_pressed() {
            return Vec::new();
        }
        match input
            .pointer_position()
            .and_then(|(x, y)| cell_at(x, y, width, height))
        {
            Some(pos) => self.click(pos),
            None => Vec::new(),
        }
    }

    /// Human move at `pos`. Illegal clicks are ignored.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn click(&mut self, pos: Pos) -> Vec<GameEvent> {
        if !self.is_human_turn() {
            debug!("click ignored: not a human turn");
            return Vec::new();
        }

        match self.state.play(pos) {
            Ok(next) => self.commit(next),
            Err(e) => {
                debug!("click ignored: {e}");
                Vec::new()
            }
        }
    }

    /// Run the search once and play its move
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_ai_turn(&mut self) -> Vec<GameEvent> {
        let GameMode::SinglePlayer { ai } = self.mode else {
            return Vec::new();
        };
        if !self.is_ai_turn() {
            return Vec::new();
        }

        let result = match self.engine.get_move_with_stats(self.state.board(), ai) {
            Ok(result) => result,
            Err(e) => {
                error!("search failed on an open round: {e}");
                return Vec::new();
            }
        };
        info!(
            "AI plays {} ({:?}, score {}, {} nodes, {}ms)",
            result.best_move, result.search_type, result.score, result.nodes, result.time_ms
        );

        let played = self.state.play(result.best_move);
        self.last_ai_result = Some(result);
        match played {
            Ok(next) => self.commit(next),
            Err(e) => {
                error!("search chose an illegal move: {e}");
                Vec::new()
            }
        }
    }

    /// Replace the state and describe what changed
    fn commit(&mut self, next: GameState) -> Vec<GameEvent> {
        let mover = self.state.turn();
        self.state = next;

        let mut events = Vec::with_capacity(4);
        if let Some(pos) = next.last_move() {
            debug!("{} placed at {pos}", mover.symbol());
            events.push(GameEvent::PlaceMark { pos, mark: mover });
        }

        if let Some(outcome) = next.outcome() {
            if let Outcome::Win { winner, line } = outcome {
                events.push(GameEvent::HighlightLine { line, mark: winner });
            }
            self.scores.record(outcome);
            // The side that did not make the final move opens the next round
            self.next_first = next.turn();
            info!(
                "round {} over: {outcome:?} (X {} - O {} - draws {})",
                self.round, self.scores.x_wins, self.scores.o_wins, self.scores.draws
            );
            events.push(GameEvent::RoundOver { outcome });
            events.push(GameEvent::Pause { duration: self.pause });
        }

        events
    }

    /// Discard the current round and start a fresh one.
    ///
    /// Called by the driver once the round-end pause has elapsed, or to
    /// abandon a round in progress.
    pub fn start_next_round(&mut self) -> Vec<GameEvent> {
        let first = self.next_first;
        self.state = GameState::new(first);
        self.round += 1;
        info!("round {} starts, {} to move", self.round, first.symbol());
        vec![GameEvent::ResetBoard { first }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{LineKind, WinningLine};

    fn two_player(first: Cell) -> Session {
        Session::new(&GameConfig {
            mode: GameMode::TwoPlayer,
            first,
            ..GameConfig::default()
        })
    }

    fn play(session: &mut Session, moves: &[(u8, u8)]) -> Vec<GameEvent> {
        let mut last = Vec::new();
        for &(r, c) in moves {
            last = session.click(Pos::new(r, c));
            assert!(!last.is_empty(), "move ({r}, {c}) rejected");
        }
        last
    }

    struct FakePointer {
        at: Option<(f32, f32)>,
        pressed: bool,
    }

    impl PointerInput for FakePointer {
        fn pointer_position(&self) -> Option<(f32, f32)> {
            self.at
        }

        fn pointer_just_pressed(&self) -> bool {
            self.pressed
        }
    }

    #[test]
    fn test_ai_opens_first_round() {
        let mut session = Session::new(&GameConfig::default());
        assert!(session.is_ai_turn());
        assert!(session.click(Pos::new(0, 0)).is_empty());

        let events = session.step();
        assert_eq!(
            events,
            vec![GameEvent::PlaceMark {
                pos: Pos::new(0, 0),
                mark: Cell::O,
            }]
        );
        assert!(session.is_human_turn());
        assert!(session.last_ai_result().is_some());
        assert!(session.step().is_empty());
    }

    #[test]
    fn test_human_then_ai_center() {
        let config = GameConfig {
            first: Cell::X,
            ..GameConfig::default()
        };
        let mut session = Session::new(&config);

        let events = session.click(Pos::new(2, 2));
        assert_eq!(
            events,
            vec![GameEvent::PlaceMark {
                pos: Pos::new(2, 2),
                mark: Cell::X,
            }]
        );
        let events = session.step();
        assert_eq!(
            events,
            vec![GameEvent::PlaceMark {
                pos: Pos::CENTER,
                mark: Cell::O,
            }]
        );
    }

    #[test]
    fn test_occupied_click_is_noop() {
        let mut session = two_player(Cell::X);
        play(&mut session, &[(0, 0)]);
        let before = *session.state();

        assert!(session.click(Pos::new(0, 0)).is_empty());
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_win_events_and_next_starter() {
        let mut session = two_player(Cell::X);
        let events = play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        let line = WinningLine::new(LineKind::Row, 0);
        let outcome = Outcome::Win { winner: Cell::X, line };
        assert_eq!(
            events,
            vec![
                GameEvent::PlaceMark { pos: Pos::new(0, 2), mark: Cell::X },
                GameEvent::HighlightLine { line, mark: Cell::X },
                GameEvent::RoundOver { outcome },
                GameEvent::Pause { duration: Duration::from_secs(1) },
            ]
        );
        assert_eq!(session.scores().wins(Cell::X), 1);
        assert!(!session.is_human_turn());
        assert!(session.click(Pos::new(2, 2)).is_empty());

        // Loser opens the next round
        assert_eq!(session.next_first(), Cell::O);
        let events = session.start_next_round();
        assert_eq!(events, vec![GameEvent::ResetBoard { first: Cell::O }]);
        assert_eq!(session.round(), 2);
        assert_eq!(session.state().turn(), Cell::O);
        assert_eq!(session.state().moves_left(), 9);
    }

    #[test]
    fn test_draw_alternates_starter() {
        let mut session = two_player(Cell::X);
        let events = play(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(events.len(), 3);
        assert_eq!(events[1], GameEvent::RoundOver { outcome: Outcome::Draw });
        assert_eq!(session.scores().draws, 1);
        assert_eq!(session.next_first(), Cell::O);
    }

    #[test]
    fn test_restart_mid_round_keeps_starter() {
        let mut session = two_player(Cell::X);
        play(&mut session, &[(1, 1), (0, 0)]);

        session.start_next_round();
        assert_eq!(session.state().turn(), Cell::X);
        assert!(session.state().board().is_board_empty());
        assert_eq!(session.scores().rounds(), 0);
    }

    #[test]
    fn test_pointer_maps_to_cell() {
        let mut session = two_player(Cell::X);

        let idle = FakePointer { at: Some((450.0, 50.0)), pressed: false };
        assert!(session.poll_pointer(&idle, 600.0, 600.0).is_empty());

        let outside = FakePointer { at: Some((700.0, 50.0)), pressed: true };
        assert!(session.poll_pointer(&outside, 600.0, 600.0).is_empty());

        let press = FakePointer { at: Some((450.0, 50.0)), pressed: true };
        let events = session.poll_pointer(&press, 600.0, 600.0);
        assert_eq!(
            events,
            vec![GameEvent::PlaceMark { pos: Pos::new(0, 2), mark: Cell::X }]
        );
    }

    #[test]
    fn test_scoreboard_skips_ownerless_win() {
        let line = WinningLine::new(LineKind::Diagonal, 1);
        let mut scores = Scoreboard::default();

        scores.record(Outcome::Win { winner: Cell::Empty, line });
        assert_eq!(scores, Scoreboard::default());

        scores.record(Outcome::Win { winner: Cell::O, line });
        scores.record(Outcome::Draw);
        assert_eq!(scores.wins(Cell::O), 1);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.rounds(), 2);
    }

    #[test]
    fn test_two_player_never_runs_ai() {
        let mut session = two_player(Cell::O);
        assert!(!session.is_ai_turn());
        assert!(session.step().is_empty());
        assert!(session.play_ai_turn().is_empty());
    }

    #[test]
    fn test_ai_round_completes() {
        let mut session = Session::new(&GameConfig::default());
        let mut rounds_over = 0;

        // Human always takes the first free cell
        for _ in 0..9 {
            let mut events = session.step();
            if !session.state().is_over() {
                let pos = session.state().empty_cells()[0];
                events.extend(session.click(pos));
            }
            rounds_over += events
                .iter()
                .filter(|e| matches!(e, GameEvent::RoundOver { .. }))
                .count();
            if session.state().is_over() {
                break;
            }
        }

        assert_eq!(rounds_over, 1);
        assert_eq!(session.scores().rounds(), 1);
        assert_eq!(session.scores().wins(Cell::X), 0);
    }
}
