//! A single play session: game state, rules and input in one owner
//!
//! The shell calls [`Session::tick`] on every timer fire and
//! [`Session::apply`] on every input event, both on the same task. Each
//! call returns a [`TimerDirective`] telling the shell whether its tick
//! timer must be rescheduled or stopped.

use std::time::Duration;

use crate::game::{Direction, GameConfig, GameEngine, GameState, Grid, Phase, Snapshot, TickOutcome};
use crate::input::{Command, InputEvent, InputMapper};

/// What the shell should do with its tick timer after a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    /// Cadence unchanged
    Keep,
    /// Clear the timer and start a new one with this period
    Reschedule(Duration),
    /// Paused or over: no ticks until told otherwise
    Stop,
}

pub struct Session {
    engine: GameEngine,
    state: GameState,
    mapper: InputMapper,
}

impl Session {
    /// Start a fresh game
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut engine = GameEngine::new(config, seed);
        let state = engine.reset();
        Self::from_parts(engine, state)
    }

    /// Resume from an arbitrary state; the committed direction starts as
    /// the state's current heading
    pub fn with_state(config: GameConfig, seed: Option<u64>, state: GameState) -> Self {
        Self::from_parts(GameEngine::new(config, seed), state)
    }

    fn from_parts(engine: GameEngine, state: GameState) -> Self {
        let mapper = InputMapper::resuming(engine.config().initial_direction, state.direction);
        Self {
            engine,
            state,
            mapper,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn grid(&self) -> Grid {
        self.engine.grid()
    }

    pub fn seed(&self) -> u64 {
        self.engine.seed()
    }

    /// Direction the next tick will apply
    pub fn committed_direction(&self) -> Direction {
        self.mapper.committed()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.tick_interval_ms)
    }

    /// Timer setting matching the current state
    pub fn timer(&self) -> TimerDirective {
        match self.phase() {
            Phase::Running => TimerDirective::Reschedule(self.tick_interval()),
            Phase::Paused | Phase::Over => TimerDirective::Stop,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.engine.grid(), &self.state)
    }

    /// Advance one tick with the committed direction
    pub fn tick(&mut self) -> (TickOutcome, TimerDirective) {
        let before = self.cadence();
        let outcome = self.engine.tick(&mut self.state, self.mapper.committed());
        (outcome, self.directive_since(before))
    }

    /// Apply one normalized input event
    pub fn apply(&mut self, event: InputEvent) -> (Command, TimerDirective) {
        let before = self.cadence();
        let command = self
            .mapper
            .resolve(self.state.phase(), self.state.direction, event);

        match command {
            Command::Turn(direction) => {
                tracing::trace!(?direction, "turn committed");
            }
            Command::TogglePause => {
                self.state.is_paused = !self.state.is_paused;
                tracing::debug!(paused = self.state.is_paused, "pause toggled");
            }
            Command::Resume => {
                self.state.is_paused = false;
                tracing::debug!("resumed");
            }
            Command::Restart => {
                self.restart();
                return (command, self.timer());
            }
            Command::Ignore => {}
        }

        (command, self.directive_since(before))
    }

    /// Throw away the current game and start over from the initial setup
    pub fn restart(&mut self) {
        tracing::info!(
            final_score = self.state.score,
            was_over = self.state.is_over,
            "restarting game"
        );
        self.state = self.engine.reset();
        self.mapper.reset();
    }

    fn cadence(&self) -> (Phase, u64) {
        (self.state.phase(), self.state.tick_interval_ms)
    }

    fn directive_since(&self, before: (Phase, u64)) -> TimerDirective {
        if self.cadence() == before {
            TimerDirective::Keep
        } else {
            self.timer()
        }
    }
}
