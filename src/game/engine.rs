//! The tick transition and game setup
//!
//! [`GameEngine::tick`] is total: every state and direction yields a valid
//! next state, with `is_over` as the only terminal flag.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    action::Direction,
    collision::{self, Collision},
    config::GameConfig,
    grid::Grid,
    placer::ItemPlacer,
    state::{Bird, GameState},
};

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or over; nothing changed
    Idle,
    /// Bird moved one cell, length unchanged
    Moved,
    /// Bird ate the item and grew by one
    Ate,
    /// Bird hit a wall or itself; the game is over
    Collided(Collision),
}

/// The game engine that owns the rules and the random source
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    placer: ItemPlacer,
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameEngine {
    /// Create a new game engine; a `None` seed draws one from the OS
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let grid = config.grid();
        let placer = ItemPlacer::new(grid, config.max_placement_attempts, config.fallback_item);

        tracing::debug!(seed, grid_size = config.grid_size, "game engine created");

        Self {
            config,
            grid,
            placer,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Seed the random source was built from, for replaying a run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build the initial configuration: one-cell bird, fresh item, base speed
    pub fn reset(&mut self) -> GameState {
        let bird = Bird::new(self.config.initial_head);
        let item = self.placer.place(&bird.occupied(), &mut self.rng);

        GameState::new(
            bird,
            item,
            self.config.initial_direction,
            self.config.initial_tick_ms,
        )
    }

    /// Advance the state by one tick in the committed `direction`.
    ///
    /// Total over every input: a paused or finished game is left untouched
    /// and a collision only sets `is_over`.
    pub fn tick(&mut self, state: &mut GameState, direction: Direction) -> TickOutcome {
        if state.is_over || state.is_paused {
            return TickOutcome::Idle;
        }

        let proposed = state.bird.head().moved_in_direction(direction);
        let obstacles = collision::obstacle_set(&state.bird);

        let verdict = collision::classify(&self.grid, proposed, &obstacles);
        if verdict.is_fatal() {
            state.is_over = true;
            tracing::info!(
                collision = ?verdict,
                head = ?proposed,
                score = state.score,
                length = state.bird.len(),
                "game over"
            );
            return TickOutcome::Collided(verdict);
        }

        state.direction = direction;

        let ate = proposed == state.item;
        state.bird.advance(proposed, ate);

        if !ate {
            return TickOutcome::Moved;
        }

        state.item = self.placer.place(&state.bird.occupied(), &mut self.rng);
        state.score += 1;
        state.tick_interval_ms = state
            .tick_interval_ms
            .saturating_sub(self.config.speed_step_ms)
            .max(self.config.min_tick_ms);

        tracing::debug!(
            score = state.score,
            length = state.bird.len(),
            tick_interval_ms = state.tick_interval_ms,
            next_item = ?state.item,
            "item eaten"
        );

        TickOutcome::Ate
    }
}
