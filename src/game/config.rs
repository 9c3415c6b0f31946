use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::Direction;
use super::grid::{Grid, Position};
use super::placer::{DEFAULT_FALLBACK, DEFAULT_MAX_ATTEMPTS};

/// Largest accepted grid side; keeps coordinates within `i32` and the
/// rendered board within terminal dimensions
pub const MAX_GRID_SIZE: usize = 200;

/// Reasons a [`GameConfig`] is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid_size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("grid_size must be at most 200, got {0}")]
    GridTooLarge(usize),
    #[error("min_tick_ms must be positive")]
    ZeroFloor,
    #[error("min_tick_ms ({floor}) cannot exceed initial_tick_ms ({initial})")]
    FloorAboveInitial { floor: u64, initial: u64 },
    #[error("max_placement_attempts must be at least 1")]
    NoPlacementAttempts,
    #[error("{field} {pos:?} lies outside the {size}x{size} grid")]
    OutOfGrid {
        field: &'static str,
        pos: Position,
        size: usize,
    },
    #[error("swipe_threshold must be a non-negative number, got {0}")]
    BadSwipeThreshold(f32),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square grid
    pub grid_size: usize,
    /// Where the one-cell bird starts
    pub initial_head: Position,
    pub initial_direction: Direction,

    // Speed
    /// Tick period at the start of a game
    pub initial_tick_ms: u64,
    /// Tick period never drops below this
    pub min_tick_ms: u64,
    /// Tick period shrinks by this much per item eaten
    pub speed_step_ms: u64,

    // Item placement
    pub max_placement_attempts: u32,
    /// Cell used when every placement attempt hits the bird
    pub fallback_item: Position,

    /// Minimum drag distance for a swipe to count as a turn
    pub swipe_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let grid = Grid::default();
        Self {
            grid_size: grid.size(),
            initial_head: grid.center(),
            initial_direction: Direction::Right,
            initial_tick_ms: 150,
            min_tick_ms: 80,
            speed_step_ms: 2,
            max_placement_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback_item: DEFAULT_FALLBACK,
            swipe_threshold: 30.0,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }

        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }

        if self.min_tick_ms == 0 {
            return Err(ConfigError::ZeroFloor);
        }

        if self.min_tick_ms > self.initial_tick_ms {
            return Err(ConfigError::FloorAboveInitial {
                floor: self.min_tick_ms,
                initial: self.initial_tick_ms,
            });
        }

        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }

        let grid = self.grid();
        for (field, pos) in [
            ("initial_head", self.initial_head),
            ("fallback_item", self.fallback_item),
        ] {
            if !grid.in_bounds(pos) {
                return Err(ConfigError::OutOfGrid {
                    field,
                    pos,
                    size: self.grid_size,
                });
            }
        }

        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigError::BadSwipeThreshold(self.swipe_threshold));
        }

        Ok(())
    }
}
