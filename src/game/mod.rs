//! Core game logic module
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal shell drives it once per tick and once per input event.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod placer;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::{Axis, Direction};
pub use collision::Collision;
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use grid::{Grid, Position};
pub use placer::ItemPlacer;
pub use snapshot::{CellKind, Snapshot};
pub use state::{Bird, GameState, Phase};
