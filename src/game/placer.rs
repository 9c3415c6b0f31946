//! Item placement by bounded rejection sampling
//!
//! Draws uniform cells until one is free, giving up after a fixed number of
//! attempts and returning a fixed fallback cell instead. The fallback may
//! land on the bird; that only happens when the grid is nearly full and is
//! preferred over spinning forever.

use std::collections::HashSet;

use rand::Rng;

use super::grid::{Grid, Position};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_FALLBACK: Position = Position { x: 15, y: 15 };

#[derive(Debug, Clone)]
pub struct ItemPlacer {
    grid: Grid,
    max_attempts: u32,
    fallback: Position,
}

impl ItemPlacer {
    pub fn new(grid: Grid, max_attempts: u32, fallback: Position) -> Self {
        Self {
            grid,
            max_attempts,
            fallback,
        }
    }

    /// Pick a cell outside `occupied`, or the fallback once attempts run out
    pub fn place<R: Rng + ?Sized>(&self, occupied: &HashSet<Position>, rng: &mut R) -> Position {
        let n = self.grid.size() as i32;

        for _ in 0..self.max_attempts {
            let candidate = Position::new(rng.gen_range(0..n), rng.gen_range(0..n));
            if !occupied.contains(&candidate) {
                return candidate;
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            occupied = occupied.len(),
            fallback = ?self.fallback,
            "item placement exhausted, using fallback cell"
        );
        self.fallback
    }
}

impl Default for ItemPlacer {
    fn default() -> Self {
        Self::new(Grid::default(), DEFAULT_MAX_ATTEMPTS, DEFAULT_FALLBACK)
    }
}
