//! Collision rules: walls first, then the bird's own body

use std::collections::HashSet;

use super::grid::{Grid, Position};
use super::state::Bird;

/// Classification of a proposed head position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Safe,
    /// Bird left the grid
    Wall,
    /// Bird ran into its own body
    SelfCollision,
}

impl Collision {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Collision::Safe)
    }
}

/// Cells the head may not enter this tick: every segment but the head
///
/// Rebuilt once per tick so membership checks stay O(1) however long
/// the bird grows. The cell the head vacates is never an obstacle.
pub fn obstacle_set(bird: &Bird) -> HashSet<Position> {
    bird.body_segments().copied().collect()
}

/// Classify `proposed_head` against the grid walls and `obstacles`.
///
/// Walls win: an out-of-bounds cell can never be occupied.
pub fn classify(grid: &Grid, proposed_head: Position, obstacles: &HashSet<Position>) -> Collision {
    if !grid.in_bounds(proposed_head) {
        return Collision::Wall;
    }

    if obstacles.contains(&proposed_head) {
        return Collision::SelfCollision;
    }

    Collision::Safe
}
