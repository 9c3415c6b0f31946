//! Grid geometry: positions, bounds and linear cell indexing
//!
//! Cells are numbered row-major, so index `i` lives at
//! `(i % size, i / size)`. Renderers walk the grid in this order.

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the game grid
///
/// Coordinates are signed so that a proposed head one step past an edge
/// is representable and can be classified as a wall collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Square grid of `size` x `size` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        let n = self.size as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// Row-major index of an in-bounds position
    pub fn to_linear_index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos), "{:?} outside the grid", pos);
        pos.y as usize * self.size + pos.x as usize
    }

    /// Inverse of [`Grid::to_linear_index`] for `index < cell_count()`
    pub fn to_coord(&self, index: usize) -> Position {
        debug_assert!(index < self.cell_count());
        Position::new((index % self.size) as i32, (index / self.size) as i32)
    }

    pub fn center(&self) -> Position {
        let c = (self.size / 2) as i32;
        Position::new(c, c)
    }

    /// All cells in linear-index order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count()).map(move |i| self.to_coord(i))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(20)
    }
}
