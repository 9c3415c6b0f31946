//! Read-only view of a game handed to the presentation layer

use super::grid::Grid;
use super::state::GameState;

/// Score at which the progress bar reads full
pub const SCORE_BAR_TARGET: u32 = 50;

/// What a single grid cell shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Empty,
    Head,
    Body,
    Item,
}

/// Per-cell classification plus the status flags a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid_size: usize,
    /// Cells in row-major order, `grid_size * grid_size` long
    pub cells: Vec<CellKind>,
    pub score: u32,
    pub length: usize,
    pub tick_interval_ms: u64,
    pub is_over: bool,
    pub is_paused: bool,
}

impl Snapshot {
    /// Classify every cell; head beats body beats item
    pub fn capture(grid: &Grid, state: &GameState) -> Self {
        let mut cells = vec![CellKind::Empty; grid.cell_count()];

        if grid.in_bounds(state.item) {
            cells[grid.to_linear_index(state.item)] = CellKind::Item;
        }
        for segment in state.bird.body_segments() {
            cells[grid.to_linear_index(*segment)] = CellKind::Body;
        }
        cells[grid.to_linear_index(state.bird.head())] = CellKind::Head;

        Self {
            grid_size: grid.size(),
            cells,
            score: state.score,
            length: state.bird.len(),
            tick_interval_ms: state.tick_interval_ms,
            is_over: state.is_over,
            is_paused: state.is_paused,
        }
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.grid_size)
    }

    /// Fill ratio of the score bar, clamped to 1.0
    pub fn score_ratio(&self) -> f64 {
        (f64::from(self.score) / f64::from(SCORE_BAR_TARGET)).min(1.0)
    }
}
