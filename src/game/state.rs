//! Bird body and the complete game state

use std::collections::{HashSet, VecDeque};

use super::action::Direction;
use super::grid::Position;

/// The bird: an ordered run of cells with the head at the front
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    body: VecDeque<Position>,
}

impl Bird {
    /// Create a one-cell bird at `head`
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a bird from explicit segments, head first
    ///
    /// Returns `None` for an empty slice or when two segments overlap.
    pub fn from_segments(segments: &[Position]) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let unique: HashSet<_> = segments.iter().collect();
        if unique.len() != segments.len() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter().skip(1)
    }

    /// All segments, head first
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Push a new head; the tail is kept when `grow` is true
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Set of every occupied cell, head included
    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Get the length of the bird
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a bird built through the public constructors
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Coarse lifecycle phase derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Over,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub bird: Bird,
    pub item: Position,
    /// Direction applied by the most recent tick
    pub direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub is_over: bool,
    pub is_paused: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(bird: Bird, item: Position, direction: Direction, tick_interval_ms: u64) -> Self {
        Self {
            bird,
            item,
            direction,
            score: 0,
            tick_interval_ms,
            is_over: false,
            is_paused: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_over {
            Phase::Over
        } else if self.is_paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(bird: &Bird) -> Position {
        *bird.segments().last().unwrap()
    }

    #[test]
    fn test_bird_creation() {
        let bird = Bird::new(Position::new(10, 10));
        assert_eq!(bird.len(), 1);
        assert_eq!(bird.head(), Position::new(10, 10));
        assert_eq!(tail(&bird), Position::new(10, 10));
        assert_eq!(bird.body_segments().count(), 0);
    }

    #[test]
    fn test_from_segments_rejects_overlap_and_empty() {
        assert!(Bird::from_segments(&[]).is_none());
        assert!(Bird::from_segments(&[Position::new(1, 1), Position::new(1, 1)]).is_none());

        let bird = Bird::from_segments(&[
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(5, 7),
        ])
        .unwrap();
        assert_eq!(bird.head(), Position::new(5, 5));
        assert_eq!(tail(&bird), Position::new(5, 7));
    }

    #[test]
    fn test_bird_advance() {
        let mut bird =
            Bird::from_segments(&[Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)])
                .unwrap();

        // Move without growing
        bird.advance(Position::new(6, 5), false);
        assert_eq!(bird.len(), 3);
        assert_eq!(bird.head(), Position::new(6, 5));
        assert_eq!(tail(&bird), Position::new(4, 5));

        // Move with growing
        bird.advance(Position::new(7, 5), true);
        assert_eq!(bird.len(), 4);
        assert_eq!(bird.head(), Position::new(7, 5));
        assert_eq!(tail(&bird), Position::new(4, 5));
    }

    #[test]
    fn test_phase() {
        let mut state = GameState::new(
            Bird::new(Position::new(10, 10)),
            Position::new(15, 15),
            Direction::Right,
            150,
        );
        assert_eq!(state.phase(), Phase::Running);
        state.is_paused = true;
        assert_eq!(state.phase(), Phase::Paused);
        state.is_over = true;
        assert_eq!(state.phase(), Phase::Over);
    }

    #[test]
    fn test_occupancy() {
        let state = GameState::new(
            Bird::from_segments(&[Position::new(2, 2), Position::new(2, 3)]).unwrap(),
            Position::new(9, 9),
            Direction::Up,
            150,
        );
        let occupied = state.bird.occupied();
        assert!(occupied.contains(&Position::new(2, 3)));
        assert!(!occupied.contains(&state.item));
        assert_eq!(occupied.len(), 2);
    }
}
