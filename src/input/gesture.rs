//! Swipe gesture resolution
//!
//! A drag from `start` to `end` becomes a turn along whichever axis moved
//! further, provided that distance beats the threshold. Ties go to the
//! vertical axis. Shorter drags are taps and produce nothing.

use crate::game::Direction;

/// A point in whatever units the input device reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub fn resolve_swipe(start: Point, end: Point, threshold: f32) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > dy.abs() {
        (dx.abs() > threshold).then(|| {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        })
    } else {
        (dy.abs() > threshold).then(|| {
            if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            }
        })
    }
}

/// Remembers where a gesture began until it is released
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finish the gesture; a release without a press yields nothing
    pub fn end(&mut self, at: Point) -> Option<Direction> {
        let start = self.start.take()?;
        resolve_swipe(start, at, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(dx: f32, dy: f32) -> Option<Direction> {
        resolve_swipe(Point::new(100.0, 100.0), Point::new(100.0 + dx, 100.0 + dy), 30.0)
    }

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(swipe(50.0, 10.0), Some(Direction::Right));
        assert_eq!(swipe(-50.0, -10.0), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(swipe(5.0, 45.0), Some(Direction::Down));
        assert_eq!(swipe(-5.0, -45.0), Some(Direction::Up));
    }

    #[test]
    fn test_short_drag_is_a_tap() {
        assert_eq!(swipe(30.0, 0.0), None);
        assert_eq!(swipe(0.0, -30.0), None);
        assert_eq!(swipe(0.0, 0.0), None);
        // Long diagonal but the larger axis is still under the threshold
        assert_eq!(swipe(29.0, 28.0), None);
    }

    #[test]
    fn test_tie_goes_vertical() {
        assert_eq!(swipe(40.0, 40.0), Some(Direction::Down));
        assert_eq!(swipe(40.0, -40.0), Some(Direction::Up));
    }

    #[test]
    fn test_tracker_lifecycle() {
        let mut tracker = SwipeTracker::new(30.0);
        assert_eq!(tracker.end(Point::new(90.0, 0.0)), None);

        tracker.begin(Point::new(0.0, 0.0));
        assert_eq!(tracker.end(Point::new(90.0, 0.0)), Some(Direction::Right));
        // The press was consumed by the first release
        assert_eq!(tracker.end(Point::new(0.0, 90.0)), None);

        // A new press replaces an unfinished one
        tracker.begin(Point::new(500.0, 500.0));
        tracker.begin(Point::new(0.0, 0.0));
        assert_eq!(tracker.end(Point::new(0.0, 90.0)), Some(Direction::Down));
    }
}
