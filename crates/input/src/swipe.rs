//! Swipe gesture recognition.
//!
//! A gesture is a start point and an end point. The axis with the larger
//! absolute displacement wins (ties go to the vertical axis) and the sign of
//! that displacement picks the direction. Screen coordinates grow downwards,
//! matching the grid.

use crate::types::{Direction, SWIPE_MIN_DISTANCE_PX};

/// Result of completing a touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Moved far enough along one axis.
    Swipe(Direction),
    /// Released too close to where it started.
    Tap,
}

/// Classify a displacement; `None` when it is shorter than `min_distance`
/// or not a finite number.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax > ay {
        if ax < min_distance {
            return None;
        }
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        if ay < min_distance || ay == 0.0 {
            return None;
        }
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Tracks one touch from start to end.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    min_distance: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_min_distance(SWIPE_MIN_DISTANCE_PX)
    }

    pub fn with_min_distance(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Record where a touch began. A second start replaces the first.
    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the current touch; `None` if no touch was started.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Gesture> {
        let (sx, sy) = self.start.take()?;
        match classify_swipe(x - sx, y - sy, self.min_distance) {
            Some(dir) => Some(Gesture::Swipe(dir)),
            None => Some(Gesture::Tap),
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
