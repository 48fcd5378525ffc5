//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input translation, terminal rendering).
//!
//! # Grid
//!
//! The playfield is a square grid of `GRID_SIZE` cells per side:
//!
//! - **x** grows to the right, **y** grows downwards
//! - Valid coordinates are `0..GRID_SIZE` on both axes
//! - The snake starts as a single segment at the grid centre, heading right
//!
//! # Timing and Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 150 | Tick interval at level 1 |
//! | `SPEED_STEP_MS` | 20 | Interval reduction per level-up |
//! | `SPEED_FLOOR_MS` | 50 | Fastest allowed tick interval |
//! | `FOOD_PER_LEVEL` | 10 | Food eaten between level-ups |
//! | `POINTS_PER_FOOD` | 10 | Base reward, multiplied by the current level |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, GRID_SIZE};
//!
//! let head = Position::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(11, 10));
//! assert_eq!(head.step(Direction::Up), Position::new(10, 9));
//!
//! // Turning is only allowed onto the other axis.
//! assert!(Direction::Right.is_orthogonal(Direction::Up));
//! assert!(!Direction::Right.is_orthogonal(Direction::Left));
//!
//! assert!(Position::new(0, 19).in_bounds(GRID_SIZE));
//! assert!(!Position::new(-1, 5).in_bounds(GRID_SIZE));
//! ```

/// Grid side length in cells (20 x 20)
pub const GRID_SIZE: i32 = 20;

/// Nominal cell height in pixels, used to scale pointer input into swipe distances
pub const CELL_SIZE_PX: u32 = 20;

/// Tick interval at the start of a game (150ms)
pub const INITIAL_SPEED_MS: u32 = 150;

/// Tick interval reduction applied on every level-up
pub const SPEED_STEP_MS: u32 = 20;

/// Lower bound for the tick interval (50ms)
pub const SPEED_FLOOR_MS: u32 = 50;

/// Number of food items eaten between level-ups
pub const FOOD_PER_LEVEL: u32 = 10;

/// Base points per food item, scaled by the current level
pub const POINTS_PER_FOOD: u32 = 10;

/// Minimum dominant-axis displacement for a swipe to count (in pixels)
pub const SWIPE_MIN_DISTANCE_PX: f32 = 30.0;


/// A cell on the grid
///
/// Coordinates are signed so that a candidate head one step outside the grid
/// can be represented and rejected by [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies inside a `size` x `size` grid
    pub fn in_bounds(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake
///
/// - **Up**: `(0, -1)`
/// - **Down**: `(0, 1)`
/// - **Left**: `(-1, 0)`
/// - **Right**: `(1, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` lies on the other axis (a legal turn)
    pub fn is_orthogonal(self, other: Direction) -> bool {
        other != self && other != self.opposite()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle phase of a game session
///
/// `Idle -> Playing -> GameOver -> (reset) -> Idle`. Pausing returns a
/// playing session to `Idle` with its state intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Playing,
    GameOver,
}

/// Normalized request produced from any input source
///
/// Keyboard keys, swipe gestures and on-screen buttons are all translated
/// into intents before they reach the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Request a new heading (applied on the next tick if accepted)
    Steer(Direction),
    /// Start when idle, pause when playing
    TogglePlay,
    /// Restore initial state, keeping the high score
    Reset,
    /// Leave the application
    Quit,
}
