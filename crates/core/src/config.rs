//! Session configuration
//!
//! Defaults match the classic game. Every tunable can be overridden from the
//! environment with [`GameConfig::from_env`].

use crate::types::{
    FOOD_PER_LEVEL, GRID_SIZE, INITIAL_SPEED_MS, POINTS_PER_FOOD, SPEED_FLOOR_MS, SPEED_STEP_MS,
};

/// Smallest grid that still leaves the initial head and food on distinct cells.
pub const MIN_GRID_SIZE: i32 = 4;

/// Largest grid accepted from the environment; the terminal view draws every
/// cell each frame and needs cell coordinates to fit in `u16`.
pub const MAX_GRID_SIZE: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: i32,
    pub initial_speed_ms: u32,
    pub speed_step_ms: u32,
    pub speed_floor_ms: u32,
    pub food_per_level: u32,
    pub points_per_food: u32,
    /// Seed for food placement; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_step_ms: SPEED_STEP_MS,
            speed_floor_ms: SPEED_FLOOR_MS,
            food_per_level: FOOD_PER_LEVEL,
            points_per_food: POINTS_PER_FOOD,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_GRID_SIZE` (clamped to [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`])
    /// - `SNAKE_INITIAL_SPEED_MS`
    /// - `SNAKE_SPEED_STEP_MS`
    /// - `SNAKE_SPEED_FLOOR_MS`
    /// - `SNAKE_FOOD_PER_LEVEL` (at least 1)
    /// - `SNAKE_SEED`
    ///
    /// Unset variables keep their default; unparsable ones are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let requested = parse_var(&lookup, "SNAKE_GRID_SIZE").unwrap_or(defaults.grid_size);
        let grid_size = requested.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        if grid_size != requested {
            log::warn!("SNAKE_GRID_SIZE={requested} out of range, using {grid_size}");
        }
        let initial_speed_ms =
            parse_var(&lookup, "SNAKE_INITIAL_SPEED_MS").unwrap_or(defaults.initial_speed_ms);
        let speed_step_ms =
            parse_var(&lookup, "SNAKE_SPEED_STEP_MS").unwrap_or(defaults.speed_step_ms);
        let speed_floor_ms =
            parse_var(&lookup, "SNAKE_SPEED_FLOOR_MS").unwrap_or(defaults.speed_floor_ms);
        let food_per_level = parse_var(&lookup, "SNAKE_FOOD_PER_LEVEL")
            .unwrap_or(defaults.food_per_level)
            .max(1);
        let seed = parse_var(&lookup, "SNAKE_SEED");

        Self {
            grid_size,
            initial_speed_ms,
            speed_step_ms,
            speed_floor_ms,
            food_per_level,
            points_per_food: defaults.points_per_food,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_speed_step_ms(mut self, step: u32) -> Self {
        self.speed_step_ms = step;
        self
    }

    /// Head position of a fresh snake (grid centre)
    pub fn initial_head(&self) -> crate::types::Position {
        crate::types::Position::new(self.grid_size / 2, self.grid_size / 2)
    }

    /// Food position of a fresh session (three quarters along both axes)
    pub fn initial_food(&self) -> crate::types::Position {
        let at = self.grid_size * 3 / 4;
        crate::types::Position::new(at, at)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {key}={trimmed:?}: not a valid value");
            None
        }
    }
}
