//! Scoring module - per-food reward, level thresholds and speed progression

/// Points awarded for one food item at `level`
///
/// The reward scales linearly with the level: 10, 20, 30, ... with the
/// default base of 10.
pub fn food_points(points_per_food: u32, level: u32) -> u32 {
    points_per_food.saturating_mul(level)
}

/// Whether eating the `food_eaten`-th item completes a level
pub fn completes_level(food_eaten: u32, food_per_level: u32) -> bool {
    food_per_level > 0 && food_eaten > 0 && food_eaten % food_per_level == 0
}

/// Tick interval after a level-up, never below `floor_ms`
pub fn next_speed_ms(speed_ms: u32, step_ms: u32, floor_ms: u32) -> u32 {
    speed_ms.saturating_sub(step_ms).max(floor_ms)
}
