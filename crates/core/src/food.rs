//! Food placement
//!
//! Rejection sampling over the whole grid, with a bounded number of attempts.
//! When sampling keeps landing on the snake (a nearly full board) the placer
//! picks uniformly among the remaining vacant cells instead.

use crate::rng::FoodRng;
use crate::snake::Snake;
use crate::types::Position;

/// Sampling attempts before falling back to a vacant-cell scan
pub const MAX_FOOD_ATTEMPTS: usize = 64;

/// Choose a cell for the next food item
///
/// Returns `None` only when the snake covers the entire grid.
pub fn place_food(rng: &mut FoodRng, grid_size: i32, snake: &Snake) -> Option<Position> {
    if grid_size <= 0 {
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = Position::new(rng.below(grid_size), rng.below(grid_size));
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }

    let vacant: Vec<Position> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(*pos))
        .collect();

    if vacant.is_empty() {
        return None;
    }

    log::warn!(
        "food sampling missed {MAX_FOOD_ATTEMPTS} times; choosing among {} vacant cells",
        vacant.len()
    );
    Some(vacant[rng.index(vacant.len())])
}
