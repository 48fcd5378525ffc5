//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, session state and tick scheduling.
//! It has **no dependencies** on terminals or input devices, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is reachable through the public session API
//! - **Portable**: Can drive a terminal, GUI or headless front end
//!
//! # Module Structure
//!
//! - [`session`]: Complete game session (snake, food, score, level, speed, lifecycle)
//! - [`snake`]: Head-first body segments
//! - [`food`]: Food placement by bounded rejection sampling
//! - [`scoring`]: Per-food reward, level threshold and speed progression
//! - [`scheduler`]: Single-shot tick deadline, re-armed with the current speed
//! - [`config`]: Tunables with environment overrides
//! - [`rng`]: Seedable randomness
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its committed direction
//! - Turning is only allowed onto the other axis; a reversal is ignored
//! - Leaving the grid or touching any body segment ends the game
//! - Eating grows the snake by one and awards `10 x level` points
//! - Every 10th food raises the level and shortens the tick interval (floor 50ms)
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameSession, TickOutcome};
//! use tui_snake_types::{Direction, Position};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(7));
//! session.start();
//!
//! assert_eq!(session.tick(), TickOutcome::Moved);
//! assert_eq!(session.head(), Position::new(11, 10));
//!
//! // Turns take effect on the next tick.
//! assert!(session.steer(Direction::Down));
//! session.tick();
//! assert_eq!(session.head(), Position::new(11, 11));
//! ```

pub mod config;
pub mod food;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use food::place_food;
pub use rng::FoodRng;
pub use scheduler::TickScheduler;
pub use session::{Collision, GameSession, TickOutcome};
pub use snake::Snake;
