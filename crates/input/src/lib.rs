//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game session. It maps
//! `crossterm` key and mouse events, raw touch points and on-screen button
//! presses into [`crate::types::Intent`]s.

pub mod buttons;
pub mod handler;
pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use buttons::Button;
pub use handler::InputTranslator;
pub use map::{intent_for_key, should_quit};
pub use swipe::{classify_swipe, Gesture, SwipeTracker};
