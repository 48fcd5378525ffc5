//! On-screen buttons: the directional pad plus Play/Pause and Reset.

use crate::types::{Direction, Intent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    PlayPause,
    Reset,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::PlayPause,
        Button::Reset,
    ];

    pub fn direction(self) -> Option<Direction> {
        match self {
            Button::Up => Some(Direction::Up),
            Button::Down => Some(Direction::Down),
            Button::Left => Some(Direction::Left),
            Button::Right => Some(Direction::Right),
            Button::PlayPause | Button::Reset => None,
        }
    }

    pub fn intent(self) -> Intent {
        match self {
            Button::PlayPause => Intent::TogglePlay,
            Button::Reset => Intent::Reset,
            Button::Up => Intent::Steer(Direction::Up),
            Button::Down => Intent::Steer(Direction::Down),
            Button::Left => Intent::Steer(Direction::Left),
            Button::Right => Intent::Steer(Direction::Right),
        }
    }
}
