//! Input translator for terminal environments.
//!
//! Normalizes the three input sources into [`Intent`]s:
//!
//! - keyboard keys via [`crate::map`]
//! - swipes, fed either as raw touch points or as terminal mouse press/release
//! - on-screen buttons, either directly or by hit-testing a mouse click
//!
//! Whether an intent is honoured (e.g. no reversal, only while playing) is
//! decided by the session, not here.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::buttons::Button;
use crate::map::intent_for_key;
use crate::swipe::{Gesture, SwipeTracker};
use crate::types::{Intent, CELL_SIZE_PX};

/// Size of one terminal cell in pixels, used to turn mouse cells into
/// swipe distances.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerScale {
    px_per_col: f32,
    px_per_row: f32,
}

impl Default for PointerScale {
    fn default() -> Self {
        // Typical terminal glyph is about twice as tall as it is wide.
        let row = CELL_SIZE_PX as f32;
        Self {
            px_per_col: row / 2.0,
            px_per_row: row,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    swipe: SwipeTracker,
    scale: PointerScale,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swipe(mut self, swipe: SwipeTracker) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn key(&self, key: KeyEvent) -> Option<Intent> {
        intent_for_key(key)
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.swipe.touch_start(x, y);
    }

    /// Finish a touch; only a swipe yields an intent.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Intent> {
        match self.swipe.touch_end(x, y)? {
            Gesture::Swipe(dir) => {
                log::debug!("swipe {}", dir.as_str());
                Some(Intent::Steer(dir))
            }
            Gesture::Tap => None,
        }
    }

    /// Drop a half-finished touch or mouse drag, e.g. when the screen
    /// geometry changed under it.
    pub fn cancel_gesture(&mut self) {
        self.swipe.cancel();
    }

    pub fn button(&self, button: Button) -> Intent {
        button.intent()
    }

    /// Translate a terminal mouse event
    ///
    /// Left press starts a touch. Left release either completes a swipe or,
    /// when the pointer barely moved, counts as a click and is resolved
    /// through `hit` (column, row) to an on-screen button.
    pub fn pointer(
        &mut self,
        ev: MouseEvent,
        hit: impl Fn(u16, u16) -> Option<Button>,
    ) -> Option<Intent> {
        let (x, y) = self.to_px(ev.column, ev.row);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.touch_start(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.touch_end(x, y)? {
                Gesture::Swipe(dir) => {
                    log::debug!("mouse swipe {}", dir.as_str());
                    Some(Intent::Steer(dir))
                }
                Gesture::Tap => hit(ev.column, ev.row).map(Button::intent),
            },
            _ => None,
        }
    }

    fn to_px(&self, col: u16, row: u16) -> (f32, f32) {
        (
            col as f32 * self.scale.px_per_col,
            row as f32 * self.scale.px_per_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn no_buttons(_: u16, _: u16) -> Option<Button> {
        None
    }

    #[test]
    fn test_key_passthrough() {
        let t = InputTranslator::new();
        assert_eq!(
            t.key(KeyEvent::from(KeyCode::Left)),
            Some(Intent::Steer(Direction::Left))
        );
    }

    #[test]
    fn test_touch_swipe_and_tap() {
        let mut t = InputTranslator::new();
        t.touch_start(0.0, 0.0);
        assert_eq!(t.touch_end(-45.0, 3.0), Some(Intent::Steer(Direction::Left)));

        t.touch_start(0.0, 0.0);
        assert_eq!(t.touch_end(10.0, 10.0), None);
    }

    #[test]
    fn test_mouse_drag_is_a_swipe() {
        let mut t = InputTranslator::new();
        assert_eq!(
            t.pointer(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10), no_buttons),
            None
        );
        // 4 columns * 10px = 40px to the right.
        assert_eq!(
            t.pointer(mouse(MouseEventKind::Up(MouseButton::Left), 14, 10), no_buttons),
            Some(Intent::Steer(Direction::Right))
        );
    }

    #[test]
    fn test_short_mouse_drag_is_ignored() {
        let mut t = InputTranslator::new();
        t.pointer(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10), no_buttons);
        // 2 columns = 20px, below the 30px threshold, and nothing to click.
        assert_eq!(
            t.pointer(mouse(MouseEventKind::Up(MouseButton::Left), 12, 10), no_buttons),
            None
        );
    }

    #[test]
    fn test_mouse_click_hits_button() {
        let mut t = InputTranslator::new();
        let hit = |col: u16, row: u16| (col == 3 && row == 4).then_some(Button::Reset);

        t.pointer(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), hit);
        assert_eq!(
            t.pointer(mouse(MouseEventKind::Up(MouseButton::Left), 3, 4), hit),
            Some(Intent::Reset)
        );
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut t = InputTranslator::new();
        let hit = |_: u16, _: u16| Some(Button::Up);
        assert_eq!(
            t.pointer(mouse(MouseEventKind::Up(MouseButton::Left), 3, 4), hit),
            None
        );
    }

    #[test]
    fn test_cancelled_drag_does_not_steer() {
        let mut t = InputTranslator::new();
        t.pointer(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10), no_buttons);
        t.cancel_gesture();
        assert_eq!(
            t.pointer(mouse(MouseEventKind::Up(MouseButton::Left), 20, 10), no_buttons),
            None
        );
    }

    #[test]
    fn test_button_translation() {
        let t = InputTranslator::new();
        assert_eq!(t.button(Button::Down), Intent::Steer(Direction::Down));
        assert_eq!(t.button(Button::PlayPause), Intent::TogglePlay);
    }
}
