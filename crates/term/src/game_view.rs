//! GameView: maps `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Besides drawing, it owns the screen layout,
//! so the same [`Layout`] is used to hit-test mouse clicks against the
//! on-screen buttons.

use crate::core::GameSession;
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::input::Button;
use crate::types::{Phase, Position};

/// Width of the side panel in columns.
pub const PANEL_W: u16 = 24;
const PANEL_GAP: u16 = 2;

// Panel rows, relative to the top of the board frame.
const CONTROLS_ROW: u16 = 15;
const PAD_ROW: u16 = 17;
const HINT_ROW: u16 = 21;

const BUTTON_W: u16 = 9;
const PAD_W: u16 = 5;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where everything goes for one viewport size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Board including its border.
    pub board: Rect,
    /// Side panel, when the viewport is wide enough.
    pub panel: Option<Rect>,
    buttons: Vec<(Button, Rect)>,
}

impl Layout {
    pub fn buttons(&self) -> &[(Button, Rect)] {
        &self.buttons
    }

    pub fn button_rect(&self, button: Button) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, r)| *r)
    }

    /// On-screen button under a terminal cell, if any
    pub fn button_at(&self, col: u16, row: u16) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(_, r)| r.contains(col, row))
            .map(|(b, _)| *b)
    }
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, grid_size: i32, viewport: Viewport) -> Layout {
        let grid = grid_size.clamp(0, u16::MAX as i32) as u16;
        let frame_w = grid.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = grid.saturating_mul(self.cell_h).saturating_add(2);

        let with_panel = frame_w.saturating_add(PANEL_GAP + PANEL_W) <= viewport.width;
        let total_w = if with_panel {
            frame_w + PANEL_GAP + PANEL_W
        } else {
            frame_w
        };

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let board = Rect::new(start_x, start_y, frame_w, frame_h);

        let panel = with_panel.then(|| {
            Rect::new(
                board.right() + PANEL_GAP,
                start_y,
                PANEL_W,
                frame_h.max(HINT_ROW + 1),
            )
        });

        let mut buttons = Vec::new();
        if let Some(p) = panel {
            let candidates = [
                (Button::PlayPause, Rect::new(p.x, p.y + CONTROLS_ROW, BUTTON_W, 1)),
                (Button::Reset, Rect::new(p.x + BUTTON_W + 2, p.y + CONTROLS_ROW, BUTTON_W, 1)),
                (Button::Up, Rect::new(p.x + 6, p.y + PAD_ROW, PAD_W, 1)),
                (Button::Left, Rect::new(p.x, p.y + PAD_ROW + 1, PAD_W, 1)),
                (Button::Right, Rect::new(p.x + 12, p.y + PAD_ROW + 1, PAD_W, 1)),
                (Button::Down, Rect::new(p.x + 6, p.y + PAD_ROW + 2, PAD_W, 1)),
            ];
            buttons.extend(
                candidates
                    .into_iter()
                    .filter(|(_, r)| r.y < viewport.height),
            );
        }

        Layout {
            board,
            panel,
            buttons,
        }
    }

    /// Render the current session into a framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let grid_size = session.config().grid_size;
        let layout = self.layout(grid_size, viewport);
        let board = layout.board;

        let field = CellStyle::new(Rgb::new(70, 90, 70), Rgb::new(20, 36, 24));
        let border = CellStyle::new(Rgb::new(120, 200, 130), Rgb::new(0, 0, 0));

        fb.fill(
            Rect::new(board.x + 1, board.y + 1, board.w - 2, board.h - 2),
            ' ',
            field,
        );
        draw_border(fb, board, border);

        for y in 0..grid_size {
            for x in 0..grid_size {
                self.fill_cell(fb, board, Position::new(x, y), '·', field);
            }
        }

        let food = CellStyle::new(Rgb::new(230, 70, 60), Rgb::new(20, 36, 24)).bold();
        self.fill_cell(fb, board, session.food(), '●', food);

        let body = CellStyle::new(Rgb::new(90, 200, 100), Rgb::new(20, 36, 24));
        let head = CellStyle::new(Rgb::new(40, 140, 60), Rgb::new(20, 36, 24)).bold();
        for (i, pos) in session.snake().segments().enumerate() {
            if !pos.in_bounds(grid_size) {
                continue;
            }
            let style = if i == 0 { head } else { body };
            self.fill_cell(fb, board, pos, '█', style);
        }

        if let Some(panel) = layout.panel {
            draw_panel(fb, session, panel);
            draw_buttons(fb, session, &layout);
        }

        match session.phase() {
            Phase::Playing => {}
            Phase::Idle => {
                let fresh = session.score() == 0
                    && session.snake().len() == 1
                    && session.head() == session.config().initial_head();
                let title = if fresh { "PRESS SPACE" } else { "PAUSED" };
                draw_overlay(fb, board, &[title, "space / Play to continue"]);
            }
            Phase::GameOver => {
                let title = if session.board_cleared() {
                    "BOARD CLEARED!"
                } else {
                    "GAME OVER"
                };
                let score = format!("Score: {}", session.score());
                let level = format!("Level reached: {}", session.level());
                let eaten = format!("Food eaten: {}", session.food_eaten());
                let mut lines = vec![title, score.as_str(), level.as_str(), eaten.as_str()];
                if session.is_new_record() {
                    lines.push("NEW RECORD!");
                }
                lines.push("r / Reset to play again");
                draw_overlay(fb, board, &lines);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, board: Rect, pos: Position, ch: char, style: CellStyle) {
        if let Some((px, py)) = self.cell_origin(board, pos) {
            fb.fill(Rect::new(px, py, self.cell_w, self.cell_h), ch, style);
        }
    }

    /// Top-left terminal cell of a grid cell; `None` when it is off-screen
    /// or does not fit in terminal coordinates.
    fn cell_origin(&self, board: Rect, pos: Position) -> Option<(u16, u16)> {
        let x = u16::try_from(pos.x).ok()?;
        let y = u16::try_from(pos.y).ok()?;
        let px = x.checked_mul(self.cell_w)?.checked_add(board.x)?.checked_add(1)?;
        let py = y.checked_mul(self.cell_h)?.checked_add(board.y)?.checked_add(1)?;
        Some((px, py))
    }
}

fn draw_border(fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (right, bottom) = (r.right() - 1, r.bottom() - 1);

    fb.put(r.x, r.y, '╭', style);
    fb.put(right, r.y, '╮', style);
    fb.put(r.x, bottom, '╰', style);
    fb.put(right, bottom, '╯', style);
    for x in r.x + 1..right {
        fb.put(x, r.y, '─', style);
        fb.put(x, bottom, '─', style);
    }
    for y in r.y + 1..bottom {
        fb.put(r.x, y, '│', style);
        fb.put(right, y, '│', style);
    }
}

fn draw_panel(fb: &mut FrameBuffer, session: &GameSession, panel: Rect) {
    let label = CellStyle::default().bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let best = CellStyle::new(Rgb::new(230, 190, 60), Rgb::new(0, 0, 0)).bold();
    let (x, y) = (panel.x, panel.y);

    fb.put_str(x, y, "SCORE", label);
    fb.put_str(x, y + 1, &session.score().to_string(), value);

    fb.put_str(x, y + 3, "LEVEL", label);
    fb.put_str(x, y + 4, &session.level().to_string(), value);

    fb.put_str(x, y + 6, "FOOD", label);
    fb.put_str(x, y + 7, &session.food_eaten().to_string(), value);

    if session.high_score() > 0 {
        fb.put_str(x, y + 9, "BEST", best);
        fb.put_str(x, y + 10, &session.high_score().to_string(), best);
    }

    fb.put_str(x, y + 12, "PER FOOD", label);
    let per_food = format!("+{} (x{})", session.points_per_food(), session.level());
    fb.put_str(x, y + 13, &per_food, value);

    let hint = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0));
    fb.put_str(x, y + HINT_ROW, "keys, swipe or click", hint);
}

fn draw_buttons(fb: &mut FrameBuffer, session: &GameSession, layout: &Layout) {
    let active = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(30, 110, 50)).bold();
    let disabled = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(60, 60, 60));
    let reset = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 70, 160)).bold();

    for &(button, rect) in layout.buttons() {
        let (text, style) = match button {
            Button::PlayPause if session.game_over() => ("[ Play  ]", disabled),
            Button::PlayPause if session.is_playing() => ("[ Pause ]", active),
            Button::PlayPause => ("[ Play  ]", active),
            Button::Reset => ("[ Reset ]", reset),
            Button::Up => ("[ ^ ]", active),
            Button::Down => ("[ v ]", active),
            Button::Left => ("[ < ]", active),
            Button::Right => ("[ > ]", active),
        };
        fb.put_str(rect.x, rect.y, text, style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, board: Rect, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let n = lines.len() as u16;
    let top = board.y + board.h.saturating_sub(n) / 2;

    for (i, line) in lines.iter().enumerate() {
        let w = line.chars().count() as u16;
        let x = board.x + board.w.saturating_sub(w) / 2;
        fb.put_str(x, top + i as u16, line, style);
    }
}
