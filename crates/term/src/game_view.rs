//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FIELD_BG: Rgb = Rgb::new(20, 24, 20);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const EMPTY: CellStyle = CellStyle::new(Rgb::new(70, 80, 70), FIELD_BG).dim();
const BODY: CellStyle = CellStyle::new(Rgb::new(0, 180, 0), FIELD_BG);
const HEAD: CellStyle = CellStyle::new(Rgb::new(120, 255, 120), FIELD_BG).bold();
const FOOD: CellStyle = CellStyle::new(Rgb::new(200, 30, 30), FIELD_BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

const BLOCK: char = '█';
const DOT: char = '·';

const TITLE: &str = "Snake The Game";

/// Minimum side panel width worth drawing; fits the title.
const PANEL_MIN_W: u16 = 14;

/// A lightweight terminal renderer for the snake field.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered field in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = snap.field.width().saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.field.height().saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        if viewport.width < frame_w || viewport.height < frame_h {
            self.draw_too_small(fb, frame_w, frame_h);
            return;
        }

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => (viewport.height - frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        for y in 0..snap.field.height() {
            for x in 0..snap.field.width() {
                self.fill_cell_rect(fb, start_x, start_y, Position::new(x, y), DOT, EMPTY);
            }
        }

        if let Some(food) = snap.food {
            self.fill_cell_rect(fb, start_x, start_y, food, BLOCK, FOOD);
        }

        // Tail first so the head wins if segments overlap right after eating.
        for (i, &seg) in snap.body.iter().enumerate().rev() {
            let style = if i == 0 { HEAD } else { BODY };
            self.fill_cell_rect(fb, start_x, start_y, seg, BLOCK, style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_lines(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "r restart  q quit"],
            );
        } else if snap.paused {
            self.draw_overlay_lines(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, need_w: u16, need_h: u16) {
        fb.put_str(0, 0, "terminal too small", OVERLAY);
        fb.put_str(0, 1, "need", VALUE);
        let n = fb.put_u32(5, 1, need_w as u32, VALUE);
        fb.put_char(5 + n, 1, 'x', VALUE);
        fb.put_u32(6 + n, 1, need_h as u32, VALUE);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Position,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell.x * self.cell_w;
        let py = start_y + 1 + cell.y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        fb.put_str(panel_x, start_y, TITLE, OVERLAY);

        let mut y = start_y.saturating_add(2);
        y = self.draw_stat(fb, panel_x, y, "SCORE", snap.score);
        y = self.draw_stat(fb, panel_x, y, "LENGTH", snap.length() as u32);
        y = self.draw_stat(fb, panel_x, y, "EPISODE", snap.episode_id.wrapping_add(1));

        let keys = CellStyle { dim: true, ..VALUE };
        let legend = [
            "move  arrows",
            "      hjkl wasd",
            "p     pause",
            "r     restart",
            "q     quit",
        ];
        fb.put_str(panel_x, y, "KEYS", LABEL);
        for (i, line) in legend.iter().enumerate() {
            fb.put_str(panel_x, y.saturating_add(1 + i as u16), line, keys);
        }
    }

    /// Label over value; returns the row after the following blank line.
    fn draw_stat(&self, fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
        fb.put_str(x, y, label, LABEL);
        fb.put_u32(x, y.saturating_add(1), value, VALUE);
        y.saturating_add(3)
    }

    fn draw_overlay_lines(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16), text, OVERLAY);
        }
    }
}
