//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{color_for, Rgb};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Program state shown next to the game that the session does not know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelStatus {
    pub autoplay: bool,
}

/// Terminal renderer for a play session.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer of the viewport's size.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: PanelStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        fb.clear(CellStyle::default().cell(' '));

        let grid_w = (snap.width as u16).saturating_mul(self.cell_w);
        let grid_h = (snap.height as u16).saturating_mul(self.cell_h);
        let frame_w = grid_w.saturating_add(2);
        let frame_h = grid_h.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, grid_w, grid_h, ' ', bg);
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
        );

        // Settled cells with the falling piece on top; rows above the grid
        // are not drawn.
        let empty = CellStyle::plain(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                let (ch, style) = match color_for(snap.cell_at(x, y)) {
                    Some(fg) => ('█', CellStyle::plain(fg, PLAYFIELD_BG).bold()),
                    None => ('·', empty),
                };
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, status, viewport, start_x + frame_w, start_y);

        if snap.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: PanelStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        status: PanelStatus,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let interval = format!("{:.0}ms", snap.drop_interval_ms);
        let entries: [(&str, String); 5] = [
            ("SCORE", snap.score.to_string()),
            ("LEVEL", snap.level.to_string()),
            ("LINES", snap.lines.to_string()),
            ("SPEED", interval),
            ("AUTO", if status.autoplay { "ON" } else { "OFF" }.to_string()),
        ];

        let mut y = start_y;
        for (name, text) in entries {
            if y.saturating_add(1) >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &text, value);
            y = y.saturating_add(3);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, bottom, '─', style);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', style);
        fb.put_char(right, dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(tx, y.saturating_add(h / 2), text, style);
}
