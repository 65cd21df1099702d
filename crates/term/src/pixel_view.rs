//! PixelView: maps the engine's RGBA pixel buffer into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each character covers a `px_per_col` x `px_per_row` block of pixels and is
//! drawn as an upper half block. Both halves sample the block's left pixel
//! column, where vertical grid lines sit: the foreground at the top pixel row
//! (where horizontal grid lines sit), the background at the middle row.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::PixelBuffer;

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

/// Host-side status shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudState {
    pub score: u32,
    pub length: u32,
    pub game_over: bool,
    pub paused: bool,
    pub grid: bool,
}

const UPPER_HALF: char = '▀';
const PANEL_MIN_W: u16 = 12;

pub struct PixelView {
    px_per_col: u32,
    px_per_row: u32,
}

impl Default for PixelView {
    fn default() -> Self {
        // 10x20 pixels per char keeps 20px grid cells roughly square in a
        // typical terminal font.
        Self {
            px_per_col: 10,
            px_per_row: 20,
        }
    }
}

impl PixelView {
    pub fn new(px_per_col: u32, px_per_row: u32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    /// Board size in characters for a given pixel buffer.
    pub fn board_size(&self, pixels: &PixelBuffer) -> (u16, u16) {
        let cols = pixels.width() / self.px_per_col;
        let rows = pixels.height() / self.px_per_row;
        (
            cols.min(u16::MAX as u32) as u16,
            rows.min(u16::MAX as u32) as u16,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        pixels: &PixelBuffer,
        hud: &HudState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let (board_w, board_h) = self.board_size(pixels);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::colored(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..board_h {
            for col in 0..board_w {
                let style = self.sample(pixels, col, row);
                fb.put_char(start_x + 1 + col, start_y + 1 + row, UPPER_HALF, style);
            }
        }

        self.draw_side_panel(fb, hud, viewport, start_x, start_y, frame_w);

        if hud.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if hud.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, pixels: &PixelBuffer, hud: &HudState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(pixels, hud, viewport, &mut fb);
        fb
    }

    fn sample(&self, pixels: &PixelBuffer, col: u16, row: u16) -> CellStyle {
        let x = col as u32 * self.px_per_col;
        let top = row as u32 * self.px_per_row;
        let mid = top + self.px_per_row / 2;

        let fg = pixels.pixel(x, top).map(Rgb::from).unwrap_or_default();
        let bg = pixels.pixel(x, mid).map(Rgb::from).unwrap_or_default();
        CellStyle::colored(fg, bg)
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &HudState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::colored(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = CellStyle::colored(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.length, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GRID", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if hud.grid { "ON" } else { "OFF" }, value);
        y = y.saturating_add(2);

        for line in ["arrows/hjkl", "p  pause", "g  grid", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::colored(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}
