//! GameView: maps a core snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ShapeMatrix};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Draws one frame of the game into a framebuffer: well, ghost, active
/// piece, side panel and state overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path: callers reuse the buffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle::plain(Rgb::new(80, 80, 90), WELL_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells, with faint grid dots in the gaps.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match PieceKind::from_color_id(snap.board[y as usize][x as usize]) {
                    Some(kind) => {
                        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', piece_style(kind))
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        // Ghost first so the active piece overdraws it when they meet.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            let style = ghost_style(active.kind);
            self.draw_matrix(fb, start_x, start_y, &active.matrix, active.x, ghost_y, '░', style);
        }
        if let Some(active) = snap.active {
            let style = CellStyle {
                bold: true,
                ..piece_style(active.kind)
            };
            self.draw_matrix(fb, start_x, start_y, &active.matrix, active.x, active.y, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if !snap.started {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PRESS R TO START", None);
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", None);
        } else if snap.game_over {
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                Some("PRESS R TO RESTART"),
            );
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    /// Draw every solid cell of a shape at board position (px, py),
    /// clipping to the visible well. Rows above the top stay hidden.
    fn draw_matrix(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        matrix: &ShapeMatrix,
        px: i8,
        py: i8,
        ch: char,
        style: CellStyle,
    ) {
        let side = matrix.side();
        for row in 0..side {
            for col in 0..side {
                if !matrix.filled(col, row) {
                    continue;
                }
                let x = px + col as i8;
                let y = py + row as i8;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, ch, style);
                }
            }
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
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
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y.saturating_add(1), snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "HIGH", label);
        fb.put_u32(panel_x, y.saturating_add(1), snap.high_score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x, y.saturating_add(1), snap.level, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y.saturating_add(1), snap.lines, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y.saturating_add(1), snap.next);
        y = y.saturating_add(6);

        fb.put_str(panel_x, y, "HOLD", label);
        self.draw_preview(fb, panel_x, y.saturating_add(1), snap.hold);
    }

    /// Mini preview of a piece in its canonical orientation. Rendered
    /// into a 4-row block; `None` shows a placeholder dash.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: Option<PieceKind>) {
        let Some(kind) = kind else {
            fb.put_str(x, y, "-", CellStyle::default());
            return;
        };
        let matrix = ShapeMatrix::canonical(kind);
        let style = piece_style(kind);
        for row in 0..matrix.side() {
            for col in 0..matrix.side() {
                if matrix.filled(col, row) {
                    let px = x + (col as u16) * self.cell_w;
                    let py = y + (row as u16) * self.cell_h;
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
                }
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
        hint: Option<&str>,
    ) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, frame_w, mid_y, text, style);
        if let Some(hint) = hint {
            let dim = CellStyle {
                bold: false,
                dim: true,
                ..style
            };
            self.put_centered(fb, start_x, frame_w, mid_y.saturating_add(1), hint, dim);
        }
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle::plain(Rgb::from(kind.color_rgb()), WELL_BG)
}

fn ghost_style(kind: PieceKind) -> CellStyle {
    CellStyle {
        dim: true,
        ..piece_style(kind)
    }
}
