//! BoardView: maps a `core::Simulation` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn on a "pixel" grid where each pixel is `pixel_w`
//! terminal columns wide and one row tall, painted as background colour. A
//! board cell is `CELL_SIZE` pixels square: a grid line, padding, and a
//! `MARK_SIZE` marker area. The first `INFO_AREA_SIZE` rows hold the status
//! banner and the hovered cell.

use std::hash::{Hash, Hasher};

use crate::core::Simulation;
use crate::fb::{palette, CellStyle, FrameBuffer, Rgb};
use crate::raster;
use crate::types::{
    BoardPosition, GameStatus, PlayerId, BORDER_SIZE, CELL_SIZE, INFO_AREA_SIZE, MARK_SIZE,
    PAD_SIZE,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state that affects drawing but not the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewState {
    /// Board cell under the mouse, if any.
    pub hover: Option<BoardPosition>,
    /// Top-left visible board cell.
    pub scroll: BoardPosition,
}

impl ViewState {
    /// Scroll by whole cells, clamped so at least one board cell stays visible.
    pub fn pan(&mut self, dx: i8, dy: i8, sim: &Simulation) {
        let board = sim.board();
        let max_x = board.columns().saturating_sub(1) as i64;
        let max_y = board.rows().saturating_sub(1) as i64;
        self.scroll.x = (self.scroll.x as i64 + dx as i64).clamp(0, max_x) as u32;
        self.scroll.y = (self.scroll.y as i64 + dy as i64).clamp(0, max_y) as u32;
        self.hover = None;
    }

    /// Summary of everything a frame depends on.
    pub fn fingerprint(&self, sim: &Simulation, viewport: Viewport) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        sim.revision().hash(&mut hasher);
        self.hash(&mut hasher);
        viewport.hash(&mut hasher);
        hasher.finish()
    }
}

/// Inclusive pixel rectangle relative to the board origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

/// A lightweight terminal renderer for the m,n,k board.
pub struct BoardView {
    /// Terminal columns per pixel.
    pixel_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { pixel_w: 2 }
    }
}

impl BoardView {
    pub fn new(pixel_w: u16) -> Self {
        Self {
            pixel_w: pixel_w.max(1),
        }
    }

    /// Board cell under terminal cell `(col, row)`, if it is on the board.
    pub fn cell_at(
        &self,
        sim: &Simulation,
        state: &ViewState,
        col: u16,
        row: u16,
    ) -> Option<BoardPosition> {
        let py = row.checked_sub(INFO_AREA_SIZE)?;
        let px = col / self.pixel_w;
        let pos = BoardPosition::new(
            (px / CELL_SIZE) as u32 + state.scroll.x,
            (py / CELL_SIZE) as u32 + state.scroll.y,
        );
        sim.board().is_valid_position(pos).then_some(pos)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        sim: &Simulation,
        state: &ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board = sim.board();

        // Winning cells get a highlighted background under the marker.
        if sim.status() == GameStatus::Won {
            for &pos in board.winning_positions() {
                if let Some(rect) = self.marker_rect(state, pos) {
                    self.draw_win_background(fb, rect);
                }
            }
        }

        let (first_col, last_col) = self.visible_range(
            state.scroll.x,
            board.columns(),
            viewport.width / self.pixel_w,
        );
        let (first_row, last_row) = self.visible_range(
            state.scroll.y,
            board.rows(),
            viewport.height.saturating_sub(INFO_AREA_SIZE),
        );

        for y in first_row..last_row {
            for x in first_col..last_col {
                let pos = BoardPosition::new(x, y);
                let Some(border) = self.border_rect(state, pos) else {
                    continue;
                };
                if x + 1 < board.columns() {
                    self.draw_border_right(fb, border);
                }
                if y + 1 < board.rows() {
                    self.draw_border_bottom(fb, border);
                }
                if let (Some(owner), Some(rect)) = (board.marker(pos), self.marker_rect(state, pos))
                {
                    self.draw_marker(fb, rect, owner, player_color(owner));
                }
            }
        }

        // Preview of the next mark under the mouse.
        if let (Some(active), Some(hover)) = (sim.active_player(), state.hover) {
            if board.get(hover) == Some(None) {
                if let Some(rect) = self.marker_rect(state, hover) {
                    self.draw_marker(fb, rect, active, palette::DARK_GRAY);
                }
            }
        }

        self.draw_info_panel(fb, sim, state, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sim: &Simulation, state: &ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, state, viewport, &mut fb);
        fb
    }

    /// Board cells `[first, last)` along one axis that intersect `span` pixels.
    fn visible_range(&self, scroll: u32, len: u32, span: u16) -> (u32, u32) {
        let first = scroll.min(len);
        // A partially visible trailing cell still gets drawn (and clipped).
        let count = (span as u32).div_ceil(CELL_SIZE as u32);
        (first, first.saturating_add(count).min(len))
    }

    fn border_rect(&self, state: &ViewState, pos: BoardPosition) -> Option<PixelRect> {
        let cx = pos.x.checked_sub(state.scroll.x)? as i32;
        let cy = pos.y.checked_sub(state.scroll.y)? as i32;
        let size = CELL_SIZE as i32;
        Some(PixelRect {
            left: cx * size,
            top: cy * size,
            right: (cx + 1) * size,
            bottom: (cy + 1) * size,
        })
    }

    fn marker_rect(&self, state: &ViewState, pos: BoardPosition) -> Option<PixelRect> {
        let border = self.border_rect(state, pos)?;
        let inset = (BORDER_SIZE + PAD_SIZE) as i32;
        Some(PixelRect {
            left: border.left + inset,
            top: border.top + inset,
            right: border.right - inset,
            bottom: border.bottom - inset,
        })
    }

    /// Paint one pixel; anything above the board area or off-screen is clipped.
    fn plot(&self, fb: &mut FrameBuffer, px: i32, py: i32, color: Rgb) {
        if px < 0 || py < 0 {
            return;
        }
        let Ok(px) = u16::try_from(px) else {
            return;
        };
        let Ok(py) = u16::try_from(py) else {
            return;
        };
        let x = px.saturating_mul(self.pixel_w);
        let y = py.saturating_add(INFO_AREA_SIZE);
        fb.fill_rect(x, y, self.pixel_w, 1, ' ', CellStyle::new(color, color));
    }

    fn draw_border_right(&self, fb: &mut FrameBuffer, border: PixelRect) {
        raster::line(
            border.right,
            border.top + BORDER_SIZE as i32,
            border.right,
            border.bottom - BORDER_SIZE as i32,
            |x, y| self.plot(fb, x, y, palette::LIGHT_GRAY),
        );
    }

    fn draw_border_bottom(&self, fb: &mut FrameBuffer, border: PixelRect) {
        raster::line(
            border.left + BORDER_SIZE as i32,
            border.bottom,
            border.right - BORDER_SIZE as i32,
            border.bottom,
            |x, y| self.plot(fb, x, y, palette::LIGHT_GRAY),
        );
    }

    fn draw_marker(&self, fb: &mut FrameBuffer, rect: PixelRect, player: PlayerId, color: Rgb) {
        if player == PlayerId::FIRST {
            raster::line(rect.left, rect.top, rect.right, rect.bottom, |x, y| {
                self.plot(fb, x, y, color)
            });
            raster::line(rect.right, rect.top, rect.left, rect.bottom, |x, y| {
                self.plot(fb, x, y, color)
            });
        } else {
            raster::circle(
                (rect.left + rect.right) / 2,
                (rect.top + rect.bottom) / 2,
                (MARK_SIZE / 2) as i32,
                |x, y| self.plot(fb, x, y, color),
            );
        }
    }

    fn draw_win_background(&self, fb: &mut FrameBuffer, rect: PixelRect) {
        for y in rect.top..=rect.bottom {
            for x in rect.left..=rect.right {
                let edge = y == rect.top || y == rect.bottom || x == rect.left || x == rect.right;
                let color = if edge {
                    palette::DARK_GREEN
                } else {
                    palette::LIGHT_GREEN
                };
                self.plot(fb, x, y, color);
            }
        }
    }

    fn draw_info_panel(
        &self,
        fb: &mut FrameBuffer,
        sim: &Simulation,
        state: &ViewState,
        viewport: Viewport,
    ) {
        let blank = CellStyle::new(palette::BLACK, palette::BLACK);
        fb.fill_rect(0, 0, viewport.width, INFO_AREA_SIZE, ' ', blank);

        let (banner, style) = match (sim.status(), sim.winning_player(), sim.active_player()) {
            (GameStatus::Won, Some(winner), _) => (
                format!("-- {winner} wins! --"),
                CellStyle {
                    bold: true,
                    ..CellStyle::new(player_color(winner), palette::DARK_GRAY)
                },
            ),
            (GameStatus::Draw, _, _) => (
                "- No spaces left: draw! -".to_string(),
                CellStyle::new(palette::LIGHT_GRAY, palette::DARK_GRAY),
            ),
            (_, _, Some(active)) => (
                format!("{}'s turn ({})", active.name(), active.glyph()),
                CellStyle::new(palette::BLACK, palette::WHITE),
            ),
            _ => (String::new(), blank),
        };
        fb.put_str(0, 0, &banner, style);

        let mouse = match state.hover {
            Some(pos) => format!("X: {}, Y: {}", pos.x, pos.y),
            None => "X: --, Y: --".to_string(),
        };
        fb.put_str(0, 1, &mouse, CellStyle::new(palette::BLACK, palette::WHITE));

        let history = format!(
            "undo {} | redo {}",
            sim.available_undos(),
            sim.available_redos()
        );
        let hx = viewport
            .width
            .saturating_sub(history.chars().count() as u16);
        if hx > mouse.chars().count() as u16 + 1 {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(hx, 1, &history, dim);
        }
    }
}

/// Marker colour of each player.
pub fn player_color(player: PlayerId) -> Rgb {
    if player == PlayerId::FIRST {
        palette::LIGHT_RED
    } else {
        palette::LIGHT_BLUE
    }
}
