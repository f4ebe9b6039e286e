//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::time::Duration;

use crate::fb::{u32_width, CellStyle, FrameBuffer, Rgb};
use crate::session::{minutes_seconds, Overlay, SessionSnapshot};
use crate::types::{Theme, WIN_TILE};

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

/// Tile size used when the configured one does not fit the viewport.
const COMPACT_CELL: (u16, u16) = (6, 1);

/// Columns the side panel needs to be drawn at all.
const PANEL_MIN_WIDTH: u16 = 14;

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for six-digit tiles with a column of padding.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame lands for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Layout {
    /// Top-left corner of the tile at (`row`, `col`).
    fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let x = self.start_x + 2 + (col as u16) * (self.cell_w + 1);
        let y = self.start_y + 2 + (row as u16) * (self.cell_h + 1);
        (x, y)
    }
}

fn frame_size(size: u16, cell_w: u16, cell_h: u16) -> (u16, u16) {
    // Border, one-cell gutters between tiles and around the edge.
    let w = size * (cell_w + 1) + 1 + 2;
    let h = size * (cell_h + 1) + 1 + 2;
    (w, h)
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

    fn layout(&self, size: usize, viewport: Viewport) -> Layout {
        let size = size as u16;
        let (mut cell_w, mut cell_h) = (self.cell_w, self.cell_h);
        let (mut frame_w, mut frame_h) = frame_size(size, cell_w, cell_h);
        if frame_w > viewport.width || frame_h > viewport.height {
            (cell_w, cell_h) = COMPACT_CELL;
            (frame_w, frame_h) = frame_size(size, cell_w, cell_h);
        }

        // Keep the board left of center when the side panel fits beside it.
        let panel_room = viewport.width.saturating_sub(frame_w);
        let start_x = if panel_room >= 2 * (PANEL_MIN_WIDTH + 2) {
            panel_room / 2 - (PANEL_MIN_WIDTH + 2) / 2
        } else if panel_room >= PANEL_MIN_WIDTH + 2 {
            0
        } else {
            panel_room / 2
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            cell_w,
            cell_h,
        }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let palette = Palette::for_theme(snap.theme);

        fb.resize(viewport.width, viewport.height);
        fb.clear(palette.screen.cell(' '));

        let board = &snap.game.board;
        let layout = self.layout(board.size(), viewport);

        // Board background and border.
        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            palette.board,
        );
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            palette.border,
        );

        let spawn = snap.last_spawn;
        for row in 0..board.size() {
            for col in 0..board.size() {
                let value = board.get(row, col).unwrap_or(0);
                let fresh = spawn
                    .map(|s| s.row as usize == row && s.col as usize == col)
                    .unwrap_or(false);
                self.draw_tile(fb, &layout, &palette, row, col, value, fresh);
            }
        }

        self.draw_side_panel(fb, snap, &palette, viewport, &layout);

        match snap.overlay {
            Overlay::None => {}
            Overlay::Instructions => {
                let last = if snap.started {
                    "Enter to resume"
                } else {
                    "Enter to start"
                };
                self.draw_overlay(
                    fb,
                    &layout,
                    &palette,
                    &[
                        Line::Title("HOW TO PLAY"),
                        Line::Text("Arrows/WASD/hjkl slide"),
                        Line::Text("Equal tiles merge"),
                        Line::Text("Reach 2048 to win"),
                        Line::Blank,
                        Line::Text(last),
                    ],
                );
            }
            Overlay::Paused => self.draw_overlay(
                fb,
                &layout,
                &palette,
                &[Line::Title("PAUSED"), Line::Text("Space to resume")],
            ),
            Overlay::WinPrompt => self.draw_overlay(
                fb,
                &layout,
                &palette,
                &[
                    Line::Title("YOU WIN!"),
                    Line::Text("Enter keep going"),
                    Line::Text("N new game"),
                ],
            ),
            Overlay::GameOver => self.draw_overlay(
                fb,
                &layout,
                &palette,
                &[
                    Line::Title("GAME OVER"),
                    Line::Number("Score ", snap.game.score),
                    Line::Text("N new game"),
                ],
            ),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
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

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        palette: &Palette,
        row: usize,
        col: usize,
        value: u32,
        fresh: bool,
    ) {
        let (x, y) = layout.tile_origin(row, col);
        if value == 0 {
            fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ' ', palette.empty);
            return;
        }

        let mut style = palette.tile(value);
        if fresh {
            style = style.bold();
        }
        fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ' ', style);

        let digits = u32_width(value);
        let tx = x + layout.cell_w.saturating_sub(digits) / 2;
        let ty = y + layout.cell_h / 2;
        fb.put_u32(tx, ty, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        palette: &Palette,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < PANEL_MIN_WIDTH {
            return;
        }

        let label = palette.text.bold();
        let value = palette.text;
        let hint = palette.text.dim();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "2048", palette.tile(WIN_TILE).bold());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.game.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        put_clock(fb, panel_x, y, snap.elapsed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SOUND", label);
        fb.put_str(
            panel_x + 6,
            y,
            if snap.sound_enabled { "on" } else { "off" },
            value,
        );
        y = y.saturating_add(2);

        for line in ["arrows move", "space pause", "n new  t theme", "m sound  ? help", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        palette: &Palette,
        lines: &[Line<'_>],
    ) {
        let text_w = lines.iter().map(Line::width).max().unwrap_or(0);
        let box_w = (text_w + 4).min(layout.frame_w);
        let box_h = (lines.len() as u16 + 2).min(layout.frame_h);
        let x = layout.start_x + (layout.frame_w - box_w) / 2;
        let y = layout.start_y + (layout.frame_h - box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', palette.overlay);
        self.draw_border(fb, x, y, box_w, box_h, palette.overlay);

        for (i, line) in lines.iter().enumerate() {
            let ly = y + 1 + i as u16;
            if ly + 1 >= y + box_h {
                break;
            }
            let lx = x + box_w.saturating_sub(line.width()) / 2;
            match *line {
                Line::Blank => {}
                Line::Title(s) => fb.put_str(lx, ly, s, palette.overlay.bold()),
                Line::Text(s) => fb.put_str(lx, ly, s, palette.overlay),
                Line::Number(s, n) => {
                    fb.put_str(lx, ly, s, palette.overlay);
                    let nx = lx + s.chars().count() as u16;
                    fb.put_u32(nx, ly, n, palette.overlay.bold());
                }
            }
        }
    }
}

/// One centered row of overlay text.
#[derive(Debug, Clone, Copy)]
enum Line<'a> {
    Blank,
    Title(&'a str),
    Text(&'a str),
    Number(&'a str, u32),
}

impl Line<'_> {
    fn width(&self) -> u16 {
        match *self {
            Line::Blank => 0,
            Line::Title(s) | Line::Text(s) => s.chars().count() as u16,
            Line::Number(s, n) => s.chars().count() as u16 + u32_width(n),
        }
    }
}

/// `m:ss`
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, elapsed: Duration, style: CellStyle) {
    let (minutes, seconds) = minutes_seconds(elapsed);
    let minutes = u32::try_from(minutes).unwrap_or(u32::MAX);
    let mut cx = x + fb.put_u32(x, y, minutes, style);
    fb.put_char(cx, y, ':', style);
    cx += 1;
    if seconds < 10 {
        fb.put_char(cx, y, '0', style);
        cx += 1;
    }
    fb.put_u32(cx, y, seconds as u32, style);
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    theme: Theme,
    screen: CellStyle,
    text: CellStyle,
    border: CellStyle,
    board: CellStyle,
    empty: CellStyle,
    overlay: CellStyle,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => {
                let screen = Rgb::new(250, 248, 239);
                let board = Rgb::new(187, 173, 160);
                Self {
                    theme,
                    screen: CellStyle::new(Rgb::new(119, 110, 101), screen),
                    text: CellStyle::new(Rgb::new(119, 110, 101), screen),
                    border: CellStyle::new(Rgb::new(143, 122, 102), board),
                    board: CellStyle::new(board, board),
                    empty: CellStyle::new(board, Rgb::new(205, 193, 180)),
                    overlay: CellStyle::new(Rgb::new(119, 110, 101), Rgb::new(238, 228, 218)),
                }
            }
            Theme::Dark => {
                let screen = Rgb::new(24, 24, 32);
                let board = Rgb::new(52, 50, 62);
                Self {
                    theme,
                    screen: CellStyle::new(Rgb::new(210, 210, 220), screen),
                    text: CellStyle::new(Rgb::new(210, 210, 220), screen),
                    border: CellStyle::new(Rgb::new(120, 118, 135), board),
                    board: CellStyle::new(board, board),
                    empty: CellStyle::new(board, Rgb::new(70, 68, 82)),
                    overlay: CellStyle::new(Rgb::new(240, 240, 245), Rgb::new(40, 40, 52)),
                }
            }
        }
    }

    /// Tile colors by value; everything past 2048 shares one color.
    fn tile(&self, value: u32) -> CellStyle {
        let (fg, bg) = match self.theme {
            Theme::Light => {
                let dark_text = Rgb::new(119, 110, 101);
                let light_text = Rgb::new(249, 246, 242);
                match value {
                    2 => (dark_text, Rgb::new(238, 228, 218)),
                    4 => (dark_text, Rgb::new(237, 224, 200)),
                    8 => (light_text, Rgb::new(242, 177, 121)),
                    16 => (light_text, Rgb::new(245, 149, 99)),
                    32 => (light_text, Rgb::new(246, 124, 95)),
                    64 => (light_text, Rgb::new(246, 94, 59)),
                    128 => (light_text, Rgb::new(237, 207, 114)),
                    256 => (light_text, Rgb::new(237, 204, 97)),
                    512 => (light_text, Rgb::new(237, 200, 80)),
                    1024 => (light_text, Rgb::new(237, 197, 63)),
                    2048 => (light_text, Rgb::new(237, 194, 46)),
                    _ => (light_text, Rgb::new(60, 58, 50)),
                }
            }
            Theme::Dark => {
                let text = Rgb::new(240, 240, 245);
                match value {
                    2 => (text, Rgb::new(84, 84, 104)),
                    4 => (text, Rgb::new(96, 96, 124)),
                    8 => (text, Rgb::new(176, 108, 60)),
                    16 => (text, Rgb::new(188, 90, 52)),
                    32 => (text, Rgb::new(198, 72, 60)),
                    64 => (text, Rgb::new(208, 52, 40)),
                    128 => (text, Rgb::new(170, 150, 62)),
                    256 => (text, Rgb::new(182, 158, 56)),
                    512 => (text, Rgb::new(194, 164, 48)),
                    1024 => (text, Rgb::new(206, 170, 40)),
                    2048 => (text, Rgb::new(220, 176, 30)),
                    _ => (text, Rgb::new(132, 60, 156)),
                }
            }
        };
        CellStyle::new(fg, bg)
    }
}
