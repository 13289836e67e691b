//! Animated grid behind the calculator card
//!
//! Purely cosmetic. The grid drifts diagonally by one cell per tick and its
//! brightness pulses slowly; both are functions of the tick counter alone.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Columns between vertical grid lines
pub const GRID_COLS: u16 = 8;
/// Rows between horizontal grid lines (terminal cells are about twice as tall as wide)
pub const GRID_ROWS: u16 = 4;

/// Backdrop colour (slate)
const BACKGROUND: (u8, u8, u8) = (15, 23, 42);
/// Grid line colour at full intensity (cyan)
const LINE: (u8, u8, u8) = (34, 211, 238);
/// Radians of pulse phase per tick
const PULSE_STEP: f64 = 0.05;

/// Backdrop animation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backdrop {
    tick: u64,
}

impl Backdrop {
    /// Starts at tick zero
    #[must_use]
    pub const fn new() -> Self {
        Self { tick: 0 }
    }

    /// Backdrop frozen at `tick`
    #[must_use]
    pub const fn at(tick: u64) -> Self {
        Self { tick }
    }

    /// Current tick
    #[must_use]
    pub const fn tick(self) -> u64 {
        self.tick
    }

    /// Advances one tick
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Grid drift as (columns, rows)
    #[must_use]
    pub const fn offset(self) -> (u16, u16) {
        (
            (self.tick % GRID_COLS as u64) as u16,
            (self.tick % GRID_ROWS as u64) as u16,
        )
    }

    /// Line opacity, between 0.05 and 0.15
    #[must_use]
    pub fn pulse(self) -> f64 {
        // Phase wraps with the sine period so large ticks keep precision
        let phase = (self.tick as f64 * PULSE_STEP) % std::f64::consts::TAU;
        0.05 + 0.1 * phase.sin().abs()
    }

    /// Grid line colour for the current pulse
    #[must_use]
    pub fn line_color(self) -> Color {
        // A terminal cell is far larger than a CSS pixel line; triple the
        // opacity so the grid stays visible.
        let alpha = (self.pulse() * 3.0).min(1.0);
        let blend = |bg: u8, fg: u8| {
            let mixed = f64::from(bg) + (f64::from(fg) - f64::from(bg)) * alpha;
            mixed.round().clamp(0.0, 255.0) as u8
        };
        Color::Rgb(
            blend(BACKGROUND.0, LINE.0),
            blend(BACKGROUND.1, LINE.1),
            blend(BACKGROUND.2, LINE.2),
        )
    }

    /// The glyph drawn at (`x`, `y`) relative to the backdrop origin
    #[must_use]
    pub const fn glyph_at(self, x: u16, y: u16) -> Option<char> {
        let (dx, dy) = self.offset();
        // Lines move right and down as the offset grows
        let on_col = (x % GRID_COLS + GRID_COLS - dx) % GRID_COLS == 0;
        let on_row = (y % GRID_ROWS + GRID_ROWS - dy) % GRID_ROWS == 0;
        match (on_col, on_row) {
            (true, true) => Some('┼'),
            (true, false) => Some('│'),
            (false, true) => Some('─'),
            (false, false) => None,
        }
    }
}

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (r, g, b) = BACKGROUND;
        buf.set_style(area, Style::default().bg(Color::Rgb(r, g, b)));
        let line = Style::default().fg(self.line_color());

        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(glyph) = self.glyph_at(x, y) {
                    buf[(area.x + x, area.y + y)]
                        .set_char(glyph)
                        .set_style(line);
                }
            }
        }
    }
}
