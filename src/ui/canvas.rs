use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use super::surface::{RectF, Surface, Transform};

/// Upper half block: fg paints the top pixel, bg the bottom one
const HALF_BLOCK: char = '▀';

/// Pixel grid with two vertical pixels per terminal cell.
///
/// A cell area of `w × h` exposes a `w × 2h` drawing surface.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
    transform: Transform,
}

impl PixelCanvas {
    /// Canvas covering `cols × rows` terminal cells
    pub fn new(cols: u16, rows: u16) -> Self {
        let height = rows.saturating_mul(2);
        Self {
            width: cols,
            height,
            pixels: vec![Color::Reset; cols as usize * height as usize],
            transform: Transform::default(),
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Snap a float span onto pixel indices, clipped to `[0, max]`
    fn span(start: f32, end: f32, max: u16) -> (usize, usize) {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let clip = |v: f32| v.round().clamp(0.0, max as f32) as usize;
        (clip(lo), clip(hi))
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn fill_background(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn save(&mut self) {
        self.transform.save();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn restore(&mut self) {
        self.transform.restore();
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        let rect = self.transform.apply(rect);
        let (x0, x1) = Self::span(rect.left, rect.right, self.width);
        let (y0, y1) = Self::span(rect.top, rect.bottom, self.height);
        let stride = self.width as usize;
        for y in y0..y1 {
            self.pixels[y * stride + x0..y * stride + x1].fill(color);
        }
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = area.width.min(self.width);
        let rows = area.height.min(self.height / 2);
        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, row * 2).unwrap_or(Color::Reset);
                let bottom = self.pixel(col, row * 2 + 1).unwrap_or(Color::Reset);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}
