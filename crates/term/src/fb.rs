//! In-memory framebuffer surface.
//!
//! Mirrors what a real terminal would show after a sequence of draw calls.
//! Used for headless rendering and for asserting on frames in tests.

use anyhow::Result;

use crate::surface::{clip_span, Surface};
use crate::types::{ColorIndex, Viewport};

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    /// `None` is the terminal's default foreground.
    pub color: Option<ColorIndex>,
    pub bold: bool,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    pen: CellStyle,
    flushes: usize,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            pen: CellStyle::default(),
            flushes: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, as a terminal would on a window change.
    ///
    /// Existing content is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current pen style.
    pub fn pen(&self) -> CellStyle {
        self.pen
    }

    /// Number of `flush` calls so far.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Whole screen, rows joined by `\n`.
    pub fn text(&self) -> String {
        let mut all = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            all.push_str(&self.row_text(y));
            all.push('\n');
        }
        all
    }
}

impl Surface for FrameBuffer {
    fn size(&mut self) -> Result<Viewport> {
        Ok(Viewport::new(self.width, self.height))
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str) -> Result<()> {
        let viewport = Viewport::new(self.width, self.height);
        if let Some((x, y, visible)) = clip_span(viewport, row, col, text) {
            let style = self.pen;
            for (dx, ch) in visible.chars().enumerate() {
                self.set(x + dx as u16, y, Cell { ch, style });
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.fill(Cell::default());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn set_color(&mut self, color: Option<ColorIndex>) -> Result<()> {
        self.pen.color = color;
        Ok(())
    }

    fn set_bold(&mut self, bold: bool) -> Result<()> {
        self.pen.bold = bold;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_uses_current_pen() {
        let mut fb = FrameBuffer::new(8, 2);
        fb.set_color(ColorIndex::new(3)).unwrap();
        fb.set_bold(true).unwrap();
        fb.put_str(1, 2, "ab").unwrap();

        let cell = fb.get(2, 1).unwrap();
        assert_eq!(cell.ch, 'a');
        assert_eq!(cell.style.color.map(ColorIndex::get), Some(3));
        assert!(cell.style.bold);
        assert_eq!(fb.row_text(1), "  ab    ");
    }

    #[test]
    fn put_str_clips_instead_of_wrapping() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 2, "wxyz").unwrap();
        fb.put_str(0, -3, "abcd").unwrap();
        assert_eq!(fb.row_text(0), "d wx");
    }

    #[test]
    fn clear_keeps_pen() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.set_color(ColorIndex::new(2)).unwrap();
        fb.put_str(0, 0, "abc").unwrap();
        fb.clear().unwrap();
        assert_eq!(fb.row_text(0), "   ");
        assert_eq!(fb.pen().color, ColorIndex::new(2));
    }

    #[test]
    fn resize_discards_content() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc").unwrap();
        fb.resize(5, 2);
        assert_eq!(fb.size().unwrap(), Viewport::new(5, 2));
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn flush_is_counted() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.flush().unwrap();
        fb.flush().unwrap();
        assert_eq!(fb.flushes(), 2);
    }
}
