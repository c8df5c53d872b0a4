//! The drawing surface consumed by the glyph renderer and compositor.
//!
//! A surface is a cursor-addressed grid of character cells with a current
//! "pen" (color pair + bold). Coordinates are signed: callers may position
//! text partially or entirely off-screen and the surface clips it.

use anyhow::Result;

use crate::types::{ColorIndex, Viewport};

pub trait Surface {
    /// Query the current dimensions.
    fn size(&mut self) -> Result<Viewport>;

    /// Write `text` starting at `(row, col)` using the current pen.
    fn put_str(&mut self, row: i32, col: i32, text: &str) -> Result<()>;

    /// Blank the whole surface.
    fn clear(&mut self) -> Result<()>;

    /// Make everything written so far visible.
    fn flush(&mut self) -> Result<()>;

    /// Select a color pair for subsequent writes; `None` is the terminal default.
    fn set_color(&mut self, color: Option<ColorIndex>) -> Result<()>;

    fn set_bold(&mut self, bold: bool) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&mut self) -> Result<Viewport> {
        (**self).size()
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str) -> Result<()> {
        (**self).put_str(row, col, text)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn set_color(&mut self, color: Option<ColorIndex>) -> Result<()> {
        (**self).set_color(color)
    }

    fn set_bold(&mut self, bold: bool) -> Result<()> {
        (**self).set_bold(bold)
    }
}

/// Eight directional symbols used to frame the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub left: char,
    pub right: char,
    pub top: char,
    pub bottom: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    pub const DOUBLE: BorderSet = BorderSet {
        left: '║',
        right: '║',
        top: '═',
        bottom: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
    };

    pub const ASCII: BorderSet = BorderSet {
        left: '|',
        right: '|',
        top: '-',
        bottom: '-',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
    };
}

/// Symbols the clock draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    /// Filled glyph cell.
    pub cell: char,
    pub border: BorderSet,
}

impl Charset {
    pub const UNICODE: Charset = Charset {
        cell: '█',
        border: BorderSet::DOUBLE,
    };

    pub const ASCII: Charset = Charset {
        cell: '#',
        border: BorderSet::ASCII,
    };
}

impl Default for Charset {
    fn default() -> Self {
        Charset::UNICODE
    }
}

/// Clip a run of text to the viewport.
///
/// Returns the on-screen start `(x, y)` and the visible slice, or `None` when
/// nothing of the run is visible.
pub fn clip_span(viewport: Viewport, row: i32, col: i32, text: &str) -> Option<(u16, u16, &str)> {
    if row < 0 || row >= viewport.height as i32 {
        return None;
    }
    let width = viewport.width as i32;

    let mut start_byte = None;
    let mut end_byte = text.len();
    let mut x = col;
    for (i, _) in text.char_indices() {
        if x >= width {
            end_byte = i;
            break;
        }
        if x >= 0 && start_byte.is_none() {
            start_byte = Some(i);
        }
        x += 1;
    }

    let start = start_byte?;
    if start >= end_byte {
        return None;
    }
    let first_x = col.max(0) as u16;
    Some((first_x, row as u16, &text[start..end_byte]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_fully_visible_text() {
        let vp = Viewport::new(10, 5);
        assert_eq!(clip_span(vp, 2, 3, "abc"), Some((3, 2, "abc")));
    }

    #[test]
    fn clip_drops_rows_outside_viewport() {
        let vp = Viewport::new(10, 5);
        assert_eq!(clip_span(vp, -1, 0, "abc"), None);
        assert_eq!(clip_span(vp, 5, 0, "abc"), None);
    }

    #[test]
    fn clip_trims_left_overhang() {
        let vp = Viewport::new(10, 5);
        assert_eq!(clip_span(vp, 0, -2, "abcd"), Some((0, 0, "cd")));
        assert_eq!(clip_span(vp, 0, -4, "abcd"), None);
    }

    #[test]
    fn clip_trims_right_overhang_on_char_boundaries() {
        let vp = Viewport::new(4, 1);
        assert_eq!(clip_span(vp, 0, 2, "██████"), Some((2, 0, "██")));
        assert_eq!(clip_span(vp, 0, 4, "x"), None);
    }

    #[test]
    fn charset_defaults_to_unicode() {
        assert_eq!(Charset::default().cell, '█');
        assert_eq!(Charset::default().border.top_left, '╔');
    }
}
