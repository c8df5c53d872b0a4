//! Frame compositor: border, time glyphs and the optional date line.
//!
//! Everything is written straight to the surface; no virtual frame is kept
//! between ticks. The border only needs redrawing when the static frame may
//! have been invalidated (clear, resize, color change).

use anyhow::Result;

use crate::core::DisplayMode;
use crate::glyphs::render_glyphs;
use crate::surface::{BorderSet, Charset, Surface};
use crate::types::{CenterPoint, DATE_COLUMN_OFFSET, GLYPH_LINE_HEIGHT};

pub struct FrameCompositor {
    charset: Charset,
    colors_enabled: bool,
}

impl Default for FrameCompositor {
    fn default() -> Self {
        Self {
            charset: Charset::UNICODE,
            colors_enabled: true,
        }
    }
}

impl FrameCompositor {
    pub fn new(charset: Charset, colors_enabled: bool) -> Self {
        Self {
            charset,
            colors_enabled,
        }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Draw one tick: time glyphs, then the date line if visible.
    ///
    /// When the date is hidden its row is left as is; callers clear the
    /// screen on a visibility toggle.
    pub fn compose<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        time_text: &str,
        date_text: Option<&str>,
        mode: &DisplayMode,
        center: CenterPoint,
    ) -> Result<()> {
        render_glyphs(surface, time_text, center, self.charset.cell)?;

        if mode.date_visible {
            if let Some(date) = date_text {
                let (row, col) = date_origin(center, date);
                surface.set_bold(true)?;
                surface.put_str(row, col, date)?;
                surface.set_bold(false)?;
            }
        }
        Ok(())
    }

    /// Select the drawing color for `mode`.
    pub fn apply_color<S: Surface + ?Sized>(&self, surface: &mut S, mode: &DisplayMode) -> Result<()> {
        let color = if self.colors_enabled {
            Some(mode.color)
        } else {
            None
        };
        surface.set_color(color)
    }

    /// Re-apply the active color and redraw the border.
    pub fn redraw_static<S: Surface + ?Sized>(&self, surface: &mut S, mode: &DisplayMode) -> Result<()> {
        self.apply_color(surface, mode)?;
        draw_border(surface, &self.charset.border)
    }
}

/// Position of the date line: just below the glyph block.
pub fn date_origin(center: CenterPoint, date: &str) -> (i32, i32) {
    let row = center.row + (GLYPH_LINE_HEIGHT / 2) as i32;
    let col = center.col - date.chars().count() as i32 + DATE_COLUMN_OFFSET;
    (row, col)
}

/// Frame the whole surface with `set`.
///
/// Edges are drawn first and the corners last, so corners always win.
pub fn draw_border<S: Surface + ?Sized>(surface: &mut S, set: &BorderSet) -> Result<()> {
    let viewport = surface.size()?;
    if viewport.width == 0 || viewport.height == 0 {
        return Ok(());
    }
    let max_row = viewport.height as i32 - 1;
    let max_col = viewport.width as i32 - 1;

    for col in 1..=max_col {
        put_char(surface, 0, col, set.top)?;
        put_char(surface, max_row, col, set.bottom)?;
    }
    for row in 1..=max_row {
        put_char(surface, row, 0, set.left)?;
        put_char(surface, row, max_col, set.right)?;
    }

    put_char(surface, 0, 0, set.top_left)?;
    put_char(surface, 0, max_col, set.top_right)?;
    put_char(surface, max_row, 0, set.bottom_left)?;
    put_char(surface, max_row, max_col, set.bottom_right)?;
    Ok(())
}

fn put_char<S: Surface + ?Sized>(surface: &mut S, row: i32, col: i32, ch: char) -> Result<()> {
    let mut buf = [0u8; 4];
    surface.put_str(row, col, ch.encode_utf8(&mut buf))
}
