//! Glyph renderer: draws a string as large block glyphs.
//!
//! Rendering is scanline-major. For each of the `GLYPH_LINE_HEIGHT` rows the
//! renderer walks the whole string and emits that row of every glyph, so
//! one terminal row is finished before the next one starts.

use anyhow::Result;
use arrayvec::ArrayString;

use crate::core::GlyphId;
use crate::surface::Surface;
use crate::types::{CenterPoint, GLYPH_ADVANCE, GLYPH_LINE_HEIGHT, GLYPH_LINE_WIDTH};

/// One glyph scanline; each cell is at most four UTF-8 bytes.
type Scanline = ArrayString<{ GLYPH_LINE_WIDTH * 4 }>;

/// Left edge of a block of `length` characters centered on `center_col`.
///
/// Integer division truncates, so an odd total width leaves the extra
/// column on the right-hand side.
#[inline]
pub fn start_column(center_col: i32, length: usize) -> i32 {
    center_col - (length as i32 * GLYPH_ADVANCE) / 2
}

/// Topmost scanline row of a glyph block vertically centered on `center_row`.
#[inline]
pub fn top_row(center_row: i32) -> i32 {
    center_row - (GLYPH_LINE_HEIGHT / 2) as i32
}

/// Build scanline `row` of `glyph`: `cell` for set bits, space otherwise.
pub fn scanline(glyph: GlyphId, row: usize, cell: char) -> Scanline {
    let mut line = Scanline::new();
    for col in 0..GLYPH_LINE_WIDTH {
        line.push(if glyph.is_set(row, col) { cell } else { ' ' });
    }
    line
}

/// Draw `text` centered on `center`.
///
/// Characters without a glyph are skipped: they produce no draw call and do
/// not advance the pen. The block width used for centering counts every
/// character of `text`.
pub fn render_glyphs<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center: CenterPoint,
    cell: char,
) -> Result<()> {
    let length = text.chars().count();
    if length == 0 {
        return Ok(());
    }

    let top = top_row(center.row);
    for r in 0..GLYPH_LINE_HEIGHT {
        let row = top + r as i32;
        for (k, glyph) in text.chars().filter_map(GlyphId::from_char).enumerate() {
            let col = start_column(center.col, length) + k as i32 * GLYPH_ADVANCE;
            surface.put_str(row, col, &scanline(glyph, r, cell))?;
        }
    }
    Ok(())
}
