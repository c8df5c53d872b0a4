//! Built-in block font.
//!
//! Glyphs are stored row-major: `FONT[id][scanline]` is one bitmask of
//! `GLYPH_LINE_WIDTH` cells, most significant bit leftmost. The renderer walks
//! one scanline across every glyph of a string before moving to the next row.

use crate::types::{GLYPH_LINE_HEIGHT, GLYPH_LINE_WIDTH};

/// One glyph: `GLYPH_LINE_HEIGHT` scanline bitmasks.
pub type GlyphRows = [u8; GLYPH_LINE_HEIGHT];

/// Identifier of a drawable glyph.
///
/// `0..=9` are the digits, followed by colon, slash and space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphId(u8);

impl GlyphId {
    pub const COLON: GlyphId = GlyphId(10);
    pub const SLASH: GlyphId = GlyphId(11);
    pub const SPACE: GlyphId = GlyphId(12);

    /// Map a character to its glyph; `None` for anything the font lacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use sclock_core::font::GlyphId;
    ///
    /// assert_eq!(GlyphId::from_char('7').map(GlyphId::index), Some(7));
    /// assert_eq!(GlyphId::from_char(':'), Some(GlyphId::COLON));
    /// assert_eq!(GlyphId::from_char('a'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(GlyphId(ch as u8 - b'0')),
            ':' => Some(Self::COLON),
            '/' => Some(Self::SLASH),
            ' ' => Some(Self::SPACE),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Scanline bitmasks for this glyph.
    pub fn rows(self) -> &'static GlyphRows {
        &FONT[self.index()]
    }

    /// Whether cell `col` (0 = leftmost) of scanline `row` is filled.
    pub fn is_set(self, row: usize, col: usize) -> bool {
        if row >= GLYPH_LINE_HEIGHT || col >= GLYPH_LINE_WIDTH {
            return false;
        }
        let bit = GLYPH_LINE_WIDTH - 1 - col;
        self.rows()[row] & (1 << bit) != 0
    }
}

/// Number of glyphs in the font.
pub const GLYPH_COUNT: usize = 13;

/// All supported characters, in glyph order.
pub const SUPPORTED_CHARS: [char; GLYPH_COUNT] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', '/', ' ',
];

#[rustfmt::skip]
pub static FONT: [GlyphRows; GLYPH_COUNT] = [
    // 0
    [0b111111, 0b110011, 0b110011, 0b110011, 0b110011, 0b111111],
    // 1
    [0b001100, 0b011100, 0b001100, 0b001100, 0b001100, 0b011110],
    // 2
    [0b111111, 0b000011, 0b111111, 0b110000, 0b110000, 0b111111],
    // 3
    [0b111111, 0b000011, 0b011111, 0b000011, 0b000011, 0b111111],
    // 4
    [0b110011, 0b110011, 0b111111, 0b000011, 0b000011, 0b000011],
    // 5
    [0b111111, 0b110000, 0b111111, 0b000011, 0b000011, 0b111111],
    // 6
    [0b111111, 0b110000, 0b111111, 0b110011, 0b110011, 0b111111],
    // 7
    [0b111111, 0b000011, 0b000110, 0b001100, 0b001100, 0b001100],
    // 8
    [0b111111, 0b110011, 0b111111, 0b110011, 0b110011, 0b111111],
    // 9
    [0b111111, 0b110011, 0b111111, 0b000011, 0b000011, 0b111111],
    // :
    [0b000000, 0b001100, 0b000000, 0b000000, 0b001100, 0b000000],
    // /
    [0b000001, 0b000011, 0b000110, 0b001100, 0b011000, 0b110000],
    // space
    [0b000000, 0b000000, 0b000000, 0b000000, 0b000000, 0b000000],
];
