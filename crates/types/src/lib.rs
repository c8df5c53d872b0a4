//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the clock.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (layout logic, glyph rendering, input mapping).
//!
//! # Glyph Geometry
//!
//! Every glyph in the built-in font is a fixed-size cell grid:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GLYPH_LINE_HEIGHT` | 6 | Scanlines per glyph |
//! | `GLYPH_LINE_WIDTH` | 6 | Cells per scanline |
//! | `GLYPH_ADVANCE` | 7 | Columns consumed per character (width + 1 gap) |
//!
//! # Timing
//!
//! - `REFRESH_MS`: 1000ms - default redraw cadence
//!
//! # Examples
//!
//! ```
//! use sclock_types::{CenterPoint, ColorIndex, Viewport, GLYPH_ADVANCE};
//!
//! let center = CenterPoint::of(Viewport::new(80, 24));
//! assert_eq!(center, CenterPoint::new(12, 40));
//!
//! let color = ColorIndex::default().next().next().next().next();
//! assert_eq!(color, ColorIndex::default());
//!
//! assert_eq!(GLYPH_ADVANCE, 7);
//! ```

/// Scanlines per glyph.
pub const GLYPH_LINE_HEIGHT: usize = 6;

/// Cells per glyph scanline.
pub const GLYPH_LINE_WIDTH: usize = 6;

/// Columns consumed by one rendered character: the glyph plus one gap column.
pub const GLYPH_ADVANCE: i32 = GLYPH_LINE_WIDTH as i32 + 1;

/// Default refresh cadence in milliseconds.
pub const REFRESH_MS: u64 = 1000;

/// Column offset of the date line relative to `center.col - date_len`.
pub const DATE_COLUMN_OFFSET: i32 = 4;

/// Number of selectable color pairs.
pub const COLOR_COUNT: u8 = 4;


/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal midpoint, `(row, col)`.
///
/// Signed so that glyph placement arithmetic can go left of column 0 on
/// narrow terminals; surfaces clip anything off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenterPoint {
    pub row: i32,
    pub col: i32,
}

impl CenterPoint {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Integer-divided halves of the viewport's rows and columns.
    pub const fn of(viewport: Viewport) -> Self {
        Self {
            row: (viewport.height / 2) as i32,
            col: (viewport.width / 2) as i32,
        }
    }
}

/// Active color pair, always within `1..=COLOR_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Returns `None` outside `1..=COLOR_COUNT`.
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= COLOR_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Advance cyclically: 1 -> 2 -> 3 -> 4 -> 1.
    pub const fn next(self) -> Self {
        if self.0 >= COLOR_COUNT {
            Self(1)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for ColorIndex {
    fn default() -> Self {
        Self(1)
    }
}

/// User-level clock actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockAction {
    Quit,
    ToggleDate,
    CycleColor,
    Redraw,
}

impl ClockAction {
    /// Map a raw keystroke to an action. Only lowercase keys are bound.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'q' => Some(ClockAction::Quit),
            'd' => Some(ClockAction::ToggleDate),
            'c' => Some(ClockAction::CycleColor),
            'r' => Some(ClockAction::Redraw),
            _ => None,
        }
    }
}

/// Everything the event loop reacts to between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Action(ClockAction),
    /// The terminal changed size. Dimensions are re-queried from the surface.
    Resize,
}
