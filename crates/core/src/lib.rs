//! Core clock logic module - pure, deterministic, and testable
//!
//! This module contains the glyph font, the layout/display state and the
//! time source abstraction. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: a fixed time source produces identical frames
//! - **Testable**: every invariant of the layout model is unit tested
//! - **Portable**: usable by any surface (real terminal, in-memory framebuffer)
//!
//! # Module Structure
//!
//! - [`font`]: 6x6 block glyphs for digits, colon, slash and space
//! - [`layout`]: terminal center point and display mode
//! - [`clock`]: time source trait and `HH:MM:SS` / `YYYY-MM-DD` formatting
//!
//! # Example
//!
//! ```
//! use sclock_core::{format_time, ClockReading, ClockText, HourFormat, LayoutState};
//! use sclock_core::types::{CenterPoint, Viewport};
//!
//! let layout = LayoutState::new(Viewport::new(80, 24));
//! assert_eq!(layout.center(), CenterPoint::new(12, 40));
//!
//! let reading = ClockReading { hour: 9, minute: 5, second: 0, ..Default::default() };
//! let mut text = ClockText::new();
//! format_time(&reading, HourFormat::H24, &mut text).unwrap();
//! assert_eq!(text.as_str(), "09:05:00");
//! ```

pub mod clock;
pub mod font;
pub mod layout;

pub use sclock_types as types;

pub use clock::{
    format_date, format_time, ClockReading, ClockText, FixedClock, HourFormat, LocalClock,
    TimeSource,
};
pub use font::{GlyphId, GlyphRows, FONT, SUPPORTED_CHARS};
pub use layout::{DisplayMode, LayoutState};
