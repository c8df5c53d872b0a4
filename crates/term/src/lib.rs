//! Terminal rendering module.
//!
//! This is the drawing layer of the clock. Everything draws through the
//! [`Surface`] trait, which has two main implementations:
//!
//! - [`TerminalRenderer`]: crossterm-backed, writes to the real terminal
//! - [`FrameBuffer`]: in-memory grid for headless rendering and tests
//!
//! On top of the surface sit the glyph renderer (large digits, scanline by
//! scanline) and the frame compositor (border + glyphs + date line).

pub mod compositor;
pub mod fb;
pub mod glyphs;
pub mod record;
pub mod renderer;
pub mod surface;

pub use sclock_core as core;
pub use sclock_types as types;

pub use compositor::{date_origin, draw_border, FrameCompositor};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use glyphs::{render_glyphs, scanline, start_column, top_row};
pub use record::{RecordingSurface, SurfaceOp};
pub use renderer::{encode_put_into, pair_color, TerminalRenderer};
pub use surface::{clip_span, BorderSet, Charset, Surface};
