//! A surface that logs every call before applying it to a framebuffer.
//!
//! Lets tests assert on draw order (e.g. "clear happened before the next
//! glyph row") as well as on the resulting screen.

use anyhow::Result;

use crate::fb::FrameBuffer;
use crate::surface::Surface;
use crate::types::{ColorIndex, Viewport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    PutStr { row: i32, col: i32, text: String },
    Clear,
    Flush,
    SetColor(Option<ColorIndex>),
    SetBold(bool),
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    fb: FrameBuffer,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Simulate the user resizing the terminal window.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
    }

    /// Every `PutStr` op, in order.
    pub fn puts(&self) -> impl Iterator<Item = (i32, i32, &str)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::PutStr { row, col, text } => Some((*row, *col, text.as_str())),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&mut self) -> Result<Viewport> {
        self.fb.size()
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str) -> Result<()> {
        self.ops.push(SurfaceOp::PutStr {
            row,
            col,
            text: text.to_string(),
        });
        self.fb.put_str(row, col, text)
    }

    fn clear(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Clear);
        self.fb.clear()
    }

    fn flush(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Flush);
        self.fb.flush()
    }

    fn set_color(&mut self, color: Option<ColorIndex>) -> Result<()> {
        self.ops.push(SurfaceOp::SetColor(color));
        self.fb.set_color(color)
    }

    fn set_bold(&mut self, bold: bool) -> Result<()> {
        self.ops.push(SurfaceOp::SetBold(bold));
        self.fb.set_bold(bold)
    }
}
