//! TerminalRenderer: the crossterm-backed surface.
//!
//! Draw calls are queued into an in-memory command buffer and written to the
//! terminal on `flush`, so one tick reaches the screen as a single write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::CellStyle;
use crate::surface::{clip_span, Surface};
use crate::types::{ColorIndex, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    viewport: Viewport,
    pen: CellStyle,
    /// Style last emitted into `buf`, if known.
    current: Option<CellStyle>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            viewport: Viewport::default(),
            pen: CellStyle::default(),
            current: None,
        }
    }

    /// Switch to raw mode on the alternate screen with a hidden cursor.
    ///
    /// If setup fails after raw mode is on, the terminal is restored before
    /// the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let entered = self.write_enter();
        undo_on_err(entered, || self.exit())
    }

    fn write_enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal to its normal (cooked) state.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Surface for TerminalRenderer {
    fn size(&mut self) -> Result<Viewport> {
        let (w, h) = terminal::size()?;
        self.viewport = Viewport::new(w, h);
        Ok(self.viewport)
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str) -> Result<()> {
        if let Some((x, y, visible)) = clip_span(self.viewport, row, col, text) {
            encode_put_into(&mut self.buf, x, y, visible, self.pen, &mut self.current)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_buf()
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

/// Encode a positioned text run into `out`.
///
/// Style commands are only emitted when `style` differs from `current`.
pub fn encode_put_into(
    out: &mut Vec<u8>,
    x: u16,
    y: u16,
    text: &str,
    style: CellStyle,
    current: &mut Option<CellStyle>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    if *current != Some(style) {
        apply_style_into(out, style)?;
        *current = Some(style);
    }
    out.queue(Print(text))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.color {
        Some(index) => out.queue(SetForegroundColor(pair_color(index)))?,
        None => out.queue(ResetColor)?,
    };
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

/// Run `undo` if `result` failed. The original error is kept; a failing
/// `undo` is ignored.
fn undo_on_err<T>(result: Result<T>, undo: impl FnOnce() -> Result<()>) -> Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

/// Foreground of each color pair; the background stays the terminal default.
pub fn pair_color(index: ColorIndex) -> Color {
    match index.get() {
        1 => Color::DarkRed,
        2 => Color::DarkGreen,
        3 => Color::DarkYellow,
        _ => Color::DarkBlue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(x: u16, y: u16, text: &str, style: CellStyle, current: &mut Option<CellStyle>) -> Vec<u8> {
        let mut out = Vec::new();
        encode_put_into(&mut out, x, y, text, style, current).unwrap();
        out
    }

    #[test]
    fn encodes_cursor_move_then_text() {
        let mut current = None;
        let out = encode(4, 2, "12", CellStyle::default(), &mut current);
        let s = String::from_utf8(out).unwrap();
        // MoveTo is 1-based in the escape sequence.
        assert!(s.starts_with("\x1b[3;5H"));
        assert!(s.ends_with("12"));
        assert_eq!(current, Some(CellStyle::default()));
    }

    #[test]
    fn style_is_not_repeated_when_unchanged() {
        let style = CellStyle {
            color: ColorIndex::new(2),
            bold: true,
        };
        let mut current = None;
        let first = encode(0, 0, "a", style, &mut current);
        let second = encode(1, 0, "b", style, &mut current);
        assert!(first.len() > second.len());
        assert_eq!(String::from_utf8(second).unwrap(), "\x1b[1;2Hb");
    }

    #[test]
    fn failed_setup_is_undone_and_keeps_its_error() {
        let mut undone = false;
        let result: Result<()> = undo_on_err(Err(anyhow::anyhow!("write failed")), || {
            undone = true;
            Err(anyhow::anyhow!("restore failed"))
        });
        assert!(undone);
        assert_eq!(result.unwrap_err().to_string(), "write failed");
    }

    #[test]
    fn successful_setup_is_left_alone() {
        let mut undone = false;
        undo_on_err(Ok(()), || {
            undone = true;
            Ok(())
        })
        .unwrap();
        assert!(!undone);
    }

    #[test]
    fn pair_colors_follow_red_green_yellow_blue() {
        let colors: Vec<Color> = (1..=4)
            .filter_map(ColorIndex::new)
            .map(pair_color)
            .collect();
        assert_eq!(
            colors,
            vec![Color::DarkRed, Color::DarkGreen, Color::DarkYellow, Color::DarkBlue]
        );
    }
}
