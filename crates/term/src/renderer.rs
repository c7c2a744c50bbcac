//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: a raycaster touches nearly every cell every
//! frame, so diffing against the previous frame buys nothing. Output is
//! queued into one byte buffer and written in a single flush, with style
//! changes coalesced across runs of identically-styled cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::DisplaySurface;
use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

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

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    apply_style(&mut self.buf, cell.style)?;
                    current_style = Some(cell.style);
                }
                self.buf.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                self.buf.queue(Print("\r\n"))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TerminalRenderer {
    fn init(&mut self) -> Result<()> {
        self.enter()
    }

    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.exit()
    }
}

fn apply_style(buf: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // Reset first: SGR 0 clears colors as well as attributes.
    buf.queue(SetAttribute(Attribute::Reset))?;
    buf.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    buf.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        buf.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        buf.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Terminal I/O itself is not unit-testable; exercise the conversion and
    // the style serialization path against a plain byte buffer.
    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }

    #[test]
    fn test_apply_style_emits_escape_bytes() {
        let mut buf = Vec::new();
        apply_style(
            &mut buf,
            CellStyle {
                bold: true,
                ..CellStyle::default()
            },
        )
        .unwrap();
        assert!(!buf.is_empty());
    }
}
