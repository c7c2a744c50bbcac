//! The display-surface seam between the frame loop and the terminal.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Everything the frame loop needs from a display: lifecycle, size, and a
/// way to present a finished framebuffer.
///
/// [`crate::TerminalRenderer`] is the real implementation; tests substitute
/// mocks, so the loop never depends on a live terminal.
pub trait DisplaySurface {
    /// Claim the display. Called once before the first frame.
    fn init(&mut self) -> Result<()>;

    /// Current (columns, rows) of the display.
    fn size(&self) -> (u16, u16);

    /// Show one finished frame.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Release the display. Called exactly once, on clean termination.
    fn shutdown(&mut self) -> Result<()>;
}
