//! Polling abstraction over the raw input backend.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::InputEvent;

/// Supplies at most one player event per call.
///
/// The frame loop is generic over this trait; tests drive it with scripted
/// sources instead of a live terminal.
pub trait EventSource {
    /// Wait up to `timeout` for input. `Ok(None)` means the timeout elapsed
    /// or the input did not map to a player event.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Live terminal input via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only presses act; terminal auto-repeat arrives as Press too.
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key_event(key));
                }
            }
        }
        Ok(None)
    }
}
