//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`types::InputEvent`] and provides the
//! [`EventSource`] trait the frame loop polls, so the loop itself never
//! touches the terminal directly.

pub mod map;
pub mod source;

pub use tui_raycast_types as types;

pub use map::map_key_event;
pub use source::{CrosstermEvents, EventSource};
