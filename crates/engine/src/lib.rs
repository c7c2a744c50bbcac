//! Frame loop and session state machine.
//!
//! [`Session`] owns the world grid and player and advances them one input
//! event at a time; [`run_session`] drives render, poll, integrate, and
//! pacing against a [`tui_raycast_term::DisplaySurface`] and a
//! [`tui_raycast_input::EventSource`]. Both collaborators are traits, so the
//! whole loop runs under test with mocks.

pub mod runner;
pub mod session;

pub use tui_raycast_types as types;

pub use runner::run_session;
pub use session::{RunState, Session};
