//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the scene view ray-casts the
//! world into a plain framebuffer of styled character cells, and the
//! terminal renderer flushes that framebuffer to a real terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the frame loop free of any terminal dependency (it talks to
//!   [`DisplaySurface`], not to crossterm)
//! - Reuse one framebuffer across frames on the hot path

pub mod fb;
pub mod renderer;
pub mod scene_view;
pub mod surface;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use scene_view::{SceneView, Viewport};
pub use surface::DisplaySurface;
