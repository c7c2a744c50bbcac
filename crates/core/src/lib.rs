//! Core rendering and simulation logic - pure, deterministic, and testable.
//!
//! This crate contains the world grid, player state, ray marcher, and
//! distance projector. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same pose always produces the same column samples
//! - **Testable**: every operation is a total function over its inputs
//! - **Portable**: runs identically in terminal, headless, or bench contexts
//!
//! # Module Structure
//!
//! - [`map`]: fixed 16x16 occupancy grid with border-safe lookups
//! - [`player`]: player pose plus the per-event movement integrator
//! - [`ray`]: fixed-step ray marcher producing per-column distances
//! - [`project`]: inverse-distance projection into strip height and shade tier
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{cast, column_angle, project, Player, WorldGrid};
//!
//! let grid = WorldGrid::new();
//! let player = Player::new();
//!
//! let angle = column_angle(player.heading, 40, 80);
//! let sample = cast(&grid, (player.x, player.y), angle);
//! let strip = project(sample.distance, 25);
//! assert!(strip.height <= 25);
//! ```

pub mod map;
pub mod player;
pub mod project;
pub mod ray;

pub use tui_raycast_types as types;

// Re-export commonly used items for convenience
pub use map::{Occupancy, WorldGrid};
pub use player::Player;
pub use project::{project, WallStrip};
pub use ray::{cast, column_angle, RaySample};
