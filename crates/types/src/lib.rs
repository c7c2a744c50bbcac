//! Core types shared across the application.
//! This module contains pure data types and constants with no external dependencies.

/// World grid dimensions (cells).
pub const MAP_WIDTH: usize = 16;
pub const MAP_HEIGHT: usize = 16;

/// Fallback viewport when the terminal size cannot be queried.
pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 25;

/// Ray marching parameters.
///
/// Rays advance in fixed increments of `RAY_STEP` world units, so wall faces
/// are only resolved to within one step and sufficiently thin diagonal
/// geometry can be stepped over. That is an accepted precision/performance
/// trade-off for a character-cell display; a grid-traversal (DDA) caster
/// could replace the marcher without changing its contract.
pub const RAY_STEP: f32 = 0.1;
pub const MAX_DIST: f32 = 16.0;
/// MAX_DIST / RAY_STEP, written out because that quotient lands just below
/// 160 in f32 and would truncate.
pub const MAX_RAY_STEPS: u32 = 160;

/// Horizontal field of view in radians (60 degrees).
pub const FOV: f32 = std::f32::consts::PI / 3.0;

/// Floor applied to a ray distance before projecting, guarding the
/// division when the player is flush against a wall.
pub const DIST_EPSILON: f32 = 1e-4;

/// Movement per frame (world units / radians).
pub const MOVE_SPEED: f32 = 0.1;
pub const ROTATE_SPEED: f32 = 0.05;

/// Frame pacing (milliseconds).
pub const FRAME_MS: u64 = 50;

/// Starting pose and health.
pub const START_X: f32 = 8.0;
pub const START_Y: f32 = 8.0;
pub const START_HEADING: f32 = 0.0;
pub const START_HEALTH: u32 = 100;

/// Discrete player input events.
///
/// Unrecognized keys never reach the integrator; the key mapper reports
/// them as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Quit,
}

/// Outcome of feeding one input event to the movement integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Continue,
    Terminate,
}

/// Distance-based shading bucket for a wall strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeTier {
    Near,
    Far,
}

impl ShadeTier {
    /// Two-level shading policy: near walls render bright, far walls dim.
    pub fn for_distance(distance: f32) -> Self {
        if distance < MAX_DIST / 2.0 {
            ShadeTier::Near
        } else {
            ShadeTier::Far
        }
    }
}
