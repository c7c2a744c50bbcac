//! Inverse-distance projection of a ray sample into a wall strip.

use crate::types::{ShadeTier, DIST_EPSILON};

/// One screen column's wall slice: how many rows it spans and how it shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallStrip {
    pub height: u16,
    pub tier: ShadeTier,
}

/// Convert a marched distance into a strip height for a screen of
/// `screen_height` rows.
///
/// `height = floor(screen_height / distance)`, clamped to the screen. This
/// is the conventional inverse-distance approximation for this rendering
/// style, not a perspective-correct projection. Distance is floored at
/// `DIST_EPSILON` so a pose flush against a wall cannot divide by zero.
pub fn project(distance: f32, screen_height: u16) -> WallStrip {
    let height = screen_height as f32 / distance.max(DIST_EPSILON);
    WallStrip {
        height: (height as u32).min(screen_height as u32) as u16,
        tier: ShadeTier::for_distance(distance),
    }
}
