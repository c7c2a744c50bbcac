//! Fixed-step ray marcher.

use crate::map::Occupancy;
use crate::types::{FOV, MAX_DIST, MAX_RAY_STEPS, RAY_STEP};

/// Result of marching one ray: the distance to the first occupied cell, or
/// `MAX_DIST` with `hit = false` when the range is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    pub distance: f32,
    pub hit: bool,
}

/// March a ray from `origin` along `angle` until it enters an occupied cell
/// or travels `MAX_DIST` world units.
///
/// Each sample point is `origin + (cos angle, sin angle) * distance` with
/// `distance` advancing by `RAY_STEP`; the sampled cell is the floor of that
/// point. The distance is computed as `step * RAY_STEP` rather than by
/// accumulation so the sample count is exactly `MAX_RAY_STEPS` on a miss.
pub fn cast<G: Occupancy>(grid: &G, origin: (f32, f32), angle: f32) -> RaySample {
    let eye_x = angle.cos();
    let eye_y = angle.sin();

    for step in 1..=MAX_RAY_STEPS {
        let distance = step as f32 * RAY_STEP;
        let test_x = (origin.0 + eye_x * distance).floor() as i32;
        let test_y = (origin.1 + eye_y * distance).floor() as i32;

        if grid.occupied(test_x, test_y) {
            return RaySample {
                distance,
                hit: true,
            };
        }
    }

    RaySample {
        distance: MAX_DIST,
        hit: false,
    }
}

/// Ray angle for one screen column: the heading fanned across the field of
/// view, leftmost column at `heading - FOV/2`.
pub fn column_angle(heading: f32, col: u16, columns: u16) -> f32 {
    heading - FOV / 2.0 + FOV * col as f32 / columns as f32
}
