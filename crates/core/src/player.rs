//! Player pose and the per-event movement integrator.

use crate::types::{
    ControlSignal, InputEvent, MAP_HEIGHT, MAP_WIDTH, MOVE_SPEED, ROTATE_SPEED, START_HEADING,
    START_HEALTH, START_X, START_Y,
};

/// Mutable player state: continuous position, heading, and a display-only
/// health counter.
///
/// The heading is unbounded; it wraps implicitly through the trig functions
/// and never needs normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub health: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: START_X,
            y: START_Y,
            heading: START_HEADING,
            health: START_HEALTH,
        }
    }

    /// Apply one discrete input event.
    ///
    /// Position is clamped to `[0, MAP_WIDTH-1] x [0, MAP_HEIGHT-1]` after
    /// any move, so the player slides along the outer boundary instead of
    /// leaving the grid. Interior walls are not collided with.
    pub fn integrate(&mut self, event: InputEvent) -> ControlSignal {
        match event {
            InputEvent::MoveForward => {
                self.x += self.heading.cos() * MOVE_SPEED;
                self.y += self.heading.sin() * MOVE_SPEED;
                self.clamp_to_grid();
            }
            InputEvent::MoveBackward => {
                self.x -= self.heading.cos() * MOVE_SPEED;
                self.y -= self.heading.sin() * MOVE_SPEED;
                self.clamp_to_grid();
            }
            InputEvent::TurnLeft => {
                self.heading -= ROTATE_SPEED;
            }
            InputEvent::TurnRight => {
                self.heading += ROTATE_SPEED;
            }
            InputEvent::Quit => return ControlSignal::Terminate,
        }
        ControlSignal::Continue
    }

    fn clamp_to_grid(&mut self) {
        self.x = self.x.clamp(0.0, (MAP_WIDTH - 1) as f32);
        self.y = self.y.clamp(0.0, (MAP_HEIGHT - 1) as f32);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_forward_then_backward_returns_to_start() {
        let mut p = Player::new();
        let start = p;
        p.integrate(InputEvent::MoveForward);
        p.integrate(InputEvent::MoveBackward);
        assert!((p.x - start.x).abs() < 1e-5);
        assert!((p.y - start.y).abs() < 1e-5);
    }

    #[test]
    fn test_turns_adjust_heading_symmetrically() {
        let mut p = Player::new();
        p.integrate(InputEvent::TurnRight);
        assert!((p.heading - (START_HEADING + ROTATE_SPEED)).abs() < 1e-6);
        p.integrate(InputEvent::TurnLeft);
        p.integrate(InputEvent::TurnLeft);
        assert!((p.heading - (START_HEADING - ROTATE_SPEED)).abs() < 1e-6);
    }

    #[test]
    fn test_quit_terminates_without_touching_state() {
        let mut p = Player::new();
        let before = p;
        assert_eq!(p.integrate(InputEvent::Quit), ControlSignal::Terminate);
        assert_eq!(p, before);
    }

    #[test]
    fn test_clamp_holds_at_lower_corner() {
        let mut p = Player {
            x: 0.05,
            y: 0.05,
            heading: PI + PI / 4.0, // into negative x and y
            health: START_HEALTH,
        };
        for _ in 0..10 {
            p.integrate(InputEvent::MoveForward);
            assert!(p.x >= 0.0);
            assert!(p.y >= 0.0);
        }
    }

    #[test]
    fn test_clamp_holds_at_upper_corner() {
        let mut p = Player {
            x: (MAP_WIDTH - 1) as f32 - 0.05,
            y: (MAP_HEIGHT - 1) as f32 - 0.05,
            heading: PI / 4.0, // into positive x and y
            health: START_HEALTH,
        };
        for _ in 0..10 {
            p.integrate(InputEvent::MoveForward);
            assert!(p.x <= (MAP_WIDTH - 1) as f32);
            assert!(p.y <= (MAP_HEIGHT - 1) as f32);
        }
    }
}
