//! Movement integrator behavior at the grid boundary.

use std::f32::consts::PI;

use tui_raycast::core::Player;
use tui_raycast::types::{
    ControlSignal, InputEvent, MAP_HEIGHT, MAP_WIDTH, MOVE_SPEED, START_HEALTH,
};

#[test]
fn test_clamp_at_the_low_corner() {
    let mut p = Player {
        x: 0.05,
        y: 0.05,
        heading: PI + PI / 4.0,
        health: START_HEALTH,
    };

    for _ in 0..20 {
        assert_eq!(p.integrate(InputEvent::MoveForward), ControlSignal::Continue);
        assert!(p.x >= 0.0, "x escaped below zero: {}", p.x);
        assert!(p.y >= 0.0, "y escaped below zero: {}", p.y);
    }
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn test_clamp_at_the_high_corner() {
    let max_x = (MAP_WIDTH - 1) as f32;
    let max_y = (MAP_HEIGHT - 1) as f32;
    let mut p = Player {
        x: max_x - 0.05,
        y: max_y - 0.05,
        heading: PI / 4.0,
        health: START_HEALTH,
    };

    for _ in 0..20 {
        p.integrate(InputEvent::MoveForward);
        assert!(p.x <= max_x);
        assert!(p.y <= max_y);
    }
    assert_eq!(p.x, max_x);
    assert_eq!(p.y, max_y);
}

#[test]
fn test_backward_is_the_exact_inverse_of_forward() {
    let mut p = Player::new();
    p.heading = 0.37;
    let start = p;

    p.integrate(InputEvent::MoveForward);
    assert!((p.x - (start.x + 0.37f32.cos() * MOVE_SPEED)).abs() < 1e-6);
    assert!((p.y - (start.y + 0.37f32.sin() * MOVE_SPEED)).abs() < 1e-6);

    p.integrate(InputEvent::MoveBackward);
    assert!((p.x - start.x).abs() < 1e-5);
    assert!((p.y - start.y).abs() < 1e-5);
}

#[test]
fn test_health_is_never_touched_by_movement() {
    let mut p = Player::new();
    for ev in [
        InputEvent::MoveForward,
        InputEvent::MoveBackward,
        InputEvent::TurnLeft,
        InputEvent::TurnRight,
        InputEvent::Quit,
    ] {
        p.integrate(ev);
        assert_eq!(p.health, START_HEALTH);
    }
}
