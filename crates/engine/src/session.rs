//! Session: world + player + run state.

use tui_raycast_core::{Player, WorldGrid};

use crate::types::{ControlSignal, InputEvent};

/// Two-state frame loop machine. `Terminated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// Everything the frame loop mutates, owned in one place.
#[derive(Debug, Clone)]
pub struct Session {
    grid: WorldGrid,
    player: Player,
    state: RunState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            grid: WorldGrid::new(),
            player: Player::new(),
            state: RunState::Running,
        }
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Feed one polled event (or none) into the movement integrator.
    ///
    /// A `Terminate` signal moves the session to `Terminated`; once there it
    /// stays there regardless of further events.
    pub fn advance(&mut self, event: Option<InputEvent>) -> ControlSignal {
        if self.state == RunState::Terminated {
            return ControlSignal::Terminate;
        }
        let Some(event) = event else {
            return ControlSignal::Continue;
        };

        let signal = self.player.integrate(event);
        if signal == ControlSignal::Terminate {
            self.state = RunState::Terminated;
        }
        signal
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_transitions_to_terminated() {
        let mut s = Session::new();
        assert!(s.is_running());
        assert_eq!(
            s.advance(Some(InputEvent::Quit)),
            ControlSignal::Terminate
        );
        assert_eq!(s.state(), RunState::Terminated);
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut s = Session::new();
        s.advance(Some(InputEvent::Quit));
        assert_eq!(
            s.advance(Some(InputEvent::MoveForward)),
            ControlSignal::Terminate
        );
        assert_eq!(s.state(), RunState::Terminated);
    }

    #[test]
    fn test_no_event_keeps_running() {
        let mut s = Session::new();
        assert_eq!(s.advance(None), ControlSignal::Continue);
        assert!(s.is_running());
    }

    #[test]
    fn test_movement_reaches_the_player() {
        let mut s = Session::new();
        let x0 = s.player().x;
        s.advance(Some(InputEvent::MoveForward));
        assert!(s.player().x > x0);
    }
}
