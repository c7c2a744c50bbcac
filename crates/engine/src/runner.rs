//! The fixed-cadence frame loop.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use tui_raycast_input::EventSource;
use tui_raycast_term::{DisplaySurface, FrameBuffer, SceneView, Viewport};

use crate::session::Session;
use crate::types::{ControlSignal, FRAME_MS};

/// Drive a session to completion: init the surface, then per frame render,
/// poll one event, integrate, and pace to `FRAME_MS`.
///
/// On a `Terminate` signal the surface is shut down exactly once and the
/// function returns `Ok`. Collaborator errors propagate immediately without
/// shutdown; the caller owns any restore-on-error handling.
pub fn run_session<S, E>(surface: &mut S, events: &mut E) -> Result<()>
where
    S: DisplaySurface,
    E: EventSource,
{
    let mut session = Session::new();
    let view = SceneView::default();
    let frame = Duration::from_millis(FRAME_MS);

    surface.init()?;

    let (w, h) = surface.size();
    let mut fb = FrameBuffer::new(w, h);

    while session.is_running() {
        let frame_start = Instant::now();

        let (w, h) = surface.size();
        view.render_into(session.grid(), session.player(), Viewport::new(w, h), &mut fb);
        surface.present(&fb)?;

        // Block for input up to the remaining frame budget, then sleep out
        // whatever is left so the cadence stays fixed even when a key
        // arrives early.
        let timeout = frame.saturating_sub(frame_start.elapsed());
        let event = events.next_event(timeout)?;

        if session.advance(event) == ControlSignal::Terminate {
            break;
        }

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    surface.shutdown()?;
    Ok(())
}
