//! Terminal raycaster runner (default binary).
//!
//! Casts one ray per terminal column through a fixed 16x16 grid and draws
//! distance-shaded vertical strips at a fixed 50ms cadence. Arrow keys or
//! w/a/s/d move and turn; `q` quits.

use anyhow::Result;

use tui_raycast::engine::run_session;
use tui_raycast::input::CrosstermEvents;
use tui_raycast::term::TerminalRenderer;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    let mut events = CrosstermEvents::new();

    let result = run_session(&mut term, &mut events);

    // The loop shuts the terminal down on a clean quit; restore it here only
    // when an error unwound past that point.
    if result.is_err() {
        let _ = term.exit();
    }
    result
}
