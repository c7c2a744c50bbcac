//! SceneView: ray-casts the world into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{cast, column_angle, project, Occupancy, Player, WallStrip};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::ShadeTier;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the first-person view plus the HUD.
pub struct SceneView {
    background: CellStyle,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            background: CellStyle::default(),
        }
    }
}

impl SceneView {
    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse a framebuffer
    /// across frames; it is resized only when the terminal size changes.
    /// One ray per column: cast, project, draw the strip centered on the
    /// horizontal midline, then overlay the HUD.
    pub fn render_into<G: Occupancy>(
        &self,
        grid: &G,
        player: &Player,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell {
            ch: ' ',
            style: self.background,
        });

        for col in 0..viewport.width {
            let angle = column_angle(player.heading, col, viewport.width);
            let sample = cast(grid, (player.x, player.y), angle);
            let strip = project(sample.distance, viewport.height);
            self.draw_strip(fb, col, viewport.height, strip);
        }

        self.draw_hud(fb, player);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<G: Occupancy>(
        &self,
        grid: &G,
        player: &Player,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, player, viewport, &mut fb);
        fb
    }

    fn draw_strip(&self, fb: &mut FrameBuffer, col: u16, screen_height: u16, strip: WallStrip) {
        let mid = screen_height / 2;
        let half = strip.height / 2;
        // Mirror the half-height around the midline, clipped to the screen.
        let top = mid.saturating_sub(half);
        let bottom = (mid + strip.height - half).min(screen_height);

        let (ch, style) = tier_brush(strip.tier);
        fb.fill_col(col, top, bottom, ch, style);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, player: &Player) {
        let label = CellStyle {
            fg: Rgb::new(100, 220, 120),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(1, 1, "HEALTH ", label);
        fb.put_u32(8, 1, player.health, label);
    }
}

/// Glyph and style for a shade tier, the terminal-agnostic stand-in for
/// color-pair registration.
pub fn tier_brush(tier: ShadeTier) -> (char, CellStyle) {
    match tier {
        ShadeTier::Near => (
            '█',
            CellStyle {
                fg: Rgb::new(220, 80, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            },
        ),
        ShadeTier::Far => (
            '▒',
            CellStyle {
                fg: Rgb::new(140, 60, 60),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: true,
            },
        ),
    }
}
