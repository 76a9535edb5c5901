//! World (meters) to screen (pixels) mapping
//!
//! Screen origin is the top-left corner, y grows downward. Trails are stored
//! in world coordinates and go through the same mapping every frame, so a
//! scale change reshapes past orbit lines too.

use crate::simulation::params::SimParams;
use crate::simulation::states::Body;
use crate::simulation::trail::Trail;

/// Fewer points than this make a degenerate polyline
pub const MIN_TRAIL_POINTS: usize = 3;

pub fn world_to_screen(
    x: f64,
    y: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    screen_width: f64,
    screen_height: f64,
) -> (f64, f64) {
    (
        x * scale + screen_width / 2.0 + offset_x,
        y * scale + screen_height / 2.0 + offset_y,
    )
}

/// Screen size in pixels plus the current view parameters
#[derive(Debug, Clone, Copy)]
pub struct Viewport<'a> {
    pub params: &'a SimParams,
    pub width: f64,
    pub height: f64,
}

impl<'a> Viewport<'a> {
    pub fn new(params: &'a SimParams, width: f64, height: f64) -> Self {
        Self {
            params,
            width,
            height,
        }
    }

    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        world_to_screen(
            x,
            y,
            self.params.scale,
            self.params.offset.x,
            self.params.offset.y,
            self.width,
            self.height,
        )
    }

    pub fn project_trail(&self, trail: &Trail) -> Vec<(f64, f64)> {
        trail.iter().map(|p| self.project(p.x, p.y)).collect()
    }

    /// Orbit polyline for `body`, only when trails are on for it and it has
    /// enough points
    pub fn orbit_line(&self, body: &Body) -> Option<Vec<(f64, f64)>> {
        if body.is_sun() || !body.draw_trail || body.trail.len() < MIN_TRAIL_POINTS {
            return None;
        }
        Some(self.project_trail(&body.trail))
    }
}
