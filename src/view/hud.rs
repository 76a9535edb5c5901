//! Core -> shell output: per-body draw commands and HUD text

use crate::simulation::states::{Rgb, System};
use crate::view::controls::BodyFilter;
use crate::view::transform::Viewport;

pub const TITLE: &str = "Solar System Simulation";

pub const NAVIGATION: [&str; 5] = [
    "Navigation:",
    "Adjust view with arrow keys or by moving mouse to screen edges.",
    "Scroll mouse wheel to adjust simulation scale and zoom.",
    "Press [+] / [-] to adjust simulation speed",
    "Press [ESC] to quit simulation.",
];

pub const TOGGLES: &str = "[Q] / [1]-[8] orbit lines, [A] / [S] / [D] all / inner / outer planets";

pub const DISTANCE_TITLE: &str = "Distance from the Sun:";

/// One body to draw, in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub id: usize,
    pub color: Rgb,
    pub center: (f64, f64),
    pub radius: f64,
    pub trail: Option<Vec<(f64, f64)>>,
}

pub fn draw_commands(system: &System, filter: BodyFilter, view: &Viewport) -> Vec<DrawCommand> {
    system
        .bodies
        .iter()
        .filter(|b| filter.shows(b))
        .map(|b| DrawCommand {
            id: b.id,
            color: b.color,
            center: view.project(b.x.x, b.x.y),
            radius: b.display_radius,
            trail: view.orbit_line(b),
        })
        .collect()
}

/// Meters to kilometers, rounded to one decimal
pub fn distance_km(meters: f64) -> f64 {
    (meters / 1000.0 * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLine {
    pub id: usize,
    pub color: Rgb,
    pub text: String,
}

/// "<Name>: <km> km" for every planet that passes `filter`
pub fn distance_lines(system: &System, filter: BodyFilter) -> Vec<DistanceLine> {
    system
        .planets()
        .filter(|b| filter.shows(b))
        .map(|b| DistanceLine {
            id: b.id,
            color: b.color,
            text: format!("{}: {:.1} km", b.name, distance_km(b.distance_to_sun)),
        })
        .collect()
}

pub fn timestep_line(days: f64) -> String {
    format!("Timestep: {days:.0} days / frame")
}
