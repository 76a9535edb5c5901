//! User controls mapped to parameter and view changes
//!
//! The shell turns raw input into `ControlEvent`s. All events of a frame are
//! applied before the physics pass, so every body integrates with the same
//! parameters.

use crate::simulation::constants::EDGE_MARGIN_PX;
use crate::simulation::params::SimParams;
use crate::simulation::states::{Body, System};

/// Which bodies are drawn. Physics always runs on the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyFilter {
    #[default]
    All,
    Inner,
    Outer,
}

impl BodyFilter {
    pub fn shows(&self, body: &Body) -> bool {
        if body.is_sun() {
            return true;
        }
        match self {
            BodyFilter::All => true,
            BodyFilter::Inner => body.inner,
            BodyFilter::Outer => !body.inner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    ZoomIn,
    ZoomOut,
    SpeedUp,
    SlowDown,
    /// In pan steps, positive moves the scene right / down
    Pan { dx: i32, dy: i32 },
    ToggleAllTrails,
    /// Planet index in roster order, 0 is the first planet
    ToggleTrail(usize),
    Show(BodyFilter),
    Quit,
}

/// What the shell should do after a batch of events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    pub zoom_changed: bool,
    pub timestep_changed: bool,
    pub quit: bool,
}

impl Applied {
    pub fn flow(&self) -> Flow {
        if self.quit {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }
}

pub fn apply_event(
    params: &mut SimParams,
    system: &mut System,
    filter: &mut BodyFilter,
    event: ControlEvent,
    applied: &mut Applied,
) {
    match event {
        ControlEvent::ZoomIn => {
            params.zoom_in();
            applied.zoom_changed = true;
        }
        ControlEvent::ZoomOut => {
            params.zoom_out();
            applied.zoom_changed = true;
        }
        ControlEvent::SpeedUp => {
            params.speed_up();
            applied.timestep_changed = true;
        }
        ControlEvent::SlowDown => {
            params.slow_down();
            applied.timestep_changed = true;
        }
        ControlEvent::Pan { dx, dy } => params.pan(dx, dy),
        ControlEvent::ToggleAllTrails => {
            for b in system.bodies.iter_mut().filter(|b| !b.is_sun()) {
                b.draw_trail = !b.draw_trail;
            }
        }
        ControlEvent::ToggleTrail(n) => {
            // out of range indices are ignored
            if let Some(b) = system.bodies.iter_mut().filter(|b| !b.is_sun()).nth(n) {
                b.draw_trail = !b.draw_trail;
            }
        }
        ControlEvent::Show(f) => *filter = f,
        ControlEvent::Quit => applied.quit = true,
    }
}

/// Pan direction when the cursor sits within `EDGE_MARGIN_PX` of a border.
/// Cursor in screen pixels, top-left origin.
pub fn edge_pan(cursor: Option<(f64, f64)>, width: f64, height: f64) -> Option<ControlEvent> {
    let (mx, my) = cursor?;

    let dx = if mx <= EDGE_MARGIN_PX {
        1
    } else if mx >= width - EDGE_MARGIN_PX {
        -1
    } else {
        0
    };
    let dy = if my <= EDGE_MARGIN_PX {
        1
    } else if my >= height - EDGE_MARGIN_PX {
        -1
    } else {
        0
    };

    if dx == 0 && dy == 0 {
        None
    } else {
        Some(ControlEvent::Pan { dx, dy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_in_the_middle_does_not_pan() {
        assert_eq!(edge_pan(Some((400.0, 300.0)), 935.0, 725.0), None);
        assert_eq!(edge_pan(None, 935.0, 725.0), None);
    }

    #[test]
    fn corner_pans_both_axes() {
        assert_eq!(
            edge_pan(Some((0.0, 724.0)), 935.0, 725.0),
            Some(ControlEvent::Pan { dx: 1, dy: -1 })
        );
    }
}
