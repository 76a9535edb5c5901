//! Simulation-wide parameters
//!
//! `SimParams` bundles everything that is shared by all bodies in a frame:
//! - `scale`    meters -> pixels for positions
//! - `zoom`     multiplier on displayed body radii, independent of `scale`
//! - `timestep` simulated seconds per frame, signed
//! - `offset`   pan offset in pixels
//!
//! It is only written by control events at the start of a frame and is read
//! only during the physics and render passes.

use crate::simulation::constants::{
    AU, DAY, DEFAULT_SCALE_PX_PER_AU, PAN_STEP_PX, SCALE_MIN_PX_PER_AU, SCALE_STEP_PX_PER_AU,
    TIMESTEP_STEP, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use crate::simulation::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    pub scale: f64, // px per meter
    pub zoom: f64,
    pub timestep: f64, // s per frame
    pub offset: NVec2, // px
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE_PX_PER_AU / AU,
            zoom: 1.0,
            timestep: DAY,
            offset: NVec2::zeros(),
        }
    }
}

impl SimParams {
    /// Scroll up: larger scale and larger bodies
    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom + ZOOM_STEP);
        self.scale += SCALE_STEP_PX_PER_AU / AU;
    }

    /// Scroll down, the scale never drops below `SCALE_MIN_PX_PER_AU`
    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom - ZOOM_STEP);
        self.scale = (self.scale - SCALE_STEP_PX_PER_AU / AU).max(SCALE_MIN_PX_PER_AU / AU);
    }

    /// No bound in either direction: zero freezes, negative runs time backwards
    pub fn speed_up(&mut self) {
        self.timestep += TIMESTEP_STEP;
    }

    pub fn slow_down(&mut self) {
        self.timestep -= TIMESTEP_STEP;
    }

    /// Shift the view by whole pan steps
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset.x += f64::from(dx) * PAN_STEP_PX;
        self.offset.y += f64::from(dy) * PAN_STEP_PX;
    }

    pub fn scale_px_per_au(&self) -> f64 {
        self.scale * AU
    }

    pub fn timestep_days(&self) -> f64 {
        self.timestep / DAY
    }
}

pub fn clamp_zoom(z: f64) -> f64 {
    z.clamp(ZOOM_MIN, ZOOM_MAX)
}
