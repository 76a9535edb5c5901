//! Per-frame step driver
//!
//! Each frame runs in a fixed order:
//! 1. apply the frame's control events to `SimParams`
//! 2. recompute the scaled size table if the zoom changed
//! 3. refresh every planet's display radius from that table
//! 4. integrate all planets against the pre-step roster
//!
//! Parameters are read-only from step 3 on.

use bevy::log::{error, info, warn};

use crate::simulation::error::SimError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::SimParams;
use crate::simulation::states::System;
use crate::simulation::trail::TrailPolicy;
use crate::view::controls::{apply_event, Applied, BodyFilter, ControlEvent, Flow};
use crate::view::hud::{draw_commands, DrawCommand};
use crate::view::scaling::{calculate_scaled_sizes, ScaledSizes};
use crate::view::transform::Viewport;

/// Trail length that gets a one-time warning for unbounded trails
pub const TRAIL_WARN_POINTS: usize = 250_000;

#[derive(Debug, Clone)]
pub struct Engine {
    pub system: System,
    pub params: SimParams,
    pub sizes: ScaledSizes,
    pub filter: BodyFilter,
    pub frames: u64,
    halted: Option<SimError>, // set by the first failed step
    trail_warned: bool,
}

impl Engine {
    pub fn new(system: System, params: SimParams) -> Result<Self, SimError> {
        let sizes = calculate_scaled_sizes(params.zoom);
        let mut engine = Self {
            system,
            params,
            sizes,
            filter: BodyFilter::All,
            frames: 0,
            halted: None,
            trail_warned: false,
        };
        // unknown planet names fail here rather than on the first frame
        engine.refresh_display_radii()?;
        Ok(engine)
    }

    /// Apply a frame's worth of control events, in order
    pub fn apply_controls<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = ControlEvent>,
    {
        let mut applied = Applied::default();
        for event in events {
            apply_event(&mut self.params, &mut self.system, &mut self.filter, event, &mut applied);
        }

        if applied.zoom_changed {
            self.sizes = calculate_scaled_sizes(self.params.zoom);
            info!(
                "zoom {:.2}, scale {:.1} px/AU",
                self.sizes.zoom(),
                self.params.scale_px_per_au()
            );
        }
        if applied.timestep_changed {
            info!("timestep {:.0} days per frame", self.params.timestep_days());
        }

        applied.flow()
    }

    /// Planet radii from the current size table, the Sun keeps its own
    pub fn refresh_display_radii(&mut self) -> Result<(), SimError> {
        for body in self.system.bodies.iter_mut().filter(|b| !b.is_sun()) {
            body.display_radius = self.sizes.get(&body.name)?;
        }
        Ok(())
    }

    /// Run one frame of physics. After the first failure the engine stays
    /// halted and later calls return the same error without integrating.
    pub fn advance_frame(&mut self) -> Result<(), SimError> {
        if let Some(e) = &self.halted {
            return Err(e.clone());
        }

        let result = self
            .refresh_display_radii()
            .and_then(|_| euler_integrator(&mut self.system, &self.params));

        match result {
            Ok(()) => {
                self.frames += 1;
                self.check_trails();
                Ok(())
            }
            Err(e) => {
                error!("simulation halted at frame {}: {e}", self.frames);
                self.halted = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn halted(&self) -> Option<&SimError> {
        self.halted.as_ref()
    }

    pub fn draw_commands(&self, width: f64, height: f64) -> Vec<DrawCommand> {
        let view = Viewport::new(&self.params, width, height);
        draw_commands(&self.system, self.filter, &view)
    }

    fn check_trails(&mut self) {
        if self.trail_warned {
            return;
        }
        let long = self
            .system
            .bodies
            .iter()
            .find(|b| b.trail.policy() == TrailPolicy::Unbounded && b.trail.len() >= TRAIL_WARN_POINTS);
        if let Some(b) = long {
            warn!(
                "trail of {} holds {} points and keeps growing, set view.trail_capacity to bound it",
                b.name,
                b.trail.len()
            );
            self.trail_warned = true;
        }
    }
}
