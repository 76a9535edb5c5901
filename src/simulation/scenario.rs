//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing, or the built-in solar system) and
//! produces the `Scenario` bevy resource: window size plus an `Engine` holding
//! the roster at t = 0 and the initial `SimParams`.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, KindConfig, ScenarioConfig, ViewConfig};
use crate::simulation::constants::{planet_data, AU, COLOR_SUN, PLANETS, SUN_MASS, SUN_RADIUS};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::params::{clamp_zoom, SimParams};
use crate::simulation::states::{Body, BodyKind, NVec2, System};
use crate::simulation::trail::{Trail, TrailPolicy};

/// Bevy resource representing a ready-to-run solar system
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub width: u32,
    pub height: u32,
    pub sun_radius_px: f64,
    pub engine: Engine,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let view = cfg.view;
        if view.width == 0 || view.height == 0 {
            return Err(SimError::InvalidScenario {
                reason: format!("window size {}x{}", view.width, view.height),
            });
        }
        if !(view.scale_px_per_au.is_finite() && view.scale_px_per_au > 0.0) {
            return Err(SimError::InvalidScenario {
                reason: format!("scale_px_per_au must be positive, got {}", view.scale_px_per_au),
            });
        }
        // NaN survives clamping and would reach every display radius
        if !view.zoom.is_finite() {
            return Err(SimError::InvalidScenario {
                reason: format!("zoom must be finite, got {}", view.zoom),
            });
        }
        // sign is free, zero freezes and negative runs backwards
        if !view.timestep.is_finite() {
            return Err(SimError::InvalidScenario {
                reason: format!("timestep must be finite, got {}", view.timestep),
            });
        }
        if !(view.sun_radius_px.is_finite() && view.sun_radius_px > 0.0) {
            return Err(SimError::InvalidScenario {
                reason: format!("sun_radius_px must be positive, got {}", view.sun_radius_px),
            });
        }

        let policy = TrailPolicy::from_capacity(view.trail_capacity);

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc, policy, view.sun_radius_px))
            .collect::<Result<Vec<Body>, SimError>>()?;

        let system = System::new(bodies)?;

        let params = SimParams {
            scale: view.scale_px_per_au / AU,
            zoom: clamp_zoom(view.zoom),
            timestep: view.timestep,
            offset: NVec2::zeros(),
        };

        let engine = Engine::new(system, params)?;

        Ok(Self {
            width: view.width,
            height: view.height,
            sun_radius_px: view.sun_radius_px,
            engine,
        })
    }

    /// The Sun and eight planets from the built-in table
    pub fn solar_system() -> Result<Self, SimError> {
        Self::build_scenario(default_config())
    }
}

fn build_body(id: usize, bc: &BodyConfig, policy: TrailPolicy, sun_radius_px: f64) -> Result<Body, SimError> {
    let x = NVec2::new(-bc.orbit_au * AU, 0.0);

    let mut body = match bc.kind {
        KindConfig::Sun => {
            let mut sun = Body::new(id, bc.name.clone(), BodyKind::Sun, x, bc.mass);
            sun.color = COLOR_SUN;
            sun.display_radius = sun_radius_px;
            sun
        }
        KindConfig::Planet => {
            let data = planet_data(&bc.name).ok_or_else(|| SimError::UnregisteredBody {
                name: bc.name.clone(),
            })?;
            let mut planet = Body::new(id, bc.name.clone(), BodyKind::Planet, x, bc.mass);
            planet.color = data.color;
            planet.inner = data.inner;
            planet
        }
    };

    body.v = NVec2::new(0.0, bc.velocity);
    body.radius = bc.radius;
    body.trail = Trail::new(policy);
    body.draw_trail = bc.draw_trail.unwrap_or(bc.kind == KindConfig::Planet) && bc.kind == KindConfig::Planet;
    Ok(body)
}

/// Built-in scenario, same shape as a YAML file
pub fn default_config() -> ScenarioConfig {
    let sun = BodyConfig {
        name: "Sun".to_string(),
        kind: KindConfig::Sun,
        orbit_au: 0.0,
        velocity: 0.0,
        mass: SUN_MASS,
        radius: SUN_RADIUS,
        draw_trail: Some(false),
    };

    let planets = PLANETS.iter().map(|p| BodyConfig {
        name: p.name.to_string(),
        kind: KindConfig::Planet,
        orbit_au: p.orbit_au,
        velocity: p.velocity,
        mass: p.mass,
        radius: p.radius,
        draw_trail: Some(true),
    });

    ScenarioConfig {
        view: ViewConfig::default(),
        bodies: std::iter::once(sun).chain(planets).collect(),
    }
}
