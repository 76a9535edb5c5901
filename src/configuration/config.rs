//! Configuration types for loading solar system scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ViewConfig`]     – window size and the initial scale / zoom / timestep
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! view:
//!   width: 935
//!   height: 725
//!   scale_px_per_au: 100.0  # 1 AU = 100 pixels
//!   zoom: 1.0               # clamped to [0.1, 2.0]
//!   timestep: 86400.0       # simulated seconds per frame
//!   trail_capacity: 5000    # optional, unbounded when absent
//!   sun_radius_px: 12.0
//!
//! bodies:
//!   - name: Sun
//!     kind: sun
//!     mass: 1.98892e30
//!   - name: Earth
//!     kind: planet
//!     orbit_au: 1.0         # starts at x = -orbit_au
//!     velocity: 29.78e3     # initial y velocity, m/s
//!     mass: 5.970e24
//!     radius: 6.378e6
//! ```
//!
//! Any field of `view` may be left out. Planet names must be in the fixed body
//! table, that table supplies colour and base display radius.

use serde::Deserialize;

use crate::simulation::constants::{DEFAULT_SCALE_PX_PER_AU, DEFAULT_SUN_RADIUS_PX, DAY, HEIGHT, WIDTH};

/// Role of a body, `kind: sun` or `kind: planet`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindConfig {
    #[serde(rename = "sun")]
    Sun,
    #[serde(rename = "planet")]
    Planet,
}

/// Window and initial view / time parameters
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub scale_px_per_au: f64,
    pub zoom: f64,
    pub timestep: f64,
    pub trail_capacity: Option<usize>,
    pub sun_radius_px: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale_px_per_au: DEFAULT_SCALE_PX_PER_AU,
            zoom: 1.0,
            timestep: DAY,
            trail_capacity: None,
            sun_radius_px: DEFAULT_SUN_RADIUS_PX,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub kind: KindConfig,
    #[serde(default)]
    pub orbit_au: f64, // initial distance along -x, AU
    #[serde(default)]
    pub velocity: f64, // initial +y velocity, m/s
    pub mass: f64, // kg
    #[serde(default)]
    pub radius: f64, // physical radius, m
    pub draw_trail: Option<bool>, // defaults to true for planets
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
