//! Physical constants, display defaults and the fixed body table
//!
//! Planetary data from the NASA planetary fact sheet
//! (https://nssdc.gsfc.nasa.gov/planetary/factsheet/)

use crate::simulation::states::Rgb;

/// Astronomical unit in meters
pub const AU: f64 = 149.6e9;
/// Gravitational constant
pub const G: f64 = 6.67428e-11;
/// Seconds in one day
pub const DAY: f64 = 3600.0 * 24.0;

// Display defaults
pub const WIDTH: u32 = 935;
pub const HEIGHT: u32 = 725;
pub const COLOR_TEXT: Rgb = Rgb(255, 255, 255);
pub const COLOR_BACKGROUND: Rgb = Rgb(36, 36, 36);
pub const COLOR_SUN: Rgb = Rgb(252, 150, 1);

/// Physics steps per real second, one `timestep` each
pub const PHYSICS_HZ: f64 = 60.0;

pub const DEFAULT_SCALE_PX_PER_AU: f64 = 100.0;
pub const DEFAULT_SUN_RADIUS_PX: f64 = 12.0;

// Input steps
pub const ZOOM_STEP: f64 = 0.05;
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 2.0;
pub const SCALE_STEP_PX_PER_AU: f64 = 10.0;
pub const SCALE_MIN_PX_PER_AU: f64 = 1.0;
pub const TIMESTEP_STEP: f64 = DAY;
pub const PAN_STEP_PX: f64 = 5.0;
pub const EDGE_MARGIN_PX: f64 = 10.0;

// Sun
pub const SUN_MASS: f64 = 1.98892e30;
pub const SUN_RADIUS: f64 = 1392700e3 / 2.0;

/// One row of the fixed body table
#[derive(Debug, Clone, Copy)]
pub struct PlanetData {
    pub name: &'static str,
    pub color: Rgb,
    pub base_px: f64, // display radius at zoom 1.0
    pub inner: bool,
    pub orbit_au: f64, // initial distance along -x
    pub mass: f64, // kg
    pub radius: f64, // physical radius, meters
    pub velocity: f64, // initial +y orbital velocity, m/s
}

pub const PLANETS: [PlanetData; 8] = [
    PlanetData { name: "Mercury", color: Rgb(173, 168, 165), base_px: 3.0, inner: true, orbit_au: 0.387, mass: 0.330e24, radius: 4879e3 / 2.0, velocity: 47.40e3 },
    PlanetData { name: "Venus", color: Rgb(227, 158, 28), base_px: 5.0, inner: true, orbit_au: 0.723, mass: 4.870e24, radius: 12104e3 / 2.0, velocity: 35.02e3 },
    PlanetData { name: "Earth", color: Rgb(107, 147, 214), base_px: 5.0, inner: true, orbit_au: 1.0, mass: 5.970e24, radius: 12756e3 / 2.0, velocity: 29.78e3 },
    PlanetData { name: "Mars", color: Rgb(193, 68, 14), base_px: 4.0, inner: true, orbit_au: 1.524, mass: 0.642e24, radius: 6792e3 / 2.0, velocity: 24.06e3 },
    PlanetData { name: "Jupiter", color: Rgb(216, 202, 157), base_px: 10.0, inner: false, orbit_au: 5.204, mass: 1898e24, radius: 142984e3 / 2.0, velocity: 13.06e3 },
    PlanetData { name: "Saturn", color: Rgb(191, 189, 175), base_px: 9.0, inner: false, orbit_au: 9.573, mass: 568e24, radius: 120536e3 / 2.0, velocity: 9.68e3 },
    PlanetData { name: "Uranus", color: Rgb(209, 231, 231), base_px: 7.0, inner: false, orbit_au: 19.165, mass: 86.800e24, radius: 51118e3 / 2.0, velocity: 6.80e3 },
    PlanetData { name: "Neptune", color: Rgb(63, 84, 186), base_px: 7.0, inner: false, orbit_au: 30.178, mass: 102e24, radius: 49528e3 / 2.0, velocity: 5.43e3 },
];

/// Look up a planet row by name
pub fn planet_data(name: &str) -> Option<&'static PlanetData> {
    PLANETS.iter().find(|p| p.name == name)
}
