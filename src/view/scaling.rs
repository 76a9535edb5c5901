//! Display radii for the planets
//!
//! On-screen size is the body table's base radius times the zoom factor. It
//! is not derived from the physical radius through the position scale, so
//! planets stay visible when the whole system fits the window.

use crate::simulation::constants::PLANETS;
use crate::simulation::error::SimError;

/// Pixel radius per registered planet, in body table order
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSizes {
    zoom: f64,
    sizes: Vec<(&'static str, f64)>,
}

impl ScaledSizes {
    /// Radius for `name`, failing for anything outside the fixed table
    pub fn get(&self, name: &str) -> Result<f64, SimError> {
        self.sizes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| *r)
            .ok_or_else(|| SimError::UnregisteredBody {
                name: name.to_string(),
            })
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.sizes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// The caller clamps `zoom` to [ZOOM_MIN, ZOOM_MAX] beforehand
pub fn calculate_scaled_sizes(zoom: f64) -> ScaledSizes {
    ScaledSizes {
        zoom,
        sizes: PLANETS.iter().map(|p| (p.name, p.base_px * zoom)).collect(),
    }
}
