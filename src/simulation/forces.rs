//! Pairwise Newtonian gravity
//!
//! Every body feels every other body directly (O(n^2) per frame), there is
//! no aggregate field or tree approximation. Zero separation is an error,
//! never a softened or infinite force.

use crate::simulation::constants::G;
use crate::simulation::error::SimError;
use crate::simulation::states::{Body, BodyKind, NVec2, PointMass};

/// Force exerted by one other body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub f: NVec2, // N, pointing from self toward other
    pub distance: f64, // m
}

/// Summed force from a whole roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetForce {
    pub f: NVec2,
    pub distance_to_sun: Option<f64>, // set when the roster holds a sun other than self
}

/// Gravitational pull of `other` on `body`
pub fn attraction(body: &PointMass, other: &PointMass) -> Result<Attraction, SimError> {
    // r points from body to other
    let r = other.x - body.x;
    let distance = r.norm();

    if distance == 0.0 {
        return Err(SimError::CoincidentBodies {
            a: body.name.to_string(),
            b: other.name.to_string(),
        });
    }

    // |F| = G m1 m2 / d^2
    let force = G * body.m * other.m / (distance * distance);

    // Split along the angle between the two positions
    let theta = r.y.atan2(r.x);
    let f = NVec2::new(theta.cos() * force, theta.sin() * force);

    if !f.x.is_finite() || !f.y.is_finite() {
        return Err(SimError::NonFiniteState {
            body: body.name.to_string(),
        });
    }

    Ok(Attraction { f, distance })
}

/// Sum of `attraction` over every roster entry except `body` itself
pub fn net_force(body: &PointMass, roster: &[PointMass]) -> Result<NetForce, SimError> {
    let mut total = NVec2::zeros();
    let mut distance_to_sun = None;

    for other in roster {
        if other.id == body.id {
            continue;
        }
        let a = attraction(body, other)?;
        total += a.f;
        if other.kind == BodyKind::Sun {
            distance_to_sun = Some(a.distance);
        }
    }

    Ok(NetForce {
        f: total,
        distance_to_sun,
    })
}

impl Body {
    /// Force that `other` exerts on this body
    ///
    /// When `other` is the Sun the separation is cached as `distance_to_sun`,
    /// which only the HUD reads.
    pub fn attraction(&mut self, other: &Body) -> Result<NVec2, SimError> {
        let a = attraction(&self.point_mass(), &other.point_mass())?;
        if other.is_sun() {
            self.distance_to_sun = a.distance;
        }
        Ok(a.f)
    }

    /// Net force from `roster`, a snapshot that stays fixed while summing
    pub fn net_force(&self, roster: &[PointMass]) -> Result<NetForce, SimError> {
        net_force(&self.point_mass(), roster)
    }
}
