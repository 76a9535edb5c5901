//! Core state types for the solar system simulation
//!
//! - `Body`      one celestial object, Sun or planet, with its trail
//! - `PointMass` the immutable position/mass view other bodies read during a step
//! - `System`    the roster in insertion order plus the simulated clock

use nalgebra::Vector2;

use crate::simulation::error::SimError;
use crate::simulation::trail::{Trail, TrailPolicy};

pub type NVec2 = Vector2<f64>;

/// 8-bit sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Role of a body in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: usize, // index in the roster
    pub name: String,
    pub kind: BodyKind,
    pub x: NVec2, // position, m
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg
    pub radius: f64, // physical radius, m
    pub display_radius: f64, // px, recomputed from zoom
    pub color: Rgb,
    pub inner: bool, // inner planet, for the view filter
    pub trail: Trail,
    pub distance_to_sun: f64, // m, cached from the latest force pass
    pub draw_trail: bool,
}

impl Body {
    pub fn new(id: usize, name: impl Into<String>, kind: BodyKind, x: NVec2, m: f64) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            x,
            v: NVec2::zeros(),
            m,
            radius: 0.0,
            display_radius: 0.0,
            color: Rgb(255, 255, 255),
            inner: false,
            trail: Trail::new(TrailPolicy::Unbounded),
            distance_to_sun: 0.0,
            draw_trail: kind == BodyKind::Planet,
        }
    }

    pub fn is_sun(&self) -> bool {
        self.kind == BodyKind::Sun
    }

    pub fn point_mass(&self) -> PointMass<'_> {
        PointMass {
            id: self.id,
            name: &self.name,
            kind: self.kind,
            x: self.x,
            m: self.m,
        }
    }
}

/// Position and mass of a body as seen by every other body in the same step
#[derive(Debug, Clone, Copy)]
pub struct PointMass<'a> {
    pub id: usize,
    pub name: &'a str,
    pub kind: BodyKind,
    pub x: NVec2,
    pub m: f64,
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order is processing order
    pub t: f64, // simulated seconds elapsed
    pub steps: u64, // completed integration steps
}

impl System {
    /// Build a roster, enforcing exactly one Sun, positive masses and
    /// distinct positions
    pub fn new(mut bodies: Vec<Body>) -> Result<Self, SimError> {
        let suns = bodies.iter().filter(|b| b.is_sun()).count();
        if suns != 1 {
            return Err(SimError::SunCount { found: suns });
        }

        for b in &bodies {
            if !b.m.is_finite() || b.m <= 0.0 {
                return Err(SimError::NonPositiveMass { body: b.name.clone() });
            }
            if !b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()) {
                return Err(SimError::NonFiniteState { body: b.name.clone() });
            }
        }

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].x == bodies[j].x {
                    return Err(SimError::CoincidentBodies {
                        a: bodies[i].name.clone(),
                        b: bodies[j].name.clone(),
                    });
                }
            }
        }

        // ids always match roster order
        for (i, b) in bodies.iter_mut().enumerate() {
            b.id = i;
        }

        Ok(Self {
            bodies,
            t: 0.0,
            steps: 0,
        })
    }

    /// Snapshot of every body's position and mass
    pub fn roster(&self) -> Vec<PointMass<'_>> {
        self.bodies.iter().map(Body::point_mass).collect()
    }

    /// `None` only if `bodies` was emptied after construction
    pub fn sun(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_sun())
    }

    pub fn planets(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(|b| !b.is_sun())
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
