//! Fixed-step explicit Euler integration
//!
//! One force evaluation per body per frame, no sub-stepping:
//!   v_n+1 = v_n + (F / m) dt
//!   x_n+1 = x_n + v_n+1 dt
//!
//! `euler_integrator` runs in two phases. Every planet's next state is computed
//! against the same pre-step roster, then all states are committed at once.
//! If any body fails the whole step is dropped and nothing moves.

use crate::simulation::error::SimError;
use crate::simulation::forces::NetForce;
use crate::simulation::params::SimParams;
use crate::simulation::states::{Body, NVec2, PointMass, System};

/// Next state of one body, not yet applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub x: NVec2,
    pub v: NVec2,
    pub distance_to_sun: Option<f64>,
}

impl Body {
    /// Integrate `net` over `dt` without touching `self`
    pub fn advance(&self, net: NetForce, dt: f64) -> Result<Advance, SimError> {
        // a = F / m
        let a = net.f / self.m;
        let v = self.v + a * dt;
        let x = self.x + v * dt;

        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteState {
                body: self.name.clone(),
            });
        }

        Ok(Advance {
            x,
            v,
            distance_to_sun: net.distance_to_sun,
        })
    }

    /// Apply an `Advance` and append the new position to the trail
    pub fn commit(&mut self, next: Advance) {
        self.v = next.v;
        self.x = next.x;
        if let Some(d) = next.distance_to_sun {
            self.distance_to_sun = d;
        }
        self.trail.push(self.x);
    }

    /// Sum the pull of every other body in `roster`, integrate one step and
    /// record the new position
    pub fn update_position(&mut self, roster: &[PointMass], dt: f64) -> Result<(), SimError> {
        let net = self.net_force(roster)?;
        let next = self.advance(net, dt)?;
        self.commit(next);
        Ok(())
    }
}

/// Advance every planet of `sys` by `params.timestep`; the Sun stays put
pub fn euler_integrator(sys: &mut System, params: &SimParams) -> Result<(), SimError> {
    let dt = params.timestep;

    // Phase 1: read-only pass over the pre-step roster
    let pending: Vec<(usize, Advance)> = {
        let roster = sys.roster();
        let mut pending = Vec::with_capacity(sys.bodies.len());
        for (i, body) in sys.bodies.iter().enumerate() {
            if body.is_sun() {
                continue;
            }
            let net = body.net_force(&roster)?;
            pending.push((i, body.advance(net, dt)?));
        }
        pending
    };

    // Phase 2: commit in insertion order
    for (i, next) in pending {
        sys.bodies[i].commit(next);
    }

    sys.t += dt;
    sys.steps += 1;
    Ok(())
}
