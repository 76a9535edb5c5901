use std::time::Instant;

use crate::simulation::constants::{AU, DAY, G, SUN_MASS};
use crate::simulation::error::SimError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::SimParams;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, BodyKind, NVec2, System};

/// Time the frame driver without a window
pub fn bench_step(frames: usize) -> Result<(), SimError> {
    // The real roster through the full engine (sizes, trail, step)
    let mut scenario = Scenario::solar_system()?;
    let t0 = Instant::now();
    for _ in 0..frames {
        scenario.engine.advance_frame()?;
    }
    let dt = t0.elapsed().as_secs_f64();
    println!(
        "solar system: {frames} frames, {:8.6} ms/frame, earth trail {} points",
        dt * 1000.0 / frames.max(1) as f64,
        scenario.engine.system.get("Earth").map(|b| b.trail.len()).unwrap_or(0)
    );

    // Synthetic rosters for the pairwise force cost
    let ns = [9, 50, 100, 200, 400];
    for n in ns {
        let mut sys = ring_system(n)?;
        let params = SimParams {
            timestep: DAY,
            ..Default::default()
        };

        // Warm up
        euler_integrator(&mut sys, &params)?;

        let t1 = Instant::now();
        for _ in 0..frames {
            euler_integrator(&mut sys, &params)?;
        }
        let dt = t1.elapsed().as_secs_f64();
        println!("N = {n:5}, {:8.6} ms/frame", dt * 1000.0 / frames.max(1) as f64);
    }

    Ok(())
}

// Sun plus n - 1 light planets on circular orbits between 1 and 30 AU
fn ring_system(n: usize) -> Result<System, SimError> {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new(0, "Sun", BodyKind::Sun, NVec2::zeros(), SUN_MASS));

    for i in 1..n {
        let i_f = i as f64;
        // deterministic placement, no rand needed
        let r = (1.0 + 29.0 * i_f / n as f64) * AU;
        let phi = i_f * 2.399963; // golden angle
        let x = NVec2::new(r * phi.cos(), r * phi.sin());
        let speed = (G * SUN_MASS / r).sqrt();
        let mut b = Body::new(i, format!("p{i}"), BodyKind::Planet, x, 1.0e24);
        b.v = NVec2::new(-phi.sin() * speed, phi.cos() * speed);
        bodies.push(b);
    }

    System::new(bodies)
}
