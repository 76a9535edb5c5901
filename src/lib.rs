pub mod simulation;
pub mod configuration;
pub mod view;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyKind, PointMass, Rgb, System, NVec2};
pub use simulation::forces::{attraction, net_force, Attraction, NetForce};
pub use simulation::integrator::{euler_integrator, Advance};
pub use simulation::params::SimParams;
pub use simulation::engine::Engine;
pub use simulation::error::SimError;
pub use simulation::trail::{Trail, TrailPolicy};
pub use simulation::scenario::{default_config, Scenario};

pub use configuration::config::{BodyConfig, KindConfig, ScenarioConfig, ViewConfig};

pub use view::scaling::{calculate_scaled_sizes, ScaledSizes};
pub use view::transform::{world_to_screen, Viewport};
pub use view::controls::{edge_pan, BodyFilter, ControlEvent, Flow};

pub use visualization::solsim_vis2d::{run_2d, PhysicsPlugin};

pub use benchmark::benchmark::bench_step;
