pub mod scaling;
pub mod transform;
pub mod controls;
pub mod hud;
