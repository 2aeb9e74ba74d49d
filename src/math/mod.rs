//! Math utilities module
//!
//! Angle helpers shared by every chain solver, plus convenient re-exports
//! from glam.

mod angle;

pub use angle::{constrain_angle, normalize_angle, relative_angle_diff};

// Re-export the 2D vector type used throughout the crate
pub use glam::DVec2;
