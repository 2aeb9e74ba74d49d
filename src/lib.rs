//! # creature-ik
//!
//! Procedural creature animation from a small set of jointed chains,
//! driven by one moving target point and rendered as continuous tapered
//! silhouettes.
//!
//! ## Features
//! - Follow-the-leader spine solver with per-joint angle constraints
//! - Limb and tentacle appendage solvers with re-target hysteresis
//! - Silhouette contour generation behind a drawing capability trait
//! - Pure per-frame stepping: no internal loops, timers, or globals
//!
//! ## Example
//! ```rust
//! use creature_ik::{Creature, CreatureConfig, RecordingSurface};
//! use glam::DVec2;
//!
//! let config = CreatureConfig::default();
//! let mut creature = Creature::new(config, DVec2::new(400.0, 300.0)).unwrap();
//!
//! // Once per display frame, from the host's render loop:
//! let mut surface = RecordingSurface::new();
//! creature.step_and_render(DVec2::new(420.0, 310.0), 0.016, &mut surface, false);
//! assert!(!surface.commands().is_empty());
//! ```

pub mod config;
pub mod creature;
pub mod math;
pub mod render;

pub use config::{
    ConfigError, CreatureConfig, LimbConfig, SpawnDirection, SpineConfig, TentacleConfig,
};
pub use creature::{Creature, Segment};
pub use render::{Color, RecordingSurface, Surface, SurfaceCommand};
