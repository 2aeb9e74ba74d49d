//! Creature model and per-frame orchestration.
//!
//! A [`Creature`] owns one spine chain plus any number of limb and tentacle
//! chains, all derived from a validated [`CreatureConfig`]. Within a frame
//! the spine always moves first; appendages read the spine state computed
//! in the same call.

pub mod limb;
pub mod segment;
pub mod spine;
pub mod tentacle;

pub use segment::Segment;

use glam::DVec2;

use crate::config::{ConfigError, CreatureConfig};
use crate::render::{contour, debug, Surface};

/// All chains of one creature, solved in place once per frame.
#[derive(Debug, Clone)]
pub struct Creature {
    config: CreatureConfig,
    spine: Vec<Segment>,
    limbs: Vec<Vec<Segment>>,
    tentacles: Vec<Vec<Segment>>,
}

impl Creature {
    /// Validates `config` and seeds every chain around `origin`.
    ///
    /// Chains live until the configuration changes shape; a config change
    /// means building a fresh creature, since segment counts invalidate
    /// previously solved positions.
    pub fn new(config: CreatureConfig, origin: DVec2) -> Result<Self, ConfigError> {
        config.validate()?;

        let spine = spine::initial_segments(&config.spine, origin);
        let limbs = config
            .limbs
            .iter()
            .map(|limb| limb::initial_segments(limb, &spine))
            .collect::<Vec<_>>();
        let tentacles = config
            .tentacles
            .iter()
            .map(|tentacle| tentacle::initial_segments(tentacle, &spine))
            .collect::<Vec<_>>();

        log::debug!(
            "creature created: {} spine segments, {} limbs, {} tentacles",
            spine.len(),
            limbs.len(),
            tentacles.len()
        );

        Ok(Self {
            config,
            spine,
            limbs,
            tentacles,
        })
    }

    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    pub fn spine(&self) -> &[Segment] {
        &self.spine
    }

    pub fn limbs(&self) -> &[Vec<Segment>] {
        &self.limbs
    }

    pub fn tentacles(&self) -> &[Vec<Segment>] {
        &self.tentacles
    }

    /// Re-solves every chain for one frame: spine first, then limbs and
    /// tentacles against the just-updated spine. `time_seconds` drives the
    /// tentacle idle wave and nothing else.
    pub fn step(&mut self, target: DVec2, time_seconds: f64) {
        log::trace!("step: target=({:.1}, {:.1}) t={:.3}", target.x, target.y, time_seconds);

        spine::update_positions(&mut self.spine, &self.config.spine, target);
        for (segments, config) in self.limbs.iter_mut().zip(&self.config.limbs) {
            limb::update_positions(segments, &self.spine, config);
        }
        for (segments, config) in self.tentacles.iter_mut().zip(&self.config.tentacles) {
            tentacle::update_positions(segments, &self.spine, config, time_seconds);
        }
    }

    /// Draws every chain onto `surface`. Appendages go down first so the
    /// spine silhouette covers their attachment points; debug mode draws
    /// bare segment circles instead, appendages color-coded by index.
    pub fn render(&self, surface: &mut dyn Surface, debug_mode: bool) {
        if debug_mode {
            debug::draw_segment_circles(&self.spine, surface);
            for segments in self.limbs.iter().chain(&self.tentacles) {
                debug::draw_segment_circles_indexed(segments, surface);
            }
        } else {
            for segments in self.limbs.iter().chain(&self.tentacles) {
                contour::draw_outline(segments, surface);
            }
            contour::draw_outline(&self.spine, surface);
        }
    }

    /// The per-frame entry point: solve, then draw.
    pub fn step_and_render(
        &mut self,
        target: DVec2,
        time_seconds: f64,
        surface: &mut dyn Surface,
        debug_mode: bool,
    ) {
        self.step(target, time_seconds);
        self.render(surface, debug_mode);
    }
}
