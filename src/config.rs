//! Per-creature configuration.
//!
//! A [`CreatureConfig`] is supplied whole when a creature is built and stays
//! immutable while its chains are solved. Changing the topology (segment
//! counts, radii array shapes) invalidates solved positions, so a config
//! change means building a new creature from the new value.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use thiserror::Error;

/// Which side of the spine an appendage grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnDirection {
    Left,
    Right,
}

impl SpawnDirection {
    /// Offset added to the anchor segment's angle to get the appendage's
    /// base direction.
    pub fn angle_offset(self) -> f64 {
        match self {
            SpawnDirection::Left => -FRAC_PI_4,
            SpawnDirection::Right => FRAC_PI_4,
        }
    }

    /// Unit sign along x used when seeding an appendage outward.
    pub(crate) fn side(self) -> f64 {
        match self {
            SpawnDirection::Left => -1.0,
            SpawnDirection::Right => 1.0,
        }
    }
}

/// Configuration for the spine chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpineConfig {
    pub segment_count: usize,
    /// Radii ordered head to tail; must have `segment_count` entries.
    pub segment_radii: Vec<f64>,
    /// Center-to-center distance between consecutive segments.
    pub link_length: f64,
    /// Maximum bend (radians) between a segment's direction and its
    /// predecessor's.
    pub angle_constraint: f64,
}

/// Configuration for one limb chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbConfig {
    pub segment_count: usize,
    pub segment_radii: Vec<f64>,
    pub link_length: f64,
    /// Index of the spine segment this limb is anchored to.
    pub spawn_anchor_index: usize,
    pub spawn_direction: SpawnDirection,
}

/// Configuration for one tentacle chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentacleConfig {
    pub segment_count: usize,
    pub segment_radii: Vec<f64>,
    pub link_length: f64,
    /// Index of the spine segment this tentacle is anchored to.
    pub spawn_anchor_index: usize,
    pub spawn_direction: SpawnDirection,
}

/// One spine plus any number of limbs and tentacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureConfig {
    pub spine: SpineConfig,
    #[serde(default)]
    pub limbs: Vec<LimbConfig>,
    #[serde(default)]
    pub tentacles: Vec<TentacleConfig>,
}

/// A malformed configuration. These are caller contract violations caught
/// at creature-creation time; nothing past validation returns an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spine must have at least one segment")]
    EmptySpine,
    #[error("{chain}: expected {expected} segment radii, got {got}")]
    RadiiCountMismatch {
        chain: String,
        expected: usize,
        got: usize,
    },
    #[error("{chain}: segment radius must be positive, got {radius}")]
    NonPositiveRadius { chain: String, radius: f64 },
    #[error("{chain}: link length must be positive, got {length}")]
    NonPositiveLinkLength { chain: String, length: f64 },
    #[error("{chain}: spawn anchor index {index} is outside the spine (spine has {spine_len} segments)")]
    SpawnAnchorOutOfRange {
        chain: String,
        index: usize,
        spine_len: usize,
    },
}

impl CreatureConfig {
    /// Checks every chain's shape before any segment is created.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spine.segment_count == 0 {
            return Err(ConfigError::EmptySpine);
        }
        validate_chain(
            "spine",
            self.spine.segment_count,
            &self.spine.segment_radii,
            self.spine.link_length,
        )?;

        for (i, limb) in self.limbs.iter().enumerate() {
            let chain = format!("limb {i}");
            validate_chain(&chain, limb.segment_count, &limb.segment_radii, limb.link_length)?;
            validate_anchor(&chain, limb.spawn_anchor_index, self.spine.segment_count)?;
        }
        for (i, tentacle) in self.tentacles.iter().enumerate() {
            let chain = format!("tentacle {i}");
            validate_chain(
                &chain,
                tentacle.segment_count,
                &tentacle.segment_radii,
                tentacle.link_length,
            )?;
            validate_anchor(&chain, tentacle.spawn_anchor_index, self.spine.segment_count)?;
        }
        Ok(())
    }
}

fn validate_chain(
    chain: &str,
    segment_count: usize,
    radii: &[f64],
    link_length: f64,
) -> Result<(), ConfigError> {
    if radii.len() != segment_count {
        return Err(ConfigError::RadiiCountMismatch {
            chain: chain.to_string(),
            expected: segment_count,
            got: radii.len(),
        });
    }
    if let Some(&radius) = radii.iter().find(|r| **r <= 0.0) {
        return Err(ConfigError::NonPositiveRadius {
            chain: chain.to_string(),
            radius,
        });
    }
    if link_length <= 0.0 {
        return Err(ConfigError::NonPositiveLinkLength {
            chain: chain.to_string(),
            length: link_length,
        });
    }
    Ok(())
}

fn validate_anchor(chain: &str, index: usize, spine_len: usize) -> Result<(), ConfigError> {
    if index >= spine_len {
        return Err(ConfigError::SpawnAnchorOutOfRange {
            chain: chain.to_string(),
            index,
            spine_len,
        });
    }
    Ok(())
}

impl Default for CreatureConfig {
    /// The stock snake-like creature: 30 tapering spine segments, no
    /// appendages.
    fn default() -> Self {
        let segment_count = 30;
        Self {
            spine: SpineConfig {
                segment_count,
                segment_radii: (0..segment_count).map(|i| 50.0 - i as f64 / 2.0).collect(),
                link_length: 12.0,
                angle_constraint: std::f64::consts::PI / 12.0,
            },
            limbs: Vec::new(),
            tentacles: Vec::new(),
        }
    }
}
