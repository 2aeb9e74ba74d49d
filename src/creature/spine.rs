//! Follow-the-leader spine solver.
//!
//! The head chases the external target with exponential smoothing; every
//! trailing segment is re-aimed at its predecessor through the angle
//! constraint and placed at exactly one link length behind it. Link lengths
//! are fixed rather than iteratively corrected, so the chain can never fail
//! to resolve.

use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

use crate::config::SpineConfig;
use crate::math::constrain_angle;

use super::segment::Segment;

/// Fraction of the remaining distance to the target the head covers each
/// frame. Not configurable; the gait tuning assumes it.
const HEAD_SMOOTHING: f64 = 0.1;

/// Seeds the spine along a straight vertical line below `origin`, one link
/// length apart, pending the first solve.
pub fn initial_segments(config: &SpineConfig, origin: DVec2) -> Vec<Segment> {
    (0..config.segment_count)
        .map(|i| {
            Segment::new(
                DVec2::new(origin.x, origin.y + i as f64 * config.link_length),
                config.segment_radii[i],
                FRAC_PI_2,
            )
        })
        .collect()
}

/// One solve step: move the head toward `target`, then re-place every
/// trailing segment behind its predecessor.
pub fn update_positions(segments: &mut [Segment], config: &SpineConfig, target: DVec2) {
    let Some(head) = segments.first_mut() else {
        return;
    };

    let stepped = head.position + (target - head.position) * HEAD_SMOOTHING;
    // Heading is taken before the move, from the pre-update position.
    let delta = stepped - head.position;
    head.angle = delta.y.atan2(delta.x);
    head.position = stepped;

    for i in 1..segments.len() {
        let prev = segments[i - 1];
        let to_prev = prev.position - segments[i].position;
        let raw_angle = to_prev.y.atan2(to_prev.x);
        let angle = constrain_angle(raw_angle, prev.angle, config.angle_constraint);
        segments[i].angle = angle;
        segments[i].position = prev.position - DVec2::from_angle(angle) * config.link_length;
    }
}
