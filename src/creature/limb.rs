//! Single-reach limb solver.
//!
//! A limb hangs off one spine segment and reaches along a fixed offset from
//! that segment's heading. The tip only commits to a new placement when the
//! limb is stretched taut or has collapsed too close to its base; in
//! between it stays planted while the body moves past it, which is what
//! produces the stepping look. Interior segments are collinear between base
//! and tip: a straight rigid rod, not an articulated curve.

use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

use crate::config::LimbConfig;

use super::segment::Segment;

/// Seeds the limb at its base offset beside the anchor segment, extended
/// outward one link length per segment, pending the first solve.
pub fn initial_segments(config: &LimbConfig, spine: &[Segment]) -> Vec<Segment> {
    if config.segment_count == 0 {
        return Vec::new();
    }
    let spawn = spine[config.spawn_anchor_index];
    let side = config.spawn_direction.side();
    let base = spawn.position + DVec2::new(side * (spawn.radius + config.segment_radii[0]), 0.0);

    (0..config.segment_count)
        .map(|j| {
            Segment::new(
                base + DVec2::new(side * j as f64 * config.link_length, 0.0),
                config.segment_radii[j],
                FRAC_PI_2,
            )
        })
        .collect()
}

/// One solve step against the spine state computed earlier this frame.
pub fn update_positions(segments: &mut [Segment], spine: &[Segment], config: &LimbConfig) {
    if segments.is_empty() {
        return;
    }

    let spawn = spine[config.spawn_anchor_index];
    let base_angle = spawn.angle + config.spawn_direction.angle_offset();
    let base = spawn.position + DVec2::from_angle(base_angle) * (spawn.radius - segments[0].radius);

    let tip_index = segments.len() - 1;
    let max_reach = config.link_length * tip_index as f64;
    let distance_to_tip = (segments[tip_index].position - base).length();

    // Re-target hysteresis: snap to full extension when stretched past the
    // reach or collapsed under half of it, otherwise hold the planted tip.
    let tip = if distance_to_tip > max_reach || distance_to_tip < max_reach * 0.5 {
        base + DVec2::from_angle(base_angle) * max_reach
    } else {
        segments[tip_index].position
    };
    segments[tip_index].position = tip;

    let to_tip = tip - base;
    let angle_to_tip = to_tip.y.atan2(to_tip.x);
    let step = DVec2::from_angle(angle_to_tip) * config.link_length;
    for j in (1..tip_index).rev() {
        segments[j].position = segments[j + 1].position - step;
        segments[j].angle = angle_to_tip;
    }

    segments[0].position = base;
    segments[0].angle = base_angle;
}
