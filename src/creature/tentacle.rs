//! Tentacle solver.
//!
//! Anchoring and re-target hysteresis are the same as the limb's; the
//! difference is what happens between base and tip. Interior segments get
//! the straight back-walk plus a per-link distance clamp (wave displacement
//! from the previous frame would otherwise compound into stretched links),
//! the segment next to the base is corrected onto the base direction, and a
//! perpendicular sine wave is layered over everything but the base. The
//! wave phase comes from the wall clock so its speed is independent of
//! frame rate.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::TentacleConfig;

use super::segment::Segment;

/// Wave phase advance per wall-clock second, radians.
const WAVE_FREQUENCY: f64 = 5.0;
/// Perpendicular wave displacement, world units.
const WAVE_AMPLITUDE: f64 = 5.0;
/// Substitute denominator for zero-length direction vectors.
const EPSILON: f64 = 1e-3;

/// Seeds the tentacle at its base offset beside the anchor segment,
/// extended outward one link length per segment, pending the first solve.
pub fn initial_segments(config: &TentacleConfig, spine: &[Segment]) -> Vec<Segment> {
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

/// Two-pass position solver: the tip is pinned to `target`, a backward
/// reach re-spaces segments from tip to base, then a forward reach
/// re-spaces them from base to tip. Zero-length directions fall back to an
/// epsilon denominator instead of failing.
pub fn apply_inverse_kinematics(segments: &mut [Segment], target: DVec2, link_length: f64) {
    if segments.is_empty() {
        return;
    }
    let last = segments.len() - 1;
    segments[last].position = target;

    for i in (0..last).rev() {
        let next = segments[i + 1].position;
        let delta = next - segments[i].position;
        let mut distance = delta.length();
        if distance == 0.0 {
            distance = EPSILON;
        }
        segments[i].position = next - delta * (link_length / distance);
    }

    for i in 1..segments.len() {
        let prev = segments[i - 1].position;
        let delta = segments[i].position - prev;
        let mut distance = delta.length();
        if distance == 0.0 {
            distance = EPSILON;
        }
        segments[i].position = prev + delta * (link_length / distance);
    }
}

/// One solve step against the spine state computed earlier this frame.
/// `time_seconds` is the collaborator's wall clock, read once per frame.
pub fn update_positions(
    segments: &mut [Segment],
    spine: &[Segment],
    config: &TentacleConfig,
    time_seconds: f64,
) {
    if segments.is_empty() {
        return;
    }

    let spawn = spine[config.spawn_anchor_index];
    let base_angle = spawn.angle + config.spawn_direction.angle_offset();
    let base = spawn.position + DVec2::from_angle(base_angle) * (spawn.radius - segments[0].radius);

    let tip_index = segments.len() - 1;
    let max_reach = config.link_length * tip_index as f64;
    let distance_to_tip = (segments[tip_index].position - base).length();

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
        let next = segments[j + 1].position;
        segments[j].position = next - step;
        segments[j].angle = angle_to_tip;

        // Clamp the link to the segment ahead so leftover wave displacement
        // cannot stretch it past the link length.
        let delta = segments[j].position - next;
        let distance = delta.length();
        if distance > config.link_length {
            segments[j].position = next + delta * (config.link_length / distance);
        }
    }

    // The straight back-walk misplaces the segment nearest the anchor; put
    // it one link out along the base direction. The base segment itself is
    // re-pinned below, after the wave.
    if segments.len() > 1 {
        segments[1].position = segments[0].position + DVec2::from_angle(base_angle) * config.link_length;
        segments[1].angle = base_angle;
    }

    let phase_base = time_seconds * WAVE_FREQUENCY;
    let wave_direction = DVec2::from_angle(angle_to_tip + FRAC_PI_2);
    for (j, segment) in segments.iter_mut().enumerate().skip(1) {
        let phase = phase_base + j as f64 * 5.0 * PI / (tip_index + 1) as f64;
        segment.position += wave_direction * (phase.sin() * WAVE_AMPLITUDE);
    }

    segments[0].position = base;
    segments[0].angle = base_angle;
}
