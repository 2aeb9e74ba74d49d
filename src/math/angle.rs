use std::f64::consts::{PI, TAU};

/// Reduces any angle into `[0, 2π)` by repeated ±2π adjustment.
///
/// Loop-based on purpose: exact for inputs within a few turns of the range,
/// with no precision loss at the wrap boundary.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut angle = angle;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Signed shortest angular distance between `angle` and `anchor`, in
/// `(-π, π]`.
///
/// Both angles are rotated into a frame where `anchor` maps to π before
/// measuring, which sidesteps the discontinuity a naive subtraction has at
/// the ±π boundary.
pub fn relative_angle_diff(angle: f64, anchor: f64) -> f64 {
    let rotated = normalize_angle(angle + PI - anchor);
    PI - rotated
}

/// Clamps `angle` so it deviates from `anchor` by at most `constraint`
/// radians. The result is always normalized into `[0, 2π)`.
///
/// This is the single joint-stiffness primitive: every chain solver that
/// caps the bend between consecutive segments goes through here.
pub fn constrain_angle(angle: f64, anchor: f64, constraint: f64) -> f64 {
    let diff = relative_angle_diff(angle, anchor);
    if diff.abs() <= constraint {
        return normalize_angle(angle);
    }
    normalize_angle(anchor + if diff > 0.0 { -constraint } else { constraint })
}
