//! Debug rendering: every segment as an outlined circle, skipping the
//! contour entirely. Used to verify solver output independent of the
//! silhouette algorithm.

use std::f64::consts::TAU;

use crate::creature::Segment;

use super::surface::{Color, Surface, OUTLINE, OUTLINE_WIDTH};

/// Palette cycled by segment index in the indexed variant.
const SEGMENT_COLORS: [Color; 10] = [
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 0.0, 1.0, 1.0], // blue
    [0.0, 0.5, 0.0, 1.0], // green
    [1.0, 1.0, 0.0, 1.0], // yellow
    [0.5, 0.0, 0.5, 1.0], // purple
    [1.0, 0.65, 0.0, 1.0], // orange
    [1.0, 0.75, 0.8, 1.0], // pink
    [0.65, 0.16, 0.16, 1.0], // brown
    [0.0, 0.0, 0.0, 1.0], // black
    [1.0, 1.0, 1.0, 1.0], // white
];

/// Outlined circle per segment, single color.
pub fn draw_segment_circles(segments: &[Segment], surface: &mut dyn Surface) {
    surface.set_stroke_color(OUTLINE);
    surface.set_line_width(OUTLINE_WIDTH);
    for segment in segments {
        surface.begin_path();
        surface.arc(segment.position, segment.radius, 0.0, TAU);
        surface.stroke();
    }
}

/// Outlined circle per segment, color cycling with the segment index.
pub fn draw_segment_circles_indexed(segments: &[Segment], surface: &mut dyn Surface) {
    surface.set_line_width(OUTLINE_WIDTH);
    for (index, segment) in segments.iter().enumerate() {
        surface.begin_path();
        surface.set_stroke_color(SEGMENT_COLORS[index % SEGMENT_COLORS.len()]);
        surface.arc(segment.position, segment.radius, 0.0, TAU);
        surface.stroke();
    }
}
