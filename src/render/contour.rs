//! Silhouette-contour generator.
//!
//! Converts a solved chain into one closed outline: a rail of offset
//! points down each side of the chain, joined by half-circle caps at head
//! and tail, then filled and stroked as a single path.

use glam::DVec2;
use std::f64::consts::PI;

use crate::creature::Segment;

use super::surface::{Surface, BODY_FILL, OUTLINE, OUTLINE_WIDTH};

/// Offset points flanking one segment, at its radius, perpendicular to the
/// chain direction through it.
struct RailPoints {
    right: DVec2,
    left: DVec2,
}

fn rail_points(segments: &[Segment]) -> Vec<RailPoints> {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let direction = if i < segments.len() - 1 {
                segments[i + 1].position - segment.position
            } else {
                segment.position - segments[i - 1].position
            };
            let norm = direction / direction.length();
            let offset = DVec2::new(norm.y, -norm.x) * segment.radius;
            RailPoints {
                right: segment.position + offset,
                left: segment.position - offset,
            }
        })
        .collect()
}

/// Start angle for a half-circle cap, derived from the slope between the
/// two rail points; `flipped` selects the other semicircle.
///
/// atan of a slope only resolves the angle up to π, and the slope itself
/// blows up when the rail points are nearly vertical, which can pick the
/// wrong semicircle. Do not rework without checking the drawn output.
fn cap_start_angle(rail: &RailPoints, flipped: bool) -> f64 {
    let slope = (rail.left.y - rail.right.y) / (rail.left.x - rail.right.x);
    let mut angle = slope.atan();
    if flipped {
        angle += PI;
    }
    angle
}

/// Draws the closed silhouette of `segments` onto `surface`.
///
/// Chains with fewer than two segments have no direction to offset
/// against and are skipped.
pub fn draw_outline(segments: &[Segment], surface: &mut dyn Surface) {
    if segments.len() < 2 {
        return;
    }

    surface.set_stroke_color(OUTLINE);
    surface.set_fill_color(BODY_FILL);
    surface.set_line_width(OUTLINE_WIDTH);

    let rails = rail_points(segments);

    surface.begin_path();
    surface.set_round_caps(true);

    // Right rail, head to tail.
    surface.move_to(rails[0].right);
    for rail in &rails {
        surface.quadratic_curve_to(rail.right, rail.right);
    }

    // Tail cap.
    let tail = &segments[segments.len() - 1];
    let tail_rail = &rails[rails.len() - 1];
    let tail_start = cap_start_angle(tail_rail, tail_rail.right.x < tail_rail.left.x);
    surface.arc(tail.position, tail.radius, tail_start, tail_start + PI);

    // Left rail, tail back to head.
    surface.move_to(tail_rail.left);
    for rail in rails.iter().rev().skip(1) {
        surface.quadratic_curve_to(rail.left, rail.left);
    }

    // Head cap.
    let head = &segments[0];
    let head_rail = &rails[0];
    let head_start = cap_start_angle(head_rail, head_rail.left.x < head_rail.right.x);
    surface.arc(head.position, head.radius, head_start, head_start + PI);

    surface.fill();
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingSurface, SurfaceCommand};
    use approx::assert_relative_eq;

    fn straight_chain() -> Vec<Segment> {
        // Head at the left, pointing along +x, tapering 10 -> 6.
        (0..5)
            .map(|i| Segment::new(DVec2::new(i as f64 * 15.0, 40.0), 10.0 - i as f64, 0.0))
            .collect()
    }

    fn recorded(segments: &[Segment]) -> Vec<SurfaceCommand> {
        let mut surface = RecordingSurface::new();
        draw_outline(segments, &mut surface);
        surface.take_commands()
    }

    #[test]
    fn rails_sit_one_radius_off_each_segment() {
        let segments = straight_chain();
        let rails = rail_points(&segments);
        for (segment, rail) in segments.iter().zip(&rails) {
            assert_relative_eq!(
                (rail.right - segment.position).length(),
                segment.radius,
                epsilon = 1e-9
            );
            assert_relative_eq!(
                (rail.left - segment.position).length(),
                segment.radius,
                epsilon = 1e-9
            );
            // Opposite sides of the center.
            let mid = (rail.right + rail.left) * 0.5;
            assert_relative_eq!(mid.x, segment.position.x, epsilon = 1e-9);
            assert_relative_eq!(mid.y, segment.position.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn outline_emits_both_rails_and_two_caps() {
        let segments = straight_chain();
        let commands = recorded(&segments);

        let quads = commands
            .iter()
            .filter(|command| matches!(command, SurfaceCommand::QuadraticCurveTo { .. }))
            .count();
        // n points down the right rail, n-1 back up the left.
        assert_eq!(quads, 5 + 4);

        let arcs: Vec<_> = commands
            .iter()
            .filter(|command| matches!(command, SurfaceCommand::Arc { .. }))
            .collect();
        assert_eq!(arcs.len(), 2);

        assert!(commands.contains(&SurfaceCommand::Fill));
        assert!(commands.contains(&SurfaceCommand::Stroke));
    }

    #[test]
    fn caps_are_half_circles_and_the_path_closes() {
        let segments = straight_chain();
        let commands = recorded(&segments);

        let first_move = commands.iter().find_map(|command| match command {
            SurfaceCommand::MoveTo(point) => Some(*point),
            _ => None,
        });
        let head_arc = commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Some((*center, *radius, *start_angle, *end_angle)),
            _ => None,
        });

        let start = first_move.unwrap();
        let (center, radius, start_angle, end_angle) = head_arc.unwrap();

        assert_relative_eq!(end_angle - start_angle, PI, epsilon = 1e-12);

        // The head cap must land back on the first move-to point.
        let cap_end = center + DVec2::from_angle(end_angle) * radius;
        assert_relative_eq!(cap_end.x, start.x, epsilon = 1e-6);
        assert_relative_eq!(cap_end.y, start.y, epsilon = 1e-6);
    }

    #[test]
    fn closure_holds_for_a_bent_chain() {
        let segments = vec![
            Segment::new(DVec2::new(0.0, 0.0), 8.0, 0.0),
            Segment::new(DVec2::new(14.0, 3.0), 7.0, 0.0),
            Segment::new(DVec2::new(26.0, 10.0), 6.0, 0.0),
            Segment::new(DVec2::new(33.0, 22.0), 5.0, 0.0),
        ];
        let commands = recorded(&segments);

        let first_move = commands.iter().find_map(|command| match command {
            SurfaceCommand::MoveTo(point) => Some(*point),
            _ => None,
        });
        let head_arc = commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::Arc {
                center,
                radius,
                end_angle,
                ..
            } => Some((*center, *radius, *end_angle)),
            _ => None,
        });

        let start = first_move.unwrap();
        let (center, radius, end_angle) = head_arc.unwrap();
        let cap_end = center + DVec2::from_angle(end_angle) * radius;
        assert_relative_eq!(cap_end.x, start.x, epsilon = 1e-6);
        assert_relative_eq!(cap_end.y, start.y, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_chains_draw_nothing() {
        let one = vec![Segment::new(DVec2::ZERO, 5.0, 0.0)];
        assert!(recorded(&one).is_empty());
        assert!(recorded(&[]).is_empty());
    }
}
