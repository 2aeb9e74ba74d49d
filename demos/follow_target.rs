//! Headless demo: a limbed, tentacled creature chases a scripted pointer
//! for a few seconds, then the final frame is written out as an SVG.
//!
//! Run with `cargo run --example follow_target`, optionally with
//! `RUST_LOG=debug` for per-second progress.

use creature_ik::render::{Color, Surface};
use creature_ik::{Creature, CreatureConfig, LimbConfig, SpawnDirection, TentacleConfig};
use glam::DVec2;
use std::f64::consts::PI;
use std::fmt::Write as _;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 600.0;
const FRAMES: usize = 600;
const DT: f64 = 1.0 / 60.0;

/// Minimal SVG-writing [`Surface`]: paths accumulate canvas-style and each
/// `fill`/`stroke` flushes one `<path>` element.
#[derive(Default)]
struct SvgSurface {
    shapes: Vec<String>,
    path: String,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    round_caps: bool,
}

fn css(color: Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8
    )
}

impl SvgSurface {
    fn arc_point(center: DVec2, radius: f64, angle: f64) -> DVec2 {
        center + DVec2::from_angle(angle) * radius
    }

    fn into_document(self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
             viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
        );
        for shape in &self.shapes {
            doc.push_str(shape);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, _origin: DVec2, _size: DVec2) {
        self.shapes.clear();
        self.path.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: DVec2) {
        let _ = write!(self.path, "M {:.2} {:.2} ", point.x, point.y);
    }

    fn quadratic_curve_to(&mut self, control: DVec2, to: DVec2) {
        let _ = write!(
            self.path,
            "Q {:.2} {:.2} {:.2} {:.2} ",
            control.x, control.y, to.x, to.y
        );
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        let start = Self::arc_point(center, radius, start_angle);
        // Connect the current point to the arc start, canvas-style.
        let command = if self.path.is_empty() { 'M' } else { 'L' };
        let _ = write!(self.path, "{command} {:.2} {:.2} ", start.x, start.y);

        // SVG arcs are endpoint-parameterized and cannot express a sweep of
        // 2π in one command, so emit the arc in half-turn pieces.
        let mut angle = start_angle;
        while angle < end_angle - 1e-9 {
            let next = (angle + PI).min(end_angle);
            let to = Self::arc_point(center, radius, next);
            let _ = write!(
                self.path,
                "A {radius:.2} {radius:.2} 0 0 1 {:.2} {:.2} ",
                to.x, to.y
            );
            angle = next;
        }
    }

    fn fill(&mut self) {
        self.shapes.push(format!(
            "<path d=\"{}\" fill=\"{}\" stroke=\"none\"/>",
            self.path.trim_end(),
            css(self.fill_color)
        ));
    }

    fn stroke(&mut self) {
        let caps = if self.round_caps { "round" } else { "butt" };
        self.shapes.push(format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{caps}\"/>",
            self.path.trim_end(),
            css(self.stroke_color),
            self.line_width
        ));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_round_caps(&mut self, round: bool) {
        self.round_caps = round;
    }
}

fn demo_config() -> CreatureConfig {
    let mut config = CreatureConfig::default();
    let spine_count = config.spine.segment_count;
    for anchor in [spine_count * 30 / 100, spine_count * 80 / 100] {
        for direction in [SpawnDirection::Left, SpawnDirection::Right] {
            config.limbs.push(LimbConfig {
                segment_count: 5,
                segment_radii: (0..5).map(|i| 20.0 - i as f64 / 2.0).collect(),
                link_length: 20.0,
                spawn_anchor_index: anchor,
                spawn_direction: direction,
            });
        }
    }
    config.tentacles.push(TentacleConfig {
        segment_count: 10,
        segment_radii: (0..10).map(|i| 8.0 - i as f64 / 2.0).collect(),
        link_length: 10.0,
        spawn_anchor_index: spine_count - 1,
        spawn_direction: SpawnDirection::Right,
    });
    config
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut creature = Creature::new(demo_config(), DVec2::new(WIDTH / 2.0, HEIGHT / 2.0))
        .expect("demo config is valid");

    let mut surface = SvgSurface::default();
    let mut target = DVec2::new(WIDTH / 2.0, HEIGHT / 2.0);

    for frame in 0..FRAMES {
        let time = frame as f64 * DT;

        // The pointer wanders for five seconds, lifts for two (the target
        // holds still and the creature settles onto it), then returns.
        let pointer_active = !(5.0..7.0).contains(&time);
        if pointer_active {
            target = DVec2::new(
                WIDTH / 2.0 + 260.0 * (time * 0.7).cos(),
                HEIGHT / 2.0 + 160.0 * (time * 1.1).sin(),
            );
        }

        surface.clear(DVec2::ZERO, DVec2::new(WIDTH, HEIGHT));
        creature.step_and_render(target, time, &mut surface, false);

        if frame % 60 == 0 {
            let head = creature.spine()[0];
            log::info!(
                "t={time:4.1}s head=({:6.1}, {:6.1}) target=({:6.1}, {:6.1}) pointer={}",
                head.position.x,
                head.position.y,
                target.x,
                target.y,
                if pointer_active { "down" } else { "up" }
            );
        }
    }

    let svg = surface.into_document();
    std::fs::write("creature.svg", &svg)?;
    log::info!("wrote creature.svg ({} bytes)", svg.len());
    Ok(())
}
