use glam::DVec2;

/// RGBA color, components in `[0, 1]`.
pub type Color = [f32; 4];

/// The creature body fill.
pub const BODY_FILL: Color = [0.675, 0.224, 0.192, 1.0];
/// Outline stroke color.
pub const OUTLINE: Color = [0.0, 0.0, 0.0, 1.0];
/// Outline stroke width, world units.
pub const OUTLINE_WIDTH: f64 = 4.0;

/// The drawing capabilities the renderer needs from its host.
///
/// Only the 2D-path vocabulary the contour and debug renderers emit;
/// hosts map it onto a concrete graphics API, and tests record the calls.
/// Angles follow the solver convention: radians, y-down, arcs swept from
/// `start_angle` to `end_angle`.
pub trait Surface {
    /// Clears an axis-aligned region. Called by the render-loop driver at
    /// the start of a frame, never by the creature itself.
    fn clear(&mut self, origin: DVec2, size: DVec2);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: DVec2);
    /// Quadratic curve from the current point through `control` to `to`.
    fn quadratic_curve_to(&mut self, control: DVec2, to: DVec2);
    /// Circular arc around `center`; the host is expected to connect the
    /// current point to the arc's start, canvas-style.
    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_round_caps(&mut self, round: bool);
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Clear { origin: DVec2, size: DVec2 },
    BeginPath,
    MoveTo(DVec2),
    QuadraticCurveTo { control: DVec2, to: DVec2 },
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Fill,
    Stroke,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    RoundCaps(bool),
}

/// A [`Surface`] that records every call instead of drawing.
///
/// The test double for the renderer, and a building block for headless
/// hosts that replay the command stream against a real graphics API.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, origin: DVec2, size: DVec2) {
        self.commands.push(SurfaceCommand::Clear { origin, size });
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, point: DVec2) {
        self.commands.push(SurfaceCommand::MoveTo(point));
    }

    fn quadratic_curve_to(&mut self, control: DVec2, to: DVec2) {
        self.commands
            .push(SurfaceCommand::QuadraticCurveTo { control, to });
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(SurfaceCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(SurfaceCommand::LineWidth(width));
    }

    fn set_round_caps(&mut self, round: bool) {
        self.commands.push(SurfaceCommand::RoundCaps(round));
    }
}
