use glam::DVec2;

/// One rigid circular body piece.
///
/// `angle` is the direction from this segment toward (or away from) its
/// anchor or predecessor, in radians. The radius is read from configuration
/// when the segment is created and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub position: DVec2,
    pub radius: f64,
    pub angle: f64,
}

impl Segment {
    pub fn new(position: DVec2, radius: f64, angle: f64) -> Self {
        Self {
            position,
            radius,
            angle,
        }
    }
}
