//! Rendering module
//!
//! The drawing-capability trait the core draws through, the silhouette
//! contour generator, and the per-segment debug variant.

pub mod contour;
pub mod debug;
pub mod surface;

pub use contour::draw_outline;
pub use debug::{draw_segment_circles, draw_segment_circles_indexed};
pub use surface::{Color, RecordingSurface, Surface, SurfaceCommand, BODY_FILL, OUTLINE, OUTLINE_WIDTH};
