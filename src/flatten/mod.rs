//! Flattening of curves and splines into quadratic Bézier chains.
//!
//! Renderers that only draw quadratic curves consume a [`QuadFlattening`]:
//! the quads in order plus an index mapping each input spline segment to
//! its run of quads.

mod cubic_to_quad;
mod options;
mod quad;
mod spline;
mod spline_to_bezier;

pub use cubic_to_quad::cubic_to_quads;
pub use options::FlattenOptions;
pub use quad::{DrawCommand, QuadFlattening, QuadSegment};
pub use spline::{Spline, SplineKind};
pub use spline_to_bezier::SplineToBezier;
