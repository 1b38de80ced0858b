//! curvekit - Bézier curves, splines and quadratic flattening
//!
//! Interpolating splines (natural cubic, Catmull-Rom, and Bézier splines with
//! bisector tangents) are reduced to chains of quadratic Béziers that a
//! renderer can draw directly. Supporting pieces include arc length by
//! Gauss-Legendre quadrature, coordinate queries by polynomial root solving,
//! and SVG path export.
//!
//! # Example
//!
//! ```
//! use curvekit::{Point2, BezierSpline, Spline, SplineToBezier};
//!
//! let spline = BezierSpline::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(6.0, 3.0),
//! ]);
//!
//! let out = SplineToBezier::new().convert(Spline::CubicBezier(&spline), 0.01);
//! assert_eq!(out.segment_count(), 3);
//! assert!(out.to_svg_path().starts_with("M 0 0"));
//! ```

pub mod curves;
pub mod error;
pub mod flatten;
pub mod integrate;
pub mod io;
pub mod primitives;
mod scalar;

pub use curves::{
    BezierSpline, BezierSplineControl, CartesianSpline, CatmullRom2, CubicBezier2,
    NaturalCubicSpline, QuadraticBezier2,
};
pub use error::CurveError;
pub use flatten::{
    DrawCommand, FlattenOptions, QuadFlattening, QuadSegment, Spline, SplineKind, SplineToBezier,
};
pub use integrate::GaussLegendre;
pub use primitives::{Line2, Point2, Vec2};
