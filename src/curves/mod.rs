//! Curve primitives and interpolating splines.

mod bezier;
mod bezier_spline;
mod cartesian;
mod catmull_rom;
pub mod roots;
mod spline_control;

pub use bezier::{CubicBezier2, QuadraticBezier2, CUBIC_LENGTH_ORDER};
pub use bezier_spline::BezierSpline;
pub use cartesian::{CartesianSpline, NaturalCubicSpline};
pub use catmull_rom::CatmullRom2;
pub use spline_control::BezierSplineControl;
