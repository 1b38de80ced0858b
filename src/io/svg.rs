//! SVG path-data export for flattened output.
//!
//! # Example
//!
//! ```
//! use curvekit::{Point2, curves::QuadraticBezier2, io::quads_to_svg_path};
//!
//! let quads = vec![
//!     QuadraticBezier2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0), Point2::new(2.0, 0.0)),
//!     QuadraticBezier2::new(Point2::new(2.0, 0.0), Point2::new(3.0, -2.0), Point2::new(4.0, 0.0)),
//! ];
//!
//! assert_eq!(quads_to_svg_path(&quads), "M 0 0 Q 1 2 2 0 Q 3 -2 4 0");
//! ```

use crate::curves::{CubicBezier2, QuadraticBezier2};
use crate::flatten::DrawCommand;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// Joins draw commands into SVG path data.
pub fn draw_commands_to_svg_path<F: Float + fmt::Display>(commands: &[DrawCommand<F>]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts a chain of quadratic Béziers to SVG path data.
///
/// A move-to is emitted at the start and wherever a curve does not begin at
/// the previous curve's end.
pub fn quads_to_svg_path<F: Float + fmt::Display>(quads: &[QuadraticBezier2<F>]) -> String {
    let mut result = String::new();
    let mut pen: Option<Point2<F>> = None;

    for quad in quads {
        push_move(&mut result, &mut pen, quad.p0);
        result.push_str(&format!(
            "Q {} {} {} {}",
            quad.p1.x, quad.p1.y, quad.p2.x, quad.p2.y
        ));
        pen = Some(quad.p2);
    }

    result
}

/// Converts a chain of cubic Béziers to SVG path data.
///
/// ```
/// use curvekit::{Point2, curves::CubicBezier2, io::cubics_to_svg_path};
///
/// let cubic = CubicBezier2::new(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(3.0, 0.0),
/// );
/// assert_eq!(cubics_to_svg_path(&[cubic]), "M 0 0 C 1 1 2 1 3 0");
/// ```
pub fn cubics_to_svg_path<F: Float + fmt::Display>(cubics: &[CubicBezier2<F>]) -> String {
    let mut result = String::new();
    let mut pen: Option<Point2<F>> = None;

    for cubic in cubics {
        push_move(&mut result, &mut pen, cubic.p0);
        result.push_str(&format!(
            "C {} {} {} {} {} {}",
            cubic.p1.x, cubic.p1.y, cubic.p2.x, cubic.p2.y, cubic.p3.x, cubic.p3.y
        ));
        pen = Some(cubic.p3);
    }

    result
}

fn push_move<F: Float + fmt::Display>(
    out: &mut String,
    pen: &mut Option<Point2<F>>,
    start: Point2<F>,
) {
    if *pen != Some(start) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("M {} {}", start.x, start.y));
        *pen = Some(start);
    }
    out.push(' ');
}
