//! Catmull-Rom splines.
//!
//! Catmull-Rom splines interpolate every knot with C1 continuity; the tangent
//! at each knot comes from its neighbours. Each segment is exactly a cubic
//! Bézier, which is how the flattening pipeline consumes them.
//!
//! # Example
//!
//! ```
//! use curvekit::{Point2, curves::CatmullRom2};
//!
//! let spline = CatmullRom2::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(3.0, 2.0),
//!     Point2::new(4.0, 0.0),
//! ]);
//!
//! let cubics = spline.to_cubic_beziers();
//! assert_eq!(cubics.len(), 3);
//! ```
//!
//! # Parameterization
//!
//! The `alpha` parameter controls the knot spacing:
//! - `alpha = 0.0`: Uniform (standard Catmull-Rom)
//! - `alpha = 0.5`: Centripetal (avoids cusps and self-intersections)
//! - `alpha = 1.0`: Chordal

use super::{CubicBezier2, CUBIC_LENGTH_ORDER};
use crate::integrate::GaussLegendre;
use crate::primitives::{Point2, Vec2};
use crate::scalar::{from_usize, lit};
use num_traits::Float;

/// A Catmull-Rom spline in 2D.
///
/// Open splines reflect the first and last knot to obtain the phantom
/// neighbours the end segments need.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatmullRom2<F> {
    /// Knots that the spline passes through
    pub points: Vec<Point2<F>>,
    /// Parameterization exponent (0.0 = uniform, 0.5 = centripetal, 1.0 = chordal)
    pub alpha: F,
}

impl<F: Float> CatmullRom2<F> {
    /// Creates a uniform Catmull-Rom spline (alpha = 0.0).
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self::with_alpha(points, F::zero())
    }

    /// Creates a centripetal Catmull-Rom spline (alpha = 0.5).
    pub fn centripetal(points: Vec<Point2<F>>) -> Self {
        Self::with_alpha(points, lit(0.5))
    }

    /// Creates a chordal Catmull-Rom spline (alpha = 1.0).
    pub fn chordal(points: Vec<Point2<F>>) -> Self {
        Self::with_alpha(points, F::one())
    }

    /// Creates a Catmull-Rom spline with a custom parameterization exponent.
    pub fn with_alpha(points: Vec<Point2<F>>, alpha: F) -> Self {
        Self { points, alpha }
    }

    /// Returns the number of knots.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of spline segments.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the valid parameter range, `0..=num_segments()`.
    pub fn domain(&self) -> (F, F) {
        (F::zero(), from_usize(self.num_segments()))
    }

    /// Returns the four points driving segment `i`: the phantom or real
    /// neighbour before, the two knots, and the neighbour after.
    ///
    /// Returns `None` if `i` is not a valid segment index.
    pub fn segment_points(&self, i: usize) -> Option<[Point2<F>; 4]> {
        let n = self.points.len();
        if i + 1 >= n {
            return None;
        }

        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p0 = if i == 0 { p1.reflect(p2) } else { self.points[i - 1] };
        let p3 = if i + 2 >= n {
            p2.reflect(p1)
        } else {
            self.points[i + 2]
        };

        Some([p0, p1, p2, p3])
    }

    /// Returns segment `i` as an equivalent cubic Bézier.
    ///
    /// For the uniform spline this is the classic 1/6 blend of the neighbouring
    /// knots; other parameterizations use the Barry-Goldman end tangents.
    pub fn segment_bezier(&self, i: usize) -> Option<CubicBezier2<F>> {
        let [p0, p1, p2, p3] = self.segment_points(i)?;
        let third = F::one() / lit(3.0);

        let (m1, m2) = if self.alpha.abs() < F::epsilon() {
            let half = lit::<F>(0.5);
            ((p2 - p0) * half, (p3 - p1) * half)
        } else {
            let dt0 = self.knot_interval(p0, p1);
            let dt1 = self.knot_interval(p1, p2);
            let dt2 = self.knot_interval(p2, p3);

            let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
            let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
            (m1, m2)
        };

        Some(CubicBezier2::new(p1, p1 + m1 * third, p2 - m2 * third, p2))
    }

    /// Converts every segment to a cubic Bézier, in order.
    pub fn to_cubic_beziers(&self) -> Vec<CubicBezier2<F>> {
        (0..self.num_segments())
            .filter_map(|i| self.segment_bezier(i))
            .collect()
    }

    /// Evaluates the spline at parameter `t`.
    ///
    /// Integer values of `t` land on knots; `t` is clamped to [`domain`](Self::domain).
    /// An empty spline evaluates to the origin.
    pub fn eval(&self, t: F) -> Point2<F> {
        match self.points.len() {
            0 => return Point2::origin(),
            1 => return self.points[0],
            _ => {}
        }

        let (segment, local_t) = self.locate(t);
        match self.segment_points(segment) {
            Some([p0, p1, p2, p3]) if self.alpha.abs() < F::epsilon() => {
                eval_uniform(p0, p1, p2, p3, local_t)
            }
            Some([p0, p1, p2, p3]) => self.eval_general(p0, p1, p2, p3, local_t),
            None => self.points[self.points.len() - 1],
        }
    }

    /// Evaluates the tangent (derivative with respect to the segment parameter).
    pub fn tangent_at(&self, t: F) -> Vec2<F> {
        let (segment, local_t) = self.locate(t);
        self.segment_bezier(segment)
            .map(|bezier| bezier.derivative_at(local_t))
            .unwrap_or_else(Vec2::zero)
    }

    /// Returns the total arc length of the spline.
    pub fn arc_length(&self) -> F {
        let gauss = GaussLegendre::new(CUBIC_LENGTH_ORDER);
        self.to_cubic_beziers()
            .iter()
            .fold(F::zero(), |acc, bezier| acc + bezier.length_at_with(&gauss, F::one()))
    }

    fn locate(&self, t: F) -> (usize, F) {
        let (t_min, t_max) = self.domain();
        let t = t.max(t_min).min(t_max);
        let last = self.num_segments().saturating_sub(1);
        let segment = t.floor().to_usize().unwrap_or(0).min(last);
        (segment, t - from_usize(segment))
    }

    fn knot_interval(&self, a: Point2<F>, b: Point2<F>) -> F {
        let dt = a.distance(b).powf(self.alpha);
        if dt < F::epsilon() {
            F::one()
        } else {
            dt
        }
    }

    /// General Catmull-Rom with alpha parameterization (Barry and Goldman).
    fn eval_general(
        &self,
        p0: Point2<F>,
        p1: Point2<F>,
        p2: Point2<F>,
        p3: Point2<F>,
        t: F,
    ) -> Point2<F> {
        let dt0 = self.knot_interval(p0, p1);
        let dt1 = self.knot_interval(p1, p2);
        let dt2 = self.knot_interval(p2, p3);

        let t1 = dt0;
        let t2 = t1 + dt1;
        let tp = t1 + t * dt1;

        let a1 = p0.lerp(p1, tp / dt0);
        let a2 = p1.lerp(p2, (tp - t1) / dt1);
        let a3 = p2.lerp(p3, (tp - t2) / dt2);

        let b1 = a1.lerp(a2, tp / t2);
        let b2 = a2.lerp(a3, (tp - t1) / (dt1 + dt2));

        b1.lerp(b2, (tp - t1) / dt1)
    }
}

/// Uniform Catmull-Rom evaluation (basis matrix form).
fn eval_uniform<F: Float>(
    p0: Point2<F>,
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    t: F,
) -> Point2<F> {
    let t2 = t * t;
    let t3 = t2 * t;

    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);
    let three = lit::<F>(3.0);
    let four = lit::<F>(4.0);
    let five = lit::<F>(5.0);

    let blend = |a: F, b: F, c: F, d: F| {
        half * ((two * b)
            + (-a + c) * t
            + (two * a - five * b + four * c - d) * t2
            + (-a + three * b - three * c + d) * t3)
    };

    Point2::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
    )
}
