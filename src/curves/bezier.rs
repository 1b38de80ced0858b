//! Quadratic and cubic Bézier segments.
//!
//! Both curve types evaluate position, derivative and slope, measure arc
//! length (closed form for quadratics, Gauss-Legendre quadrature for cubics),
//! invert arc length, and solve for the parameters at a given coordinate.
//!
//! Control points are public fields. Nothing is cached on the curve, so every
//! query reflects the current control points immediately.

use super::roots::{solve_cubic, solve_quadratic};
use crate::integrate::GaussLegendre;
use crate::primitives::{Point2, Vec2};
use crate::scalar::lit;
use num_traits::Float;
use std::cmp::Ordering;

/// Quadrature order used for cubic arc length.
pub const CUBIC_LENGTH_ORDER: usize = 16;

const ARC_LENGTH_ITERATIONS: usize = 32;

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve starts at `p0`, is pulled toward `p1`, and ends at `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// A zero-length curve sitting on `point`.
    #[inline]
    pub fn point(point: Point2<F>) -> Self {
        Self::new(point, point, point)
    }

    /// A straight segment whose control point is the chord midpoint.
    #[inline]
    pub fn line(p0: Point2<F>, p2: Point2<F>) -> Self {
        Self::new(p0, p0.midpoint(p2), p2)
    }

    /// Evaluates the curve at parameter `t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        Point2::new(self.x_at(t), self.y_at(t))
    }

    /// Returns the x coordinate at parameter `t`.
    #[inline]
    pub fn x_at(&self, t: F) -> F {
        quadratic_blend(self.p0.x, self.p1.x, self.p2.x, t)
    }

    /// Returns the y coordinate at parameter `t`.
    #[inline]
    pub fn y_at(&self, t: F) -> F {
        quadratic_blend(self.p0.y, self.p1.y, self.p2.y, t)
    }

    /// Returns the derivative (velocity) at parameter `t`.
    #[inline]
    pub fn derivative_at(&self, t: F) -> Vec2<F> {
        let two = F::one() + F::one();
        let mt = F::one() - t;
        ((self.p1 - self.p0) * mt + (self.p2 - self.p1) * t) * two
    }

    /// Returns `dy/dx` at parameter `t`.
    ///
    /// Vertical tangents give a signed infinity; a stationary point gives 0.
    #[inline]
    pub fn slope_at(&self, t: F) -> F {
        slope_of(self.derivative_at(t))
    }

    /// Splits the curve at parameter `t` (de Casteljau).
    pub fn split(&self, t: F) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p012 = p01.lerp(p12, t);

        (
            Self::new(self.p0, p01, p012),
            Self::new(p012, p12, self.p2),
        )
    }

    /// Returns the equivalent cubic curve (degree elevation).
    pub fn elevate(&self) -> CubicBezier2<F> {
        let two_thirds = lit::<F>(2.0 / 3.0);
        CubicBezier2::new(
            self.p0,
            self.p0.lerp(self.p1, two_thirds),
            self.p2.lerp(self.p1, two_thirds),
            self.p2,
        )
    }

    /// Returns the full arc length.
    #[inline]
    pub fn length(&self) -> F {
        self.length_at(F::one())
    }

    /// Returns the arc length from `t = 0` to `t`, in closed form.
    pub fn length_at(&self, t: F) -> F {
        // B'(u) = 2 (b + u a), so |B'(u)| = 2 sqrt(aa u² + 2 ab u + bb)
        let a = self.p0.to_vec() - self.p1.to_vec() * lit(2.0) + self.p2.to_vec();
        let b = self.p1 - self.p0;
        let aa = a.dot(a);
        let ab = a.dot(b);
        let bb = b.dot(b);
        let two = lit::<F>(2.0);

        let scale = aa.max(bb);
        if scale <= F::epsilon() * F::epsilon() {
            return F::zero();
        }

        if aa <= F::epsilon() * scale {
            // No curvature: constant speed
            return two * bb.sqrt() * t;
        }

        // Complete the square: aa·w² + k with w = u + ab/aa
        let k = (bb - ab * ab / aa).max(F::zero());
        let w0 = ab / aa;
        let sqrt_a = aa.sqrt();

        let antiderivative = |w: F| -> F {
            if k <= F::epsilon() * bb.max(aa) {
                // Control points are collinear
                return sqrt_a * w * w.abs() / two;
            }
            let s = (aa * w * w + k).sqrt();
            // ln(sqrt_a·w + s), rewritten for w < 0 to avoid cancellation
            let log_term = if w >= F::zero() {
                (sqrt_a * w + s).ln()
            } else {
                k.ln() - (s - sqrt_a * w).ln()
            };
            w * s / two + k / (two * sqrt_a) * log_term
        };

        two * (antiderivative(t + w0) - antiderivative(w0))
    }

    /// Returns the parameter at which the arc length from the start equals `s`.
    ///
    /// `s` is clamped to `[0, length()]`. A zero-length curve returns 0.
    pub fn t_at_length(&self, s: F) -> F {
        invert_arc_length(
            |t| self.length_at(t),
            |t| self.derivative_at(t).magnitude(),
            self.length(),
            s,
        )
    }

    /// Returns the point at arc length `s` from the start.
    #[inline]
    pub fn point_at_length(&self, s: F) -> Point2<F> {
        self.eval(self.t_at_length(s))
    }

    /// Returns every parameter (0, 1 or 2) at which the curve has x coordinate `x`.
    ///
    /// Roots are sorted but not restricted to `[0, 1]`.
    pub fn t_at_x(&self, x: F) -> Vec<F> {
        quadratic_roots_at(self.p0.x, self.p1.x, self.p2.x, x)
    }

    /// Returns the parameters at which the curve has y coordinate `y`.
    pub fn t_at_y(&self, y: F) -> Vec<F> {
        quadratic_roots_at(self.p0.y, self.p1.y, self.p2.y, y)
    }

    /// Returns the y coordinates where the curve crosses `x` for `t` in `[0, 1]`.
    pub fn y_at_x(&self, x: F) -> Vec<F> {
        in_unit_range(self.t_at_x(x))
            .map(|t| self.y_at(t))
            .collect()
    }

    /// Returns the x coordinates where the curve crosses `y` for `t` in `[0, 1]`.
    pub fn x_at_y(&self, y: F) -> Vec<F> {
        in_unit_range(self.t_at_y(y))
            .map(|t| self.x_at(t))
            .collect()
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is pulled toward `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        Point2::new(self.x_at(t), self.y_at(t))
    }

    /// Returns the x coordinate at parameter `t`.
    #[inline]
    pub fn x_at(&self, t: F) -> F {
        cubic_blend(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t)
    }

    /// Returns the y coordinate at parameter `t`.
    #[inline]
    pub fn y_at(&self, t: F) -> F {
        cubic_blend(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t)
    }

    /// Returns the derivative (velocity) at parameter `t`.
    pub fn derivative_at(&self, t: F) -> Vec2<F> {
        let three = lit::<F>(3.0);
        let hodograph = QuadraticBezier2::new(
            Point2::origin() + (self.p1 - self.p0) * three,
            Point2::origin() + (self.p2 - self.p1) * three,
            Point2::origin() + (self.p3 - self.p2) * three,
        );
        hodograph.eval(t).to_vec()
    }

    /// Returns `dy/dx` at parameter `t`.
    ///
    /// Vertical tangents give a signed infinity; a stationary point gives 0.
    #[inline]
    pub fn slope_at(&self, t: F) -> F {
        slope_of(self.derivative_at(t))
    }

    /// Splits the curve at parameter `t` (de Casteljau).
    ///
    /// The two halves share the split point exactly.
    pub fn split(&self, t: F) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        let p0123 = p012.lerp(p123, t);

        (
            Self::new(self.p0, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.p3),
        )
    }

    /// Returns the full arc length.
    #[inline]
    pub fn length(&self) -> F {
        self.length_at(F::one())
    }

    /// Returns the arc length from `t = 0` to `t`.
    ///
    /// Integrates the speed `|B'(u)|` with a [`CUBIC_LENGTH_ORDER`]-point
    /// Gauss-Legendre rule.
    pub fn length_at(&self, t: F) -> F {
        self.length_at_with(&GaussLegendre::new(CUBIC_LENGTH_ORDER), t)
    }

    /// Same as [`length_at`](Self::length_at) with a caller-provided rule.
    pub fn length_at_with(&self, gauss: &GaussLegendre<F>, t: F) -> F {
        gauss.eval(|u| self.derivative_at(u).magnitude(), F::zero(), t)
    }

    /// Returns the parameter at which the arc length from the start equals `s`.
    ///
    /// `s` is clamped to `[0, length()]`. A zero-length curve returns 0.
    pub fn t_at_length(&self, s: F) -> F {
        let gauss = GaussLegendre::new(CUBIC_LENGTH_ORDER);
        invert_arc_length(
            |t| self.length_at_with(&gauss, t),
            |t| self.derivative_at(t).magnitude(),
            self.length_at_with(&gauss, F::one()),
            s,
        )
    }

    /// Returns the point at arc length `s` from the start.
    #[inline]
    pub fn point_at_length(&self, s: F) -> Point2<F> {
        self.eval(self.t_at_length(s))
    }

    /// Returns every real parameter (up to 3) at which the curve has x coordinate `x`.
    ///
    /// Roots are sorted but not restricted to `[0, 1]`.
    pub fn t_at_x(&self, x: F) -> Vec<F> {
        cubic_roots_at(self.p0.x, self.p1.x, self.p2.x, self.p3.x, x)
    }

    /// Returns the parameters at which the curve has y coordinate `y`.
    pub fn t_at_y(&self, y: F) -> Vec<F> {
        cubic_roots_at(self.p0.y, self.p1.y, self.p2.y, self.p3.y, y)
    }

    /// Returns the y coordinates where the curve crosses `x` for `t` in `[0, 1]`.
    pub fn y_at_x(&self, x: F) -> Vec<F> {
        in_unit_range(self.t_at_x(x))
            .map(|t| self.y_at(t))
            .collect()
    }

    /// Returns the x coordinates where the curve crosses `y` for `t` in `[0, 1]`.
    pub fn x_at_y(&self, y: F) -> Vec<F> {
        in_unit_range(self.t_at_y(y))
            .map(|t| self.x_at(t))
            .collect()
    }
}

#[inline]
fn quadratic_blend<F: Float>(a: F, b: F, c: F, t: F) -> F {
    let mt = F::one() - t;
    mt * mt * a + (F::one() + F::one()) * mt * t * b + t * t * c
}

#[inline]
fn cubic_blend<F: Float>(a: F, b: F, c: F, d: F, t: F) -> F {
    let mt = F::one() - t;
    let three = lit::<F>(3.0);
    mt * mt * mt * a + three * mt * mt * t * b + three * mt * t * t * c + t * t * t * d
}

fn slope_of<F: Float>(d: Vec2<F>) -> F {
    let scale = d.x.abs().max(d.y.abs());
    if scale <= F::epsilon() {
        return F::zero();
    }
    if d.x.abs() <= F::epsilon() * scale {
        return F::infinity() * d.y.signum();
    }
    d.y / d.x
}

fn sort_roots<F: Float>(mut roots: Vec<F>) -> Vec<F> {
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    roots
}

fn quadratic_roots_at<F: Float>(p0: F, p1: F, p2: F, value: F) -> Vec<F> {
    let two = F::one() + F::one();
    sort_roots(solve_quadratic(
        p0 - two * p1 + p2,
        two * (p1 - p0),
        p0 - value,
    ))
}

fn cubic_roots_at<F: Float>(p0: F, p1: F, p2: F, p3: F, value: F) -> Vec<F> {
    let three = lit::<F>(3.0);
    let six = lit::<F>(6.0);
    sort_roots(solve_cubic(
        -p0 + three * p1 - three * p2 + p3,
        three * p0 - six * p1 + three * p2,
        three * (p1 - p0),
        p0 - value,
    ))
}

/// Keeps roots inside `[0, 1]`, snapping those within rounding distance.
fn in_unit_range<F: Float>(roots: Vec<F>) -> impl Iterator<Item = F> {
    let slack = lit::<F>(1e-9);
    roots
        .into_iter()
        .filter(move |&t| t >= -slack && t <= F::one() + slack)
        .map(|t| t.max(F::zero()).min(F::one()))
}

/// Solves `length_at(t) = s` by Newton iteration safeguarded with bisection.
fn invert_arc_length<F, L, S>(length_at: L, speed_at: S, total: F, s: F) -> F
where
    F: Float,
    L: Fn(F) -> F,
    S: Fn(F) -> F,
{
    if total <= F::epsilon() {
        return F::zero();
    }
    let s = s.max(F::zero()).min(total);
    if s <= F::zero() {
        return F::zero();
    }
    if s >= total {
        return F::one();
    }

    let tolerance = total * lit(1e-12);
    let (mut lo, mut hi) = (F::zero(), F::one());
    let mut t = s / total;

    for _ in 0..ARC_LENGTH_ITERATIONS {
        let error = length_at(t) - s;
        if error.abs() <= tolerance {
            break;
        }
        if error > F::zero() {
            hi = t;
        } else {
            lo = t;
        }

        let speed = speed_at(t);
        let newton = if speed > F::epsilon() {
            t - error / speed
        } else {
            F::nan()
        };
        t = if newton > lo && newton < hi {
            newton
        } else {
            (lo + hi) / lit(2.0)
        };
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> QuadraticBezier2<f64> {
        QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        )
    }

    fn s_curve() -> CubicBezier2<f64> {
        CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 0.0),
        )
    }

    // QuadraticBezier2 tests

    #[test]
    fn test_quadratic_eval() {
        let curve = arch();
        assert_eq!(curve.eval(0.0), curve.p0);
        assert_eq!(curve.eval(1.0), curve.p2);

        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 1.0, epsilon = 1e-12);

        // No clamping outside [0, 1]
        assert_relative_eq!(curve.x_at(2.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(curve.y_at(2.0), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_mutation_is_visible() {
        let mut curve = arch();
        curve.p1 = Point2::new(1.0, 4.0);
        assert_relative_eq!(curve.y_at(0.5), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_split() {
        let curve = arch();
        let (left, right) = curve.split(0.5);
        assert_eq!(left.p2, right.p0);
        assert_relative_eq!(left.eval(0.5).x, curve.eval(0.25).x, epsilon = 1e-12);
        assert_relative_eq!(right.eval(0.5).y, curve.eval(0.75).y, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_slope() {
        let curve = arch();
        assert_relative_eq!(curve.slope_at(0.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(curve.slope_at(0.5), 0.0, epsilon = 1e-12);
        assert_relative_eq!(curve.slope_at(1.0), -2.0, epsilon = 1e-12);

        let vertical = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 2.0),
        );
        assert_eq!(vertical.slope_at(0.5), f64::INFINITY);
    }

    #[test]
    fn test_quadratic_length_straight() {
        let line = QuadraticBezier2::line(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_relative_eq!(line.length(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(line.length_at(0.5), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_length_collinear_uneven() {
        // Collinear but not evenly spaced: the log term vanishes
        let curve = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        assert_relative_eq!(curve.length(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_length_with_reversal() {
        // Runs out to x = 4/3 and back to x = 1
        let curve = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        assert_relative_eq!(curve.length(), 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_length_matches_quadrature() {
        let curve = arch();
        let gauss = GaussLegendre::new(48);
        for t in [0.1, 0.3, 0.5, 0.8, 1.0] {
            let numeric = gauss.eval(|u| curve.derivative_at(u).magnitude(), 0.0, t);
            assert_relative_eq!(curve.length_at(t), numeric, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quadratic_degenerate() {
        let curve = QuadraticBezier2::point(Point2::new(3.0, 4.0));
        assert_eq!(curve.length(), 0.0);
        assert_eq!(curve.eval(0.7), Point2::new(3.0, 4.0));
        assert_eq!(curve.t_at_length(1.0), 0.0);
        assert_eq!(curve.slope_at(0.5), 0.0);
    }

    #[test]
    fn test_quadratic_t_at_length() {
        let curve = arch();
        let total = curve.length();
        for fraction in [0.1, 0.25, 0.5, 0.9] {
            let t = curve.t_at_length(total * fraction);
            assert_relative_eq!(curve.length_at(t), total * fraction, epsilon = 1e-9);
        }
        // Symmetric curve: half the length is at t = 0.5
        assert_relative_eq!(curve.t_at_length(total / 2.0), 0.5, epsilon = 1e-9);
        assert_eq!(curve.t_at_length(-1.0), 0.0);
        assert_eq!(curve.t_at_length(total * 2.0), 1.0);
    }

    #[test]
    fn test_quadratic_t_at_x() {
        let curve = arch();
        let ts = curve.t_at_x(1.0);
        assert_eq!(ts.len(), 1);
        assert_relative_eq!(ts[0], 0.5, epsilon = 1e-12);

        let ys = curve.y_at_x(0.5);
        assert_eq!(ys.len(), 1);
        assert_relative_eq!(curve.eval(curve.t_at_x(0.5)[0]).x, 0.5, epsilon = 1e-12);

        // Horizontal crossing of an arch hits twice
        let xs = curve.x_at_y(0.5);
        assert_eq!(xs.len(), 2);
        assert_relative_eq!(xs[0] + xs[1], 2.0, epsilon = 1e-12);

        assert!(curve.y_at_x(5.0).is_empty());
    }

    // CubicBezier2 tests

    #[test]
    fn test_cubic_eval() {
        let curve = s_curve();
        assert_eq!(curve.eval(0.0), curve.p0);
        assert_eq!(curve.eval(1.0), curve.p3);

        let symmetric = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 0.0),
        );
        let mid = symmetric.eval(0.5);
        assert_relative_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_split() {
        let curve = s_curve();
        let (left, right) = curve.split(0.5);
        assert_eq!(left.p3, right.p0);

        let orig = curve.eval(0.25);
        let from_left = left.eval(0.5);
        assert_relative_eq!(orig.x, from_left.x, epsilon = 1e-12);
        assert_relative_eq!(orig.y, from_left.y, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_derivative_and_slope() {
        let curve = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(3.0, 0.0),
        );
        let d0 = curve.derivative_at(0.0);
        assert_relative_eq!(d0.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(d0.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(curve.slope_at(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(curve.slope_at(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_length_straight() {
        let line = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        assert_relative_eq!(line.length(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(line.length_at(0.5), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_length_of_elevated_quadratic() {
        let quad = arch();
        let cubic = quad.elevate();
        assert_relative_eq!(cubic.length(), quad.length(), epsilon = 1e-5);
        for t in [0.2, 0.6] {
            let a = cubic.eval(t);
            let b = quad.eval(t);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cubic_degenerate() {
        let p = Point2::new(2.0, -1.0);
        let curve = CubicBezier2::new(p, p, p, p);
        assert_eq!(curve.length(), 0.0);
        assert_eq!(curve.eval(0.3), p);
        assert_eq!(curve.t_at_length(0.5), 0.0);
    }

    #[test]
    fn test_cubic_t_at_length() {
        let curve = s_curve();
        let total = curve.length();
        assert!(total > 4.0);
        for fraction in [0.2, 0.5, 0.75] {
            let p = curve.point_at_length(total * fraction);
            let t = curve.t_at_length(total * fraction);
            assert_relative_eq!(curve.length_at(t), total * fraction, epsilon = 1e-9);
            assert_eq!(p, curve.eval(t));
        }
    }

    #[test]
    fn test_cubic_t_at_x() {
        let curve = s_curve();
        let ts = curve.t_at_x(2.0);
        let inside: Vec<f64> = ts.into_iter().filter(|t| (0.0..=1.0).contains(t)).collect();
        assert_eq!(inside.len(), 1);
        assert_relative_eq!(inside[0], 0.5, epsilon = 1e-9);

        let ys = curve.y_at_x(2.0);
        assert_eq!(ys.len(), 1);
        assert_relative_eq!(ys[0], 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_t_at_y_three_crossings() {
        // Wave crossing y = 0 at both ends and in the middle
        let curve = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 3.0),
            Point2::new(2.0, -3.0),
            Point2::new(3.0, 0.0),
        );
        let xs = curve.x_at_y(0.0);
        assert_eq!(xs.len(), 3);
        assert_relative_eq!(xs[1], 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_f32_support() {
        let curve: CubicBezier2<f32> = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 0.0),
        );
        assert!(curve.length() > 4.0);
        let quad: QuadraticBezier2<f32> = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        assert!((quad.length() - 2.957_885_7).abs() < 1e-4);
    }
}
