//! Cartesian (single-valued `y = f(x)`) splines.
//!
//! The flattening pipeline only needs a narrow view of such a spline: its
//! knots plus `y(x)` and `y'(x)`. [`CartesianSpline`] captures that view and
//! [`NaturalCubicSpline`] is the stock implementation.

use crate::error::CurveError;
use crate::primitives::Point2;
use crate::scalar::lit;
use num_traits::Float;

/// A spline that is a function of x.
pub trait CartesianSpline<F> {
    /// Knots in strictly increasing x order.
    fn knots(&self) -> &[Point2<F>];

    /// Returns `y(x)`.
    fn y_at(&self, x: F) -> F;

    /// Returns `dy/dx` at `x`.
    fn y_prime_at(&self, x: F) -> F;

    /// Returns the number of knots.
    fn point_count(&self) -> usize {
        self.knots().len()
    }
}

/// A natural cubic spline through a set of knots.
///
/// Second derivatives vanish at both ends. Two knots give a straight line and
/// a single knot gives a constant.
///
/// # Example
///
/// ```
/// use curvekit::{Point2, curves::{CartesianSpline, NaturalCubicSpline}};
///
/// let spline: NaturalCubicSpline<f64> = NaturalCubicSpline::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 0.0),
/// ]).unwrap();
///
/// assert!((spline.y_at(1.0) - 1.0).abs() < 1e-12);
/// assert!(spline.y_prime_at(1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalCubicSpline<F> {
    knots: Vec<Point2<F>>,
    second_derivatives: Vec<F>,
}

impl<F: Float> NaturalCubicSpline<F> {
    /// Fits a natural cubic spline through `knots`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonFiniteKnot`] for NaN or infinite coordinates and
    /// [`CurveError::NonMonotonicKnots`] when x does not strictly increase.
    pub fn new(knots: Vec<Point2<F>>) -> Result<Self, CurveError> {
        if let Some(index) = knots.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFiniteKnot { index });
        }
        if let Some(index) = knots.windows(2).position(|w| w[1].x <= w[0].x) {
            return Err(CurveError::NonMonotonicKnots { index: index + 1 });
        }

        let second_derivatives = solve_second_derivatives(&knots);
        Ok(Self {
            knots,
            second_derivatives,
        })
    }

    /// Returns the second derivative at each knot.
    pub fn second_derivatives(&self) -> &[F] {
        &self.second_derivatives
    }

    /// Index of the segment used for `x`; values outside the knot range use
    /// the nearest end segment.
    fn segment_for(&self, x: F) -> usize {
        let last = self.knots.len().saturating_sub(2);
        self.knots
            .partition_point(|p| p.x <= x)
            .saturating_sub(1)
            .min(last)
    }
}

impl<F: Float> CartesianSpline<F> for NaturalCubicSpline<F> {
    fn knots(&self) -> &[Point2<F>] {
        &self.knots
    }

    fn y_at(&self, x: F) -> F {
        match self.knots.len() {
            0 => return F::zero(),
            1 => return self.knots[0].y,
            _ => {}
        }

        let i = self.segment_for(x);
        let (k0, k1) = (self.knots[i], self.knots[i + 1]);
        let (m0, m1) = (self.second_derivatives[i], self.second_derivatives[i + 1]);
        let h = k1.x - k0.x;
        let a = (k1.x - x) / h;
        let b = (x - k0.x) / h;

        a * k0.y + b * k1.y + ((a * a * a - a) * m0 + (b * b * b - b) * m1) * h * h / lit(6.0)
    }

    fn y_prime_at(&self, x: F) -> F {
        if self.knots.len() < 2 {
            return F::zero();
        }

        let i = self.segment_for(x);
        let (k0, k1) = (self.knots[i], self.knots[i + 1]);
        let (m0, m1) = (self.second_derivatives[i], self.second_derivatives[i + 1]);
        let h = k1.x - k0.x;
        let a = (k1.x - x) / h;
        let b = (x - k0.x) / h;
        let three = lit::<F>(3.0);
        let six = lit::<F>(6.0);

        (k1.y - k0.y) / h - (three * a * a - F::one()) / six * h * m0
            + (three * b * b - F::one()) / six * h * m1
    }
}

/// Solves the tridiagonal system for the knot second derivatives
/// (Thomas algorithm), with zero curvature at both ends.
fn solve_second_derivatives<F: Float>(knots: &[Point2<F>]) -> Vec<F> {
    let n = knots.len();
    let mut m = vec![F::zero(); n];
    if n < 3 {
        return m;
    }

    let two = lit::<F>(2.0);
    let six = lit::<F>(6.0);

    // Row i (1..n-1): h[i-1] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i] m[i+1] = rhs[i]
    let mut upper = vec![F::zero(); n];
    let mut rhs = vec![F::zero(); n];

    for i in 1..n - 1 {
        let h_prev = knots[i].x - knots[i - 1].x;
        let h = knots[i + 1].x - knots[i].x;
        let slope_prev = (knots[i].y - knots[i - 1].y) / h_prev;
        let slope = (knots[i + 1].y - knots[i].y) / h;

        let diag = two * (h_prev + h) - h_prev * upper[i - 1];
        upper[i] = h / diag;
        rhs[i] = (six * (slope - slope_prev) - h_prev * rhs[i - 1]) / diag;
    }

    // Back substitution
    for i in (1..n - 1).rev() {
        m[i] = rhs[i] - upper[i] * m[i + 1];
    }

    m
}
