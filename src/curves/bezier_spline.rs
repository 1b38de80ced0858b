//! A spline made of cubic Bézier segments through its knots.

use super::{BezierSplineControl, CubicBezier2, CUBIC_LENGTH_ORDER};
use crate::integrate::GaussLegendre;
use crate::primitives::Point2;
use crate::scalar::from_usize;
use num_traits::Float;

/// An interpolating spline whose segments come from [`BezierSplineControl`].
///
/// The segments are rebuilt whenever the knots or settings change, so
/// [`segments`](Self::segments) always matches the current state.
///
/// # Example
///
/// ```
/// use curvekit::{Point2, curves::BezierSpline};
///
/// let mut spline = BezierSpline::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 3.0),
///     Point2::new(4.0, 0.0),
/// ]);
/// assert_eq!(spline.segments().len(), 2);
///
/// spline.push(Point2::new(6.0, 3.0));
/// assert_eq!(spline.segments().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierSpline<F> {
    knots: Vec<Point2<F>>,
    control: BezierSplineControl<F>,
    segments: Vec<CubicBezier2<F>>,
}

impl<F: Float> BezierSpline<F> {
    /// Creates an open spline with the default tension.
    pub fn new(knots: Vec<Point2<F>>) -> Self {
        Self::with_control(knots, BezierSplineControl::new())
    }

    /// Creates a spline with explicit control settings.
    pub fn with_control(knots: Vec<Point2<F>>, control: BezierSplineControl<F>) -> Self {
        let segments = control.construct(&knots);
        Self {
            knots,
            control,
            segments,
        }
    }

    #[inline]
    pub fn knots(&self) -> &[Point2<F>] {
        &self.knots
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.knots.len()
    }

    #[inline]
    pub fn control(&self) -> &BezierSplineControl<F> {
        &self.control
    }

    /// Returns the constructed segments.
    #[inline]
    pub fn segments(&self) -> &[CubicBezier2<F>] {
        &self.segments
    }

    /// Returns segment `i`, or `None` if out of range.
    #[inline]
    pub fn segment(&self, i: usize) -> Option<&CubicBezier2<F>> {
        self.segments.get(i)
    }

    /// Replaces all knots.
    pub fn set_knots(&mut self, knots: Vec<Point2<F>>) {
        self.knots = knots;
        self.rebuild();
    }

    /// Appends a knot.
    pub fn push(&mut self, knot: Point2<F>) {
        self.knots.push(knot);
        self.rebuild();
    }

    /// Moves knot `i`. Out-of-range indices are ignored.
    pub fn set_knot(&mut self, i: usize, knot: Point2<F>) {
        if let Some(slot) = self.knots.get_mut(i) {
            *slot = knot;
            self.rebuild();
        }
    }

    pub fn set_tension(&mut self, tension: F) {
        self.control.set_tension(tension);
        self.rebuild();
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.control.set_closed(closed);
        self.rebuild();
    }

    /// Evaluates the spline at `t` in `[0, 1]`, spread uniformly over the
    /// segments. `t` is clamped.
    ///
    /// A spline without segments evaluates to its only knot, or the origin.
    pub fn eval(&self, t: F) -> Point2<F> {
        let n = self.segments.len();
        if n == 0 {
            return self.knots.first().copied().unwrap_or_else(Point2::origin);
        }

        let scaled = t.max(F::zero()).min(F::one()) * from_usize(n);
        let i = scaled.floor().to_usize().unwrap_or(0).min(n - 1);
        self.segments[i].eval(scaled - from_usize(i))
    }

    /// Returns the total arc length.
    pub fn arc_length(&self) -> F {
        let gauss = GaussLegendre::new(CUBIC_LENGTH_ORDER);
        self.segments
            .iter()
            .fold(F::zero(), |acc, segment| acc + segment.length_at_with(&gauss, F::one()))
    }

    fn rebuild(&mut self) {
        self.segments = self.control.construct(&self.knots);
    }
}
