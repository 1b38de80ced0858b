//! Cubic Bézier control points for an interpolating spline.
//!
//! [`BezierSplineControl`] turns a knot sequence into one cubic Bézier per
//! knot pair. At every interior knot the tangent is perpendicular to the
//! bisector of the angle formed with its two neighbours, so the incoming and
//! outgoing control points of a knot always lie on one line through it.
//!
//! Open splines get their free-end tangents by mirroring the neighbouring
//! control point across the perpendicular bisector of the end chord. Closed
//! splines wrap around instead.
//!
//! # Example
//!
//! ```
//! use curvekit::{Point2, curves::BezierSplineControl};
//!
//! let control = BezierSplineControl::new().with_tension(0.5);
//! let segments = control.construct(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(4.0, 0.0),
//! ]);
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].p3, segments[1].p0);
//! ```

use super::CubicBezier2;
use crate::primitives::{Line2, Point2, Vec2};
use crate::scalar::lit;
use num_traits::Float;

/// Effective control distance (fraction of the adjacent chord) at tension 1.
const TIGHT_FRACTION: f64 = 0.15;
/// Effective control distance at tension 0.
const LOOSE_FRACTION: f64 = 0.35;

/// Settings for building cubic Bézier segments through a knot sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierSplineControl<F> {
    tension: F,
    closed: bool,
}

impl<F: Float> BezierSplineControl<F> {
    /// Creates an open spline control with tension 0.5.
    pub fn new() -> Self {
        Self {
            tension: lit(0.5),
            closed: false,
        }
    }

    /// Sets the tension, clamped to `[0, 1]`. Higher tension pulls the
    /// control points closer to their knots.
    pub fn with_tension(mut self, tension: F) -> Self {
        self.set_tension(tension);
        self
    }

    /// Sets whether the spline wraps around from the last knot to the first.
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Sets the tension, clamped to `[0, 1]`. NaN resets it to the default.
    pub fn set_tension(&mut self, tension: F) {
        self.tension = if tension.is_nan() {
            lit(0.5)
        } else {
            tension.max(F::zero()).min(F::one())
        };
    }

    /// Sets whether the spline is closed.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[inline]
    pub fn tension(&self) -> F {
        self.tension
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Fraction of each adjacent chord length at which control points are
    /// placed, in `[0.15, 0.35]`.
    pub fn effective_fraction(&self) -> F {
        let tight = lit::<F>(TIGHT_FRACTION);
        tight + (lit::<F>(LOOSE_FRACTION) - tight) * (F::one() - self.tension)
    }

    /// Builds one cubic Bézier per knot pair.
    ///
    /// Fewer than two knots give no segments. Two knots on an open spline
    /// give a straight segment with both controls at the chord midpoint.
    /// A closed spline gets a closing segment back to the first knot unless
    /// the last knot already repeats it; with fewer than three distinct
    /// knots it is built as an open spline instead.
    pub fn construct(&self, knots: &[Point2<F>]) -> Vec<CubicBezier2<F>> {
        if knots.len() < 2 {
            return vec![];
        }

        if self.closed {
            if distinct_count(knots) >= 3 {
                return self.construct_closed(knots);
            }
            log::debug!(
                "closed spline needs 3 distinct knots, got {}; building it open",
                distinct_count(knots)
            );
        }

        self.construct_open(knots)
    }

    /// Same as [`construct`](Self::construct) for separate coordinate
    /// slices. Extra values in the longer slice are ignored.
    pub fn construct_xy(&self, x: &[F], y: &[F]) -> Vec<CubicBezier2<F>> {
        let knots: Vec<Point2<F>> = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| Point2::new(x, y))
            .collect();
        self.construct(&knots)
    }

    fn construct_open(&self, knots: &[Point2<F>]) -> Vec<CubicBezier2<F>> {
        let n = knots.len();
        if n == 2 {
            let mid = knots[0].midpoint(knots[1]);
            return vec![CubicBezier2::new(knots[0], mid, mid, knots[1])];
        }

        let eff = self.effective_fraction();
        // (incoming, outgoing) control at each interior knot
        let controls: Vec<(Point2<F>, Point2<F>)> = (1..n - 1)
            .map(|i| knot_controls(knots[i - 1], knots[i], knots[i + 1], eff))
            .collect();

        let mut segments = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let (start, end) = (knots[i], knots[i + 1]);
            let c0 = if i == 0 {
                mirror_across_bisector(start, end, controls[0].0)
            } else {
                controls[i - 1].1
            };
            let c1 = if i + 2 == n {
                mirror_across_bisector(start, end, controls[n - 3].1)
            } else {
                controls[i].0
            };
            segments.push(CubicBezier2::new(start, c0, c1, end));
        }

        segments
    }

    fn construct_closed(&self, knots: &[Point2<F>]) -> Vec<CubicBezier2<F>> {
        let mut ring = knots.to_vec();
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        }

        // ring[m - 1] is the seam and duplicates ring[0]
        let m = ring.len();
        let eff = self.effective_fraction();
        let controls: Vec<(Point2<F>, Point2<F>)> = (0..m - 1)
            .map(|i| {
                let prev = if i == 0 { ring[m - 2] } else { ring[i - 1] };
                knot_controls(prev, ring[i], ring[i + 1], eff)
            })
            .collect();

        let mut segments: Vec<CubicBezier2<F>> = (0..m - 1)
            .map(|i| CubicBezier2::new(ring[i], controls[i].1, ring[i + 1], ring[i + 1]))
            .collect();

        for i in 0..m - 2 {
            segments[i].p2 = controls[i + 1].0;
        }
        // The seam control mirrors the first outgoing control through the knot
        let seam = ring[0].reflect(segments[0].p1);
        segments[m - 2].p2 = seam;

        segments
    }
}

impl<F: Float> Default for BezierSplineControl<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the incoming and outgoing control points of `knot`.
fn knot_controls<F: Float>(
    prev: Point2<F>,
    knot: Point2<F>,
    next: Point2<F>,
    eff: F,
) -> (Point2<F>, Point2<F>) {
    let d_prev = knot.distance(prev);
    let d_next = knot.distance(next);

    let tangent = match ((prev - knot).normalize(), (next - knot).normalize()) {
        (Some(to_prev), Some(to_next)) => {
            let bisector = to_prev + to_next;
            if bisector.is_near_zero(lit(1e-9)) {
                // Straight pass through the knot
                (next - prev).normalize()
            } else {
                bisector_tangent(bisector, knot - prev, next - knot, next - prev)
            }
        }
        _ => (next - prev).normalize(),
    };

    match tangent {
        Some(t) => (knot - t * (eff * d_prev), knot + t * (eff * d_next)),
        None => (knot, knot),
    }
}

/// Rotates the bisector a quarter turn so it points along the direction of
/// travel, based on which way the path turns at the knot.
fn bisector_tangent<F: Float>(
    bisector: Vec2<F>,
    incoming: Vec2<F>,
    outgoing: Vec2<F>,
    chord: Vec2<F>,
) -> Option<Vec2<F>> {
    let normal = bisector.perpendicular().normalize()?;
    let turn = incoming.cross(outgoing);

    // The bisector sits on the inner side of the turn
    let tangent = if turn > F::zero() {
        -normal
    } else if turn < F::zero() {
        normal
    } else if normal.dot(chord) < F::zero() {
        -normal
    } else {
        normal
    };
    Some(tangent)
}

/// Reflects `control` across the perpendicular bisector of `a`-`b`.
fn mirror_across_bisector<F: Float>(a: Point2<F>, b: Point2<F>, control: Point2<F>) -> Point2<F> {
    let axis = Line2::new(a.midpoint(b), (b - a).perpendicular());
    axis.reflect_point(control)
}

fn distinct_count<F: Float>(knots: &[Point2<F>]) -> usize {
    knots
        .iter()
        .enumerate()
        .filter(|&(i, p)| !knots[..i].contains(p))
        .count()
}
