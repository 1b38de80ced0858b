//! Cubic to quadratic Bézier conversion.
//!
//! A cubic is approximated by one quadratic whose control point is where the
//! end tangents meet. While some quadratic strays too far from its piece of
//! the cubic, that piece is split in half (de Casteljau) and both halves are
//! tried again, up to a fixed number of quads.

use crate::curves::roots::solve_cubic;
use crate::curves::{CubicBezier2, QuadraticBezier2};
use crate::primitives::{Line2, Point2};
use crate::scalar::lit;
use num_traits::Float;

/// Cubic parameters whose points are checked against a candidate quad.
const SAMPLES: [f64; 3] = [0.25, 0.5, 0.75];

/// Converts `cubic` into a chain of at most `max_quads` quadratic Béziers.
///
/// `tolerance` is the largest accepted distance from the cubic to the quad,
/// sampled at a few points of the cubic and divided by the chord length.
/// The first piece that fails is halved until every piece passes or
/// `max_quads` pieces exist, so a smaller tolerance never yields fewer quads.
/// A `max_quads` of zero is treated as one.
///
/// Consecutive quads share their joining point exactly, and the chain starts
/// at `cubic.p0` and ends at `cubic.p3`.
///
/// # Example
///
/// ```
/// use curvekit::{Point2, curves::QuadraticBezier2, flatten::cubic_to_quads};
///
/// let quad = QuadraticBezier2::new(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(2.0, 0.0),
/// );
/// let quads = cubic_to_quads(&quad.elevate(), 0.01, 3);
/// assert_eq!(quads.len(), 1);
/// ```
pub fn cubic_to_quads<F: Float>(
    cubic: &CubicBezier2<F>,
    tolerance: F,
    max_quads: usize,
) -> Vec<QuadraticBezier2<F>> {
    let max_quads = max_quads.max(1);
    let mut pieces = vec![Piece::new(*cubic, tolerance)];

    while pieces.len() < max_quads {
        let Some(i) = pieces.iter().position(|piece| !piece.accepted) else {
            break;
        };

        let (left, right) = pieces[i].cubic.split(lit(0.5));
        pieces[i] = Piece::new(left, tolerance);
        pieces.insert(i + 1, Piece::new(right, tolerance));
    }

    if pieces.iter().any(|piece| !piece.accepted) {
        log::trace!("cubic to quad: cap of {max_quads} quads reached");
    }

    pieces.into_iter().map(|piece| piece.quad).collect()
}

/// One span of the input cubic and the quad standing in for it.
struct Piece<F> {
    cubic: CubicBezier2<F>,
    quad: QuadraticBezier2<F>,
    accepted: bool,
}

impl<F: Float> Piece<F> {
    fn new(cubic: CubicBezier2<F>, tolerance: F) -> Self {
        let quad = approximate_quad(&cubic);
        let accepted = deviation(&cubic, &quad) <= tolerance;
        Self {
            cubic,
            quad,
            accepted,
        }
    }
}

/// Best single quadratic for `cubic`, keeping its end points.
fn approximate_quad<F: Float>(cubic: &CubicBezier2<F>) -> QuadraticBezier2<F> {
    let CubicBezier2 { p0, p1, p2, p3 } = *cubic;
    let eps = F::epsilon();
    let start_tangent = p1 - p0;
    let end_tangent = p2 - p3;

    if start_tangent.is_near_zero(eps) || end_tangent.is_near_zero(eps) {
        return QuadraticBezier2::line(p0, p3);
    }

    let control = Line2::new(p0, start_tangent)
        .intersect(&Line2::new(p3, end_tangent))
        .unwrap_or_else(|| {
            // Parallel tangents: average of the two one-sided control estimates
            let sum = (p1.to_vec() + p2.to_vec()) * lit(3.0) - p0.to_vec() - p3.to_vec();
            Point2::origin() + sum / lit(4.0)
        });

    QuadraticBezier2::new(p0, control, p3)
}

/// Largest distance from a sampled cubic point to the quad, relative to the
/// chord (or the control polygon when the cubic is closed).
fn deviation<F: Float>(cubic: &CubicBezier2<F>, quad: &QuadraticBezier2<F>) -> F {
    let chord = cubic.p0.distance(cubic.p3);
    let scale = if chord > F::epsilon() {
        chord
    } else {
        cubic.p0.distance(cubic.p1) + cubic.p1.distance(cubic.p2) + cubic.p2.distance(cubic.p3)
    };
    if scale <= F::epsilon() {
        return F::zero();
    }

    SAMPLES
        .iter()
        .map(|&t| distance_to_quad(quad, cubic.eval(lit(t))))
        .fold(F::zero(), F::max)
        / scale
}

/// Distance from `point` to the nearest point of `quad`.
///
/// Writing the quad as `p0 + 2bs + as²`, the nearest interior parameter
/// solves the cubic `(Q(s) - point) · Q'(s) = 0`; the end points are always
/// candidates as well.
fn distance_to_quad<F: Float>(quad: &QuadraticBezier2<F>, point: Point2<F>) -> F {
    let a = quad.p0.to_vec() - quad.p1.to_vec() * lit(2.0) + quad.p2.to_vec();
    let b = quad.p1 - quad.p0;
    let c = quad.p0 - point;

    let roots = solve_cubic(
        a.dot(a),
        a.dot(b) * lit(3.0),
        b.dot(b) * lit(2.0) + c.dot(a),
        c.dot(b),
    );

    roots
        .into_iter()
        .filter(|s| *s > F::zero() && *s < F::one())
        .map(|s| quad.eval(s).distance(point))
        .fold(
            quad.p0.distance(point).min(quad.p2.distance(point)),
            F::min,
        )
}
