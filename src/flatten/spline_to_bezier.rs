//! Flattening of whole splines into quadratic Béziers.

use super::cubic_to_quad::cubic_to_quads;
use super::{FlattenOptions, QuadFlattening, Spline};
use crate::curves::{CartesianSpline, CubicBezier2, QuadraticBezier2};
use crate::integrate::GaussLegendre;
use crate::primitives::{Line2, Point2};
use crate::scalar::lit;
use num_traits::Float;

/// Slopes steeper than this are treated as vertical tangents.
const VERTICAL_SLOPE: f64 = 1e6;
/// Tangent slopes closer than this are treated as parallel.
const PARALLEL_SLOPE: f64 = 1e-3;

/// Converts splines into chains of quadratic Béziers.
///
/// Cubic Bézier and Catmull-Rom splines are converted segment by segment
/// through their exact cubic form. Cartesian splines are fitted directly:
/// each knot interval starts as one quad built from the end tangents and is
/// bisected while the fit is poor. Either way a segment yields at most
/// [`max_quads_per_segment`](FlattenOptions::max_quads_per_segment) quads.
///
/// Conversion never fails. Splines with fewer than three knots produce an
/// empty result, a single zero-length quad, or a single straight quad.
///
/// # Example
///
/// ```
/// use curvekit::{Point2, curves::CatmullRom2, flatten::{Spline, SplineToBezier}};
///
/// let spline = CatmullRom2::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(3.0, 2.0),
///     Point2::new(4.0, 0.0),
/// ]);
///
/// let out = SplineToBezier::new().convert(Spline::CatmullRom(&spline), 0.01);
/// assert_eq!(out.index.len(), 4);
/// assert_eq!(*out.index.last().unwrap(), out.quads.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineToBezier<F> {
    options: FlattenOptions<F>,
}

impl<F: Float> SplineToBezier<F> {
    pub fn new() -> Self {
        Self::with_options(FlattenOptions::default())
    }

    pub fn with_options(options: FlattenOptions<F>) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &FlattenOptions<F> {
        &self.options
    }

    /// Converts `spline` using the tolerance from the options.
    pub fn flatten(&self, spline: Spline<'_, F>) -> QuadFlattening<F> {
        self.convert(spline, self.options.tolerance)
    }

    /// Converts `spline` into quads that stay within `tolerance`.
    ///
    /// `tolerance` is raised to the configured minimum when smaller.
    pub fn convert(&self, spline: Spline<'_, F>, tolerance: F) -> QuadFlattening<F> {
        let tolerance = self.options.effective_tolerance(tolerance);

        let points = spline.points();
        match points {
            [] => return QuadFlattening::empty(),
            [point] => return QuadFlattening::single(QuadraticBezier2::point(*point)),
            [start, end] => return QuadFlattening::single(QuadraticBezier2::line(*start, *end)),
            _ => {}
        }

        match spline {
            Spline::CubicBezier(spline) => self.convert_cubics(spline.segments(), tolerance),
            Spline::CatmullRom(spline) => {
                self.convert_cubics(&spline.to_cubic_beziers(), tolerance)
            }
            Spline::Cartesian(spline) => self.convert_cartesian(spline, tolerance),
        }
    }

    fn convert_cubics(&self, cubics: &[CubicBezier2<F>], tolerance: F) -> QuadFlattening<F> {
        let max_quads = self.options.max_quads_per_segment.max(1);
        let mut out = QuadFlattening::builder();
        for (i, cubic) in cubics.iter().enumerate() {
            let quads = cubic_to_quads(cubic, tolerance, max_quads);
            log::trace!("segment {i}: {} quads", quads.len());
            out.push_segment(quads);
        }
        out
    }

    fn convert_cartesian(
        &self,
        spline: &dyn CartesianSpline<F>,
        tolerance: F,
    ) -> QuadFlattening<F> {
        let fitter = CartesianFitter {
            spline,
            gauss: GaussLegendre::new(self.options.quadrature_order),
            tolerance,
            midpoint_threshold: self.options.midpoint_threshold,
            max_quads: self.options.max_quads_per_segment.max(1),
        };

        let mut out = QuadFlattening::builder();
        for (i, pair) in spline.knots().windows(2).enumerate() {
            let quads = fitter.fit_interval(pair[0], pair[1]);
            log::trace!("segment {i}: {} quads", quads.len());
            out.push_segment(quads);
        }
        out
    }
}

impl<F: Float> Default for SplineToBezier<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A candidate quad over one x interval, with its acceptance verdict.
struct Piece<F> {
    quad: QuadraticBezier2<F>,
    accepted: bool,
}

struct CartesianFitter<'a, F> {
    spline: &'a dyn CartesianSpline<F>,
    gauss: GaussLegendre<F>,
    tolerance: F,
    midpoint_threshold: F,
    max_quads: usize,
}

impl<F: Float> CartesianFitter<'_, F> {
    /// Fits quads between two knots, bisecting the first rejected piece until
    /// every piece passes or the quad budget is spent.
    fn fit_interval(&self, start: Point2<F>, end: Point2<F>) -> Vec<QuadraticBezier2<F>> {
        let mut pieces = vec![self.piece(start, end)];

        while pieces.len() < self.max_quads {
            let Some(i) = pieces.iter().position(|piece| !piece.accepted) else {
                break;
            };

            let QuadraticBezier2 { p0, p2, .. } = pieces[i].quad;
            let mid_x = (p0.x + p2.x) * lit(0.5);
            let mid = Point2::new(mid_x, self.spline.y_at(mid_x));
            log::trace!("bisecting cartesian piece at x = {:?}", mid_x.to_f64());

            let right = self.piece(mid, p2);
            pieces[i] = self.piece(p0, mid);
            pieces.insert(i + 1, right);
        }

        if pieces.iter().any(|piece| !piece.accepted) {
            log::trace!("cartesian quad cap of {} reached", self.max_quads);
        }

        pieces.into_iter().map(|piece| piece.quad).collect()
    }

    fn piece(&self, start: Point2<F>, end: Point2<F>) -> Piece<F> {
        let quad = self.tangent_quad(start, end);
        let accepted = self.accepts(&quad);
        Piece { quad, accepted }
    }

    /// Quad whose control point is where the spline tangents at both ends
    /// meet, or the chord midpoint when they do not meet usefully.
    fn tangent_quad(&self, start: Point2<F>, end: Point2<F>) -> QuadraticBezier2<F> {
        let m0 = self.spline.y_prime_at(start.x);
        let m1 = self.spline.y_prime_at(end.x);

        let parallel = (m0 - m1).abs() < lit(PARALLEL_SLOPE);
        if parallel || m0.is_nan() || m1.is_nan() {
            return QuadraticBezier2::line(start, end);
        }

        let vertical = lit::<F>(VERTICAL_SLOPE);
        let control = Line2::through_with_slope(start, m0, vertical)
            .intersect(&Line2::through_with_slope(end, m1, vertical));

        let (lo, hi) = (start.x.min(end.x), start.x.max(end.x));
        match control {
            Some(c) if c.x >= lo && c.x <= hi => QuadraticBezier2::new(start, c, end),
            _ => QuadraticBezier2::line(start, end),
        }
    }

    /// A quad is accepted when its length matches the spline's within the
    /// tolerance and its midpoint sits close to the spline.
    ///
    /// The midpoint error is the vertical gap between the quad's midpoint and
    /// the spline, divided by the chord length, so `midpoint_threshold` is a
    /// fraction of the chord and not an absolute distance.
    fn accepts(&self, quad: &QuadraticBezier2<F>) -> bool {
        let (start, end) = (quad.p0, quad.p2);
        let spline_length = self.gauss.eval(
            |x| F::one().hypot(self.spline.y_prime_at(x)),
            start.x,
            end.x,
        );
        let spline_length = spline_length.abs();
        let chord = start.distance(end);
        if spline_length <= F::epsilon() || chord <= F::epsilon() {
            return true;
        }

        let length_error = (quad.length() - spline_length).abs() / spline_length;
        let mid = quad.eval(lit(0.5));
        let midpoint_error = (mid.y - self.spline.y_at(mid.x)).abs() / chord;

        length_error <= self.tolerance && midpoint_error <= self.midpoint_threshold
    }
}
