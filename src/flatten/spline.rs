//! The spline variants the flattener accepts.

use crate::curves::{BezierSpline, CartesianSpline, CatmullRom2};
use crate::error::CurveError;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Tag naming a spline variant.
///
/// Parsing is case-insensitive and accepts `"cartesian"`, `"catmullrom"` and
/// `"cubicbezier"`.
///
/// ```
/// use curvekit::flatten::SplineKind;
///
/// let kind: SplineKind = "CatmullRom".parse().unwrap();
/// assert_eq!(kind, SplineKind::CatmullRom);
/// assert_eq!(kind.to_string(), "catmullrom");
/// assert!("bspline".parse::<SplineKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplineKind {
    Cartesian,
    CatmullRom,
    CubicBezier,
}

impl SplineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplineKind::Cartesian => "cartesian",
            SplineKind::CatmullRom => "catmullrom",
            SplineKind::CubicBezier => "cubicbezier",
        }
    }
}

impl fmt::Display for SplineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplineKind {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" => Ok(SplineKind::Cartesian),
            "catmullrom" => Ok(SplineKind::CatmullRom),
            "cubicbezier" => Ok(SplineKind::CubicBezier),
            _ => Err(CurveError::UnknownSplineKind(s.to_string())),
        }
    }
}

/// A borrowed spline of any supported variant.
#[derive(Clone, Copy)]
pub enum Spline<'a, F> {
    /// A single-valued `y = f(x)` spline.
    Cartesian(&'a dyn CartesianSpline<F>),
    CatmullRom(&'a CatmullRom2<F>),
    CubicBezier(&'a BezierSpline<F>),
}

impl<'a, F: Float> Spline<'a, F> {
    pub fn kind(&self) -> SplineKind {
        match self {
            Spline::Cartesian(_) => SplineKind::Cartesian,
            Spline::CatmullRom(_) => SplineKind::CatmullRom,
            Spline::CubicBezier(_) => SplineKind::CubicBezier,
        }
    }

    /// Returns the knots in order.
    pub fn points(&self) -> &'a [Point2<F>] {
        match *self {
            Spline::Cartesian(spline) => spline.knots(),
            Spline::CatmullRom(spline) => &spline.points,
            Spline::CubicBezier(spline) => spline.knots(),
        }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points().len()
    }
}

impl<F: Float> fmt::Debug for Spline<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spline")
            .field("kind", &self.kind())
            .field("point_count", &self.point_count())
            .finish()
    }
}

impl<'a, F: Float> From<&'a CatmullRom2<F>> for Spline<'a, F> {
    fn from(spline: &'a CatmullRom2<F>) -> Self {
        Spline::CatmullRom(spline)
    }
}

impl<'a, F: Float> From<&'a BezierSpline<F>> for Spline<'a, F> {
    fn from(spline: &'a BezierSpline<F>) -> Self {
        Spline::CubicBezier(spline)
    }
}
