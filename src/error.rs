//! Error types for curvekit.
//!
//! Curve evaluation and flattening never fail; these errors only come from
//! building input data that is structurally invalid.

use thiserror::Error;

/// Errors raised while constructing splines or parsing spline tags.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Knot x coordinates must be strictly increasing for a cartesian spline.
    #[error("knot {index} does not have a strictly increasing x coordinate")]
    NonMonotonicKnots {
        /// Index of the first offending knot.
        index: usize,
    },

    /// A knot coordinate is NaN or infinite.
    #[error("knot {index} has a non-finite coordinate")]
    NonFiniteKnot {
        /// Index of the offending knot.
        index: usize,
    },

    /// The spline type tag is not one of the known variants.
    #[error("unknown spline kind: {0:?}")]
    UnknownSplineKind(String),
}
