//! Tuning knobs for flattening.

use crate::scalar::lit;
use num_traits::Float;

/// Options controlling how splines are flattened into quadratic Béziers.
///
/// # Example
///
/// ```
/// use curvekit::flatten::FlattenOptions;
///
/// let options: FlattenOptions<f64> = FlattenOptions::default().with_tolerance(0.001);
/// // Tolerances below the minimum are raised to it
/// assert_eq!(options.effective_tolerance(options.tolerance), 0.008);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlattenOptions<F> {
    /// Relative closeness a fitted quad must reach to be accepted.
    pub tolerance: F,
    /// Smallest tolerance honoured; lower values are raised to this.
    pub min_tolerance: F,
    /// Upper bound on quads per spline segment, for every spline kind.
    pub max_quads_per_segment: usize,
    /// Allowed midpoint deviation, relative to the chord, for cartesian fits.
    pub midpoint_threshold: F,
    /// Gauss-Legendre order for cartesian arc length.
    pub quadrature_order: usize,
}

impl<F: Float> FlattenOptions<F> {
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_min_tolerance(mut self, min_tolerance: F) -> Self {
        self.min_tolerance = min_tolerance;
        self
    }

    pub fn with_max_quads_per_segment(mut self, max: usize) -> Self {
        self.max_quads_per_segment = max;
        self
    }

    pub fn with_midpoint_threshold(mut self, threshold: F) -> Self {
        self.midpoint_threshold = threshold;
        self
    }

    pub fn with_quadrature_order(mut self, order: usize) -> Self {
        self.quadrature_order = order;
        self
    }

    /// Returns `tolerance` raised to [`min_tolerance`](Self::min_tolerance).
    /// NaN is treated as the minimum.
    pub fn effective_tolerance(&self, tolerance: F) -> F {
        if tolerance.is_nan() || tolerance < self.min_tolerance {
            log::debug!(
                "tolerance {:?} raised to minimum {:?}",
                tolerance.to_f64(),
                self.min_tolerance.to_f64()
            );
            self.min_tolerance
        } else {
            tolerance
        }
    }
}

impl<F: Float> Default for FlattenOptions<F> {
    fn default() -> Self {
        Self {
            tolerance: lit(0.01),
            min_tolerance: lit(0.008),
            max_quads_per_segment: 3,
            midpoint_threshold: lit(0.15),
            quadrature_order: 8,
        }
    }
}
