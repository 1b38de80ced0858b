//! Scalar helpers shared by the generic numeric code.

use num_traits::Float;

/// Converts an `f64` literal into `F`.
///
/// Every `Float` implementor can represent an `f64` (possibly rounded), so the
/// NaN fallback is never taken for `f32`/`f64`.
#[inline]
pub(crate) fn lit<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Converts a count into `F`.
#[inline]
pub(crate) fn from_usize<F: Float>(value: usize) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
