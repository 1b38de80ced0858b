//! Fixed-order Gauss-Legendre quadrature.
//!
//! The abscissas and weights are computed once per integrator by Newton
//! iteration on the Legendre polynomial of the requested order, then reused
//! for every call to [`GaussLegendre::eval`]. There is no adaptive
//! refinement: callers keep intervals short enough for the order they pick.

use crate::scalar::{from_usize, lit};
use num_traits::Float;

/// Smallest supported order.
pub const MIN_ORDER: usize = 2;
/// Largest supported order.
pub const MAX_ORDER: usize = 64;

const MAX_NEWTON_ITERATIONS: usize = 100;

/// A Gauss-Legendre rule with precomputed nodes on `[-1, 1]`.
///
/// # Example
///
/// ```
/// use curvekit::integrate::GaussLegendre;
///
/// let gauss: GaussLegendre<f64> = GaussLegendre::new(6);
/// let area = gauss.eval(|x| x * x, 0.0, 3.0);
/// assert!((area - 9.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre<F> {
    abscissas: Vec<F>,
    weights: Vec<F>,
}

impl<F: Float> GaussLegendre<F> {
    /// Builds a rule with `order` points.
    ///
    /// Orders outside `[MIN_ORDER, MAX_ORDER]` are clamped.
    pub fn new(order: usize) -> Self {
        let n = order.clamp(MIN_ORDER, MAX_ORDER);
        if n != order {
            log::debug!("gauss-legendre order {order} clamped to {n}");
        }

        let mut abscissas = vec![F::zero(); n];
        let mut weights = vec![F::zero(); n];

        let one = F::one();
        let two = lit::<F>(2.0);
        let nf = from_usize::<F>(n);
        let pi = lit::<F>(std::f64::consts::PI);
        let tolerance = F::epsilon() * lit(16.0);

        // Roots are symmetric, so only the upper half is solved for.
        for i in 0..n.div_ceil(2) {
            let mut z = (pi * (from_usize::<F>(i) + lit(0.75)) / (nf + lit(0.5))).cos();
            for _ in 0..MAX_NEWTON_ITERATIONS {
                let (p, dp) = legendre(n, z);
                let step = p / dp;
                z = z - step;
                if step.abs() <= tolerance {
                    break;
                }
            }
            let (_, derivative) = legendre(n, z);

            let weight = two / ((one - z * z) * derivative * derivative);
            abscissas[i] = -z;
            abscissas[n - 1 - i] = z;
            weights[i] = weight;
            weights[n - 1 - i] = weight;
        }

        Self { abscissas, weights }
    }

    /// Returns the number of sample points.
    #[inline]
    pub fn order(&self) -> usize {
        self.abscissas.len()
    }

    /// Returns the nodes on `[-1, 1]`, in increasing order.
    #[inline]
    pub fn abscissas(&self) -> &[F] {
        &self.abscissas
    }

    /// Returns the weights matching [`abscissas`](Self::abscissas).
    #[inline]
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// Integrates `f` over `[a, b]`.
    ///
    /// Reversed bounds give the negated integral; an empty interval gives 0.
    /// The continuity of `f` is not checked.
    pub fn eval<Func>(&self, mut f: Func, a: F, b: F) -> F
    where
        Func: FnMut(F) -> F,
    {
        if a == b {
            return F::zero();
        }

        let half = lit::<F>(0.5);
        let half_width = (b - a) * half;
        let center = (a + b) * half;

        let sum = self
            .abscissas
            .iter()
            .zip(&self.weights)
            .fold(F::zero(), |acc, (&x, &w)| {
                acc + w * f(center + half_width * x)
            });

        sum * half_width
    }
}

impl<F: Float> Default for GaussLegendre<F> {
    /// An 8-point rule.
    fn default() -> Self {
        Self::new(8)
    }
}

/// Evaluates the Legendre polynomial `P_n(z)` and its derivative.
fn legendre<F: Float>(n: usize, z: F) -> (F, F) {
    let mut p_prev = F::zero();
    let mut p = F::one();

    for j in 1..=n {
        let jf = from_usize::<F>(j);
        let p_next = ((lit::<F>(2.0) * jf - F::one()) * z * p - (jf - F::one()) * p_prev) / jf;
        p_prev = p;
        p = p_next;
    }

    let nf = from_usize::<F>(n);
    let dp = nf * (z * p - p_prev) / (z * z - F::one());
    (p, dp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_two() {
        for order in [2, 3, 6, 8, 12, 18, 20, 33] {
            let gauss: GaussLegendre<f64> = GaussLegendre::new(order);
            let total: f64 = gauss.weights().iter().sum();
            assert_relative_eq!(total, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_known_two_point_rule() {
        let gauss: GaussLegendre<f64> = GaussLegendre::new(2);
        let x = 1.0 / 3.0_f64.sqrt();
        assert_relative_eq!(gauss.abscissas()[0], -x, epsilon = 1e-14);
        assert_relative_eq!(gauss.abscissas()[1], x, epsilon = 1e-14);
        assert_relative_eq!(gauss.weights()[0], 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_odd_order_has_center_node() {
        let gauss: GaussLegendre<f64> = GaussLegendre::new(5);
        assert_relative_eq!(gauss.abscissas()[2], 0.0, epsilon = 1e-14);
        assert_relative_eq!(gauss.weights()[2], 128.0 / 225.0, epsilon = 1e-13);
    }

    #[test]
    fn test_exact_for_polynomials() {
        // An n-point rule is exact for degree 2n - 1.
        let gauss: GaussLegendre<f64> = GaussLegendre::new(3);
        let value = gauss.eval(|x| x.powi(5) - 2.0 * x * x + 1.0, 0.0, 2.0);
        assert_relative_eq!(value, 64.0 / 6.0 - 16.0 / 3.0 + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_smooth_function() {
        let gauss: GaussLegendre<f64> = GaussLegendre::new(12);
        let value = gauss.eval(f64::sin, 0.0, std::f64::consts::PI);
        assert_relative_eq!(value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_and_empty_interval() {
        let gauss: GaussLegendre<f64> = GaussLegendre::default();
        assert_eq!(gauss.eval(|x| x, 1.0, 1.0), 0.0);
        let forward = gauss.eval(|x| x * x, 0.0, 1.0);
        let backward = gauss.eval(|x| x * x, 1.0, 0.0);
        assert_relative_eq!(forward, -backward, epsilon = 1e-14);
    }

    #[test]
    fn test_order_is_clamped() {
        assert_eq!(GaussLegendre::<f64>::new(0).order(), MIN_ORDER);
        assert_eq!(GaussLegendre::<f64>::new(1000).order(), MAX_ORDER);
    }

    #[test]
    fn test_f32_support() {
        let gauss: GaussLegendre<f32> = GaussLegendre::new(8);
        let value = gauss.eval(|x| x * x, 0.0, 1.0);
        assert!((value - 1.0 / 3.0).abs() < 1e-5);
    }
}
