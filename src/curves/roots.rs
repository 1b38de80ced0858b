//! Real roots of low-degree polynomials.
//!
//! Used for parameter-at-coordinate queries on Bézier curves. Roots are
//! returned unfiltered and in no particular order; callers pick the ones that
//! fall inside the parameter range they care about.

use crate::scalar::lit;
use num_traits::Float;

/// Solves `a·x² + b·x + c = 0`, returning 0, 1 or 2 real roots.
///
/// Degrades to the linear equation when `a` is negligible. An identically
/// zero polynomial has no isolated roots and returns none.
pub fn solve_quadratic<F: Float>(a: F, b: F, c: F) -> Vec<F> {
    let eps = F::epsilon() * lit(1000.0);
    let scale = a.abs().max(b.abs()).max(c.abs());

    if scale == F::zero() {
        return vec![];
    }

    if a.abs() <= eps * scale {
        if b.abs() <= eps * scale {
            return vec![];
        }
        return vec![-c / b];
    }

    let two = lit::<F>(2.0);
    let discriminant = b * b - lit::<F>(4.0) * a * c;
    let disc_eps = eps * scale * scale;

    if discriminant < -disc_eps {
        vec![]
    } else if discriminant <= disc_eps {
        vec![-b / (two * a)]
    } else {
        // Numerically stable form avoids cancellation between -b and sqrt(d).
        let sqrt_d = discriminant.sqrt();
        let q = -(b + b.signum() * sqrt_d) / two;
        let r1 = q / a;
        let r2 = if q != F::zero() { c / q } else { -r1 };
        vec![r1, r2]
    }
}

/// Solves `a·x³ + b·x² + c·x + d = 0`, returning 1 to 3 real roots.
///
/// Falls back to [`solve_quadratic`] when `a` is negligible.
pub fn solve_cubic<F: Float>(a: F, b: F, c: F, d: F) -> Vec<F> {
    let eps = F::epsilon() * lit(1000.0);
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());

    if a.abs() <= eps * scale {
        return solve_quadratic(b, c, d);
    }

    // Normalize to x³ + p·x² + q·x + r = 0
    let p = b / a;
    let q = c / a;
    let r = d / a;

    let three = lit::<F>(3.0);
    let two = lit::<F>(2.0);
    let twenty_seven = lit::<F>(27.0);
    let one_third = F::one() / three;
    let shift = p * one_third;

    // Depressed cubic t³ + dp·t + dq = 0 with x = t - p/3
    let dp = q - p * p * one_third;
    let dq = two * p * p * p / twenty_seven - p * q * one_third + r;

    let half = lit::<F>(0.5);
    let discriminant = dq * dq / lit(4.0) + dp * dp * dp / twenty_seven;

    if discriminant > eps {
        // One real root (Cardano)
        let sqrt_d = discriminant.sqrt();
        let u = (-half * dq + sqrt_d).cbrt();
        let v = (-half * dq - sqrt_d).cbrt();
        vec![u + v - shift]
    } else if discriminant < -eps {
        // Three distinct real roots (trigonometric form)
        let m = (-dp / three).sqrt();
        let cos_arg = (three * dq / (two * dp * m)).max(-F::one()).min(F::one());
        let theta = cos_arg.acos() * one_third;
        let two_pi_3 = lit::<F>(2.0 * std::f64::consts::PI / 3.0);

        (0..3_i32)
            .map(|k| {
                let k = lit::<F>(f64::from(k));
                two * m * (theta - two_pi_3 * k).cos() - shift
            })
            .collect()
    } else if dq.abs() <= eps {
        // Triple root
        vec![-shift]
    } else {
        // One simple and one double root
        let u = (-half * dq).cbrt();
        vec![two * u - shift, -u - shift]
    }
}
