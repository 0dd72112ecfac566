use crate::Real;

pub const DEFAULT_MAX_ITER: usize = 32;

/// Evaluates `c[0] + c[1]·x + … + c[n]·x^n` by Horner's rule, highest degree first.
pub fn polyeval<T: Real>(c: &[T], x: T) -> T {
    let Some((&last, rest)) = c.split_last() else {
        return T::ZERO;
    };
    rest.iter().rev().fold(last, |r, &ci| r * x + ci)
}

/// Finds a root of the polynomial with ascending coefficients `c` by Newton iteration
/// from `x0`.
///
/// The iteration stops once `|p(x)| < thresh · max|c_i|`, with `thresh` defaulting to the
/// type's epsilon. Failing to get there within `max_iter` steps is reported and yields NaN.
/// Only simple roots are handled.
#[tracing::instrument(level = "trace", skip(c))]
pub fn polyroot<T: Real>(c: &[T], x0: T, max_iter: usize, thresh: Option<f64>) -> T {
    if c.len() < 2 {
        tracing::error!(len = c.len(), "polyroot: constant polynomial has no root");
        return T::NAN;
    }

    let d: Vec<T> = c
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &ci)| ci * i as f64)
        .collect();
    let max_c = c.iter().fold(0.0f64, |m, ci| m.max(ci.hi().abs()));
    let thresh = thresh.unwrap_or(T::EPSILON) * max_c;

    let mut x = x0;
    for iter in 0..max_iter {
        let f = polyeval(c, x);
        if f.hi().abs() < thresh {
            tracing::trace!(iter, "polyroot converged");
            return x;
        }
        x = x - f / polyeval(&d, x);
    }

    tracing::error!(max_iter, "polyroot: failed to converge");
    T::NAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyeval() {
        assert_eq!(polyeval::<f64>(&[], 3.0), 0.0);
        assert_eq!(polyeval(&[7.0], 3.0), 7.0);
        // 1 + 2x + 3x^2
        assert_eq!(polyeval(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }

    #[test]
    fn test_polyroot() {
        // x^2 - 2
        let r = polyroot(&[-2.0, 0.0, 1.0], 1.0, DEFAULT_MAX_ITER, None);
        assert!((r - std::f64::consts::SQRT_2).abs() < 1e-15);

        let r = polyroot(&[-3.0, 1.0], 0.0, DEFAULT_MAX_ITER, None);
        assert_eq!(r, 3.0);
    }

    #[test]
    fn polyroot_failures_are_nan() {
        assert!(polyroot(&[1.0], 0.0, DEFAULT_MAX_ITER, None).is_nan());
        // x^2 + 1 has no real root.
        assert!(polyroot(&[1.0, 0.0, 1.0], 0.5, 8, None).is_nan());
    }
}
