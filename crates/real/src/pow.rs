use crate::Real;

/// `a^n` by binary exponentiation. A negative `n` yields the reciprocal of `a^|n|`,
/// and `n == 0` yields one for every `a`.
pub fn powi<T: Real>(a: T, n: i32) -> T {
    if n == 0 {
        return T::ONE;
    }

    let mut r = a;
    let mut s = T::ONE;
    let mut m = n.unsigned_abs();
    if m > 1 {
        while m > 0 {
            if m % 2 == 1 {
                s = s * r;
            }
            m /= 2;
            if m > 0 {
                r = r.sqr();
            }
        }
    } else {
        s = r;
    }

    if n < 0 { T::ONE / s } else { s }
}

#[cfg(test)]
mod tests {
    use super::powi;

    #[test]
    fn test_powi() {
        assert_eq!(powi(2.0, 0), 1.0);
        assert_eq!(powi(0.0, 0), 1.0);
        assert_eq!(powi(3.0, 1), 3.0);
        assert_eq!(powi(3.0, 5), 243.0);
        assert_eq!(powi(2.0, -3), 0.125);
        assert_eq!(powi(-2.0, 3), -8.0);
        assert_eq!(powi(10.0, 22), 1e22);
        assert!(powi(0.0, -1).is_infinite());
    }
}
