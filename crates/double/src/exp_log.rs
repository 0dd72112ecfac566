use crate::{DoubleDouble, Policy};

/// `1/i!` for `i = 3..=17`.
pub(crate) const INV_FACT: [[f64; 2]; 15] = [
    [1.66666666666666657e-01, 9.25185853854297066e-18],
    [4.16666666666666644e-02, 2.31296463463574266e-18],
    [8.33333333333333322e-03, 1.15648231731787138e-19],
    [1.38888888888888894e-03, -5.30054395437357706e-20],
    [1.98412698412698413e-04, 1.72095582934207053e-22],
    [2.48015873015873016e-05, 2.15119478667758816e-23],
    [2.75573192239858925e-06, -1.85839327404647208e-22],
    [2.75573192239858883e-07, 2.37677146222502973e-23],
    [2.50521083854417202e-08, -1.44881407093591197e-24],
    [2.08767569878681002e-09, -1.20734505911325997e-25],
    [1.60590438368216133e-10, 1.25852945887520981e-26],
    [1.14707455977297245e-11, 2.06555127528307454e-28],
    [7.64716373181981641e-13, 7.03872877733453001e-30],
    [4.77947733238738525e-14, 4.39920548583408126e-31],
    [2.81145725434552060e-15, 1.65088427308614326e-31],
];

#[inline(always)]
pub(crate) fn inv_fact<P: Policy>(i: usize) -> DoubleDouble<P> {
    let [hi, lo] = INV_FACT[i];
    DoubleDouble::new(hi, lo)
}

impl<P: Policy> DoubleDouble<P> {
    /// `e^self`.
    ///
    /// The argument is reduced to `r = (a - m·ln2) / 512` with `|r| <= ln2/1024`, the series
    /// for `e^r - 1` is summed with the inverse factorial table, and the reduction is undone
    /// by nine steps of `s ← 2s + s²` followed by a scaling with `2^m`.
    pub fn exp(self) -> Self {
        const K: f64 = 512.0;
        const INV_K: f64 = 1.0 / K;

        if self.x[0] <= -709.0 {
            return Self::ZERO;
        }
        if self.x[0] >= 709.0 {
            return Self::INFINITY;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_one() {
            return Self::E;
        }

        let m = (self.x[0] / Self::LN_2.x[0] + 0.5).floor();
        let r = (self - Self::LN_2 * m).mul_pwr2(INV_K);

        let mut p = r.sqr();
        let mut s = r + p.mul_pwr2(0.5);
        p *= r;
        let mut t = p * inv_fact(0);
        let mut i = 0;
        loop {
            s += t;
            p *= r;
            i += 1;
            t = p * inv_fact(i);
            if t.x[0].abs() <= INV_K * Self::EPSILON || i >= 5 {
                break;
            }
        }
        s += t;

        for _ in 0..9 {
            s = s.mul_pwr2(2.0) + s.sqr();
        }
        s += 1.0;

        s.ldexp(m as i32)
    }

    /// Natural logarithm by one Newton step `x + a·e^(-x) - 1` from the native logarithm.
    ///
    /// Arguments near the ends of the exponent range are first scaled by `2^∓128`, keeping
    /// `e^(-x)` clear of the overflow and underflow cutoffs in [`exp`](Self::exp).
    pub fn ln(self) -> Self {
        const SCALE: i32 = 128;
        if self.is_one() {
            return Self::ZERO;
        }
        if self.x[0] <= 0.0 {
            tracing::error!(value = ?self, "ln: non-positive argument");
            return Self::NAN;
        }
        if self.is_infinite() {
            return self;
        }
        if self.x[0] < 1e-300 {
            return self.ldexp(SCALE).ln() - Self::LN_2.mul_pwr2(SCALE as f64);
        }
        if self.x[0] > 1e300 {
            return self.ldexp(-SCALE).ln() + Self::LN_2.mul_pwr2(SCALE as f64);
        }

        let x = Self::from(self.x[0].ln());
        x + self * (-x).exp() - 1.0
    }

    pub fn log10(self) -> Self {
        self.ln() / Self::LN_10
    }

    pub fn log2(self) -> Self {
        self.ln() / Self::LN_2
    }
}

#[cfg(test)]
mod tests {
    use crate::DDouble;

    #[test]
    fn fast_paths() {
        assert_eq!(DDouble::ZERO.exp(), DDouble::ONE);
        assert_eq!(DDouble::ONE.exp(), DDouble::E);
        assert!(DDouble::from(-710.0).exp().is_zero());
        assert!(DDouble::from(710.0).exp().is_infinite());
        assert!(DDouble::NAN.exp().is_nan());

        assert!(DDouble::ONE.ln().is_zero());
        assert!(DDouble::ZERO.ln().is_nan());
        assert!(DDouble::from(-1.0).ln().is_nan());
        assert!(DDouble::INFINITY.ln().is_infinite());
    }

    #[test]
    fn known_values() {
        let e2 = DDouble::from(2.0).exp();
        let expected = DDouble::E * DDouble::E;
        assert!(((e2 - expected) / expected).abs().hi() < 16.0 * DDouble::EPSILON);

        let ln2 = DDouble::from(2.0).ln();
        assert!((ln2 - DDouble::LN_2).abs().hi() < 8.0 * DDouble::EPSILON);

        let l = DDouble::from(1000.0).log10();
        assert!((l - 3.0).abs().hi() < 32.0 * DDouble::EPSILON);

        let l = DDouble::from(1024.0).log2();
        assert!((l - 10.0).abs().hi() < 64.0 * DDouble::EPSILON);
    }

    #[test]
    fn ln_at_the_ends_of_the_range() {
        for a in [1e-310, 5e-324, f64::MIN_POSITIVE, 1e-300, 1e300, 1e308, f64::MAX] {
            let l = DDouble::from(a).ln();
            assert!(l.is_finite(), "ln({a:e})");
            assert!((l.hi() - a.ln()).abs() < 1e-13 * a.ln().abs(), "ln({a:e}) = {l:?}");
        }

        let eps = DDouble::EPSILON;
        let x = DDouble::from(1e-310);
        let scaled = x.ldexp(200).ln() - DDouble::LN_2 * 200.0;
        assert!((x.ln() - scaled).abs().hi() < 64.0 * eps * scaled.hi().abs());

        let l = DDouble::MAX.ln();
        assert!(l.hi() > 709.78 && l.hi() < 709.79);
        assert!((DDouble::from(1e-310).log10().hi() + 310.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_factorials_are_consistent() {
        for i in 0..super::INV_FACT.len() - 1 {
            let a: DDouble = super::inv_fact(i);
            let b: DDouble = super::inv_fact(i + 1);
            let ratio = a / b;
            let n = (i + 4) as f64;
            assert!((ratio - n).abs().hi() < n * 8.0 * DDouble::EPSILON);
        }
    }
}
