use crate::{DoubleDouble, Policy};

/// Below this magnitude the exponential formulas cancel too much and series are used.
const SERIES_BOUND: f64 = 0.05;

impl<P: Policy> DoubleDouble<P> {
    pub fn sinh(self) -> Self {
        if self.is_zero() || !self.is_finite() {
            return self;
        }
        if self.x[0].abs() > SERIES_BOUND {
            let ea = self.exp();
            return (ea - ea.recip()).mul_pwr2(0.5);
        }

        // a + a^3/3! + a^5/5! + ...
        let thresh = (self.x[0] * Self::EPSILON).abs();
        let r = self.sqr();
        let mut s = self;
        let mut t = self;
        let mut m = 1.0;
        loop {
            m += 2.0;
            t *= r;
            t /= (m - 1.0) * m;
            s += t;
            if t.x[0].abs() <= thresh {
                break;
            }
        }
        s
    }

    pub fn cosh(self) -> Self {
        if self.is_zero() {
            return Self::ONE;
        }
        let ea = self.exp();
        (ea + ea.recip()).mul_pwr2(0.5)
    }

    pub fn tanh(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        // tanh(40) rounds to one even in double-double.
        if self.x[0].abs() > 40.0 {
            return Self::from(self.x[0].signum());
        }
        if self.x[0].abs() > SERIES_BOUND {
            let ea = self.exp();
            let inv_ea = ea.recip();
            return (ea - inv_ea) / (ea + inv_ea);
        }
        let s = self.sinh();
        let c = (1.0 + s.sqr()).sqrt();
        s / c
    }

    /// `(sinh(self), cosh(self))` from a single exponential.
    pub fn sinh_cosh(self) -> (Self, Self) {
        if self.is_nan() {
            return (self, self);
        }
        if self.x[0].abs() <= SERIES_BOUND {
            let s = self.sinh();
            let c = (1.0 + s.sqr()).sqrt();
            return (s, c);
        }
        let ea = self.exp();
        let inv_ea = ea.recip();
        ((ea - inv_ea).mul_pwr2(0.5), (ea + inv_ea).mul_pwr2(0.5))
    }

    pub fn asinh(self) -> Self {
        if self.is_negative() {
            return -(-self).asinh();
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        (self + (self.sqr() + 1.0).sqrt()).ln()
    }

    pub fn acosh(self) -> Self {
        if self < 1.0 {
            tracing::error!(value = ?self, "acosh: argument below one");
            return Self::NAN;
        }
        (self + (self.sqr() - 1.0).sqrt()).ln()
    }

    pub fn atanh(self) -> Self {
        if self.abs() >= 1.0 {
            tracing::error!(value = ?self, "atanh: argument out of domain");
            return Self::NAN;
        }
        ((1.0 + self) / (1.0 - self)).ln().mul_pwr2(0.5)
    }
}
