use crate::{DoubleDouble, Policy};

impl<P: Policy> DoubleDouble<P> {
    /// Square root by Karp's trick: one compensated Newton step from the native root.
    ///
    /// With `x ≈ 1/√a`, the result is `a·x + (a - (a·x)²)·x/2`, where only the leading
    /// limbs of `a·x` and of the correction are needed.
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        if self.is_negative() {
            tracing::error!(value = ?self, "sqrt: negative argument");
            return Self::NAN;
        }
        if self.is_infinite() {
            return self;
        }

        let x = 1.0 / self.x[0].sqrt();
        let ax = self.x[0] * x;
        let correction = (self - Self::sqr_f64(ax)).x[0] * (x * 0.5);
        Self::add_f64_f64(ax, correction)
    }

    /// The `n`-th root. Even roots of negative values and `n <= 0` are domain errors.
    pub fn nroot(self, n: i32) -> Self {
        if n <= 0 {
            tracing::error!(n, "nroot: non-positive root index");
            return Self::NAN;
        }
        if n % 2 == 0 && self.is_negative() {
            tracing::error!(value = ?self, n, "nroot: negative argument for an even root");
            return Self::NAN;
        }
        match n {
            1 => return self,
            2 => return self.sqrt(),
            _ => {}
        }
        if self.is_zero() {
            return Self::ZERO;
        }

        // Newton's step on a^(-1/n) converges better than on a^(1/n).
        let r = self.abs();
        let mut x = Self::from((-r.x[0].ln() / n as f64).exp());
        x += x * (1.0 - r * x.powi(n)) / n as f64;
        if self.is_negative() {
            x = -x;
        }
        x.recip()
    }

    /// `self^n` by repeated squaring. `powi(0, 0)` is one.
    pub fn powi(self, n: i32) -> Self {
        dd_real::powi(self, n)
    }

    /// `self^b = exp(b·ln(self))`, defined for positive `self`.
    pub fn powf(self, b: Self) -> Self {
        (b * self.ln()).exp()
    }
}
