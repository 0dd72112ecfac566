use std::ops::{Rem, RemAssign};

use dd_eft::{nint, quick_two_sum};

use crate::{DoubleDouble, Policy};

impl<P: Policy> DoubleDouble<P> {
    /// Rounds the low limb with `f` once the high limb is already integral.
    #[inline]
    fn round_low(self, f: fn(f64) -> f64) -> Self {
        if !self.is_finite() {
            return self;
        }
        let hi = f(self.x[0]);
        if hi == self.x[0] {
            let (hi, lo) = quick_two_sum(hi, f(self.x[1]));
            Self::new(hi, lo)
        } else {
            Self::new(hi, 0.0)
        }
    }

    pub fn floor(self) -> Self {
        self.round_low(f64::floor)
    }

    pub fn ceil(self) -> Self {
        self.round_low(f64::ceil)
    }

    /// Rounds toward zero.
    pub fn trunc(self) -> Self {
        if self.x[0] >= 0.0 {
            self.floor()
        } else {
            self.ceil()
        }
    }

    /// Rounds to the nearest integer. A tie in the high limb goes the way the low limb
    /// points; an exact tie goes toward positive infinity.
    pub fn round(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        let mut hi = nint(self.x[0]);
        if hi == self.x[0] {
            let (hi, lo) = quick_two_sum(hi, nint(self.x[1]));
            return Self::new(hi, lo);
        }
        if (hi - self.x[0]).abs() == 0.5 && self.x[1] < 0.0 {
            hi -= 1.0;
        }
        Self::new(hi, 0.0)
    }

    /// `a - b·trunc(a/b)`, carrying the sign of `a`.
    pub fn fmod(self, b: Self) -> Self {
        let n = (self / b).trunc();
        self - b * n
    }
}

impl<P: Policy> Rem for DoubleDouble<P> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.fmod(rhs)
    }
}

impl<P: Policy> RemAssign for DoubleDouble<P> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.fmod(rhs);
    }
}
