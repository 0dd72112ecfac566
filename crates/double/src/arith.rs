use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use dd_eft::{quick_two_sum, two_diff, two_sum};

use crate::{DoubleDouble, Policy};

impl<P: Policy> DoubleDouble<P> {
    #[inline(always)]
    fn two_prod(a: f64, b: f64) -> (f64, f64) {
        if P::FUSED {
            dd_eft::two_prod_fma(a, b)
        } else {
            dd_eft::two_prod(a, b)
        }
    }

    #[inline(always)]
    fn two_sqr(a: f64) -> (f64, f64) {
        if P::FUSED {
            dd_eft::two_sqr_fma(a)
        } else {
            dd_eft::two_sqr(a)
        }
    }

    /// The exact sum of two doubles.
    #[inline(always)]
    pub fn add_f64_f64(a: f64, b: f64) -> Self {
        let (s, e) = two_sum(a, b);
        Self::normalized(s, e)
    }

    /// The exact product of two doubles.
    #[inline(always)]
    pub fn mul_f64_f64(a: f64, b: f64) -> Self {
        let (p, e) = Self::two_prod(a, b);
        Self::normalized(p, e)
    }

    /// The exact square of a double.
    #[inline(always)]
    pub fn sqr_f64(a: f64) -> Self {
        let (p, e) = Self::two_sqr(a);
        Self::normalized(p, e)
    }

    fn sloppy_add(self, b: Self) -> Self {
        let (s, e) = two_sum(self.x[0], b.x[0]);
        Self::normalized(s, e + (self.x[1] + b.x[1]))
    }

    fn ieee_add(self, b: Self) -> Self {
        let (s1, s2) = two_sum(self.x[0], b.x[0]);
        if !s1.is_finite() {
            return Self::splat(s1);
        }
        let (t1, t2) = two_sum(self.x[1], b.x[1]);
        let (s1, s2) = quick_two_sum(s1, s2 + t1);
        Self::normalized(s1, s2 + t2)
    }

    fn sloppy_sub(self, b: Self) -> Self {
        let (s, e) = two_diff(self.x[0], b.x[0]);
        Self::normalized(s, e + (self.x[1] - b.x[1]))
    }

    fn ieee_sub(self, b: Self) -> Self {
        let (s1, s2) = two_diff(self.x[0], b.x[0]);
        if !s1.is_finite() {
            return Self::splat(s1);
        }
        let (t1, t2) = two_diff(self.x[1], b.x[1]);
        let (s1, s2) = quick_two_sum(s1, s2 + t1);
        Self::normalized(s1, s2 + t2)
    }

    #[inline]
    fn add_dd(self, b: Self) -> Self {
        if P::ACCURATE_ADD {
            self.ieee_add(b)
        } else {
            self.sloppy_add(b)
        }
    }

    #[inline]
    fn sub_dd(self, b: Self) -> Self {
        if P::ACCURATE_ADD {
            self.ieee_sub(b)
        } else {
            self.sloppy_sub(b)
        }
    }

    #[inline]
    fn add_f64(self, b: f64) -> Self {
        let (s1, s2) = two_sum(self.x[0], b);
        Self::normalized(s1, s2 + self.x[1])
    }

    #[inline]
    fn sub_f64(self, b: f64) -> Self {
        let (s1, s2) = two_diff(self.x[0], b);
        Self::normalized(s1, s2 + self.x[1])
    }

    #[inline]
    fn f64_add(a: f64, b: Self) -> Self {
        b.add_f64(a)
    }

    #[inline]
    fn f64_sub(a: f64, b: Self) -> Self {
        let (s1, s2) = two_diff(a, b.x[0]);
        Self::normalized(s1, s2 - b.x[1])
    }

    #[inline]
    fn mul_dd(self, b: Self) -> Self {
        let (p1, p2) = Self::two_prod(self.x[0], b.x[0]);
        Self::normalized(p1, p2 + (self.x[0] * b.x[1] + self.x[1] * b.x[0]))
    }

    #[inline]
    fn mul_f64(self, b: f64) -> Self {
        let (p1, p2) = Self::two_prod(self.x[0], b);
        Self::normalized(p1, p2 + self.x[1] * b)
    }

    #[inline]
    fn f64_mul(a: f64, b: Self) -> Self {
        b.mul_f64(a)
    }

    fn sloppy_div(self, b: Self) -> Self {
        let q1 = self.x[0] / b.x[0];
        let r = b.mul_f64(q1);
        let (s1, s2) = two_diff(self.x[0], r.x[0]);
        let s2 = s2 - r.x[1] + self.x[1];
        let q2 = (s1 + s2) / b.x[0];
        Self::normalized(q1, q2)
    }

    fn accurate_div(self, b: Self) -> Self {
        let q1 = self.x[0] / b.x[0];
        let r = self - b.mul_f64(q1);
        let q2 = r.x[0] / b.x[0];
        let r = r - b.mul_f64(q2);
        let q3 = r.x[0] / b.x[0];
        Self::normalized(q1, q2).add_f64(q3)
    }

    fn div_dd(self, b: Self) -> Self {
        if b.is_infinite() || !self.is_finite() {
            return Self::from(self.x[0] / b.x[0]);
        }
        if P::ACCURATE_DIV {
            self.accurate_div(b)
        } else {
            self.sloppy_div(b)
        }
    }

    fn div_f64(self, b: f64) -> Self {
        if b.is_infinite() || !self.is_finite() {
            return Self::from(self.x[0] / b);
        }
        let q1 = self.x[0] / b;
        let (p1, p2) = Self::two_prod(q1, b);
        let (s, e) = two_diff(self.x[0], p1);
        let e = e + self.x[1] - p2;
        let q2 = (s + e) / b;
        Self::normalized(q1, q2)
    }

    #[inline]
    fn f64_div(a: f64, b: Self) -> Self {
        Self::from(a).div_dd(b)
    }

    pub fn sqr(self) -> Self {
        let (p1, p2) = Self::two_sqr(self.x[0]);
        let p2 = p2 + 2.0 * self.x[0] * self.x[1] + self.x[1] * self.x[1];
        Self::normalized(p1, p2)
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::ONE / self
    }
}

impl<P: Policy> Neg for DoubleDouble<P> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.x[0], -self.x[1])
    }
}

macro_rules! impl_op {
    ($($op: ident),* $(,)?) => {
        paste::paste! {
            $(
                impl<P: Policy> $op for DoubleDouble<P> {
                    type Output = Self;

                    #[inline]
                    fn [<$op:lower>](self, rhs: Self) -> Self {
                        self.[<$op:lower _dd>](rhs)
                    }
                }

                impl<P: Policy> $op<f64> for DoubleDouble<P> {
                    type Output = Self;

                    #[inline]
                    fn [<$op:lower>](self, rhs: f64) -> Self {
                        self.[<$op:lower _f64>](rhs)
                    }
                }

                impl<P: Policy> $op<DoubleDouble<P>> for f64 {
                    type Output = DoubleDouble<P>;

                    #[inline]
                    fn [<$op:lower>](self, rhs: DoubleDouble<P>) -> DoubleDouble<P> {
                        DoubleDouble::[<f64_ $op:lower>](self, rhs)
                    }
                }

                impl<P: Policy> [<$op Assign>] for DoubleDouble<P> {
                    #[inline]
                    fn [<$op:lower _assign>](&mut self, rhs: Self) {
                        *self = self.[<$op:lower _dd>](rhs);
                    }
                }

                impl<P: Policy> [<$op Assign>]<f64> for DoubleDouble<P> {
                    #[inline]
                    fn [<$op:lower _assign>](&mut self, rhs: f64) {
                        *self = self.[<$op:lower _f64>](rhs);
                    }
                }
            )*
        }
    };
}

impl_op!(Add, Sub, Mul, Div);

impl<P: Policy> Sum for DoubleDouble<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: Policy> Product for DoubleDouble<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
