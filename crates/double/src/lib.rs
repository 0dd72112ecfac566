//! Double-double arithmetic: a value is the unevaluated sum `hi + lo` of two doubles with
//! `|lo| <= ulp(hi) / 2`, giving about 106 significant bits (31 decimal digits).
//!
//! ```
//! use dd_double::DDouble;
//!
//! let third = DDouble::ONE / 3.0;
//! assert_eq!(format!("{third:.31}"), "0.3333333333333333333333333333333");
//! ```

mod arith;
mod cmp;
mod consts;
mod exp_log;
mod fmt;
mod hyper;
mod policy;
mod random;
mod roots;
mod round;
mod ser;
mod trig;

use std::marker::PhantomData;

use dd_eft::{quick_two_sum, renormalize, two_sum};

pub use self::policy::{Accurate, Fused, Policy, Sloppy};
pub use dd_real::{
    DEFAULT_MAX_ITER, FormatFlags, FormatOptions, ParseError, RawAdjust, RawFormatOptions,
    RawNotation, Real, Transcendental, polyeval, polyroot,
};

/// An extended precision value under the arithmetic policy `P`.
#[derive(Clone, Copy, Default)]
pub struct DoubleDouble<P: Policy = Sloppy> {
    x: [f64; 2],
    _policy: PhantomData<P>,
}

pub type DDouble = DoubleDouble<Sloppy>;
pub type AccurateDDouble = DoubleDouble<Accurate>;
pub type FusedDDouble = DoubleDouble<Fused>;

impl<P: Policy> DoubleDouble<P> {
    /// Builds a value from limbs that are already in normal form.
    #[inline(always)]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self {
            x: [hi, lo],
            _policy: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) const fn splat(a: f64) -> Self {
        Self::new(a, a)
    }

    /// Builds a value from the exact sum `s + e`, where `|s| >= |e|`. A non-finite
    /// leading limb is mirrored into both limbs.
    #[inline(always)]
    pub(crate) fn normalized(s: f64, e: f64) -> Self {
        if !s.is_finite() {
            return Self::splat(s);
        }
        let (hi, lo) = quick_two_sum(s, e);
        if hi.is_finite() {
            Self::new(hi, lo)
        } else {
            Self::splat(hi)
        }
    }

    /// Builds a value from two arbitrary doubles, renormalizing their sum.
    pub fn from_pair(hi: f64, lo: f64) -> Self {
        if !hi.is_finite() || !lo.is_finite() {
            return Self::splat(hi + lo);
        }
        let (s, e) = two_sum(hi, lo);
        Self::normalized(s, e)
    }

    /// Collapses an expansion of any length into two limbs.
    pub fn from_expansion<const N: usize>(limbs: [f64; N]) -> Self {
        let limbs = renormalize(limbs);
        let Some((&hi, rest)) = limbs.split_first() else {
            return Self::ZERO;
        };
        let lo = rest.iter().rev().fold(0.0, |acc, &x| acc + x);
        Self::normalized(hi, lo)
    }

    #[inline(always)]
    pub const fn hi(self) -> f64 {
        self.x[0]
    }

    #[inline(always)]
    pub const fn lo(self) -> f64 {
        self.x[1]
    }

    #[inline(always)]
    pub const fn limbs(self) -> [f64; 2] {
        self.x
    }

    /// Reinterprets the value under another arithmetic policy. The limbs are unchanged.
    #[inline(always)]
    pub const fn with_policy<Q: Policy>(self) -> DoubleDouble<Q> {
        DoubleDouble::new(self.x[0], self.x[1])
    }

    #[inline(always)]
    pub const fn to_f64(self) -> f64 {
        self.x[0]
    }

    /// Truncates toward zero and saturates at the bounds of `i64`. NaN maps to zero, as
    /// with `as` casts.
    pub fn to_i64(self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        if self.is_infinite() {
            return if self.is_positive() { i64::MAX } else { i64::MIN };
        }
        let t = self.trunc();
        let v = (t.x[0] as i128).saturating_add(t.x[1] as i128);
        v.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    #[inline(always)]
    pub const fn is_nan(self) -> bool {
        self.x[0].is_nan()
    }

    #[inline(always)]
    pub const fn is_infinite(self) -> bool {
        self.x[0].is_infinite()
    }

    #[inline(always)]
    pub const fn is_finite(self) -> bool {
        self.x[0].is_finite()
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.x[0] == 0.0
    }

    #[inline(always)]
    pub const fn is_one(self) -> bool {
        self.x[0] == 1.0 && self.x[1] == 0.0
    }

    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.x[0] > 0.0
    }

    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.x[0] < 0.0
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        if self.is_negative() { -self } else { self }
    }

    /// Exact multiplication by a power of two given as a double.
    #[inline(always)]
    pub fn mul_pwr2(self, b: f64) -> Self {
        Self::new(self.x[0] * b, self.x[1] * b)
    }

    /// Exact multiplication by `2^exp`.
    #[inline(always)]
    pub fn ldexp(self, exp: i32) -> Self {
        Self::new(dd_eft::ldexp(self.x[0], exp), dd_eft::ldexp(self.x[1], exp))
    }
}

impl<P: Policy> From<f64> for DoubleDouble<P> {
    #[inline(always)]
    fn from(a: f64) -> Self {
        Self::new(a, if a.is_finite() { 0.0 } else { a })
    }
}

impl<P: Policy> From<i32> for DoubleDouble<P> {
    fn from(a: i32) -> Self {
        Self::new(a as f64, 0.0)
    }
}

impl<P: Policy> From<u32> for DoubleDouble<P> {
    fn from(a: u32) -> Self {
        Self::new(a as f64, 0.0)
    }
}

impl<P: Policy> From<i64> for DoubleDouble<P> {
    fn from(a: i64) -> Self {
        let hi = a as f64;
        let lo = (a as i128 - hi as i128) as f64;
        Self::normalized(hi, lo)
    }
}

impl<P: Policy> From<u64> for DoubleDouble<P> {
    fn from(a: u64) -> Self {
        let hi = a as f64;
        let lo = (a as i128 - hi as i128) as f64;
        Self::normalized(hi, lo)
    }
}

impl<P: Policy> From<i128> for DoubleDouble<P> {
    /// Rounds to the nearest representable value when `a` needs more than 106 bits.
    fn from(a: i128) -> Self {
        const TWO_32: f64 = 4294967296.0;
        let top = (a >> 96) as i32 as f64;
        let mid = (a >> 64) as u32 as f64;
        let low = (a >> 32) as u32 as f64;
        let bottom = a as u32 as f64;
        Self::from_expansion([
            top * TWO_32 * TWO_32 * TWO_32,
            mid * TWO_32 * TWO_32,
            low * TWO_32,
            bottom,
        ])
    }
}

impl<P: Policy> std::fmt::Debug for DoubleDouble<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DoubleDouble")
            .field(&self.x[0])
            .field(&self.x[1])
            .finish()
    }
}

impl<P: Policy> Real for DoubleDouble<P> {
    const DIGITS: usize = Self::DIGITS;
    const EPSILON: f64 = Self::EPSILON;
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const NAN: Self = Self::NAN;
    const MAX: Self = Self::MAX;

    #[inline(always)]
    fn from_f64(a: f64) -> Self {
        Self::from(a)
    }

    #[inline(always)]
    fn hi(self) -> f64 {
        self.x[0]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        DoubleDouble::abs(self)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        DoubleDouble::floor(self)
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        DoubleDouble::trunc(self)
    }

    #[inline(always)]
    fn sqr(self) -> Self {
        DoubleDouble::sqr(self)
    }

    #[inline(always)]
    fn ldexp(self, exp: i32) -> Self {
        DoubleDouble::ldexp(self, exp)
    }
}

impl<P: Policy> Transcendental for DoubleDouble<P> {
    fn sqrt(self) -> Self {
        DoubleDouble::sqrt(self)
    }

    fn exp(self) -> Self {
        DoubleDouble::exp(self)
    }

    fn ln(self) -> Self {
        DoubleDouble::ln(self)
    }

    fn log10(self) -> Self {
        DoubleDouble::log10(self)
    }

    fn sin(self) -> Self {
        DoubleDouble::sin(self)
    }

    fn cos(self) -> Self {
        DoubleDouble::cos(self)
    }

    fn atan2(self, x: Self) -> Self {
        DoubleDouble::atan2(self, x)
    }
}
