//! Numeric algorithms shared by every limb count.
//!
//! [`Real`] is the arithmetic surface an expansion type offers, [`Transcendental`] adds the
//! elementary functions. Integer powers, polynomial evaluation and root finding, decimal
//! digit extraction, formatting and parsing are written once against these traits and work
//! for native `f64` as well as wider expansions.

mod digits;
mod errors;
mod format;
mod parse;
mod poly;
mod pow;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use self::digits::{Digits, propagate_carries, round_half_up, to_digits};
pub use self::errors::ParseError;
pub use self::format::{append_exponent, format, pad, relocate_point};
pub use self::parse::{mul_pow10, parse};
pub use self::poly::{DEFAULT_MAX_ITER, polyeval, polyroot};
pub use self::pow::powi;

pub use dd_config::{FormatFlags, FormatOptions, RawAdjust, RawFormatOptions, RawNotation};

pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Decimal digits carried reliably.
    const DIGITS: usize;
    /// Relative spacing of values around one.
    const EPSILON: f64;
    const ZERO: Self;
    const ONE: Self;
    const NAN: Self;
    /// The largest finite value.
    const MAX: Self;

    fn from_f64(a: f64) -> Self;

    /// The leading limb, a native approximation of the whole value.
    fn hi(self) -> f64;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    fn sqr(self) -> Self;

    /// Exact multiplication by `2^exp`.
    fn ldexp(self, exp: i32) -> Self;

    #[inline(always)]
    fn is_nan(self) -> bool {
        self.hi().is_nan()
    }

    #[inline(always)]
    fn is_infinite(self) -> bool {
        self.hi().is_infinite()
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        self.hi().is_finite()
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        self.hi() == 0.0
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self.hi() < 0.0
    }
}

pub trait Transcendental: Real {
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, x: Self) -> Self;
}

impl Real for f64 {
    const DIGITS: usize = 16;
    const EPSILON: f64 = f64::EPSILON;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAN: Self = f64::NAN;
    const MAX: Self = f64::MAX;

    #[inline(always)]
    fn from_f64(a: f64) -> Self {
        a
    }

    #[inline(always)]
    fn hi(self) -> f64 {
        self
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        f64::trunc(self)
    }

    #[inline(always)]
    fn sqr(self) -> Self {
        self * self
    }

    #[inline(always)]
    fn ldexp(self, exp: i32) -> Self {
        dd_eft::ldexp(self, exp)
    }
}

impl Transcendental for f64 {
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn log10(self) -> Self {
        f64::log10(self)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn atan2(self, x: Self) -> Self {
        f64::atan2(self, x)
    }
}
