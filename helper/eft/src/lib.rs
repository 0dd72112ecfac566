//! Error-free transformations on native doubles.
//!
//! Every function returns a rounded result together with its exact rounding error, so
//! that `result + error` equals the mathematical value for all finite inputs whose result
//! does not overflow. Only round-to-nearest is assumed.

mod base;
mod renorm;

pub use self::base::Double;
pub use self::renorm::renormalize;

/// `2^27 + 1`
pub const SPLITTER: f64 = 134217729.0;
/// `2^996`
pub const SPLIT_THRESH: f64 = 6.69692879491417e+299;
/// `2^-28`
const SPLIT_SCALE_DOWN: f64 = 3.7252902984619140625e-09;
/// `2^28`
const SPLIT_SCALE_UP: f64 = 268435456.0;

/// Computes `fl(a + b)` and `err(a + b)`.
#[inline(always)]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Computes `fl(a + b)` and `err(a + b)`. Assumes `|a| >= |b|`.
#[inline(always)]
pub fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// Computes `fl(a - b)` and `err(a - b)`.
#[inline(always)]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let s = a - b;
    let bb = s - a;
    let err = (a - (s - bb)) - (b + bb);
    (s, err)
}

/// Veltkamp split of `a` into two halves of at most 26 significant bits each.
///
/// Inputs beyond `2^996` are scaled down by `2^-28` first so that `SPLITTER * a`
/// cannot overflow.
#[inline(always)]
pub fn split(a: f64) -> (f64, f64) {
    if !(-SPLIT_THRESH..=SPLIT_THRESH).contains(&a) {
        let a = a * SPLIT_SCALE_DOWN;
        let temp = SPLITTER * a;
        let hi = temp - (temp - a);
        let lo = a - hi;
        (hi * SPLIT_SCALE_UP, lo * SPLIT_SCALE_UP)
    } else {
        let temp = SPLITTER * a;
        let hi = temp - (temp - a);
        (hi, a - hi)
    }
}

/// Computes `fl(a * b)` and `err(a * b)` with two splits.
#[inline(always)]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let err = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, err)
}

/// Computes `fl(a * b)` and `err(a * b)` with a fused multiply-add.
#[inline(always)]
pub fn two_prod_fma(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

/// Computes `fl(a * a)` and `err(a * a)`. One split cheaper than [`two_prod`].
#[inline(always)]
pub fn two_sqr(a: f64) -> (f64, f64) {
    let p = a * a;
    let (hi, lo) = split(a);
    let err = ((hi * hi - p) + 2.0 * hi * lo) + lo * lo;
    (p, err)
}

#[inline(always)]
pub fn two_sqr_fma(a: f64) -> (f64, f64) {
    let p = a * a;
    (p, a.mul_add(a, -p))
}

/// `2^exp` for `exp` in the normal range.
#[inline(always)]
const fn pow2(exp: i32) -> f64 {
    debug_assert!(exp >= -1022 && exp <= 1023);
    f64::from_bits(((exp + 1023) as u64) << Double::PHYSICAL_SIGNIFICAND_SIZE)
}

/// Computes `a * 2^exp`. Exact unless the result leaves the normal range.
pub fn ldexp(mut a: f64, mut exp: i32) -> f64 {
    while exp > 1023 {
        a *= pow2(1023);
        exp -= 1023;
        if !a.is_finite() {
            return a;
        }
    }
    while exp < -1022 {
        a *= pow2(-1022);
        exp += 1022;
        if a == 0.0 {
            return a;
        }
    }
    a * pow2(exp)
}

/// Nearest integer, ties toward positive infinity.
#[inline(always)]
pub fn nint(d: f64) -> f64 {
    if d == d.floor() { d } else { (d + 0.5).floor() }
}

/// Integer part, rounding toward zero.
#[inline(always)]
pub fn aint(d: f64) -> f64 {
    if d >= 0.0 { d.floor() } else { d.ceil() }
}
