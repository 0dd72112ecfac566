use crate::{Real, powi};

/// A decimal significand `d0.d1d2… × 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    /// Most significant first, each in `0..=9`.
    pub digits: Vec<u8>,
    pub exponent: i32,
}

/// Restores every digit but the first to `0..=9`, moving the excess into the digit
/// before it. Digits re-derived from finite precision residues may drift slightly out of
/// range; the first digit absorbs whatever is left.
pub fn propagate_carries(digits: &mut [i32]) {
    for i in (1..digits.len()).rev() {
        let carry = digits[i].div_euclid(10);
        digits[i] = digits[i].rem_euclid(10);
        digits[i - 1] += carry;
    }
}

/// Rounds half-up to the first `keep` digits, using `digits[keep]` as the rounding digit.
///
/// Returns `true` when the carry ran past the first digit. In that case a leading `1` has
/// been inserted and `keep + 1` digits remain, so the caller must bump its exponent.
/// Nothing happens when there is no digit at `keep`.
pub fn round_half_up(digits: &mut Vec<u8>, keep: usize) -> bool {
    let Some(&next) = digits.get(keep) else {
        return false;
    };
    digits.truncate(keep);
    if next < 5 {
        return false;
    }
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, 1);
    true
}

/// Extracts the first `n` significant decimal digits of `|a|`, rounded half-up.
pub fn to_digits<T: Real>(a: T, n: usize) -> Digits {
    let n = n.max(1);
    if a.is_zero() {
        return Digits {
            digits: vec![0; n],
            exponent: 0,
        };
    }

    let ten = T::from_f64(10.0);
    let mut r = a.abs();
    let mut e = a.hi().abs().log10().floor() as i32;

    r = if e < -300 {
        r * powi(ten, 300) * powi(ten, -(e + 300))
    } else if e > 300 {
        (r.ldexp(-53) / powi(ten, e)).ldexp(53)
    } else if e > 0 {
        r / powi(ten, e)
    } else {
        r * powi(ten, -e)
    };

    if r >= ten {
        r = r / 10.0;
        e += 1;
    } else if r < T::ONE {
        r = r * 10.0;
        e -= 1;
    }
    if r >= ten || r < T::ONE {
        tracing::error!(?a, "to_digits: can't compute exponent");
    }

    let mut raw = Vec::with_capacity(n + 1);
    for _ in 0..=n {
        let d = r.hi().trunc();
        r = (r - d) * 10.0;
        raw.push(d as i32);
    }

    propagate_carries(&mut raw);
    if raw[0] > 9 {
        raw[0] -= 10;
        raw.insert(0, 1);
        raw.pop();
        e += 1;
    }
    if raw[0] <= 0 {
        tracing::error!(?a, "to_digits: non-positive leading digit");
    }

    let mut digits: Vec<u8> = raw.into_iter().map(|d| d.clamp(0, 9) as u8).collect();
    if round_half_up(&mut digits, n) {
        e += 1;
        digits.truncate(n);
    }

    Digits {
        digits,
        exponent: e,
    }
}
