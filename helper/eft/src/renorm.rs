use crate::{quick_two_sum, two_sum};

/// Renormalizes an `N`-limb expansion in place of its index order.
///
/// A backward sweep accumulates the exact sum from the tail, leaving the rounding errors
/// behind it; a forward sweep then compresses those errors so that each limb is at most
/// half an ulp of the one before it. Limbs that become zero are moved to the tail.
/// The limbs need not be ordered by magnitude on input.
pub fn renormalize<const N: usize>(limbs: [f64; N]) -> [f64; N] {
    if N < 2 {
        return limbs;
    }
    if !limbs[0].is_finite() {
        return [limbs[0]; N];
    }

    let mut t = [0.0; N];
    let mut s = limbs[N - 1];
    for i in (0..N - 1).rev() {
        let (hi, lo) = two_sum(limbs[i], s);
        s = hi;
        t[i + 1] = lo;
    }
    t[0] = s;

    let mut out = [0.0; N];
    let mut k = 0;
    let mut s = t[0];
    for &limb in &t[1..] {
        let (hi, lo) = quick_two_sum(s, limb);
        if lo != 0.0 {
            out[k] = hi;
            k += 1;
            s = lo;
        } else {
            s = hi;
        }
    }
    out[k] = s;
    out
}
