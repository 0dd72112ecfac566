use dd_config::FormatOptions;

use crate::digits::{Digits, round_half_up, to_digits};
use crate::Transcendental;

/// Digits extracted for fixed notation beyond the rounding position, comfortably past the
/// accuracy of any expansion so that the rounding digit is not itself rounded.
const FIXED_DIGITS: usize = 60;

#[inline(always)]
fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

fn push_digits(s: &mut String, digits: &[u8]) {
    s.extend(digits.iter().map(|&d| digit_char(d)));
}

fn push_zeros(s: &mut String, n: usize) {
    s.extend(std::iter::repeat_n('0', n));
}

/// Appends a signed exponent with at least two digits, `+05`, `-12`, `+308`.
pub fn append_exponent(s: &mut String, e: i32) {
    s.push(if e < 0 { '-' } else { '+' });
    s.push_str(&format!("{:02}", e.unsigned_abs()));
}

/// Pads `s` to the configured width. `signed` tells whether `s` starts with a sign
/// that internal adjustment must keep in front.
pub fn pad(s: &mut String, opts: &FormatOptions, signed: bool) {
    let len = s.chars().count();
    let width = *opts.width();
    if len >= width {
        return;
    }
    let fill: String = std::iter::repeat_n(*opts.fill(), width - len).collect();
    if opts.internal() {
        s.insert_str(if signed { 1 } else { 0 }, &fill);
    } else if opts.left() {
        s.push_str(&fill);
    } else {
        s.insert_str(0, &fill);
    }
}

/// Moves the decimal point one place to the left. Returns `false` if there is no point
/// that can move.
pub fn relocate_point(s: &mut String) -> bool {
    let Some(i) = s.find('.').filter(|&i| i > 0) else {
        return false;
    };
    let Some(prev) = s[..i].chars().next_back() else {
        return false;
    };
    s.replace_range(i - prev.len_utf8()..=i, &format!(".{prev}"));
    true
}

fn misplaced_point(s: &str, hi: f64) -> bool {
    s.parse::<f64>().is_ok_and(|v| (v / hi).abs() > 3.0)
}

fn write_fixed<T: Transcendental>(s: &mut String, a: T, precision: usize) {
    let abs = a.abs();
    if precision == 0 && abs < T::ONE {
        s.push(if abs >= T::from_f64(0.5) { '1' } else { '0' });
        return;
    }

    // The estimate may be off by one in either direction; the digits decide below.
    let off = (a.hi().abs().log10().floor() as i32).saturating_add(1);
    let d = (precision as i32).saturating_add(off);
    if d < -1 {
        s.push_str("0.");
        push_zeros(s, precision);
        return;
    }

    let Digits {
        mut digits,
        exponent,
    } = to_digits(a, (d + 2).max(0) as usize + FIXED_DIGITS);
    let mut off = exponent + 1;
    let d = precision as i32 + off;
    if d < 0 {
        s.push_str("0.");
        push_zeros(s, precision);
        return;
    }
    if round_half_up(&mut digits, d as usize) {
        off += 1;
    }
    let d = (precision as i32 + off) as usize;

    if off > 0 {
        let off = off as usize;
        push_digits(s, &digits[..off]);
        if precision > 0 {
            s.push('.');
            push_digits(s, &digits[off..d]);
        }
    } else {
        s.push_str("0.");
        push_zeros(s, off.unsigned_abs() as usize);
        push_digits(s, &digits[..d]);
    }
}

/// Formats `a` according to `opts`.
///
/// Fixed notation prints `precision` digits after the point; scientific notation prints
/// one leading digit, `precision` digits after the point and a signed exponent of at
/// least two digits. NaN carries no sign. Infinity prints as `inf` with no exponent.
pub fn format<T: Transcendental>(a: T, opts: &FormatOptions) -> String {
    let precision = *opts.precision();
    let fixed = opts.fixed();
    let mut s = String::new();
    let mut signed = true;
    let mut exponent = 0;

    if a.is_nan() {
        s.push_str(if opts.uppercase() { "NAN" } else { "nan" });
        signed = false;
    } else {
        if a.is_negative() {
            s.push('-');
        } else if opts.show_pos() {
            s.push('+');
        } else {
            signed = false;
        }

        if a.is_infinite() {
            s.push_str(if opts.uppercase() { "INF" } else { "inf" });
        } else if a.is_zero() {
            s.push('0');
            if precision > 0 {
                s.push('.');
                push_zeros(&mut s, precision);
            }
        } else if fixed {
            write_fixed(&mut s, a, precision);
            if precision > 0 && misplaced_point(&s, a.hi()) {
                tracing::warn!(?a, %s, "format: decimal point misplaced, moving it left");
                relocate_point(&mut s);
                if misplaced_point(&s, a.hi()) {
                    tracing::error!(?a, %s, "format: re-rounding unsuccessful");
                }
            }
        } else {
            let Digits { digits, exponent: e } = to_digits(a, precision + 1);
            exponent = e;
            s.push(digit_char(digits[0]));
            if precision > 0 {
                s.push('.');
                push_digits(&mut s, &digits[1..]);
            }
        }

        if !fixed && !a.is_infinite() {
            s.push(if opts.uppercase() { 'E' } else { 'e' });
            append_exponent(&mut s, exponent);
        }
    }

    pad(&mut s, opts, signed);
    s
}
