use crate::errors::ParseError;
use crate::{Real, powi};

/// `r * 10^e`. Beyond `10^±300` the power is applied in two steps around a `2^∓53` shift,
/// so neither the power of ten nor the intermediate product leaves the normal range.
pub fn mul_pow10<T: Real>(r: T, e: i32) -> T {
    let ten = T::from_f64(10.0);
    let scale = |r: T, e: i32| {
        if e >= 0 {
            r * powi(ten, e)
        } else {
            r / powi(ten, -e)
        }
    };
    if e > 300 {
        scale(scale(r.ldexp(-53), 300), e - 300).ldexp(53)
    } else if e < -300 {
        scale(scale(r.ldexp(53), -300), e + 300).ldexp(-53)
    } else {
        scale(r, e)
    }
}

/// Parses a decimal literal: an optional sign, digits with at most one `.`, and an
/// optional `e`/`E` exponent that must end the input. Surrounding whitespace is ignored
/// and interior whitespace ends the literal.
pub fn parse<T: Real>(s: &str) -> Result<T, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut r = T::ZERO;
    let mut negative = None;
    let mut point = None;
    let mut nd: i32 = 0;
    let mut e: i32 = 0;

    for (pos, ch) in s.char_indices() {
        match ch {
            '0'..='9' => {
                r = r * 10.0 + f64::from(ch as u8 - b'0');
                nd += 1;
            }
            '.' => {
                if point.is_some() {
                    return Err(ParseError::DuplicatePoint { pos });
                }
                point = Some(nd);
            }
            '+' | '-' => {
                if negative.is_some() || nd > 0 {
                    return Err(ParseError::MisplacedSign { pos });
                }
                negative = Some(ch == '-');
            }
            'e' | 'E' => {
                let exponent = &s[pos + 1..];
                e = exponent
                    .parse()
                    .map_err(|_| ParseError::InvalidExponent {
                        exponent: exponent.to_string(),
                    })?;
                break;
            }
            ch if ch.is_whitespace() => break,
            ch => return Err(ParseError::UnexpectedChar { ch, pos }),
        }
    }

    if nd == 0 {
        return Err(ParseError::NoDigits);
    }
    if let Some(point) = point {
        e = e.saturating_sub(nd - point);
    }
    if e != 0 && r.is_finite() {
        let digits = r;
        r = mul_pow10(r, e);
        // The largest finite value may print rounded up past itself: accept anything within
        // one unit of the last digit of its scaled form.
        if r.is_infinite() {
            let limit = mul_pow10(T::MAX.ldexp(-53), -e).ldexp(53);
            if limit >= T::ONE && (digits - limit).hi() <= 1.0 {
                r = T::MAX;
            }
        }
    }
    Ok(if negative == Some(true) { -r } else { r })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse::<f64>("42"), Ok(42.0));
        assert_eq!(parse::<f64>("  -1.5  "), Ok(-1.5));
        assert_eq!(parse::<f64>("+.25"), Ok(0.25));
        assert_eq!(parse::<f64>("2."), Ok(2.0));
        assert_eq!(parse::<f64>("25e-2"), Ok(0.25));
        assert_eq!(parse::<f64>("1.5E+3"), Ok(1500.0));
        assert_eq!(parse::<f64>("12 junk"), Ok(12.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse::<f64>(""), Err(ParseError::Empty));
        assert_eq!(parse::<f64>("   "), Err(ParseError::Empty));
        assert_eq!(parse::<f64>("-."), Err(ParseError::NoDigits));
        assert_eq!(
            parse::<f64>("1.2.3"),
            Err(ParseError::DuplicatePoint { pos: 3 })
        );
        assert_eq!(
            parse::<f64>("--1"),
            Err(ParseError::MisplacedSign { pos: 1 })
        );
        assert_eq!(
            parse::<f64>("1-"),
            Err(ParseError::MisplacedSign { pos: 1 })
        );
        assert_eq!(
            parse::<f64>("1x"),
            Err(ParseError::UnexpectedChar { ch: 'x', pos: 1 })
        );
        assert_eq!(
            parse::<f64>("1e"),
            Err(ParseError::InvalidExponent {
                exponent: String::new()
            })
        );
        assert_eq!(
            parse::<f64>("1e5x"),
            Err(ParseError::InvalidExponent {
                exponent: "5x".to_string()
            })
        );
    }

    #[test]
    fn largest_value_rounded_up() {
        assert_eq!(parse::<f64>("1.7976931349e308"), Ok(f64::MAX));
        assert_eq!(parse::<f64>("-17976931349e298"), Ok(-f64::MAX));
        assert_eq!(parse::<f64>("2e308"), Ok(f64::MAX));
        assert_eq!(parse::<f64>("1.7976931350e308"), Ok(f64::INFINITY));
        assert_eq!(parse::<f64>("3e308"), Ok(f64::INFINITY));
        assert_eq!(parse::<f64>("1e400"), Ok(f64::INFINITY));
    }

    #[test]
    fn staged_powers_of_ten() {
        assert_eq!(mul_pow10(1.0f64, 0), 1.0);
        assert_eq!(mul_pow10(3.0f64, 2), 300.0);
        let big = mul_pow10(1.0f64, 305);
        assert!((big / 1e305 - 1.0).abs() < 1e-14);
        let small = mul_pow10(1.0f64, -305);
        assert!((small / 1e-305 - 1.0).abs() < 1e-14);
    }
}
