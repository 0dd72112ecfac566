use dd_double::{DDouble, RawAdjust, RawFormatOptions, RawNotation};
use expect_test::expect;

fn sci(precision: usize) -> RawFormatOptions {
    RawFormatOptions::default()
        .with_precision(precision)
        .with_notation(RawNotation::Scientific)
}

fn fixed(precision: usize) -> RawFormatOptions {
    RawFormatOptions::default()
        .with_precision(precision)
        .with_notation(RawNotation::Fixed)
}

/// `|a - b|` measured in units of the `digits`-th significant digit of `b`.
fn units_apart(a: DDouble, b: DDouble, digits: i32) -> f64 {
    let e = b.abs().log10().floor().hi() as i32;
    let unit = DDouble::from(10.0).powi(e + 1 - digits);
    ((a - b) / unit).abs().hi()
}

#[test]
fn maximum_magnitude() {
    let max = DDouble::MAX;
    expect!["1.7976931348623158e+308"].assert_eq(&max.format(&sci(16).normalize()));
    expect!["1.79769313486231580793728971405e+308"]
        .assert_eq(&max.format(&sci(29).normalize()));
}

#[test]
fn maximum_magnitude_parses_back() {
    for s in ["1.7976931349e+308", "-1.7976931349e+308", "2e+308"] {
        assert_eq!(s.parse::<DDouble>().unwrap().abs(), DDouble::MAX, "{s}");
    }
    assert!("1.799e+308".parse::<DDouble>().unwrap().is_infinite());
}

#[test]
fn pi_at_huge_exponents() {
    let p = DDouble::PI * DDouble::from(10.0).powi(290);
    for i in 0..=17 {
        let x = p * DDouble::from(10.0).powi(i);
        let expected = format!("3.141592653589793238462643e+{}", 290 + i);
        assert_eq!(x.format(&sci(24).normalize()), expected);
    }
    let tiny = DDouble::PI / DDouble::from(10.0).powi(295);
    assert_eq!(
        tiny.format(&sci(24).normalize()),
        "3.141592653589793238462643e-295"
    );
}

#[test]
fn round_trips() {
    let ten = DDouble::from(10.0);
    let mut values = vec![
        DDouble::PI,
        DDouble::E,
        -DDouble::LN_2,
        DDouble::ONE / 3.0,
        DDouble::SAFE_MAX,
        DDouble::MAX,
        -DDouble::MAX,
        DDouble::PI * ten.powi(-250),
        DDouble::E * ten.powi(299),
    ];
    for k in [1, 5, 17, 28, 100] {
        let p = ten.powi(k);
        values.push(p - p * 1e-25);
    }

    for x in values {
        for p in [10, 20, 28] {
            let s = x.format(&sci(p).normalize());
            let back: DDouble = s.parse().unwrap();
            assert!(units_apart(back, x, p as i32 + 1) <= 1.0, "{x:?} -> {s}");
        }
    }
}

#[test]
fn fixed_large_magnitudes() {
    let x = DDouble::from(10.0).powi(30);
    expect!["1000000000000000000000000000000"].assert_eq(&x.format(&fixed(0).normalize()));
    expect!["1000000000000000000000000000000.00"].assert_eq(&x.format(&fixed(2).normalize()));

    let y = DDouble::from(123456789.0) * DDouble::from(10.0).powi(20) + 0.25;
    expect!["12345678900000000000000000000.25"].assert_eq(&y.format(&fixed(2).normalize()));
}

#[test]
fn fixed_subnormal() {
    let x = DDouble::from(1e-310);
    assert_eq!(format!("{x:.2}"), "0.00");
    assert_eq!(format!("{:.0}", -x), "-0");
    expect!["1.0000000000e-310"].assert_eq(&x.format(&sci(10).normalize()));
}

#[test]
fn display_defaults() {
    expect!["5.0000000000000000000000000000000e-01"].assert_eq(&DDouble::from(0.5).to_string());
    expect!["-2.50"].assert_eq(&format!("{:.2}", DDouble::from(-2.5)));
    expect!["0.1000000000000000000000000000000"]
        .assert_eq(&format!("{:.31}", "0.1".parse::<DDouble>().unwrap()));
}

#[test]
fn options_from_json() {
    let raw: RawFormatOptions =
        serde_json::from_str(r#"{"precision": 5, "notation": "fixed", "showPos": true}"#).unwrap();
    assert_eq!(DDouble::PI.format(&raw.normalize()), "+3.14159");

    let raw: RawFormatOptions = serde_json::from_str(
        r#"{"precision": 2, "width": 10, "fill": "_", "adjust": "internal", "uppercase": true}"#,
    )
    .unwrap();
    assert_eq!((-DDouble::E).format(&raw.normalize()), "-_2.72E+00");

    let raw = fixed(1).with_width(6).with_adjust(RawAdjust::Left);
    assert_eq!(DDouble::from(0.25).format(&raw.normalize()), "0.3   ");
}

#[test]
fn malformed_strings() {
    for s in ["", "  ", ".", "+-1", "1-", "1.2.3", "1e", "1e+x", "12a"] {
        assert!(s.parse::<DDouble>().is_err(), "{s:?}");
        assert!(DDouble::from_decimal(s).is_nan());
    }
    assert_eq!("  42 trailing".parse::<DDouble>().unwrap(), DDouble::from(42.0));
}
