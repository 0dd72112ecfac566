use dd_double::DDouble;
use proptest::prelude::*;

const EPS: f64 = DDouble::EPSILON;

fn rel_err(a: DDouble, b: DDouble) -> f64 {
    ((a - b) / b).abs().hi()
}

proptest! {
    #[test]
    fn sqrt_squares_back(x in 0f64..1e30, f in -1.0f64..1.0) {
        let x = DDouble::from_pair(x, x * f * 1e-17);
        prop_assume!(!x.is_zero());
        let r = x.sqrt();
        prop_assert!(rel_err(r.sqr(), x) < 16.0 * EPS);
    }

    #[test]
    fn exp_inverts_log(x in 1e-10f64..1e10) {
        let x = DDouble::from(x);
        prop_assert!(rel_err(x.ln().exp(), x) < 128.0 * EPS);
    }

    #[test]
    fn log_inverts_exp(y in -600f64..600.0) {
        let y = DDouble::from(y);
        let err = (y.exp().ln() - y).abs().hi();
        prop_assert!(err <= 64.0 * EPS * y.hi().abs().max(1.0));
    }

    #[test]
    fn sin_cos_lie_on_the_unit_circle(x in -100f64..100.0) {
        let (s, c) = DDouble::from(x).sin_cos();
        let one = s.sqr() + c.sqr();
        prop_assert!((one - 1.0).abs().hi() < 16.0 * EPS);
    }

    #[test]
    fn atan2_recovers_the_angle(x in -3.0f64..3.0) {
        let x = DDouble::from(x);
        let (s, c) = x.sin_cos();
        let back = s.atan2(c);
        prop_assert!((back - x).abs().hi() < 32.0 * EPS);
    }
}

#[test]
fn negative_and_zero_domains() {
    assert!(DDouble::from(-2.0).sqrt().is_nan());
    assert!(DDouble::from(-2.0).ln().is_nan());
    assert!(DDouble::from(-2.0).log10().is_nan());
    assert!(DDouble::NAN.sin().is_nan());
    assert!(DDouble::NAN.sqrt().is_nan());
}

#[test]
fn nan_propagates_through_expressions() {
    let bad = DDouble::from(-1.0).sqrt();
    let r = (bad * 2.0 + DDouble::ONE).exp() / 3.0;
    assert!(r.is_nan());
}
