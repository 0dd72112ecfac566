use dd_eft::Double;

use crate::exp_log::inv_fact;
use crate::{DoubleDouble, Policy};

/// `sin(kπ/16)` for `k = 1..=4`.
const SIN_TABLE: [[f64; 2]; 4] = [
    [1.950903220161282758e-01, -7.991079068461731263e-18],
    [3.826834323650897818e-01, -1.005077269646158761e-17],
    [5.555702330196021776e-01, 4.709410940561676821e-17],
    [7.071067811865475727e-01, -4.833646656726456726e-17],
];

/// `cos(kπ/16)` for `k = 1..=4`.
const COS_TABLE: [[f64; 2]; 4] = [
    [9.807852804032304306e-01, 1.854693999782500573e-17],
    [9.238795325112867385e-01, 1.764504708433667706e-17],
    [8.314696123025452357e-01, 1.407385698472802389e-18],
    [7.071067811865475727e-01, -4.833646656726456726e-17],
];

/// Which of `sin(t)`/`cos(t)` (and with which sign) a function of `t + jπ/2` reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Sin,
    Cos,
    NegSin,
    NegCos,
}

impl Case {
    /// `sin(t + jπ/2)`.
    fn for_sin(j: i32) -> Case {
        match j {
            0 => Case::Sin,
            1 => Case::Cos,
            -1 => Case::NegCos,
            _ => Case::NegSin,
        }
    }

    /// `cos(t + jπ/2)`.
    fn for_cos(j: i32) -> Case {
        match j {
            0 => Case::Cos,
            1 => Case::NegSin,
            -1 => Case::Sin,
            _ => Case::NegCos,
        }
    }

    fn pick<P: Policy>(self, s: DoubleDouble<P>, c: DoubleDouble<P>) -> DoubleDouble<P> {
        match self {
            Case::Sin => s,
            Case::Cos => c,
            Case::NegSin => -s,
            Case::NegCos => -c,
        }
    }

    /// Evaluates only the series the case needs.
    fn taylor<P: Policy>(self, t: DoubleDouble<P>) -> DoubleDouble<P> {
        match self {
            Case::Sin => t.sin_taylor(),
            Case::Cos => t.cos_taylor(),
            Case::NegSin => -t.sin_taylor(),
            Case::NegCos => -t.cos_taylor(),
        }
    }
}

/// A reduced argument `a = 2πz + jπ/2 + kπ/16 + t` with `|t| <= π/32`.
struct Reduced<P: Policy> {
    t: DoubleDouble<P>,
    j: i32,
    k: i32,
}

impl<P: Policy> Reduced<P> {
    /// `(sin, cos)` of `t + kπ/16` by the angle addition formulas.
    fn octant(&self) -> (DoubleDouble<P>, DoubleDouble<P>) {
        let (sin_t, cos_t) = self.t.sin_cos_taylor();
        if self.k == 0 {
            return (sin_t, cos_t);
        }
        let idx = (self.k.unsigned_abs() - 1) as usize;
        let u = DoubleDouble::<P>::new(COS_TABLE[idx][0], COS_TABLE[idx][1]);
        let v = DoubleDouble::<P>::new(SIN_TABLE[idx][0], SIN_TABLE[idx][1]);
        if self.k > 0 {
            (u * sin_t + v * cos_t, u * cos_t - v * sin_t)
        } else {
            (u * sin_t - v * cos_t, u * cos_t + v * sin_t)
        }
    }
}

impl<P: Policy> DoubleDouble<P> {
    /// Taylor series of `sin` for `|self| <= π/32`.
    fn sin_taylor(self) -> Self {
        let thresh = 0.5 * self.x[0].abs() * Self::EPSILON;
        if self.is_zero() {
            return Self::ZERO;
        }

        let x = -self.sqr();
        let mut s = self;
        let mut r = self;
        let mut i = 0;
        loop {
            r *= x;
            let t = r * inv_fact(i);
            s += t;
            i += 2;
            if i >= 15 || t.x[0].abs() <= thresh {
                break;
            }
        }
        s
    }

    /// Taylor series of `cos` for `|self| <= π/32`.
    fn cos_taylor(self) -> Self {
        let thresh = 0.5 * Self::EPSILON;
        if self.is_zero() {
            return Self::ONE;
        }

        let x = -self.sqr();
        let mut r = x;
        let mut s = 1.0 + r.mul_pwr2(0.5);
        let mut i = 1;
        loop {
            r *= x;
            let t = r * inv_fact(i);
            s += t;
            i += 2;
            if i >= 15 || t.x[0].abs() <= thresh {
                break;
            }
        }
        s
    }

    fn sin_cos_taylor(self) -> (Self, Self) {
        if self.is_zero() {
            return (Self::ZERO, Self::ONE);
        }
        let s = self.sin_taylor();
        let c = (1.0 - s.sqr()).sqrt();
        (s, c)
    }

    /// Fewer correct bits than a double carries survive reduction modulo `2π`.
    fn reduction_is_lossy(self) -> bool {
        self.x[0].abs() * Self::EPSILON > f64::EPSILON
    }

    /// Reduces modulo `2π`, then to the nearest multiple of `π/2` and of `π/16`.
    fn reduce(self, func: &'static str) -> Option<Reduced<P>> {
        if self.reduction_is_lossy() {
            tracing::warn!(
                value = ?self,
                "{func}: argument too large, reduction loses precision"
            );
        }
        let z = (self / Self::TAU).round();
        let r = self - Self::TAU * z;

        let q = (r.x[0] / Self::FRAC_PI_2.x[0] + 0.5).floor();
        let mut t = r - Self::FRAC_PI_2 * q;
        let j = q as i32;

        let q = (t.x[0] / Self::FRAC_PI_16.x[0] + 0.5).floor();
        t -= Self::FRAC_PI_16 * q;
        let k = q as i32;

        if j.abs() > 2 || k.abs() > 4 {
            tracing::error!(value = ?self, j, k, "{func}: cannot reduce argument");
            return None;
        }
        Some(Reduced { t, j, k })
    }

    pub fn sin(self) -> Self {
        if !self.is_finite() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        let Some(red) = self.reduce("sin") else {
            return Self::NAN;
        };
        let case = Case::for_sin(red.j);
        if red.k == 0 {
            return case.taylor(red.t);
        }
        let (s, c) = red.octant();
        case.pick(s, c)
    }

    pub fn cos(self) -> Self {
        if !self.is_finite() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        let Some(red) = self.reduce("cos") else {
            return Self::NAN;
        };
        let case = Case::for_cos(red.j);
        if red.k == 0 {
            return case.taylor(red.t);
        }
        let (s, c) = red.octant();
        case.pick(s, c)
    }

    /// `(sin(self), cos(self))` sharing one reduction.
    pub fn sin_cos(self) -> (Self, Self) {
        if !self.is_finite() {
            return (Self::NAN, Self::NAN);
        }
        if self.is_zero() {
            return (Self::ZERO, Self::ONE);
        }
        let Some(red) = self.reduce("sin_cos") else {
            return (Self::NAN, Self::NAN);
        };
        let (s, c) = red.octant();
        (Case::for_sin(red.j).pick(s, c), Case::for_cos(red.j).pick(s, c))
    }

    pub fn tan(self) -> Self {
        let (s, c) = self.sin_cos();
        s / c
    }

    /// The angle of the point `(x, self)`, in `[-π, π]`.
    ///
    /// Starts from the native `atan2` and takes one Newton step on whichever of
    /// `sin z = y/r`, `cos z = x/r` has the larger right-hand side.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if !x.is_finite() || !y.is_finite() {
            return Self::from(y.x[0].atan2(x.x[0]));
        }
        if x.is_zero() {
            if y.is_zero() {
                tracing::error!("atan2: both arguments are zero");
                return Self::NAN;
            }
            return if y.is_positive() {
                Self::FRAC_PI_2
            } else {
                -Self::FRAC_PI_2
            };
        }
        if y.is_zero() {
            return if x.is_positive() { Self::ZERO } else { Self::PI };
        }
        if x == y {
            return if y.is_positive() {
                Self::FRAC_PI_4
            } else {
                -Self::FRAC_3PI_4
            };
        }
        if x == -y {
            return if y.is_positive() {
                Self::FRAC_3PI_4
            } else {
                -Self::FRAC_PI_4
            };
        }

        // The angle is scale free; bring the larger side into [1, 2) so r stays in range.
        let scale = -Double::from_f64(x.x[0].abs().max(y.x[0].abs())).binary_exponent();
        let (x, y) = (x.ldexp(scale), y.ldexp(scale));
        let r = (x.sqr() + y.sqr()).sqrt();
        let xx = x / r;
        let yy = y / r;

        let mut z = Self::from(y.x[0].atan2(x.x[0]));
        let (sin_z, cos_z) = z.sin_cos();
        if xx.x[0].abs() > yy.x[0].abs() {
            z += (yy - sin_z) / cos_z;
        } else {
            z -= (xx - cos_z) / sin_z;
        }
        z
    }

    pub fn atan(self) -> Self {
        self.atan2(Self::ONE)
    }

    pub fn asin(self) -> Self {
        let abs_a = self.abs();
        if abs_a > 1.0 {
            tracing::error!(value = ?self, "asin: argument out of domain");
            return Self::NAN;
        }
        if abs_a == 1.0 {
            return if self.is_positive() {
                Self::FRAC_PI_2
            } else {
                -Self::FRAC_PI_2
            };
        }
        self.atan2((1.0 - self.sqr()).sqrt())
    }

    pub fn acos(self) -> Self {
        let abs_a = self.abs();
        if abs_a > 1.0 {
            tracing::error!(value = ?self, "acos: argument out of domain");
            return Self::NAN;
        }
        if abs_a == 1.0 {
            return if self.is_positive() { Self::ZERO } else { Self::PI };
        }
        (1.0 - self.sqr()).sqrt().atan2(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Case;
    use crate::{AccurateDDouble, DDouble};

    fn close(a: DDouble, b: DDouble, tol: f64) -> bool {
        (a - b).abs().hi() <= tol
    }

    #[test]
    fn case_table() {
        let sin: Vec<_> = (-2..=2).map(Case::for_sin).collect();
        assert_eq!(
            sin,
            [Case::NegSin, Case::NegCos, Case::Sin, Case::Cos, Case::NegSin]
        );
        let cos: Vec<_> = (-2..=2).map(Case::for_cos).collect();
        assert_eq!(
            cos,
            [Case::NegCos, Case::Sin, Case::Cos, Case::NegSin, Case::NegCos]
        );
    }

    #[test]
    fn every_quadrant_and_octant() {
        for j in -2..=2 {
            for k in -4..=4 {
                for t in [-0.01, 0.0, 0.01] {
                    let a = j as f64 * std::f64::consts::FRAC_PI_2
                        + k as f64 * std::f64::consts::PI / 16.0
                        + t;
                    let x = DDouble::from(a);
                    let (s, c) = x.sin_cos();
                    assert!((s.hi() - a.sin()).abs() < 1e-14, "sin({a}) at j={j} k={k}");
                    assert!((c.hi() - a.cos()).abs() < 1e-14, "cos({a}) at j={j} k={k}");
                    assert!(close(x.sin(), s, 8.0 * DDouble::EPSILON), "j={j} k={k}");
                    assert!(close(x.cos(), c, 8.0 * DDouble::EPSILON), "j={j} k={k}");
                }
            }
        }
    }

    #[test]
    fn special_values() {
        assert!(DDouble::ZERO.sin().is_zero());
        assert_eq!(DDouble::ZERO.cos(), DDouble::ONE);
        assert!(DDouble::NAN.sin().is_nan());
        assert!(DDouble::INFINITY.cos().is_nan());
        let (s, c) = DDouble::NEG_INFINITY.sin_cos();
        assert!(s.is_nan() && c.is_nan());
    }

    #[test]
    fn known_angles() {
        let eps = DDouble::EPSILON;
        let s = (DDouble::PI / 6.0).sin();
        assert!(close(s, DDouble::from(0.5), 16.0 * eps));
        let c = (DDouble::PI / 3.0).cos();
        assert!(close(c, DDouble::from(0.5), 16.0 * eps));
        let t = DDouble::FRAC_PI_4.tan();
        assert!(close(t, DDouble::ONE, 16.0 * eps));
        assert!(DDouble::PI.sin().abs().hi() < 16.0 * eps);
        assert!(close(DDouble::PI.cos(), -DDouble::ONE, 16.0 * eps));
    }

    #[test]
    fn pythagorean_identity_over_many_turns() {
        for i in -40..40 {
            let a = DDouble::from(i as f64 * 0.73) + 1e-20;
            let (s, c) = a.sin_cos();
            assert!(close(s.sqr() + c.sqr(), DDouble::ONE, 16.0 * DDouble::EPSILON));
        }
    }

    #[test]
    fn test_atan2() {
        let one = DDouble::ONE;
        assert!(DDouble::ZERO.atan2(DDouble::ZERO).is_nan());
        assert_eq!(one.atan2(DDouble::ZERO), DDouble::FRAC_PI_2);
        assert_eq!((-one).atan2(DDouble::ZERO), -DDouble::FRAC_PI_2);
        assert_eq!(DDouble::ZERO.atan2(one), DDouble::ZERO);
        assert_eq!(DDouble::ZERO.atan2(-one), DDouble::PI);
        assert_eq!(one.atan2(one), DDouble::FRAC_PI_4);
        assert_eq!((-one).atan2(-one), -DDouble::FRAC_3PI_4);
        assert_eq!(one.atan2(-one), DDouble::FRAC_3PI_4);
        assert_eq!((-one).atan2(one), -DDouble::FRAC_PI_4);

        let third = DDouble::from(3.0).sqrt().atan2(DDouble::ONE);
        assert!(close(third, DDouble::PI / 3.0, 16.0 * DDouble::EPSILON));
        let tiny = DDouble::from(1e-3).atan2(DDouble::from(1e3));
        assert!((tiny.hi() - 1e-3f64.atan2(1e3)).abs() < 1e-21);

        let expected = DDouble::from(2.0).atan2(one);
        for scale in [1e200, 1e-200, 1e300, 5e-310] {
            let a = DDouble::from(2.0 * scale).atan2(DDouble::from(scale));
            assert!(close(a, expected, 8.0 * DDouble::EPSILON), "scale {scale:e}: {a:?}");
        }
        let a = DDouble::from(-3e250).atan2(DDouble::from(-4e250));
        assert!((a.hi() - (-3e250f64).atan2(-4e250)).abs() < 1e-15);
    }

    #[test]
    fn huge_arguments_are_flagged() {
        assert!(!DDouble::from(100.0).reduction_is_lossy());
        assert!(!DDouble::from(1e15).reduction_is_lossy());
        assert!(DDouble::from(1e22).reduction_is_lossy());
        assert!(DDouble::from(-1e300).reduction_is_lossy());
        assert!(DDouble::from(1e22).sin().abs() <= 1.0);
    }

    #[test]
    fn inverse_functions() {
        let eps = DDouble::EPSILON;
        assert!(close(DDouble::ONE.atan(), DDouble::FRAC_PI_4, 4.0 * eps));
        assert!(close(DDouble::from(0.5).asin(), DDouble::PI / 6.0, 16.0 * eps));
        assert!(close(DDouble::from(0.5).acos(), DDouble::PI / 3.0, 16.0 * eps));
        assert_eq!(DDouble::ONE.asin(), DDouble::FRAC_PI_2);
        assert_eq!((-DDouble::ONE).asin(), -DDouble::FRAC_PI_2);
        assert!(DDouble::ONE.acos().is_zero());
        assert_eq!((-DDouble::ONE).acos(), DDouble::PI);
        assert!(DDouble::from(1.5).asin().is_nan());
        assert!(DDouble::from(-1.5).acos().is_nan());

        let x = DDouble::from(0.3);
        assert!(close(x.sin().asin(), x, 16.0 * eps));
        assert!(close(x.tan().atan(), x, 16.0 * eps));
    }

    #[test]
    fn accurate_policy_agrees() {
        let a = AccurateDDouble::from(2.5);
        let b = DDouble::from(2.5);
        assert!(close(a.sin().with_policy(), b.sin(), 8.0 * DDouble::EPSILON));
    }
}
