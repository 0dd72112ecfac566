use crate::{DoubleDouble, Policy};

impl<P: Policy> DoubleDouble<P> {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const NAN: Self = Self::splat(f64::NAN);
    pub const INFINITY: Self = Self::splat(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self::splat(f64::NEG_INFINITY);

    /// 2π
    pub const TAU: Self = Self::new(6.283185307179586232e+00, 2.449293598294706414e-16);
    pub const PI: Self = Self::new(3.141592653589793116e+00, 1.224646799147353207e-16);
    pub const FRAC_PI_2: Self = Self::new(1.570796326794896558e+00, 6.123233995736766036e-17);
    pub const FRAC_PI_4: Self = Self::new(7.853981633974482790e-01, 3.061616997868383018e-17);
    pub const FRAC_3PI_4: Self =
        Self::new(2.356194490192344837e+00, 9.1848509936051484375e-17);
    pub const FRAC_PI_16: Self =
        Self::new(1.963495408493620697e-01, 7.654042494670957545e-18);
    pub const E: Self = Self::new(2.718281828459045091e+00, 1.445646891729250158e-16);
    pub const LN_2: Self = Self::new(6.931471805599452862e-01, 2.319046813846299558e-17);
    pub const LN_10: Self = Self::new(2.302585092994045901e+00, -2.170756223382249351e-16);

    /// `2^-104`
    pub const EPSILON: f64 = 4.93038065763132e-32;
    /// `2^-969`, the smallest magnitude whose low limb is still normal.
    pub const MIN_POSITIVE: Self = Self::new(2.0041683600089728e-292, 0.0);
    pub const MAX: Self = Self::new(1.79769313486231570815e+308, 9.97920154767359795037e+291);
    /// Largest value whose Veltkamp split cannot overflow.
    pub const SAFE_MAX: Self =
        Self::new(1.7976931080746007281e+308, 9.97920154767359795037e+291);
    pub const DIGITS: usize = 31;
}
