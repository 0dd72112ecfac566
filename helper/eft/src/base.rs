use crate::ldexp;

/// Bit-level view of an IEEE-754 double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Double(u64);

impl Double {
    pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    pub const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;
    pub const SIGNIFICAND_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
    pub const HIDDEN_BIT: u64 = 0x0010_0000_0000_0000;
    pub const PHYSICAL_SIGNIFICAND_SIZE: u64 = 52;
    pub const SIGNIFICAND_SIZE: u64 = 53;

    pub const EXP_BIAS: i32 = 1023 + Self::PHYSICAL_SIGNIFICAND_SIZE as i32;
    pub const DENORMAL_EXP: i32 = -Self::EXP_BIAS + 1;

    pub const fn from_f64(value: f64) -> Self {
        Double(value.to_bits())
    }

    #[inline(always)]
    pub const fn is_denormal(&self) -> bool {
        (self.0 & Self::EXP_MASK) == 0
    }

    /// Exponent of the last significand bit: `value == significand * 2^exp`.
    #[inline(always)]
    pub const fn exp(&self) -> i32 {
        if self.is_denormal() {
            Self::DENORMAL_EXP
        } else {
            (((self.0 & Self::EXP_MASK) >> Self::PHYSICAL_SIGNIFICAND_SIZE) as i32) - Self::EXP_BIAS
        }
    }

    /// Exponent of the leading bit, `floor(log2(|value|))` for normal values.
    #[inline(always)]
    pub const fn binary_exponent(&self) -> i32 {
        self.exp() + Self::PHYSICAL_SIGNIFICAND_SIZE as i32
    }

    #[inline(always)]
    pub const fn significand(&self) -> u64 {
        let man = self.0 & Self::SIGNIFICAND_MASK;
        if !self.is_denormal() {
            man + Self::HIDDEN_BIT
        } else {
            man
        }
    }

    #[inline(always)]
    pub const fn sign(&self) -> i64 {
        if self.0 & Self::SIGN_MASK == 0 { 1 } else { -1 }
    }

    /// Weight of the last significand bit of a finite value.
    pub fn ulp(&self) -> f64 {
        ldexp(1.0, self.exp())
    }
}

#[test]
fn test_double_fields() {
    let d = Double::from_f64(1.0);
    assert_eq!(d.exp(), -52);
    assert_eq!(d.binary_exponent(), 0);
    assert_eq!(d.significand(), Double::HIDDEN_BIT);
    assert_eq!(d.ulp(), f64::EPSILON);

    let d = Double::from_f64(-6.0);
    assert_eq!(d.sign(), -1);
    assert_eq!(d.binary_exponent(), 2);

    let d = Double::from_f64(f64::from_bits(1));
    assert!(d.is_denormal());
    assert_eq!(d.ulp(), f64::from_bits(1));
}
