use rand::distributions::{Distribution, Standard};
use rand::{Rng, RngCore};

use crate::{DoubleDouble, Policy};

impl<P: Policy> DoubleDouble<P> {
    /// A uniformly distributed value in `[0, 1)` built from four 31-bit chunks.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        const M_CONST: f64 = 4.6566128730773926e-10; // 2^-31
        let mut m = M_CONST;
        let mut r = Self::ZERO;
        for _ in 0..4 {
            let d = (rng.next_u32() >> 1) as f64 * m;
            r += d;
            m *= M_CONST;
        }
        r
    }
}

impl<P: Policy> Distribution<DoubleDouble<P>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DoubleDouble<P> {
        DoubleDouble::random(rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::DDouble;

    #[test]
    fn values_are_in_the_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x: DDouble = rng.r#gen();
            assert!(x >= DDouble::ZERO && x < DDouble::ONE);
            assert!(x.lo().abs() <= 0.5 * dd_eft::Double::from_f64(x.hi()).ulp() || x.is_zero());
        }
    }

    #[test]
    fn seeded_sequences_repeat() {
        let a = DDouble::random(&mut StdRng::seed_from_u64(1));
        let b = DDouble::random(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
