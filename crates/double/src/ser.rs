use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DoubleDouble, Policy};

/// Serialized as the two-element array `[hi, lo]`.
impl<P: Policy> Serialize for DoubleDouble<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.x.serialize(serializer)
    }
}

/// Accepts any pair and renormalizes it.
impl<'de, P: Policy> Deserialize<'de> for DoubleDouble<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [hi, lo] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Self::from_pair(hi, lo))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AccurateDDouble, DDouble};

    #[test]
    fn json_pair() {
        let a = DDouble::new(1.0, 1e-20);
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[1.0,1e-20]");
        let b: DDouble = serde_json::from_str(&s).unwrap();
        assert_eq!(a, b);

        let c: AccurateDDouble = serde_json::from_str("[1.0, 1.0]").unwrap();
        assert_eq!(c.limbs(), [2.0, 0.0]);
        assert!(serde_json::from_str::<DDouble>("[1.0]").is_err());
    }
}
