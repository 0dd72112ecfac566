use std::cmp::Ordering;

use crate::{DoubleDouble, Policy};

impl<P: Policy> PartialEq for DoubleDouble<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x[0] == other.x[0] && self.x[1] == other.x[1]
    }
}

impl<P: Policy> PartialEq<f64> for DoubleDouble<P> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.x[0] == *other && self.x[1] == 0.0
    }
}

impl<P: Policy> PartialOrd for DoubleDouble<P> {
    /// Lexicographic on `(hi, lo)`, which matches the numeric order for normalized values.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x[0].partial_cmp(&other.x[0])? {
            Ordering::Equal => self.x[1].partial_cmp(&other.x[1]),
            ord => Some(ord),
        }
    }
}

impl<P: Policy> PartialOrd<f64> for DoubleDouble<P> {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&Self::from(*other))
    }
}

impl<P: Policy> DoubleDouble<P> {
    /// The larger of two values, NaN if either is NaN.
    pub fn max(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Less) => other,
            Some(_) => self,
            None => Self::NAN,
        }
    }

    /// The smaller of two values, NaN if either is NaN.
    pub fn min(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Greater) => other,
            Some(_) => self,
            None => Self::NAN,
        }
    }
}
