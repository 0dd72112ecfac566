use std::fmt::Debug;

/// Selects the algorithm variants used by the arithmetic operators.
///
/// The choice is part of the value's type, so two values computed under different
/// policies never mix silently. See [`crate::DoubleDouble::with_policy`].
pub trait Policy: Copy + Default + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Addition and subtraction run the error-free transformation on both limb pairs.
    const ACCURATE_ADD: bool;
    /// Division performs a second refinement step on the remainder.
    const ACCURATE_DIV: bool;
    /// Exact products come from a fused multiply-add instead of Veltkamp splitting.
    const FUSED: bool;
}

/// Fast add and divide that may lose a few units in the last place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sloppy;

/// IEEE-style add and accurate divide, roughly twice the cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accurate;

/// Sloppy add and divide with products computed by `f64::mul_add`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fused;

impl Policy for Sloppy {
    const ACCURATE_ADD: bool = false;
    const ACCURATE_DIV: bool = false;
    const FUSED: bool = false;
}

impl Policy for Accurate {
    const ACCURATE_ADD: bool = true;
    const ACCURATE_DIV: bool = true;
    const FUSED: bool = false;
}

impl Policy for Fused {
    const ACCURATE_ADD: bool = false;
    const ACCURATE_DIV: bool = false;
    const FUSED: bool = true;
}
