mod normalized;
mod raw;

pub use normalized::{FormatFlags, FormatOptions};
pub use raw::{RawAdjust, RawFormatOptions, RawNotation};

/// Significant digits printed when no precision is configured.
pub const DEFAULT_PRECISION: usize = 31;
