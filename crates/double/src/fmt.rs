use std::fmt::{self, Write};
use std::str::FromStr;

use dd_eft::Double;
use dd_real::{FormatOptions, ParseError, RawAdjust, RawFormatOptions, RawNotation};

use crate::{DoubleDouble, Policy};

impl<P: Policy> DoubleDouble<P> {
    /// Formats with explicit options, see [`dd_real::format`].
    pub fn format(&self, opts: &FormatOptions) -> String {
        dd_real::format(*self, opts)
    }

    /// Parses a decimal string, yielding NaN (and an error event) on malformed input.
    pub fn from_decimal(s: &str) -> Self {
        match s.parse() {
            Ok(v) => v,
            Err(err) => {
                tracing::error!(%err, input = s, "from_decimal: malformed number");
                Self::NAN
            }
        }
    }

    /// One line per limb: the limb, its binary exponent and its 53 significand bits.
    pub fn debug_limbs(&self) -> String {
        let mut out = String::new();
        for limb in self.x {
            let d = Double::from_f64(limb);
            let _ = writeln!(
                out,
                "{limb:27.19e} {:5} {:053b}",
                d.binary_exponent(),
                d.significand()
            );
        }
        out
    }

    fn write_formatted(
        &self,
        f: &mut fmt::Formatter<'_>,
        notation: RawNotation,
        uppercase: bool,
    ) -> fmt::Result {
        let mut raw = RawFormatOptions::default()
            .with_precision(f.precision().unwrap_or(Self::DIGITS))
            .with_notation(notation)
            .with_show_pos(f.sign_plus())
            .with_uppercase(uppercase);

        let centered = matches!(f.align(), Some(fmt::Alignment::Center));
        if f.sign_aware_zero_pad() {
            raw = raw.with_fill('0').with_adjust(RawAdjust::Internal);
        } else {
            raw = raw.with_fill(f.fill());
            match f.align() {
                Some(fmt::Alignment::Left) => raw = raw.with_adjust(RawAdjust::Left),
                Some(fmt::Alignment::Right) | None => raw = raw.with_adjust(RawAdjust::Right),
                Some(fmt::Alignment::Center) => {}
            }
        }
        if let Some(width) = f.width().filter(|_| !centered || f.sign_aware_zero_pad()) {
            raw = raw.with_width(width);
        }

        let s = self.format(&raw.normalize());
        if !centered || f.sign_aware_zero_pad() {
            return f.write_str(&s);
        }

        let len = s.chars().count();
        let total = f.width().unwrap_or(0).saturating_sub(len);
        let fill = f.fill();
        for _ in 0..total / 2 {
            f.write_char(fill)?;
        }
        f.write_str(&s)?;
        for _ in 0..total - total / 2 {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

/// With a precision, fixed notation with that many decimals; without, scientific notation
/// with the full number of significant digits.
impl<P: Policy> fmt::Display for DoubleDouble<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation = if f.precision().is_some() {
            RawNotation::Fixed
        } else {
            RawNotation::Scientific
        };
        self.write_formatted(f, notation, false)
    }
}

impl<P: Policy> fmt::LowerExp for DoubleDouble<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_formatted(f, RawNotation::Scientific, false)
    }
}

impl<P: Policy> fmt::UpperExp for DoubleDouble<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_formatted(f, RawNotation::Scientific, true)
    }
}

impl<P: Policy> FromStr for DoubleDouble<P> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dd_real::parse(s)
    }
}
