use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Cannot parse a number from an empty string.")]
    #[diagnostic(code(dd::parse::empty))]
    Empty,
    #[error("Expected at least one digit.")]
    #[diagnostic(code(dd::parse::no_digits))]
    NoDigits,
    #[error("Unexpected character '{ch}' at offset {pos}.")]
    #[diagnostic(
        code(dd::parse::unexpected_char),
        help("Only digits, one '.', a leading sign and an 'e' exponent are accepted.")
    )]
    UnexpectedChar { ch: char, pos: usize },
    #[error("Second decimal point at offset {pos}.")]
    #[diagnostic(code(dd::parse::duplicate_point))]
    DuplicatePoint { pos: usize },
    #[error("Sign at offset {pos} must come before any digit.")]
    #[diagnostic(code(dd::parse::misplaced_sign))]
    MisplacedSign { pos: usize },
    #[error("Invalid exponent '{exponent}'.")]
    #[diagnostic(
        code(dd::parse::invalid_exponent),
        help("The exponent must be a decimal integer and end the input.")
    )]
    InvalidExponent { exponent: String },
}
