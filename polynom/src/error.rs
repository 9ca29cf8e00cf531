use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum PolynomialError {
    #[error("cannot shift polynomial of degree {degree} by {shift}: result would lie below x^0")]
    ShiftBelowConstantTerm { shift: isize, degree: usize },

    #[error("cannot divide by the zero polynomial")]
    DivisionByZero,
}
