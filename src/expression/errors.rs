use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("inexact division: {dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("arithmetic overflow")]
    Overflow,
}
