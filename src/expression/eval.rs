use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluate with checked integer arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error on division by zero, on a division that leaves a
    /// remainder, or when an intermediate value overflows `i64`. The grammar
    /// never builds such expressions; hitting one of these from a generated
    /// expression indicates a grammar bug.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Sum(terms) => terms.iter().try_fold(0i64, |acc, term| {
                acc.checked_add(term.evaluate()?)
                    .ok_or(ExpressionError::Overflow)
            }),
            Expression::Sub(l, r) => l
                .evaluate()?
                .checked_sub(r.evaluate()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Product(factors) => factors.iter().try_fold(1i64, |acc, factor| {
                acc.checked_mul(factor.evaluate()?)
                    .ok_or(ExpressionError::Overflow)
            }),
            Expression::Div(l, r) => {
                let dividend = l.evaluate()?;
                let divisor = r.evaluate()?;
                if divisor == 0 {
                    debug!("division by zero in {}", self);
                    return Err(ExpressionError::DivisionByZero);
                }
                let quotient = dividend
                    .checked_div(divisor)
                    .ok_or(ExpressionError::Overflow)?;
                if dividend % divisor != 0 {
                    debug!("inexact division in {}", self);
                    return Err(ExpressionError::InexactDivision { dividend, divisor });
                }
                Ok(quotient)
            }
        }
    }
}
