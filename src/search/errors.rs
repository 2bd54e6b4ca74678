use thiserror::Error;

use crate::expression::ExpressionError;
use crate::space::SpaceError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("value space error: {0}")]
    Space(#[from] SpaceError),
    #[error("expression evaluation error: {0}")]
    Expression(#[from] ExpressionError),
    #[error("claim `{claim}` evaluates to {actual}, not {expected}")]
    Inconsistent {
        claim: String,
        actual: i64,
        expected: i64,
    },
}
