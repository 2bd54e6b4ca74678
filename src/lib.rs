//! Countdown - an exhaustive solver for the Countdown numbers round
//!
//! Given a list of source numbers and a target, this crate finds every way
//! to combine a subset of the sources with `+ - * /` (exact integer division
//! only) so the result hits the target, rendered as deduplicated,
//! minimally-parenthesized claims such as `37 == 6 * 7 - 5`.

pub mod bench;
pub mod cli;
pub mod expression;
pub mod grammar;
pub mod search;
pub mod space;
pub mod subset;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use search::{search, Claim, Search, SearchError};
pub use space::{build_value_space, SpaceError, ValueSpace};
pub use subset::Subset;

/// Collect every claim deriving `target` from the given source numbers.
///
/// This is a convenience wrapper that builds the value space and drains the
/// search in one call.
///
/// # Errors
///
/// Fails when the item list is empty or oversized, or if the search detects
/// an internal inconsistency.
///
/// # Examples
///
/// ```
/// let claims = countdown::solutions(&[6, 7, 5], 37).unwrap();
/// assert!(claims.iter().any(|c| c.to_string() == "37 == 6 * 7 - 5"));
/// ```
pub fn solutions(items: &[i64], target: i64) -> Result<Vec<Claim>, SearchError> {
    let space = build_value_space(items)?;
    search(&space, target).collect()
}

/// Find one claim deriving `target`, preferring the fewest source numbers.
///
/// Returns `Ok(None)` when the target is unreachable.
///
/// # Errors
///
/// Same conditions as [`solutions`].
pub fn first_solution(items: &[i64], target: i64) -> Result<Option<Claim>, SearchError> {
    let space = build_value_space(items)?;
    search(&space, target).next().transpose()
}
