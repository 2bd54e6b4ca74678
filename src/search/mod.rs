//! The search driver: a lazy, deduplicated, verified stream of claims.

mod core;
mod errors;

pub use core::{search, Claim, Search};
pub use errors::SearchError;
