//! The value-space: every integer reachable from every subset of the sources.

mod core;
mod errors;

pub use core::{build_value_space, ValueSpace, MAX_ITEMS};
pub use errors::SpaceError;
