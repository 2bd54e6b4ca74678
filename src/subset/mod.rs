//! Bit-set subsets of the source numbers and the partition enumerator.

mod partitions;
mod splits;
mod types;

pub use partitions::{non_singleton_splits, ordered_splits};
pub use splits::{splits, subsets};
pub use types::Subset;

#[cfg(test)]
mod tests;
