//! The expression grammar: every distinct derivation of a value from a subset.

mod core;

pub use core::ExpressionGrammar;
