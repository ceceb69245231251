//! Truth-value calculus
//!
//! Every atom carries a [`TruthValue`]: a probabilistic strength, the
//! confidence behind it, and the raw evidence tally.
//!
//! # Invariants
//!
//! - strength and confidence always lie in [0, 1]
//! - count is never negative
//! - constructors clamp, they never fail
//!
//! The combinators ([`TruthValue::and`], [`TruthValue::or`],
//! [`TruthValue::not`]) are pure and total.

mod value;

pub use value::TruthValue;
