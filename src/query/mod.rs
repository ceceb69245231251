//! Query / pattern matching
//!
//! Filters the live atoms by exact type equality plus a fixed confidence
//! floor of [`QUERY_CONFIDENCE_THRESHOLD`]. No variables, no unification.
//!
//! Results come back in store order. An empty result is a normal outcome.

mod matcher;
mod pattern;

pub use matcher::{query, PatternMatcher, QUERY_CONFIDENCE_THRESHOLD};
pub use pattern::Pattern;
