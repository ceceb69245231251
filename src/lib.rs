//! atomspace - a hypergraph knowledge store with probabilistic-logic inference
//!
//! Typed atoms carry truth values, rules derive new atoms from pairs of
//! existing ones, and the unified rule engine chains them to a fixpoint,
//! an iteration bound or a target.

pub mod atomspace;
pub mod cli;
pub mod observability;
pub mod query;
pub mod rules;
pub mod truth;
pub mod ure;
