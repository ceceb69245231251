//! Unified Rule Engine
//!
//! Holds an ordered rule list and drives chaining over a caller-owned
//! [`AtomSpace`](crate::atomspace::AtomSpace). The store is borrowed
//! mutably for the duration of each chaining call and never held between
//! calls.
//!
//! # Forward chaining
//!
//! For up to `max_iterations` passes, every rule (in registration order) is
//! tried on every slot pair `(i, j)` with `i < j`. The live atom count is
//! re-read at each step, so atoms synthesized earlier in a pass take part
//! in later pairs of the same pass.
//!
//! A conclusion is accepted when its confidence meets `min_confidence`.
//! Chaining stops when:
//!
//! 1. an accepted conclusion is the target atom
//! 2. a whole pass accepts nothing (fixpoint)
//! 3. `max_iterations` passes have run
//!
//! Cost is `O(max_iterations * rules * n^2)`; callers bound it through
//! `max_iterations` and the store capacity.

mod config;
mod engine;
mod errors;

pub use config::UreConfig;
pub use engine::{ChainReport, Termination, UnifiedRuleEngine};
pub use errors::{UreError, UreResult};
