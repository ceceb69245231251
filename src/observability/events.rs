//! Lifecycle events emitted by the store, the engine and the CLI

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Store
    /// AtomSpace allocated
    AtomSpaceInit,

    // Engine
    /// Rule appended to the engine
    RuleRegistered,
    /// Backward chaining requested (runs forward chaining toward the query)
    BackwardChainBegin,
    /// One chaining pass finished
    ChainPass,
    /// Chaining derived the target atom
    ChainTargetReached,
    /// A pass produced no accepted inference
    ChainFixpoint,
    /// Chaining ran out of passes
    ChainIterationLimit,

    // Query
    /// Pattern query finished
    QueryExecuted,

    // CLI
    /// Config file loaded and validated
    ConfigLoaded,
    /// Knowledge-base file loaded into a store
    KnowledgeBaseLoaded,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::AtomSpaceInit => "ATOMSPACE_INIT",
            Event::RuleRegistered => "RULE_REGISTERED",
            Event::BackwardChainBegin => "BACKWARD_CHAIN_BEGIN",
            Event::ChainPass => "CHAIN_PASS",
            Event::ChainTargetReached => "CHAIN_TARGET_REACHED",
            Event::ChainFixpoint => "CHAIN_FIXPOINT",
            Event::ChainIterationLimit => "CHAIN_ITERATION_LIMIT",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::KnowledgeBaseLoaded => "KNOWLEDGE_BASE_LOADED",
        }
    }

    /// Per-pass and per-query events are TRACE; lifecycle events are INFO
    pub fn severity(&self) -> Severity {
        match self {
            Event::ChainPass | Event::QueryExecuted => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
