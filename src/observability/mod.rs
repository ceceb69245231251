//! Observability for the inference engine
//!
//! - Structured one-line JSON logs ([`Logger`])
//! - Typed lifecycle events ([`Event`])
//! - Begin/complete scopes around chaining runs ([`ObservationScope`])
//! - Monotonic engine counters ([`MetricsRegistry`])
//!
//! # Principles
//!
//! 1. Observability is read-only: it never changes what the engine derives
//! 2. Synchronous, no background threads
//! 3. Deterministic field order
//!
//! # Usage
//!
//! ```ignore
//! use atomspace::observability::{Logger, ObservationScope};
//!
//! Logger::info("QUERY_COMPLETE", &[("matches", "2")]);
//!
//! let scope = ObservationScope::new("FORWARD_CHAIN");
//! // ... chain ...
//! scope.complete_with_fields(&[("inferences", "3")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log a lifecycle event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // no panic
        log_event(Event::ConfigLoaded);
        log_event(Event::ChainFixpoint);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::KnowledgeBaseLoaded, &[("atoms", "4")]);
    }
}
