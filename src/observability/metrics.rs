//! Engine counters
//!
//! Counters only, monotonic, reset only when the engine is rebuilt.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Chaining counters owned by one engine
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    chain_runs: AtomicU64,
    passes: AtomicU64,
    inferences_accepted: AtomicU64,
    conclusions_below_floor: AtomicU64,
    targets_reached: AtomicU64,
    fixpoints: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_chain_runs(&self) {
        self.chain_runs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_passes(&self) {
        self.passes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_inferences(&self) {
        self.inferences_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// A rule concluded but the engine's confidence floor discarded it
    pub fn increment_below_floor(&self) {
        self.conclusions_below_floor.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_targets_reached(&self) {
        self.targets_reached.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fixpoints(&self) {
        self.fixpoints.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            chain_runs: self.chain_runs.load(Ordering::Relaxed),
            passes: self.passes.load(Ordering::Relaxed),
            inferences_accepted: self.inferences_accepted.load(Ordering::Relaxed),
            conclusions_below_floor: self.conclusions_below_floor.load(Ordering::Relaxed),
            targets_reached: self.targets_reached.load(Ordering::Relaxed),
            fixpoints: self.fixpoints.load(Ordering::Relaxed),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub chain_runs: u64,
    pub passes: u64,
    pub inferences_accepted: u64,
    pub conclusions_below_floor: u64,
    pub targets_reached: u64,
    pub fixpoints: u64,
}
