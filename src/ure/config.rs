//! Engine configuration

use serde::{Deserialize, Serialize};

use super::errors::{UreError, UreResult};

/// Chaining bounds, fixed for the engine's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UreConfig {
    /// Upper bound on chaining passes; 0 disables chaining
    pub max_iterations: usize,

    /// Acceptance floor for derived facts, in [0, 1]
    pub min_confidence: f32,
}

impl UreConfig {
    pub fn new(max_iterations: usize, min_confidence: f32) -> Self {
        Self {
            max_iterations,
            min_confidence,
        }
    }

    pub fn validate(&self) -> UreResult<()> {
        if !self.min_confidence.is_finite() || !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(UreError::InvalidConfig(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

impl Default for UreConfig {
    fn default() -> Self {
        Self::new(10, 0.5)
    }
}
