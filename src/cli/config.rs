//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "capacity": 1000,
//!   "embedding_dim": 64,
//!   "seed": null,
//!   "max_iterations": 10,
//!   "min_confidence": 0.5,
//!   "rules": ["inheritance_transitivity"]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atomspace::{AtomSpace, MAX_EMBEDDING_CELLS};
use crate::observability::{log_event_with_fields, Event};
use crate::rules::BuiltinRule;
use crate::ure::{UnifiedRuleEngine, UreConfig};

use super::errors::{CliError, CliResult};

/// Store, engine and rule selection for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum atoms in the store
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Width of each embedding slot
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,

    /// Embedding RNG seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// Rules to register, in order
    #[serde(default = "default_rules")]
    pub rules: Vec<BuiltinRule>,
}

fn default_capacity() -> usize {
    1000
}
fn default_embedding_dim() -> usize {
    64
}
fn default_max_iterations() -> usize {
    10
}
fn default_min_confidence() -> f32 {
    0.5
}
fn default_rules() -> Vec<BuiltinRule> {
    vec![BuiltinRule::InheritanceTransitivity]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            embedding_dim: default_embedding_dim(),
            seed: None,
            max_iterations: default_max_iterations(),
            min_confidence: default_min_confidence(),
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        log_event_with_fields(
            Event::ConfigLoaded,
            &[("path", path.display().to_string().as_str())],
        );

        Ok(config)
    }

    /// Write this config as pretty JSON
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| CliError::config_error(format!("Failed to write config: {}", e)))
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.capacity == 0 {
            return Err(CliError::config_error("capacity must be > 0"));
        }
        if self.embedding_dim == 0 {
            return Err(CliError::config_error("embedding_dim must be > 0"));
        }
        let cells = self
            .capacity
            .checked_mul(self.embedding_dim)
            .filter(|cells| *cells <= MAX_EMBEDDING_CELLS);
        if cells.is_none() {
            return Err(CliError::config_error(format!(
                "capacity * embedding_dim must be <= {}",
                MAX_EMBEDDING_CELLS
            )));
        }
        self.engine_config()
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))?;
        Ok(())
    }

    pub fn engine_config(&self) -> UreConfig {
        UreConfig::new(self.max_iterations, self.min_confidence)
    }

    pub fn build_space(&self) -> AtomSpace {
        match self.seed {
            Some(seed) => AtomSpace::with_seed(self.capacity, self.embedding_dim, seed),
            None => AtomSpace::new(self.capacity, self.embedding_dim),
        }
    }

    /// Engine with the configured rules registered in order
    pub fn build_engine(&self) -> CliResult<UnifiedRuleEngine> {
        let mut engine = UnifiedRuleEngine::new(self.engine_config())?;
        for rule in &self.rules {
            engine.add_rule(*rule);
        }
        Ok(engine)
    }
}
