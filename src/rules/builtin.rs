//! Tagged enum over the shipped rules, selectable by name from config

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::atomspace::{AtomId, AtomSpace};

use super::{InferenceRule, InheritanceTransitivity, ModusPonens};

/// Shipped rule kinds.
///
/// Config names are snake_case (`"inheritance_transitivity"`,
/// `"modus_ponens"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinRule {
    InheritanceTransitivity,
    ModusPonens,
}

impl BuiltinRule {
    pub const ALL: [BuiltinRule; 2] = [
        BuiltinRule::InheritanceTransitivity,
        BuiltinRule::ModusPonens,
    ];

    /// Config name
    pub fn key(self) -> &'static str {
        match self {
            BuiltinRule::InheritanceTransitivity => "inheritance_transitivity",
            BuiltinRule::ModusPonens => "modus_ponens",
        }
    }
}

impl fmt::Display for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BuiltinRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinRule::ALL
            .iter()
            .copied()
            .find(|rule| rule.key() == s)
            .ok_or_else(|| format!("Unknown rule: '{}'", s))
    }
}

impl InferenceRule for BuiltinRule {
    fn name(&self) -> &str {
        match self {
            BuiltinRule::InheritanceTransitivity => InheritanceTransitivity::NAME,
            BuiltinRule::ModusPonens => ModusPonens::NAME,
        }
    }

    fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        match self {
            BuiltinRule::InheritanceTransitivity => {
                InheritanceTransitivity.precondition(space, premises)
            }
            BuiltinRule::ModusPonens => ModusPonens.precondition(space, premises),
        }
    }

    fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId> {
        match self {
            BuiltinRule::InheritanceTransitivity => {
                InheritanceTransitivity.conclusion(space, premises)
            }
            BuiltinRule::ModusPonens => ModusPonens.conclusion(space, premises),
        }
    }
}
