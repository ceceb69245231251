//! Inheritance transitivity: `A -> B`, `B -> C` gives `A -> C`

use crate::atomspace::{AtomId, AtomSpace, AtomType};
use crate::truth::TruthValue;

use super::{binary_premises, InferenceRule};

/// Confidence multiplier applied to every transitive step
pub const TRANSITIVITY_DECAY: f32 = 0.9;

/// Synthesizes a new `InheritanceLink A -> C` from `A -> B` and `B -> C`.
///
/// - strength   = s1 * s2
/// - confidence = c1 * c2 * [`TRANSITIVITY_DECAY`]
/// - count      = min(n1, n2)
///
/// Always inserts; an existing `A -> C` link is never revised.
#[derive(Debug, Clone, Copy, Default)]
pub struct InheritanceTransitivity;

impl InheritanceTransitivity {
    pub const NAME: &'static str = "Inheritance Transitivity";
}

impl InferenceRule for InheritanceTransitivity {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        let Some((first, second)) = binary_premises(space, premises) else {
            return false;
        };
        first.is_binary(AtomType::InheritanceLink)
            && second.is_binary(AtomType::InheritanceLink)
            && first.outgoing()[1] == second.outgoing()[0]
    }

    fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId> {
        if !self.precondition(space, premises) {
            return None;
        }
        let (first, second) = binary_premises(space, premises)?;

        let a = first.outgoing()[0];
        let c = second.outgoing()[1];
        let (tv1, tv2) = (first.tv(), second.tv());

        let tv = TruthValue::new(
            tv1.strength() * tv2.strength(),
            tv1.confidence() * tv2.confidence() * TRANSITIVITY_DECAY,
            tv1.count().min(tv2.count()),
        );

        space
            .create_link(AtomType::InheritanceLink, &[a, c], tv)
            .ok()
    }
}
