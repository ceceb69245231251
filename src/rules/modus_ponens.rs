//! Modus ponens: `P`, `P => Q` strengthens `Q`

use crate::atomspace::{AtomId, AtomSpace, AtomType};
use crate::truth::TruthValue;

use super::{binary_premises, InferenceRule};

/// Revises the consequent of an implication whose antecedent is premise 1.
///
/// The derived value `{sP*sI, cP*cI, min(nP, nI)}` is OR-combined with `Q`'s
/// current value and written back to `Q`. Never inserts an atom.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModusPonens;

impl ModusPonens {
    pub const NAME: &'static str = "Modus Ponens";
}

impl InferenceRule for ModusPonens {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        let Some((_, implication)) = binary_premises(space, premises) else {
            return false;
        };
        implication.is_binary(AtomType::ImplicationLink) && implication.outgoing()[0] == premises[0]
    }

    fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId> {
        if !self.precondition(space, premises) {
            return None;
        }
        let (p, implication) = binary_premises(space, premises)?;

        let q = implication.outgoing()[1];
        let (tv_p, tv_i) = (p.tv(), implication.tv());
        let derived = TruthValue::new(
            tv_p.strength() * tv_i.strength(),
            tv_p.confidence() * tv_i.confidence(),
            tv_p.count().min(tv_i.count()),
        );

        let revised = space.truth_value(q)?.or(derived);
        space.set_truth_value(q, revised).ok()?;
        Some(q)
    }
}
