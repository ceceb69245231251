//! Inference rules
//!
//! A rule is a named `(precondition, conclusion)` pair evaluated over an
//! ordered premise list of store-relative ids. The engine treats every rule
//! the same way through the [`InferenceRule`] trait.
//!
//! # Synthesis vs revision
//!
//! A conclusion either inserts a brand-new atom and returns its id
//! (synthesis, e.g. [`InheritanceTransitivity`]) or updates an existing
//! atom's truth value in place and returns that atom's id (revision, e.g.
//! [`ModusPonens`]). The engine does not distinguish the two.
//!
//! # Malformed premises
//!
//! Wrong arity or wrong atom types make the precondition return `false`.
//! That is "rule does not apply", never an error.

mod builtin;
mod inheritance;
mod modus_ponens;

pub use builtin::BuiltinRule;
pub use inheritance::{InheritanceTransitivity, TRANSITIVITY_DECAY};
pub use modus_ponens::ModusPonens;

use crate::atomspace::{AtomId, AtomSpace};

/// Rule capability registered into the engine
pub trait InferenceRule {
    /// Human-readable rule name
    fn name(&self) -> &str;

    /// Whether the rule applies to `premises`. Must not mutate anything.
    fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool;

    /// Derive a fact from `premises`, returning the new or revised atom.
    ///
    /// Returns `None` when the precondition does not hold or when the store
    /// cannot take a new atom.
    fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId>;
}

impl<R: InferenceRule + ?Sized> InferenceRule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        (**self).precondition(space, premises)
    }

    fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId> {
        (**self).conclusion(space, premises)
    }
}

/// Precondition function pointer
pub type PreconditionFn = fn(&AtomSpace, &[AtomId]) -> bool;

/// Conclusion function pointer
pub type ConclusionFn = fn(&mut AtomSpace, &[AtomId]) -> Option<AtomId>;

/// Rule built from a name and two plain functions.
///
/// For ad-hoc rules that do not warrant their own type.
#[derive(Debug, Clone)]
pub struct RuleFn {
    name: String,
    precondition: PreconditionFn,
    conclusion: ConclusionFn,
}

impl RuleFn {
    pub fn new(
        name: impl Into<String>,
        precondition: PreconditionFn,
        conclusion: ConclusionFn,
    ) -> Self {
        Self {
            name: name.into(),
            precondition,
            conclusion,
        }
    }
}

impl InferenceRule for RuleFn {
    fn name(&self) -> &str {
        &self.name
    }

    fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        (self.precondition)(space, premises)
    }

    fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId> {
        (self.conclusion)(space, premises)
    }
}

/// Resolve a two-premise list into its atoms, or `None` on wrong arity or
/// unknown ids.
pub(crate) fn binary_premises<'a>(
    space: &'a AtomSpace,
    premises: &[AtomId],
) -> Option<(&'a crate::atomspace::Atom, &'a crate::atomspace::Atom)> {
    match premises {
        [first, second] => Some((space.get(*first)?, space.get(*second)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomspace::AtomType;
    use crate::truth::TruthValue;

    fn same_type(space: &AtomSpace, premises: &[AtomId]) -> bool {
        match binary_premises(space, premises) {
            Some((a, b)) => a.atom_type() == b.atom_type(),
            None => false,
        }
    }

    fn similarity(space: &mut AtomSpace, premises: &[AtomId]) -> Option<AtomId> {
        space
            .create_link(AtomType::SimilarityLink, premises, TruthValue::new(1.0, 1.0, 1.0))
            .ok()
    }

    #[test]
    fn test_rule_fn_dispatch() {
        let rule = RuleFn::new("Same Type Similarity", same_type, similarity);
        let mut space = AtomSpace::new(10, 4);
        let a = space
            .create_node(AtomType::ConceptNode, "A", TruthValue::default_belief())
            .unwrap();
        let b = space
            .create_node(AtomType::ConceptNode, "B", TruthValue::default_belief())
            .unwrap();

        assert_eq!(rule.name(), "Same Type Similarity");
        assert!(rule.precondition(&space, &[a, b]));
        let link = rule.conclusion(&mut space, &[a, b]).unwrap();
        assert_eq!(space.get(link).unwrap().outgoing(), &[a, b]);
    }

    #[test]
    fn test_boxed_rule_delegates() {
        let rule: Box<dyn InferenceRule> = Box::new(RuleFn::new("Boxed", same_type, similarity));
        assert_eq!(rule.name(), "Boxed");
    }

    #[test]
    fn test_binary_premises_arity() {
        let mut space = AtomSpace::new(10, 4);
        let a = space
            .create_node(AtomType::ConceptNode, "A", TruthValue::default_belief())
            .unwrap();
        assert!(binary_premises(&space, &[a]).is_none());
        assert!(binary_premises(&space, &[a, a, a]).is_none());
        assert!(binary_premises(&space, &[a, AtomId::new(7)]).is_none());
        assert!(binary_premises(&space, &[a, a]).is_some());
    }
}
