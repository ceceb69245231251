//! Type + confidence matching over the store

use crate::atomspace::{Atom, AtomId, AtomSpace};
use crate::observability::{log_event_with_fields, Event};

use super::pattern::Pattern;

/// Confidence an atom needs to be returned by a query. Independent of the
/// engine's `min_confidence`.
pub const QUERY_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Evaluates a pattern against single atoms
pub struct PatternMatcher;

impl PatternMatcher {
    pub fn matches(atom: &Atom, pattern: &Pattern) -> bool {
        atom.atom_type() == pattern.atom_type
            && atom.tv().confidence() >= QUERY_CONFIDENCE_THRESHOLD
    }
}

/// All live atoms matching `pattern`, in store order
pub fn query(space: &AtomSpace, pattern: &Pattern) -> Vec<AtomId> {
    let results: Vec<AtomId> = space
        .iter()
        .filter(|(_, atom)| PatternMatcher::matches(atom, pattern))
        .map(|(id, _)| id)
        .collect();

    log_event_with_fields(
        Event::QueryExecuted,
        &[
            ("type", pattern.atom_type.as_str()),
            ("matches", results.len().to_string().as_str()),
        ],
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomspace::AtomType;
    use crate::truth::TruthValue;

    #[test]
    fn test_matches_type_and_confidence() {
        let mut space = AtomSpace::new(10, 4);
        let high = space
            .create_node(AtomType::ConceptNode, "High", TruthValue::new(0.9, 0.8, 1.0))
            .unwrap();
        let low = space
            .create_node(AtomType::ConceptNode, "Low", TruthValue::new(0.9, 0.4, 1.0))
            .unwrap();

        let pattern = Pattern::of_type(AtomType::ConceptNode);
        assert!(PatternMatcher::matches(space.get(high).unwrap(), &pattern));
        assert!(!PatternMatcher::matches(space.get(low).unwrap(), &pattern));
        assert!(!PatternMatcher::matches(
            space.get(high).unwrap(),
            &Pattern::of_type(AtomType::PredicateNode)
        ));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut space = AtomSpace::new(10, 4);
        let edge = space
            .create_node(AtomType::ConceptNode, "Edge", TruthValue::new(0.1, 0.5, 1.0))
            .unwrap();
        assert_eq!(query(&space, &Pattern::of_type(AtomType::ConceptNode)), vec![edge]);
    }

    #[test]
    fn test_empty_store_empty_result() {
        let space = AtomSpace::new(10, 4);
        assert!(query(&space, &AtomType::ConceptNode.into()).is_empty());
    }

    #[test]
    fn test_pattern_from_atom_ignores_name_and_tv() {
        let mut space = AtomSpace::new(10, 4);
        let probe = space
            .create_node(AtomType::ConceptNode, "Probe", TruthValue::new(0.0, 0.0, 0.0))
            .unwrap();
        let other = space
            .create_node(AtomType::ConceptNode, "Other", TruthValue::new(0.5, 0.9, 1.0))
            .unwrap();

        let pattern = Pattern::from(space.get(probe).unwrap());
        assert_eq!(query(&space, &pattern), vec![other]);
    }
}
