//! AtomSpace Capacity and Reference Tests
//!
//! The store never grows past its capacity, a refused insert leaves it
//! untouched, and links only reference atoms already present.

use atomspace::atomspace::{AtomId, AtomSpace, AtomSpaceError, AtomType};
use atomspace::truth::TruthValue;

// =============================================================================
// Test Utilities
// =============================================================================

fn tv() -> TruthValue {
    TruthValue::new(0.9, 0.8, 10.0)
}

fn filled(capacity: usize) -> AtomSpace {
    let mut space = AtomSpace::with_seed(capacity, 4, 11);
    for i in 0..capacity {
        space
            .create_node(AtomType::ConceptNode, format!("n{}", i), tv())
            .unwrap();
    }
    space
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn test_insert_past_capacity_fails_without_mutation() {
    let mut space = filled(3);
    assert!(space.is_full());

    let err = space
        .create_node(AtomType::ConceptNode, "extra", tv())
        .unwrap_err();
    assert_eq!(err, AtomSpaceError::Full { capacity: 3 });
    assert!(err.is_full());
    assert_eq!(space.len(), 3);
    assert_eq!(space.lookup("extra"), None);
}

#[test]
fn test_link_past_capacity_fails() {
    let mut space = filled(2);
    let err = space
        .add_link(AtomId::new(0), AtomId::new(1), AtomType::InheritanceLink, tv())
        .unwrap_err();
    assert!(err.is_full());
    assert_eq!(space.len(), 2);
}

#[test]
fn test_zero_capacity_store_refuses_everything() {
    let mut space = AtomSpace::new(0, 4);
    assert!(space.is_full());
    assert!(space.create_node(AtomType::ConceptNode, "A", tv()).is_err());
    assert!(space.is_empty());
}

// =============================================================================
// Links
// =============================================================================

#[test]
fn test_link_to_unknown_atom_rejected() {
    let mut space = AtomSpace::new(4, 4);
    let a = space.create_node(AtomType::ConceptNode, "A", tv()).unwrap();
    let err = space
        .add_link(a, AtomId::new(3), AtomType::InheritanceLink, tv())
        .unwrap_err();
    assert_eq!(
        err,
        AtomSpaceError::DanglingReference {
            id: AtomId::new(3),
            len: 1
        }
    );
    assert_eq!(space.len(), 1);
}

#[test]
fn test_empty_outgoing_rejected() {
    let mut space = AtomSpace::new(4, 4);
    assert_eq!(
        space.create_link(AtomType::EvaluationLink, &[], tv()).unwrap_err(),
        AtomSpaceError::EmptyOutgoing
    );
}

#[test]
fn test_link_keeps_order_and_slot() {
    let mut space = AtomSpace::new(8, 4);
    let a = space.create_node(AtomType::ConceptNode, "A", tv()).unwrap();
    let b = space.create_node(AtomType::ConceptNode, "B", tv()).unwrap();
    let c = space.create_node(AtomType::ConceptNode, "C", tv()).unwrap();
    let list = space.create_link(AtomType::EvaluationLink, &[c, a, b], tv()).unwrap();

    let atom = space.get(list).unwrap();
    assert_eq!(atom.outgoing(), &[c, a, b]);
    assert_eq!(atom.slot(), 3);
    assert_eq!(atom.name(), None);
    assert_eq!(space.embedding(list).unwrap().len(), 4);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_duplicate_names_resolve_to_first() {
    let mut space = AtomSpace::new(4, 2);
    let first = space.create_node(AtomType::ConceptNode, "Dup", tv()).unwrap();
    let second = space.create_node(AtomType::PredicateNode, "Dup", tv()).unwrap();
    assert_ne!(first, second);
    assert_eq!(space.lookup("Dup"), Some(first));
    assert_eq!(space.lookup("Missing"), None);
}

#[test]
fn test_seeded_embeddings_repeat() {
    let a = filled(3);
    let b = filled(3);
    for slot in 0..3 {
        let id = AtomId::new(slot);
        assert_eq!(a.embedding(id), b.embedding(id));
        assert!(a.embedding(id).unwrap().iter().all(|v| (-1.0..=1.0).contains(v)));
    }
}
