//! Atom types and the atom record

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::truth::TruthValue;

/// Store-relative atom handle.
///
/// The wrapped index is the atom's slot: its position in insertion order
/// and its row in the embedding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomId(usize);

impl AtomId {
    /// Wrap a slot index. The id is only meaningful for the store that
    /// produced it; stores validate ids before using them.
    pub fn new(index: usize) -> Self {
        AtomId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed set of atom kinds.
///
/// Ordinals follow declaration order and are visible through
/// [`AtomType::ordinal`]; nothing is persisted, so they carry no
/// compatibility promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AtomType {
    ConceptNode,
    PredicateNode,
    LinkNode,
    InheritanceLink,
    SimilarityLink,
    ImplicationLink,
    EvaluationLink,
}

impl AtomType {
    /// Number of atom types (the sentinel count)
    pub const COUNT: usize = 7;

    /// All types in ordinal order
    pub const ALL: [AtomType; AtomType::COUNT] = [
        AtomType::ConceptNode,
        AtomType::PredicateNode,
        AtomType::LinkNode,
        AtomType::InheritanceLink,
        AtomType::SimilarityLink,
        AtomType::ImplicationLink,
        AtomType::EvaluationLink,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AtomType::ConceptNode => "ConceptNode",
            AtomType::PredicateNode => "PredicateNode",
            AtomType::LinkNode => "LinkNode",
            AtomType::InheritanceLink => "InheritanceLink",
            AtomType::SimilarityLink => "SimilarityLink",
            AtomType::ImplicationLink => "ImplicationLink",
            AtomType::EvaluationLink => "EvaluationLink",
        }
    }

    /// True for the relationship types conventionally built with
    /// `create_link`. The store does not enforce the convention.
    pub fn is_link_type(self) -> bool {
        matches!(
            self,
            AtomType::InheritanceLink
                | AtomType::SimilarityLink
                | AtomType::ImplicationLink
                | AtomType::EvaluationLink
        )
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtomType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown atom type: '{}'", s))
    }
}

/// Node or link payload of an atom
#[derive(Debug, Clone, PartialEq)]
pub enum AtomShape {
    /// Named node, no outgoing set
    Node { name: String },
    /// Ordered outgoing set, never empty
    Link { outgoing: Vec<AtomId> },
}

/// A typed node or link with its truth value
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    atom_type: AtomType,
    shape: AtomShape,
    tv: TruthValue,
    slot: usize,
    payload: Option<Value>,
}

impl Atom {
    pub(crate) fn node(atom_type: AtomType, name: String, tv: TruthValue, slot: usize) -> Self {
        Self {
            atom_type,
            shape: AtomShape::Node { name },
            tv,
            slot,
            payload: None,
        }
    }

    pub(crate) fn link(
        atom_type: AtomType,
        outgoing: Vec<AtomId>,
        tv: TruthValue,
        slot: usize,
    ) -> Self {
        Self {
            atom_type,
            shape: AtomShape::Link { outgoing },
            tv,
            slot,
            payload: None,
        }
    }

    pub fn atom_type(&self) -> AtomType {
        self.atom_type
    }

    pub fn shape(&self) -> &AtomShape {
        &self.shape
    }

    /// Node name; `None` for links
    pub fn name(&self) -> Option<&str> {
        match &self.shape {
            AtomShape::Node { name } => Some(name),
            AtomShape::Link { .. } => None,
        }
    }

    /// Outgoing set; empty for nodes
    pub fn outgoing(&self) -> &[AtomId] {
        match &self.shape {
            AtomShape::Node { .. } => &[],
            AtomShape::Link { outgoing } => outgoing,
        }
    }

    pub fn arity(&self) -> usize {
        self.outgoing().len()
    }

    pub fn is_node(&self) -> bool {
        matches!(self.shape, AtomShape::Node { .. })
    }

    pub fn is_link(&self) -> bool {
        matches!(self.shape, AtomShape::Link { .. })
    }

    /// True when this is a binary link of the given type
    pub fn is_binary(&self, atom_type: AtomType) -> bool {
        self.atom_type == atom_type && self.is_link() && self.arity() == 2
    }

    pub fn tv(&self) -> TruthValue {
        self.tv
    }

    /// Embedding slot (equal to the atom's id index)
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Opaque extension data; the core never reads it
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub(crate) fn set_tv(&mut self, tv: TruthValue) {
        self.tv = tv;
    }

    pub(crate) fn set_payload(&mut self, payload: Option<Value>) {
        self.payload = payload;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ordinals_follow_declaration() {
        for (i, t) in AtomType::ALL.iter().enumerate() {
            assert_eq!(t.ordinal(), i);
        }
        assert_eq!(AtomType::ALL.len(), AtomType::COUNT);
    }

    #[test]
    fn test_type_parse_roundtrips_names() {
        for t in AtomType::ALL {
            assert_eq!(t.as_str().parse::<AtomType>().unwrap(), t);
        }
        assert!("Concept".parse::<AtomType>().is_err());
    }

    #[test]
    fn test_link_types() {
        assert!(AtomType::InheritanceLink.is_link_type());
        assert!(AtomType::ImplicationLink.is_link_type());
        assert!(!AtomType::ConceptNode.is_link_type());
        assert!(!AtomType::LinkNode.is_link_type());
    }

    #[test]
    fn test_node_accessors() {
        let atom = Atom::node(AtomType::ConceptNode, "Dog".into(), TruthValue::default_belief(), 0);
        assert_eq!(atom.name(), Some("Dog"));
        assert!(atom.outgoing().is_empty());
        assert!(atom.is_node());
        assert_eq!(atom.arity(), 0);
    }

    #[test]
    fn test_link_accessors() {
        let outgoing = vec![AtomId::new(0), AtomId::new(1)];
        let atom = Atom::link(
            AtomType::InheritanceLink,
            outgoing.clone(),
            TruthValue::default_belief(),
            2,
        );
        assert_eq!(atom.name(), None);
        assert_eq!(atom.outgoing(), outgoing.as_slice());
        assert!(atom.is_binary(AtomType::InheritanceLink));
        assert!(!atom.is_binary(AtomType::ImplicationLink));
        assert_eq!(atom.slot(), 2);
    }

    #[test]
    fn test_atom_id_serializes_as_index() {
        assert_eq!(serde_json::to_value(AtomId::new(4)).unwrap(), serde_json::json!(4));
    }
}
