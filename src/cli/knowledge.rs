//! Knowledge-base file
//!
//! ```json
//! {"atoms": [
//!   {"node": {"type": "ConceptNode", "name": "Dog", "tv": {"strength": 0.9, "confidence": 0.8, "count": 10}}},
//!   {"node": {"type": "ConceptNode", "name": "Mammal"}},
//!   {"link": {"type": "InheritanceLink", "outgoing": ["Dog", "Mammal"]}}
//! ]}
//! ```
//!
//! Outgoing entries are node names or slot indices and must refer to atoms
//! declared earlier in the file. A missing `tv` means
//! [`TruthValue::default_belief`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::atomspace::{AtomId, AtomSpace, AtomType};
use crate::observability::{log_event_with_fields, Event};
use crate::truth::TruthValue;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub atoms: Vec<AtomDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomDecl {
    Node(NodeDecl),
    Link(LinkDecl),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDecl {
    #[serde(rename = "type")]
    pub atom_type: AtomType,
    pub name: String,
    #[serde(default)]
    pub tv: Option<TruthValue>,
    #[serde(default)]
    pub payload: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDecl {
    #[serde(rename = "type")]
    pub atom_type: AtomType,
    pub outgoing: Vec<AtomRef>,
    #[serde(default)]
    pub tv: Option<TruthValue>,
    #[serde(default)]
    pub payload: Option<Value>,
}

/// Reference to an earlier atom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AtomRef {
    Slot(usize),
    Name(String),
}

impl KnowledgeBase {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::knowledge_base_error(format!("Failed to read knowledge base: {}", e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> CliResult<Self> {
        serde_json::from_str(content).map_err(|e| {
            CliError::knowledge_base_error(format!("Invalid knowledge base JSON: {}", e))
        })
    }

    /// Insert every declaration into `space`, in file order.
    ///
    /// Stops at the first failure; atoms inserted before it stay in the
    /// store.
    pub fn load_into(&self, space: &mut AtomSpace) -> CliResult<Vec<AtomId>> {
        let mut ids = Vec::with_capacity(self.atoms.len());

        for (position, decl) in self.atoms.iter().enumerate() {
            let id = match decl {
                AtomDecl::Node(node) => {
                    let id = space.create_node(
                        node.atom_type,
                        node.name.as_str(),
                        node.tv.unwrap_or_else(TruthValue::default_belief),
                    )?;
                    if node.payload.is_some() {
                        space.set_payload(id, node.payload.clone())?;
                    }
                    id
                }
                AtomDecl::Link(link) => {
                    let outgoing = link
                        .outgoing
                        .iter()
                        .map(|r| resolve(space, r, position))
                        .collect::<CliResult<Vec<_>>>()?;
                    let id = space.create_link(
                        link.atom_type,
                        &outgoing,
                        link.tv.unwrap_or_else(TruthValue::default_belief),
                    )?;
                    if link.payload.is_some() {
                        space.set_payload(id, link.payload.clone())?;
                    }
                    id
                }
            };
            ids.push(id);
        }

        log_event_with_fields(
            Event::KnowledgeBaseLoaded,
            &[
                ("declared", self.atoms.len().to_string().as_str()),
                ("atoms", space.len().to_string().as_str()),
            ],
        );

        Ok(ids)
    }
}

fn resolve(space: &AtomSpace, reference: &AtomRef, position: usize) -> CliResult<AtomId> {
    match reference {
        AtomRef::Slot(slot) => Ok(AtomId::new(*slot)),
        AtomRef::Name(name) => space.lookup(name).ok_or_else(|| {
            CliError::knowledge_base_error(format!(
                "Atom {} references unknown name '{}'",
                position, name
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZOO: &str = r#"{"atoms": [
        {"node": {"type": "ConceptNode", "name": "Dog", "tv": {"strength": 0.9, "confidence": 0.8, "count": 10}}},
        {"node": {"type": "ConceptNode", "name": "Mammal", "payload": {"source": "wiki"}}},
        {"link": {"type": "InheritanceLink", "outgoing": ["Dog", 1]}}
    ]}"#;

    #[test]
    fn test_parse_and_load() {
        let kb = KnowledgeBase::parse(ZOO).unwrap();
        let mut space = AtomSpace::new(10, 4);
        let ids = kb.load_into(&mut space).unwrap();

        assert_eq!(ids.len(), 3);
        let dog = space.get(ids[0]).unwrap();
        assert_eq!(dog.tv().count(), 10.0);

        let mammal = space.get(ids[1]).unwrap();
        assert_eq!(mammal.tv(), TruthValue::default_belief());
        assert_eq!(mammal.payload().unwrap()["source"], "wiki");

        let link = space.get(ids[2]).unwrap();
        assert_eq!(link.outgoing(), &[ids[0], ids[1]]);
    }

    #[test]
    fn test_unknown_name_fails() {
        let kb = KnowledgeBase::parse(
            r#"{"atoms": [{"link": {"type": "InheritanceLink", "outgoing": ["Ghost", "Ghost"]}}]}"#,
        )
        .unwrap();
        let mut space = AtomSpace::new(10, 4);
        let err = kb.load_into(&mut space).unwrap_err();
        assert!(err.message().contains("Ghost"));
        assert!(space.is_empty());
    }

    #[test]
    fn test_forward_slot_reference_fails() {
        let kb = KnowledgeBase::parse(
            r#"{"atoms": [
                {"node": {"type": "ConceptNode", "name": "A"}},
                {"link": {"type": "InheritanceLink", "outgoing": [0, 5]}}
            ]}"#,
        )
        .unwrap();
        let mut space = AtomSpace::new(10, 4);
        assert!(kb.load_into(&mut space).is_err());
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_capacity_reported() {
        let kb = KnowledgeBase::parse(ZOO).unwrap();
        let mut space = AtomSpace::new(2, 4);
        let err = kb.load_into(&mut space).unwrap_err();
        assert!(err.message().contains("ATOMSPACE_FULL"));
    }

    #[test]
    fn test_invalid_type_rejected() {
        assert!(KnowledgeBase::parse(
            r#"{"atoms": [{"node": {"type": "Thing", "name": "A"}}]}"#
        )
        .is_err());
    }
}
