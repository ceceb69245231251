//! The AtomSpace arena

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::truth::TruthValue;

use super::atom::{Atom, AtomId, AtomType};
use super::embedding::EmbeddingTable;
use super::errors::{AtomSpaceError, AtomSpaceResult};

/// Bounded, append-only store of atoms.
///
/// `atoms[0..len)` is the live set; an atom's position is its [`AtomId`]
/// and its embedding row. Dropping the store releases every atom and the
/// embedding block together.
#[derive(Debug)]
pub struct AtomSpace {
    atoms: Vec<Atom>,
    capacity: usize,
    embeddings: EmbeddingTable,
}

impl AtomSpace {
    /// Create an empty store with `capacity` slots of width `embedding_dim`.
    ///
    /// Embedding rows are seeded from OS entropy as atoms take their slots;
    /// nothing is allocated up front.
    pub fn new(capacity: usize, embedding_dim: usize) -> Self {
        Self::with_rng(capacity, embedding_dim, StdRng::from_entropy())
    }

    /// Same as [`AtomSpace::new`] with reproducible embedding seeding
    pub fn with_seed(capacity: usize, embedding_dim: usize, seed: u64) -> Self {
        Self::with_rng(capacity, embedding_dim, StdRng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, embedding_dim: usize, rng: StdRng) -> Self {
        let space = Self {
            atoms: Vec::new(),
            capacity,
            embeddings: EmbeddingTable::new(capacity, embedding_dim, rng),
        };

        log_event_with_fields(
            Event::AtomSpaceInit,
            &[
                ("capacity", capacity.to_string().as_str()),
                ("embedding_dim", embedding_dim.to_string().as_str()),
            ],
        );

        space
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn embedding_dim(&self) -> usize {
        self.embeddings.dim()
    }

    /// Number of live atoms
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.atoms.len() >= self.capacity
    }

    /// Append a named node.
    ///
    /// Names are not deduplicated; check with [`AtomSpace::lookup`] first
    /// if uniqueness matters.
    pub fn create_node(
        &mut self,
        atom_type: AtomType,
        name: impl Into<String>,
        tv: TruthValue,
    ) -> AtomSpaceResult<AtomId> {
        self.ensure_room()?;

        let slot = self.embeddings.bind_next()?;
        self.atoms.push(Atom::node(atom_type, name.into(), tv, slot));
        Ok(AtomId::new(slot))
    }

    /// Append a link over `outgoing`, copying the reference list.
    ///
    /// Every outgoing id must already be live in this store.
    pub fn create_link(
        &mut self,
        atom_type: AtomType,
        outgoing: &[AtomId],
        tv: TruthValue,
    ) -> AtomSpaceResult<AtomId> {
        self.ensure_room()?;

        if outgoing.is_empty() {
            return Err(AtomSpaceError::EmptyOutgoing);
        }
        if let Some(&id) = outgoing.iter().find(|id| id.index() >= self.atoms.len()) {
            return Err(AtomSpaceError::DanglingReference {
                id,
                len: self.atoms.len(),
            });
        }

        let slot = self.embeddings.bind_next()?;
        self.atoms
            .push(Atom::link(atom_type, outgoing.to_vec(), tv, slot));
        Ok(AtomId::new(slot))
    }

    /// Binary link `from -> to`
    pub fn add_link(
        &mut self,
        from: AtomId,
        to: AtomId,
        link_type: AtomType,
        tv: TruthValue,
    ) -> AtomSpaceResult<AtomId> {
        self.create_link(link_type, &[from, to], tv)
    }

    /// First atom (in slot order) whose name equals `name`
    pub fn lookup(&self, name: &str) -> Option<AtomId> {
        self.atoms
            .iter()
            .position(|atom| atom.name() == Some(name))
            .map(AtomId::new)
    }

    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.index())
    }

    pub fn contains(&self, id: AtomId) -> bool {
        id.index() < self.atoms.len()
    }

    pub fn truth_value(&self, id: AtomId) -> Option<TruthValue> {
        self.get(id).map(Atom::tv)
    }

    /// Overwrite an atom's truth value in place (a revision)
    pub fn set_truth_value(&mut self, id: AtomId, tv: TruthValue) -> AtomSpaceResult<()> {
        self.get_mut(id)?.set_tv(tv);
        Ok(())
    }

    /// Attach or clear opaque extension data
    pub fn set_payload(&mut self, id: AtomId, payload: Option<Value>) -> AtomSpaceResult<()> {
        self.get_mut(id)?.set_payload(payload);
        Ok(())
    }

    /// Embedding row bound to a live atom
    pub fn embedding(&self, id: AtomId) -> Option<&[f32]> {
        if !self.contains(id) {
            return None;
        }
        self.embeddings.row(id.index())
    }

    pub fn embedding_mut(&mut self, id: AtomId) -> Option<&mut [f32]> {
        if !self.contains(id) {
            return None;
        }
        self.embeddings.row_mut(id.index())
    }

    /// Replace a live atom's embedding row; `values` must be
    /// `embedding_dim` wide
    pub fn set_embedding(&mut self, id: AtomId, values: &[f32]) -> AtomSpaceResult<()> {
        if !self.contains(id) {
            return Err(AtomSpaceError::UnknownAtom(id));
        }
        self.embeddings.assign(id.index(), values)
    }

    /// Live atoms in slot order
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> + '_ {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (AtomId::new(i), atom))
    }

    fn get_mut(&mut self, id: AtomId) -> AtomSpaceResult<&mut Atom> {
        self.atoms
            .get_mut(id.index())
            .ok_or(AtomSpaceError::UnknownAtom(id))
    }

    fn ensure_room(&self) -> AtomSpaceResult<()> {
        if self.is_full() {
            return Err(AtomSpaceError::Full {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
