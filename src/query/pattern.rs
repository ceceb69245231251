//! Query patterns

use serde::{Deserialize, Serialize};

use crate::atomspace::{Atom, AtomType};

/// What a query matches on: the atom type only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub atom_type: AtomType,
}

impl Pattern {
    pub fn of_type(atom_type: AtomType) -> Self {
        Self { atom_type }
    }
}

/// Use an existing atom as a pattern. Its name, outgoing set and truth
/// value are ignored.
impl From<&Atom> for Pattern {
    fn from(atom: &Atom) -> Self {
        Self::of_type(atom.atom_type())
    }
}

impl From<AtomType> for Pattern {
    fn from(atom_type: AtomType) -> Self {
        Self::of_type(atom_type)
    }
}
