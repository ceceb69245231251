//! AtomSpace: the bounded hypergraph store
//!
//! The store owns a single arena of atoms. Insertion order is the slot index,
//! and the slot index is also the row of the atom's embedding vector.
//!
//! # Invariants
//!
//! - `0 <= len <= capacity`; creation beyond capacity is refused with
//!   [`AtomSpaceError::Full`] and leaves the store untouched
//! - link outgoing sets only reference atoms already in the store
//! - atoms are never removed, so no [`AtomId`] ever dangles
//! - nodes and links share one slot numbering space

mod atom;
mod embedding;
mod errors;
mod space;

pub use atom::{Atom, AtomId, AtomShape, AtomType};
pub use embedding::{EmbeddingTable, MAX_EMBEDDING_CELLS};
pub use errors::{AtomSpaceError, AtomSpaceResult};
pub use space::AtomSpace;
