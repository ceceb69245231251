//! AtomSpace error types
//!
//! Error codes:
//! - ATOMSPACE_FULL
//! - ATOMSPACE_EMPTY_OUTGOING
//! - ATOMSPACE_DANGLING_REFERENCE
//! - ATOMSPACE_UNKNOWN_ATOM
//! - ATOMSPACE_EMBEDDING_WIDTH
//! - ATOMSPACE_EMBEDDING_ALLOC

use thiserror::Error;

use super::atom::AtomId;

/// Result type for store operations
pub type AtomSpaceResult<T> = Result<T, AtomSpaceError>;

/// Store errors. A failed call never mutates the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtomSpaceError {
    /// No free slot left
    #[error("AtomSpace full: capacity {capacity} reached")]
    Full { capacity: usize },

    /// A link needs at least one outgoing atom
    #[error("Link must reference at least one atom")]
    EmptyOutgoing,

    /// Outgoing reference points past the live atoms
    #[error("Atom {id} is not in the store ({len} atoms)")]
    DanglingReference { id: AtomId, len: usize },

    /// Lookup by id on a slot that holds no atom
    #[error("Unknown atom {0}")]
    UnknownAtom(AtomId),

    /// Embedding write with the wrong width
    #[error("Embedding width mismatch: expected {expected}, got {actual}")]
    EmbeddingWidth { expected: usize, actual: usize },

    /// Embedding row could not be allocated
    #[error("Cannot allocate an embedding row of width {dim}")]
    EmbeddingAlloc { dim: usize },
}

impl AtomSpaceError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AtomSpaceError::Full { .. } => "ATOMSPACE_FULL",
            AtomSpaceError::EmptyOutgoing => "ATOMSPACE_EMPTY_OUTGOING",
            AtomSpaceError::DanglingReference { .. } => "ATOMSPACE_DANGLING_REFERENCE",
            AtomSpaceError::UnknownAtom(_) => "ATOMSPACE_UNKNOWN_ATOM",
            AtomSpaceError::EmbeddingWidth { .. } => "ATOMSPACE_EMBEDDING_WIDTH",
            AtomSpaceError::EmbeddingAlloc { .. } => "ATOMSPACE_EMBEDDING_ALLOC",
        }
    }

    /// Capacity exhaustion is the only error callers are expected to hit
    /// in normal operation.
    pub fn is_full(&self) -> bool {
        matches!(self, AtomSpaceError::Full { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AtomSpaceError::Full { capacity: 1 }.code(), "ATOMSPACE_FULL");
        assert_eq!(AtomSpaceError::EmptyOutgoing.code(), "ATOMSPACE_EMPTY_OUTGOING");
        assert_eq!(
            AtomSpaceError::UnknownAtom(AtomId::new(3)).code(),
            "ATOMSPACE_UNKNOWN_ATOM"
        );
    }

    #[test]
    fn test_error_display() {
        let err = AtomSpaceError::DanglingReference {
            id: AtomId::new(9),
            len: 2,
        };
        let display = format!("{}", err);
        assert!(display.contains("#9"));
        assert!(display.contains("2 atoms"));
    }

    #[test]
    fn test_is_full() {
        assert!(AtomSpaceError::Full { capacity: 0 }.is_full());
        assert!(!AtomSpaceError::EmptyOutgoing.is_full());
    }
}
