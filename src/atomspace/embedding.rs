//! Embedding slot table
//!
//! Row-major block of f32, one row per bound atom slot. A row is seeded
//! uniformly in [-1, 1] when its slot is bound and is otherwise opaque to
//! the logic engine. Rows are bound in slot order, so a fixed seed gives the
//! same vectors for the same slots.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use super::atom::AtomId;
use super::errors::{AtomSpaceError, AtomSpaceResult};

/// Largest `capacity * embedding_dim` a configuration may ask for (1 GiB of
/// f32).
pub const MAX_EMBEDDING_CELLS: usize = 1 << 28;

/// Fixed-width vector slots, addressable by index
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    dim: usize,
    slots: usize,
    bound: usize,
    rng: StdRng,
    data: Vec<f32>,
}

impl EmbeddingTable {
    /// Reserve `slots` rows of width `dim`. No row memory is allocated
    /// until [`EmbeddingTable::bind_next`].
    pub fn new(slots: usize, dim: usize, rng: StdRng) -> Self {
        Self {
            dim,
            slots,
            bound: 0,
            rng,
            data: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Rows bound so far
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Seed the next row and return its slot.
    ///
    /// Fails without touching the table when every slot is bound or the row
    /// cannot be allocated.
    pub fn bind_next(&mut self) -> AtomSpaceResult<usize> {
        let slot = self.bound;
        if slot >= self.slots {
            return Err(AtomSpaceError::Full {
                capacity: self.slots,
            });
        }
        self.data
            .try_reserve(self.dim)
            .map_err(|_| AtomSpaceError::EmbeddingAlloc { dim: self.dim })?;

        let uniform = Uniform::new_inclusive(-1.0f32, 1.0f32);
        let Self { dim, rng, data, .. } = self;
        data.extend((0..*dim).map(|_| uniform.sample(&mut *rng)));
        self.bound += 1;
        Ok(slot)
    }

    pub fn row(&self, slot: usize) -> Option<&[f32]> {
        let start = self.row_start(slot)?;
        Some(&self.data[start..start + self.dim])
    }

    pub fn row_mut(&mut self, slot: usize) -> Option<&mut [f32]> {
        let start = self.row_start(slot)?;
        Some(&mut self.data[start..start + self.dim])
    }

    /// Overwrite a whole row. `values` must be exactly `dim` wide.
    pub fn assign(&mut self, slot: usize, values: &[f32]) -> AtomSpaceResult<()> {
        let dim = self.dim;
        if values.len() != dim {
            return Err(AtomSpaceError::EmbeddingWidth {
                expected: dim,
                actual: values.len(),
            });
        }
        match self.row_mut(slot) {
            Some(row) => {
                row.copy_from_slice(values);
                Ok(())
            }
            None => Err(AtomSpaceError::UnknownAtom(AtomId::new(slot))),
        }
    }

    fn row_start(&self, slot: usize) -> Option<usize> {
        if slot >= self.bound {
            return None;
        }
        Some(slot * self.dim)
    }
}
