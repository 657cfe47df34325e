//! Gradient noise addressed through a permutation table
//!
//! Only the gradient lookup differs from [`SimpleNoise`]: lattice points are
//! hashed through a [`PermutationTable`], so any integer coordinate maps to
//! a gradient and the field tiles with a period of 256 lattice cells.

use crate::{gradient::GradientField, permutation::PermutationTable, simple::SimpleNoise};
use perlin_core::{GradientVector, NoiseKernel, Result};
use std::sync::Arc;

/// Permutation-hashed gradient noise sharing a simple kernel's gradients
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovedNoise {
    field: Arc<GradientField>,
    frequency: f64,
    permutation: PermutationTable,
}

impl ImprovedNoise {
    /// Build from a simple kernel, shuffling a table from its seed
    pub fn new(base: &SimpleNoise) -> Self {
        Self {
            field: Arc::clone(base.field()),
            frequency: base.frequency(),
            permutation: PermutationTable::shuffled(base.seed()),
        }
    }

    /// Build from a simple kernel with an explicit table
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `table` is not a valid 512-entry
    /// permutation table.
    pub fn with_table(base: &SimpleNoise, table: Vec<usize>) -> Result<Self> {
        Ok(Self {
            field: Arc::clone(base.field()),
            frequency: base.frequency(),
            permutation: PermutationTable::from_vec(table)?,
        })
    }

    /// The permutation table used for gradient lookup
    pub fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// The shared gradient field
    pub fn field(&self) -> &Arc<GradientField> {
        &self.field
    }

    /// All gradients in row-major order
    pub fn gradients(&self) -> &[GradientVector] {
        self.field.as_slice()
    }
}

impl NoiseKernel for ImprovedNoise {
    fn width(&self) -> usize {
        self.field.width()
    }

    fn height(&self) -> usize {
        self.field.height()
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn seed(&self) -> u64 {
        self.field.seed()
    }

    // Fields smaller than 256 entries are reused cyclically
    fn gradient(&self, x: i64, y: i64) -> Result<GradientVector> {
        Ok(self.field.wrapped(self.permutation.hash(x, y)))
    }

    fn name(&self) -> &'static str {
        "improved"
    }
}
