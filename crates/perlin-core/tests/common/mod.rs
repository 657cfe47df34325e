//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use perlin_core::{GradientVector, NoiseKernel, Result};

pub const EPSILON: f64 = 1e-12;

/// Kernel with the same gradient at every lattice point
pub struct UniformKernel {
    pub gradient: GradientVector,
    pub frequency: f64,
}

impl NoiseKernel for UniformKernel {
    fn width(&self) -> usize {
        16
    }

    fn height(&self) -> usize {
        16
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn seed(&self) -> u64 {
        0
    }

    fn gradient(&self, _x: i64, _y: i64) -> Result<GradientVector> {
        Ok(self.gradient)
    }
}

/// Special extents for batch evaluation
pub fn edge_case_extents() -> Vec<(i64, i64)> {
    vec![
        (0, 0), // Empty
        (0, 5), // No columns
        (5, 0), // Empty columns
        (1, 1), // Single cell
        (3, 7), // Non-square
        (16, 16),
    ]
}
