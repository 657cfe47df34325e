//! Classic gradient noise addressed directly into a bordered field

use crate::gradient::GradientField;
use perlin_core::{validate_frequency, GradientVector, NoiseKernel, Result};
use std::sync::Arc;

/// Bilinearly interpolated gradient noise over a [`GradientField`]
///
/// Frequency scales integer coordinates into lattice space. With a
/// frequency of at most one, every integer coordinate of the domain lands
/// inside the field.
///
/// # Example
///
/// ```rust
/// use perlin_core::NoiseKernel;
/// use perlin_kernels::SimpleNoise;
///
/// let noise = SimpleNoise::new(64, 64, 0.1, 42).unwrap();
/// assert_eq!(noise.compute(3.0, 5.0).unwrap(), 0.0);
/// let value = noise.compute_at(12, 7).unwrap();
/// assert!(value.abs() <= 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleNoise {
    field: Arc<GradientField>,
    frequency: f64,
}

impl SimpleNoise {
    /// Generate a fresh field and wrap it
    ///
    /// The frequency is checked before any gradient is generated.
    pub fn new(width: usize, height: usize, frequency: f64, seed: u64) -> Result<Self> {
        validate_frequency(frequency)?;
        Self::from_field(Arc::new(GradientField::generate(width, height, seed)?), frequency)
    }

    /// Wrap an existing, possibly shared, field
    pub fn from_field(field: Arc<GradientField>, frequency: f64) -> Result<Self> {
        validate_frequency(frequency)?;
        Ok(Self { field, frequency })
    }

    /// Same gradients sampled at a different frequency
    pub fn with_frequency(&self, frequency: f64) -> Result<Self> {
        Self::from_field(Arc::clone(&self.field), frequency)
    }

    /// The underlying gradient field
    pub fn field(&self) -> &Arc<GradientField> {
        &self.field
    }

    /// All gradients in row-major order
    pub fn gradients(&self) -> &[GradientVector] {
        self.field.as_slice()
    }
}

impl NoiseKernel for SimpleNoise {
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

    fn gradient(&self, x: i64, y: i64) -> Result<GradientVector> {
        self.field.get(x, y)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
