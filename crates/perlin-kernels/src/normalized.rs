//! Output normalization into `[0, 1]`
//!
//! Raw output `v` of a kernel with nominal bound `b` maps to
//! `clamp((v / b + 1) / 2, 0, 1)`, so a raw zero lands on `0.5`.
//! Wrapping an already normalized kernel never compresses twice.

use perlin_core::{GradientVector, NoiseKernel, Result};

/// Decorator rescaling an inner kernel's output into `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedNoise<K> {
    inner: K,
}

impl<K: NoiseKernel> NormalizedNoise<K> {
    /// Wrap `inner`
    pub fn new(inner: K) -> Self {
        Self { inner }
    }

    /// The wrapped kernel
    pub fn inner(&self) -> &K {
        &self.inner
    }

    /// Consume the wrapper and return the inner kernel
    pub fn into_inner(self) -> K {
        self.inner
    }

    fn rescale(&self, raw: f64) -> f64 {
        if self.inner.is_normalized() {
            return raw;
        }
        let bound = self.inner.amplitude_bound();
        if !(bound > 0.0 && bound.is_finite()) {
            return 0.5;
        }
        ((raw / bound + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl<K: NoiseKernel> NoiseKernel for NormalizedNoise<K> {
    fn width(&self) -> usize {
        self.inner.width()
    }

    fn height(&self) -> usize {
        self.inner.height()
    }

    fn frequency(&self) -> f64 {
        self.inner.frequency()
    }

    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    fn gradient(&self, x: i64, y: i64) -> Result<GradientVector> {
        self.inner.gradient(x, y)
    }

    fn fade(&self, t: f64) -> f64 {
        self.inner.fade(t)
    }

    fn interpolate(&self, a: f64, b: f64, alpha: f64) -> f64 {
        self.inner.interpolate(a, b, alpha)
    }

    fn compute(&self, x: f64, y: f64) -> Result<f64> {
        Ok(self.rescale(self.inner.compute(x, y)?))
    }

    fn compute_at(&self, x: i64, y: i64) -> Result<f64> {
        Ok(self.rescale(self.inner.compute_at(x, y)?))
    }

    fn is_normalized(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "normalized"
    }
}
