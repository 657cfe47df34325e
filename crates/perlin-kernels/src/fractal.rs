//! Multi-octave fractal composition
//!
//! Sums `octaves` layers of an inner kernel. Octave `i` samples at
//! frequency `f_i = frequency * lacunarity^i` with weight
//! `a_i = amplitude * persistence^i`:
//!
//! ```text
//! compute(x, y) = sum_i inner.compute(x * f_i, y * f_i) * a_i
//! ```

use perlin_core::{FractalParams, GradientVector, NoiseKernel, Result};

/// Decorator summing several frequency bands of an inner kernel
#[derive(Debug, Clone, PartialEq)]
pub struct FractalNoise<K> {
    inner: K,
    params: FractalParams,
}

impl<K: NoiseKernel> FractalNoise<K> {
    /// Wrap `inner` with the given octave parameters
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `octaves < 1` or a multiplier is not finite.
    pub fn new(inner: K, params: FractalParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { inner, params })
    }

    /// The wrapped kernel
    pub fn inner(&self) -> &K {
        &self.inner
    }

    /// Octave parameters
    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// `(frequency, amplitude)` of every octave
    pub fn octaves(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let FractalParams {
            amplitude,
            octaves,
            persistence,
            lacunarity,
        } = self.params;
        std::iter::successors(Some((self.inner.frequency(), amplitude)), move |&(f, a)| {
            Some((f * lacunarity, a * persistence))
        })
        .take(octaves as usize)
    }
}

impl<K: NoiseKernel> NoiseKernel for FractalNoise<K> {
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
        let mut total = 0.0;
        for (f, a) in self.octaves() {
            total += self.inner.compute(x * f, y * f)? * a;
        }
        Ok(total)
    }

    // Each octave applies its own frequency
    fn compute_at(&self, x: i64, y: i64) -> Result<f64> {
        self.compute(x as f64, y as f64)
    }

    fn amplitude_bound(&self) -> f64 {
        let weights: f64 = self.octaves().map(|(_, a)| a.abs()).sum();
        weights * self.inner.amplitude_bound()
    }

    fn name(&self) -> &'static str {
        "fractal"
    }
}
