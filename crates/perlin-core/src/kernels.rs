//! Noise kernel trait
//!
//! This module provides the capability every noise kernel implements.
//! Concrete kernels live in `perlin-kernels`; decorators wrap exactly one
//! inner kernel and forward everything except `compute`.
//!
//! # Design Philosophy
//!
//! - **Overridable lookup**: The interpolation algorithm is a provided method
//!   built on [`NoiseKernel::gradient`], so kernels that differ only in how
//!   they address gradients share the rest verbatim
//! - **Composable**: Any kernel can be wrapped by any decorator
//! - **Fallible**: Lookups outside the gradient domain are reported, not clamped

use crate::{
    math::{self, GradientVector},
    Result,
};

/// Base trait for all gradient noise kernels
pub trait NoiseKernel: Send + Sync {
    /// Width of the noise domain
    fn width(&self) -> usize;

    /// Height of the noise domain
    fn height(&self) -> usize;

    /// Sampling frequency applied to integer coordinates
    fn frequency(&self) -> f64;

    /// Seed the gradients were generated from
    fn seed(&self) -> u64;

    /// Gradient at lattice point `(x, y)`
    fn gradient(&self, x: i64, y: i64) -> Result<GradientVector>;

    /// Fade curve applied to interpolation weights
    #[inline]
    fn fade(&self, t: f64) -> f64 {
        math::fade(t)
    }

    /// Interpolate between `a` and `b` by `alpha`
    #[inline]
    fn interpolate(&self, a: f64, b: f64, alpha: f64) -> f64 {
        math::lerp(a, b, alpha)
    }

    /// Noise value at a point already scaled into lattice space
    ///
    /// The default blends the dot products of the four surrounding corner
    /// gradients with their offset vectors, first along x then along y.
    fn compute(&self, x: f64, y: f64) -> Result<f64> {
        let x0f = x.floor();
        let y0f = y.floor();
        let x0 = x0f as i64;
        let y0 = y0f as i64;
        let x1 = x0 + 1;
        let y1 = y0 + 1;

        let dx = x - x0f;
        let dy = y - y0f;

        let g00 = self.gradient(x0, y0)?;
        let g01 = self.gradient(x0, y1)?;
        let g10 = self.gradient(x1, y0)?;
        let g11 = self.gradient(x1, y1)?;

        let dot00 = g00.dot(dx, dy);
        let dot01 = g01.dot(dx, dy - 1.0);
        let dot10 = g10.dot(dx - 1.0, dy);
        let dot11 = g11.dot(dx - 1.0, dy - 1.0);

        let u = self.fade(dx);
        let v = self.fade(dy);

        let bottom = self.interpolate(dot00, dot10, u);
        let top = self.interpolate(dot01, dot11, u);
        Ok(self.interpolate(bottom, top, v))
    }

    /// Noise value at an integer domain coordinate
    ///
    /// Scales by [`NoiseKernel::frequency`] before sampling.
    fn compute_at(&self, x: i64, y: i64) -> Result<f64> {
        let frequency = self.frequency();
        self.compute(x as f64 * frequency, y as f64 * frequency)
    }

    /// Whether output is already rescaled into `[0, 1]`
    fn is_normalized(&self) -> bool {
        false
    }

    /// Nominal magnitude of raw output, used for normalization
    fn amplitude_bound(&self) -> f64 {
        1.0
    }

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<K: NoiseKernel + ?Sized> NoiseKernel for &K {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn frequency(&self) -> f64 {
        (**self).frequency()
    }

    fn seed(&self) -> u64 {
        (**self).seed()
    }

    fn gradient(&self, x: i64, y: i64) -> Result<GradientVector> {
        (**self).gradient(x, y)
    }

    fn fade(&self, t: f64) -> f64 {
        (**self).fade(t)
    }

    fn interpolate(&self, a: f64, b: f64, alpha: f64) -> f64 {
        (**self).interpolate(a, b, alpha)
    }

    fn compute(&self, x: f64, y: f64) -> Result<f64> {
        (**self).compute(x, y)
    }

    fn compute_at(&self, x: i64, y: i64) -> Result<f64> {
        (**self).compute_at(x, y)
    }

    fn is_normalized(&self) -> bool {
        (**self).is_normalized()
    }

    fn amplitude_bound(&self) -> f64 {
        (**self).amplitude_bound()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
