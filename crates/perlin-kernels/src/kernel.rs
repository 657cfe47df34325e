//! Tagged kernel composition
//!
//! [`Kernel`] is the owned, cheaply clonable handle the rest of the system
//! passes around. Decorators take ownership of the kernel they wrap, so any
//! variant can be wrapped by any decorator:
//!
//! ```text
//! Simple | Improved  ->  Fractal(inner)  ->  Normalized(inner)
//! ```
//!
//! Equality compares configuration (what the kernel would output), while
//! [`Kernel::ptr_eq`] compares instance identity.

use crate::{FractalNoise, ImprovedNoise, NormalizedNoise, SimpleNoise};
use perlin_core::{FractalParams, GradientVector, NoiseKernel, Result};
use std::sync::Arc;

/// A composed noise kernel
#[derive(Debug, Clone, PartialEq)]
pub enum Kernel {
    /// Direct addressing into a bordered gradient field
    Simple(Arc<SimpleNoise>),
    /// Permutation-hashed addressing
    Improved(Arc<ImprovedNoise>),
    /// Sum of several octaves of the inner kernel
    Fractal(Arc<FractalNoise<Kernel>>),
    /// Inner output rescaled into `[0, 1]`
    Normalized(Arc<NormalizedNoise<Kernel>>),
}

impl Kernel {
    /// Build a simple kernel from scratch
    pub fn simple(width: usize, height: usize, frequency: f64, seed: u64) -> Result<Self> {
        Ok(SimpleNoise::new(width, height, frequency, seed)?.into())
    }

    /// Wrap in a fractal compositor
    pub fn fractal(self, params: FractalParams) -> Result<Self> {
        Ok(Self::Fractal(Arc::new(FractalNoise::new(self, params)?)))
    }

    /// Wrap in a normalizing decorator
    ///
    /// Returns `self` unchanged when it is already normalized.
    pub fn normalized(self) -> Self {
        if self.is_normalized() {
            return self;
        }
        Self::Normalized(Arc::new(NormalizedNoise::new(self)))
    }

    /// Whether both handles point at the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Simple(a), Self::Simple(b)) => Arc::ptr_eq(a, b),
            (Self::Improved(a), Self::Improved(b)) => Arc::ptr_eq(a, b),
            (Self::Fractal(a), Self::Fractal(b)) => Arc::ptr_eq(a, b),
            (Self::Normalized(a), Self::Normalized(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The kernel directly wrapped by a decorator
    pub fn inner(&self) -> Option<&Kernel> {
        match self {
            Self::Fractal(k) => Some(k.inner()),
            Self::Normalized(k) => Some(k.inner()),
            Self::Simple(_) | Self::Improved(_) => None,
        }
    }

    /// The undecorated kernel at the bottom of the chain
    pub fn base(&self) -> &Kernel {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }

    fn as_dyn(&self) -> &dyn NoiseKernel {
        match self {
            Self::Simple(k) => &**k,
            Self::Improved(k) => &**k,
            Self::Fractal(k) => &**k,
            Self::Normalized(k) => &**k,
        }
    }
}

impl From<SimpleNoise> for Kernel {
    fn from(kernel: SimpleNoise) -> Self {
        Self::Simple(Arc::new(kernel))
    }
}

impl From<ImprovedNoise> for Kernel {
    fn from(kernel: ImprovedNoise) -> Self {
        Self::Improved(Arc::new(kernel))
    }
}

impl From<Arc<SimpleNoise>> for Kernel {
    fn from(kernel: Arc<SimpleNoise>) -> Self {
        Self::Simple(kernel)
    }
}

impl From<Arc<ImprovedNoise>> for Kernel {
    fn from(kernel: Arc<ImprovedNoise>) -> Self {
        Self::Improved(kernel)
    }
}

impl NoiseKernel for Kernel {
    fn width(&self) -> usize {
        self.as_dyn().width()
    }

    fn height(&self) -> usize {
        self.as_dyn().height()
    }

    fn frequency(&self) -> f64 {
        self.as_dyn().frequency()
    }

    fn seed(&self) -> u64 {
        self.as_dyn().seed()
    }

    fn gradient(&self, x: i64, y: i64) -> Result<GradientVector> {
        self.as_dyn().gradient(x, y)
    }

    fn fade(&self, t: f64) -> f64 {
        self.as_dyn().fade(t)
    }

    fn interpolate(&self, a: f64, b: f64, alpha: f64) -> f64 {
        self.as_dyn().interpolate(a, b, alpha)
    }

    fn compute(&self, x: f64, y: f64) -> Result<f64> {
        self.as_dyn().compute(x, y)
    }

    fn compute_at(&self, x: i64, y: i64) -> Result<f64> {
        self.as_dyn().compute_at(x, y)
    }

    fn is_normalized(&self) -> bool {
        self.as_dyn().is_normalized()
    }

    fn amplitude_bound(&self) -> f64 {
        self.as_dyn().amplitude_bound()
    }

    fn name(&self) -> &'static str {
        self.as_dyn().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn simple() -> Kernel {
        Kernel::simple(32, 32, 0.1, 3).unwrap()
    }

    #[test]
    fn test_dispatch_matches_concrete_kernel() {
        let concrete = SimpleNoise::new(32, 32, 0.1, 3).unwrap();
        let kernel = simple();
        assert_eq!(kernel.name(), "simple");
        assert_eq!(kernel.compute_at(7, 9).unwrap(), concrete.compute_at(7, 9).unwrap());
        assert_eq!(kernel.width(), 32);
        assert_eq!(kernel.frequency(), 0.1);
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let once = simple().normalized();
        let twice = once.clone().normalized();
        assert!(once.ptr_eq(&twice));
        assert_eq!(twice.name(), "normalized");
        assert_eq!(twice.inner().map(Kernel::name), Some("simple"));
    }

    #[test]
    fn test_any_decorator_order() {
        let params = FractalParams {
            octaves: 3,
            ..FractalParams::default()
        };
        let fractal_then_normalized = simple().fractal(params).unwrap().normalized();
        let normalized_then_fractal = simple().normalized().fractal(params).unwrap();

        assert!(fractal_then_normalized.is_normalized());
        assert!(!normalized_then_fractal.is_normalized());
        assert_eq!(fractal_then_normalized.base(), &simple());
        assert_eq!(normalized_then_fractal.base().name(), "simple");

        let v = fractal_then_normalized.compute_at(5, 5).unwrap();
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn test_equality_is_by_configuration() {
        let a = simple();
        let b = simple();
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
        assert_ne!(a, Kernel::simple(32, 32, 0.2, 3).unwrap());
        assert_ne!(a, Kernel::simple(32, 32, 0.1, 4).unwrap());
    }

    #[test]
    fn test_improved_variant() {
        let base = SimpleNoise::new(32, 32, 0.1, 3).unwrap();
        let improved: Kernel = ImprovedNoise::new(&base).into();
        assert_eq!(improved.name(), "improved");
        assert_ne!(improved, Kernel::from(base));
        assert_eq!(improved.compute(2.0, 3.0).unwrap(), 0.0);
        assert_relative_eq!(improved.amplitude_bound(), 1.0);
    }
}
