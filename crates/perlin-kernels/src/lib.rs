//! Perlin noise kernels
//!
//! Two base kernels and two decorators, all implementing
//! [`perlin_core::NoiseKernel`]:
//!
//! - **[`SimpleNoise`]**: direct addressing into a seeded, bordered
//!   [`GradientField`]
//! - **[`ImprovedNoise`]**: the same gradients addressed through a shuffled
//!   [`PermutationTable`], defined for every integer lattice point
//! - **[`FractalNoise`]**: sums octaves of any inner kernel
//! - **[`NormalizedNoise`]**: rescales any inner kernel into `[0, 1]`
//!
//! [`Kernel`] is the tagged, `Arc`-backed handle that lets decorators stack in
//! any order.
//!
//! # Example
//!
//! ```rust
//! use perlin_core::{FractalParams, NoiseKernel};
//! use perlin_kernels::{ImprovedNoise, Kernel, SimpleNoise};
//!
//! let base = SimpleNoise::new(128, 128, 0.05, 7).unwrap();
//! let kernel = Kernel::from(ImprovedNoise::new(&base))
//!     .fractal(FractalParams::default())
//!     .unwrap()
//!     .normalized();
//!
//! let value = kernel.compute_at(40, 90).unwrap();
//! assert!((0.0..=1.0).contains(&value));
//! ```

pub mod fractal;
pub mod gradient;
pub mod improved;
pub mod kernel;
pub mod normalized;
pub mod permutation;
pub mod simple;

pub use fractal::FractalNoise;
pub use gradient::GradientField;
pub use improved::ImprovedNoise;
pub use kernel::Kernel;
pub use normalized::NormalizedNoise;
pub use permutation::{PermutationTable, PERMUTATION_SIZE, TABLE_LEN};
pub use simple::SimpleNoise;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{FractalNoise, ImprovedNoise, Kernel, NormalizedNoise, SimpleNoise};
    pub use perlin_core::{FractalParams, NoiseKernel, Result};
}
