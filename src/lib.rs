//! Deterministic Perlin gradient noise
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`perlin_core`]: error type, configuration, the [`NoiseKernel`] trait, the
//!   bounded LRU cache and batch evaluation
//! - [`perlin_kernels`]: simple, improved, fractal and normalized kernels
//! - [`perlin_engine`]: the caching [`KernelFactory`], redraw skipping and terrain
//!   coloring
//!
//! # Example
//!
//! ```rust
//! use perlin_field::prelude::*;
//!
//! let factory = KernelFactory::new();
//! let config = NoiseConfig::builder()
//!     .size(256, 256)
//!     .seed(1337)
//!     .octaves(6)
//!     .build()
//!     .unwrap();
//!
//! let kernel = factory.build_kernel(&config, true, true).unwrap();
//! let field = evaluate(&kernel, 0, 0, 256, 256).unwrap();
//! let (lo, hi) = value_range(&field).unwrap();
//! assert!(0.0 <= lo && hi <= 1.0);
//! ```

pub use perlin_core;
pub use perlin_engine;
pub use perlin_kernels;

pub use perlin_core::{
    evaluate, value_range, BoundedCache, CacheStats, Error, FractalParams, GradientVector,
    NoiseConfig, NoiseConfigBuilder, NoiseKernel, Result,
};
#[cfg(feature = "parallel")]
pub use perlin_core::evaluate_parallel;
pub use perlin_engine::{color, last_kernel, KernelFactory, LastKernel, Rgb};
pub use perlin_kernels::{
    FractalNoise, GradientField, ImprovedNoise, Kernel, NormalizedNoise, PermutationTable,
    SimpleNoise,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        evaluate, last_kernel, value_range, Error, FractalParams, Kernel, KernelFactory,
        LastKernel, NoiseConfig, NoiseKernel, Result,
    };
}
